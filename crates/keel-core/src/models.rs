//! Domain models for Keel

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single transaction on the ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub merchant: String,
    /// Negative = expense, positive = income
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    /// Free-form payment method label (e.g., "Credit Card", "Direct Deposit")
    pub payment_method: String,
    pub location: Option<String>,
}

/// A new transaction entered through the form boundary (before id assignment)
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub merchant: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub payment_method: String,
    pub location: Option<String>,
}

/// A budget category with a monthly allowance and spending to date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub id: i64,
    pub name: String,
    /// Monthly allowance; must be positive for a defined utilization percentage
    pub budgeted: f64,
    pub spent: f64,
    pub kind: BudgetKind,
}

/// A new budget category entered through the form boundary
#[derive(Debug, Clone)]
pub struct NewBudgetCategory {
    pub name: String,
    pub budgeted: f64,
    pub kind: BudgetKind,
}

/// How a budget allowance is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetKind {
    /// Fixed dollar amount per month
    Fixed,
    /// Percentage of monthly income
    Percentage,
}

impl BudgetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Percentage => "percentage",
        }
    }
}

impl std::str::FromStr for BudgetKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "percentage" => Ok(Self::Percentage),
            _ => Err(format!("Unknown budget kind: {}", s)),
        }
    }
}

impl std::fmt::Display for BudgetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A savings goal with a deadline and a planned monthly contribution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialGoal {
    pub id: i64,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: NaiveDate,
    pub category: String,
    pub description: Option<String>,
    pub monthly_contribution: f64,
    pub priority: GoalPriority,
    pub status: GoalStatus,
}

/// A new goal entered through the form boundary
#[derive(Debug, Clone)]
pub struct NewGoal {
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: NaiveDate,
    pub category: String,
    pub description: Option<String>,
    pub monthly_contribution: f64,
    pub priority: GoalPriority,
}

/// Goal priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalPriority {
    High,
    Medium,
    Low,
}

impl GoalPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::str::FromStr for GoalPriority {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(format!("Unknown goal priority: {}", s)),
        }
    }
}

impl std::fmt::Display for GoalPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Goal lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    #[default]
    Active,
    Completed,
    Paused,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Paused => "paused",
        }
    }
}

impl std::str::FromStr for GoalStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "paused" => Ok(Self::Paused),
            _ => Err(format!("Unknown goal status: {}", s)),
        }
    }
}

impl std::fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One month of the income/expense time series used by analytics.
/// Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySnapshot {
    /// Display label (e.g., "Jan")
    pub month: String,
    pub income: f64,
    pub expenses: f64,
    pub savings: f64,
}

/// Account-level figures shown on the overview cards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSummary {
    pub total_balance: f64,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub monthly_budget: f64,
    pub savings: f64,
    pub emergency_fund: f64,
    pub emergency_goal: f64,
    pub credit_score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_budget_kind_round_trip() {
        assert_eq!(BudgetKind::Fixed.as_str(), "fixed");
        assert_eq!(BudgetKind::from_str("percentage").unwrap(), BudgetKind::Percentage);
        assert!(BudgetKind::from_str("hourly").is_err());
    }

    #[test]
    fn test_goal_priority_parsing_is_case_insensitive() {
        assert_eq!(GoalPriority::from_str("High").unwrap(), GoalPriority::High);
        assert_eq!(GoalPriority::from_str("MEDIUM").unwrap(), GoalPriority::Medium);
    }

    #[test]
    fn test_goal_status_default_is_active() {
        assert_eq!(GoalStatus::default(), GoalStatus::Active);
        assert_eq!(GoalStatus::from_str("paused").unwrap(), GoalStatus::Paused);
    }
}
