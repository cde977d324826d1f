//! Ratio calculations
//!
//! Every ratio returns `Option<f64>`: `None` means the denominator was
//! zero and the ratio is undefined. Callers render that as "n/a"; the
//! engine never produces NaN or infinity.

use serde::{Deserialize, Serialize};

/// spent / budgeted * 100
pub fn budget_utilization(spent: f64, budgeted: f64) -> Option<f64> {
    ratio(spent, budgeted)
}

/// current / target * 100, unclamped. Values over 100 are real progress
/// and are reported as-is; only progress-bar rendering clamps.
pub fn goal_progress(current: f64, target: f64) -> Option<f64> {
    ratio(current, target)
}

/// (income - expenses) / income * 100
pub fn savings_rate(income: f64, expenses: f64) -> Option<f64> {
    ratio(income - expenses, income)
}

/// (current - previous) / previous * 100. Positive = growth,
/// negative = contraction.
pub fn expense_growth(current: f64, previous: f64) -> Option<f64> {
    ratio(current - previous, previous)
}

/// spent / budgeted * 100 for a single category; feeds `BudgetStanding`
pub fn category_percentage(spent: f64, budgeted: f64) -> Option<f64> {
    ratio(spent, budgeted)
}

fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator * 100.0)
    }
}

/// Percentage above which a category is approaching its limit
pub const WARNING_PERCENTAGE: f64 = 80.0;
/// Percentage above which a category has blown its limit
pub const OVER_PERCENTAGE: f64 = 100.0;

/// Where a budget category stands against its allowance
///
/// Band boundaries are strict: exactly 80% is still `Good`, exactly 100%
/// is still `Warning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStanding {
    Good,
    Warning,
    Over,
}

impl BudgetStanding {
    /// Classify a category percentage. An undefined percentage (zero
    /// budget) is `Good`: there is no limit to exceed.
    pub fn from_percentage(percentage: Option<f64>) -> Self {
        match percentage {
            Some(p) if p > OVER_PERCENTAGE => Self::Over,
            Some(p) if p > WARNING_PERCENTAGE => Self::Warning,
            _ => Self::Good,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Over => "over",
        }
    }
}

impl std::fmt::Display for BudgetStanding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a category's spending against its allowance
pub fn budget_standing(spent: f64, budgeted: f64) -> BudgetStanding {
    BudgetStanding::from_percentage(category_percentage(spent, budgeted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_denominators_are_undefined() {
        assert_eq!(budget_utilization(100.0, 0.0), None);
        assert_eq!(goal_progress(500.0, 0.0), None);
        assert_eq!(savings_rate(0.0, 100.0), None);
        assert_eq!(expense_growth(3850.0, 0.0), None);
        assert_eq!(category_percentage(50.0, 0.0), None);
    }

    #[test]
    fn test_goal_progress_is_unclamped() {
        assert_eq!(goal_progress(15000.0, 15000.0), Some(100.0));
        let over = goal_progress(18000.0, 15000.0).unwrap();
        assert!((over - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_savings_rate_formula() {
        // (5200 - 3850) / 5200 * 100
        let rate = savings_rate(5200.0, 3850.0).unwrap();
        assert!((rate - 25.961538461538463).abs() < 1e-9);
    }

    #[test]
    fn test_expense_growth_sign() {
        assert!(expense_growth(4200.0, 3900.0).unwrap() > 0.0);
        assert!(expense_growth(3850.0, 4200.0).unwrap() < 0.0);
        assert_eq!(expense_growth(4200.0, 4200.0), Some(0.0));
    }

    #[test]
    fn test_standing_band_boundaries_are_strict() {
        // 80.0 exactly stays in the lower band
        assert_eq!(budget_standing(80.0, 100.0), BudgetStanding::Good);
        assert_eq!(budget_standing(80.01, 100.0), BudgetStanding::Warning);
        // 100.0 exactly stays in the lower band
        assert_eq!(budget_standing(100.0, 100.0), BudgetStanding::Warning);
        assert_eq!(budget_standing(100.01, 100.0), BudgetStanding::Over);
    }

    #[test]
    fn test_standing_for_zero_budget_is_good() {
        assert_eq!(budget_standing(50.0, 0.0), BudgetStanding::Good);
    }

    #[test]
    fn test_overspent_sample_category() {
        // 520.25 / 400 * 100 = 130.06...
        let pct = category_percentage(520.25, 400.0).unwrap();
        assert!((pct - 130.0625).abs() < 1e-9);
        assert_eq!(budget_standing(520.25, 400.0), BudgetStanding::Over);
    }
}
