//! Aggregation over the ledger collections
//!
//! Pure reads producing scalar or small grouped summaries. Empty input
//! always yields zero sums; the ratio layer decides what a zero
//! denominator means.

use serde::{Deserialize, Serialize};

use crate::models::{BudgetCategory, FinancialGoal, GoalStatus, Transaction};

/// Sum of absolute amounts over expense entries (amount < 0)
pub fn total_expenses(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|t| t.amount < 0.0)
        .map(|t| t.amount.abs())
        .sum()
}

/// Sum of amounts over income entries (amount > 0)
pub fn total_income(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|t| t.amount > 0.0)
        .map(|t| t.amount)
        .sum()
}

/// Income minus expenses over the same list
pub fn net_flow(transactions: &[Transaction]) -> f64 {
    total_income(transactions) - total_expenses(transactions)
}

/// Spending grouped by category name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Group expense entries by category name and sum absolute amounts.
/// Groups appear in order of each category's first occurrence.
pub fn category_totals(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for tx in transactions.iter().filter(|t| t.amount < 0.0) {
        match totals.iter_mut().find(|c| c.category == tx.category) {
            Some(entry) => entry.total += tx.amount.abs(),
            None => totals.push(CategoryTotal {
                category: tx.category.clone(),
                total: tx.amount.abs(),
            }),
        }
    }
    totals
}

/// Aggregate budget figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetTotals {
    pub budgeted: f64,
    pub spent: f64,
}

pub fn budget_totals(categories: &[BudgetCategory]) -> BudgetTotals {
    BudgetTotals {
        budgeted: categories.iter().map(|c| c.budgeted).sum(),
        spent: categories.iter().map(|c| c.spent).sum(),
    }
}

/// Aggregate goal figures over goals matching a status filter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalTotals {
    pub target: f64,
    pub current: f64,
    pub monthly_contribution: f64,
    pub count: usize,
}

pub fn goal_totals(goals: &[FinancialGoal], status: GoalStatus) -> GoalTotals {
    let mut totals = GoalTotals {
        target: 0.0,
        current: 0.0,
        monthly_contribution: 0.0,
        count: 0,
    };
    for goal in goals.iter().filter(|g| g.status == status) {
        totals.target += goal.target_amount;
        totals.current += goal.current_amount;
        totals.monthly_contribution += goal.monthly_contribution;
        totals.count += 1;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    #[test]
    fn test_empty_input_sums_to_zero() {
        assert_eq!(total_expenses(&[]), 0.0);
        assert_eq!(total_income(&[]), 0.0);
        assert_eq!(net_flow(&[]), 0.0);
        assert!(category_totals(&[]).is_empty());

        let totals = budget_totals(&[]);
        assert_eq!(totals.budgeted, 0.0);
        assert_eq!(totals.spent, 0.0);

        let totals = goal_totals(&[], GoalStatus::Active);
        assert_eq!(totals.count, 0);
        assert_eq!(totals.target, 0.0);
    }

    #[test]
    fn test_net_flow_identity() {
        let ledger = sample::demo_ledger();
        let txs = &ledger.transactions;
        assert_eq!(net_flow(txs), total_income(txs) - total_expenses(txs));
        // 2600.00 - 232.94
        assert!((net_flow(txs) - 2367.06).abs() < 1e-9);
    }

    #[test]
    fn test_category_totals_keep_first_occurrence_order() {
        let ledger = sample::demo_ledger();
        let totals = category_totals(&ledger.transactions);
        let names: Vec<&str> = totals.iter().map(|c| c.category.as_str()).collect();
        // Income is excluded (positive amount); expense categories in list order
        assert_eq!(
            names,
            vec!["Food & Dining", "Transportation", "Shopping", "Utilities"]
        );
        assert!((totals[0].total - 5.45).abs() < 1e-9);
    }

    #[test]
    fn test_category_totals_sum_repeat_categories() {
        let mut ledger = sample::demo_ledger();
        ledger.add_transaction(crate::models::NewTransaction {
            merchant: "Chipotle".to_string(),
            amount: -11.55,
            category: "Food & Dining".to_string(),
            date: chrono::NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(),
            description: None,
            payment_method: "Credit Card".to_string(),
            location: None,
        });

        let totals = category_totals(&ledger.transactions);
        let food = totals.iter().find(|c| c.category == "Food & Dining").unwrap();
        assert!((food.total - 17.00).abs() < 1e-9);
    }

    #[test]
    fn test_goal_totals_filter_by_status() {
        let mut ledger = sample::demo_ledger();
        ledger.goals[1].status = GoalStatus::Paused;

        let active = goal_totals(&ledger.goals, GoalStatus::Active);
        assert_eq!(active.count, 3);
        // 15000 + 8000 + 12000
        assert!((active.target - 35000.0).abs() < 1e-9);
        // 500 + 350 + 600
        assert!((active.monthly_contribution - 1450.0).abs() < 1e-9);

        let paused = goal_totals(&ledger.goals, GoalStatus::Paused);
        assert_eq!(paused.count, 1);
        assert!((paused.target - 5000.0).abs() < 1e-9);
    }
}
