//! Application state container
//!
//! The dashboard's collections live in one explicit `Ledger` value that is
//! passed by reference to the metrics functions. Adds are append-only:
//! nothing is ever deleted, and there is no cross-entity consistency —
//! adding an expense transaction does not update any budget category's
//! `spent` figure. That is a documented non-invariant, not an oversight.

use serde::{Deserialize, Serialize};

use crate::models::{
    AccountSummary, BudgetCategory, FinancialGoal, GoalStatus, MonthlySnapshot, NewBudgetCategory,
    NewGoal, NewTransaction, Transaction,
};

/// In-memory state for one dashboard session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    /// Account-level overview figures
    pub account: AccountSummary,
    /// Newest first
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<BudgetCategory>,
    pub goals: Vec<FinancialGoal>,
    /// Chronological, oldest first
    pub snapshots: Vec<MonthlySnapshot>,
}

impl Ledger {
    /// Add a transaction at the front of the list (newest first).
    /// Returns the assigned id.
    pub fn add_transaction(&mut self, new: NewTransaction) -> i64 {
        let id = next_id(self.transactions.iter().map(|t| t.id));
        self.transactions.insert(
            0,
            Transaction {
                id,
                merchant: new.merchant,
                amount: new.amount,
                category: new.category,
                date: new.date,
                description: new.description,
                payment_method: new.payment_method,
                location: new.location,
            },
        );
        id
    }

    /// Append a budget category. Returns the assigned id.
    pub fn add_budget_category(&mut self, new: NewBudgetCategory) -> i64 {
        let id = next_id(self.budgets.iter().map(|b| b.id));
        self.budgets.push(BudgetCategory {
            id,
            name: new.name,
            budgeted: new.budgeted,
            // New categories start with nothing spent
            spent: 0.0,
            kind: new.kind,
        });
        id
    }

    /// Append a goal. New goals start active. Returns the assigned id.
    pub fn add_goal(&mut self, new: NewGoal) -> i64 {
        let id = next_id(self.goals.iter().map(|g| g.id));
        self.goals.push(FinancialGoal {
            id,
            name: new.name,
            target_amount: new.target_amount,
            current_amount: new.current_amount,
            deadline: new.deadline,
            category: new.category,
            description: new.description,
            monthly_contribution: new.monthly_contribution,
            priority: new.priority,
            status: GoalStatus::Active,
        });
        id
    }

    /// Goals matching a status, in insertion order
    pub fn goals_with_status(&self, status: GoalStatus) -> Vec<&FinancialGoal> {
        self.goals.iter().filter(|g| g.status == status).collect()
    }

    pub fn active_goals(&self) -> Vec<&FinancialGoal> {
        self.goals_with_status(GoalStatus::Active)
    }
}

/// Deterministic id assignment: one past the largest existing id
fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;
    use chrono::NaiveDate;

    fn new_tx(merchant: &str, amount: f64) -> NewTransaction {
        NewTransaction {
            merchant: merchant.to_string(),
            amount,
            category: "Other".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            description: None,
            payment_method: "Cash".to_string(),
            location: None,
        }
    }

    #[test]
    fn test_add_transaction_prepends() {
        let mut ledger = sample::demo_ledger();
        let before = ledger.transactions.len();

        let id = ledger.add_transaction(new_tx("Corner Store", -8.25));

        assert_eq!(ledger.transactions.len(), before + 1);
        assert_eq!(ledger.transactions[0].id, id);
        assert_eq!(ledger.transactions[0].merchant, "Corner Store");
    }

    #[test]
    fn test_ids_are_monotonic() {
        let mut ledger = sample::demo_ledger();
        let first = ledger.add_transaction(new_tx("A", -1.0));
        let second = ledger.add_transaction(new_tx("B", -2.0));
        assert_eq!(second, first + 1);
    }

    #[test]
    fn test_add_budget_category_starts_unspent() {
        let mut ledger = sample::demo_ledger();
        let id = ledger.add_budget_category(NewBudgetCategory {
            name: "Groceries".to_string(),
            budgeted: 500.0,
            kind: crate::models::BudgetKind::Fixed,
        });

        let added = ledger.budgets.last().unwrap();
        assert_eq!(added.id, id);
        assert_eq!(added.spent, 0.0);
    }

    #[test]
    fn test_add_goal_is_active() {
        let mut ledger = sample::demo_ledger();
        let active_before = ledger.active_goals().len();

        ledger.add_goal(NewGoal {
            name: "Laptop".to_string(),
            target_amount: 2000.0,
            current_amount: 250.0,
            deadline: NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
            category: "Lifestyle".to_string(),
            description: None,
            monthly_contribution: 150.0,
            priority: crate::models::GoalPriority::Low,
        });

        assert_eq!(ledger.active_goals().len(), active_before + 1);
        assert_eq!(ledger.goals.last().unwrap().status, GoalStatus::Active);
    }

    #[test]
    fn test_adding_expense_does_not_touch_budgets() {
        let mut ledger = sample::demo_ledger();
        let budgets_before = ledger.budgets.clone();

        ledger.add_transaction(new_tx("Restaurant", -42.00));

        for (before, after) in budgets_before.iter().zip(ledger.budgets.iter()) {
            assert_eq!(before.spent, after.spent);
        }
    }
}
