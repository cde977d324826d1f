//! Built-in demo dataset
//!
//! Every CLI invocation seeds this ledger. The figures are the dashboard's
//! stock sample data: a month of transactions, six budget categories, four
//! savings goals, and a six-month income/expense series.

use chrono::NaiveDate;

use crate::models::{
    AccountSummary, BudgetCategory, BudgetKind, FinancialGoal, GoalPriority, GoalStatus,
    MonthlySnapshot, Transaction,
};
use crate::state::Ledger;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid demo date")
}

/// The demo ledger
pub fn demo_ledger() -> Ledger {
    Ledger {
        account: AccountSummary {
            total_balance: 15750.00,
            monthly_income: 5200.00,
            monthly_expenses: 3850.00,
            monthly_budget: 4200.00,
            savings: 1350.00,
            emergency_fund: 8500.00,
            emergency_goal: 15000.00,
            credit_score: 742,
        },
        transactions: vec![
            Transaction {
                id: 1,
                merchant: "Starbucks Coffee".to_string(),
                amount: -5.45,
                category: "Food & Dining".to_string(),
                date: date(2024, 1, 15),
                description: Some("Morning coffee".to_string()),
                payment_method: "Credit Card".to_string(),
                location: Some("Downtown".to_string()),
            },
            Transaction {
                id: 2,
                merchant: "Uber".to_string(),
                amount: -12.50,
                category: "Transportation".to_string(),
                date: date(2024, 1, 15),
                description: Some("Ride to work".to_string()),
                payment_method: "Debit Card".to_string(),
                location: Some("City Center".to_string()),
            },
            Transaction {
                id: 3,
                merchant: "Salary Deposit".to_string(),
                amount: 2600.00,
                category: "Income".to_string(),
                date: date(2024, 1, 14),
                description: Some("Monthly salary".to_string()),
                payment_method: "Direct Deposit".to_string(),
                location: None,
            },
            Transaction {
                id: 4,
                merchant: "Amazon".to_string(),
                amount: -89.99,
                category: "Shopping".to_string(),
                date: date(2024, 1, 14),
                description: Some("Home supplies".to_string()),
                payment_method: "Credit Card".to_string(),
                location: None,
            },
            Transaction {
                id: 5,
                merchant: "Electric Company".to_string(),
                amount: -125.00,
                category: "Utilities".to_string(),
                date: date(2024, 1, 13),
                description: Some("Monthly electric bill".to_string()),
                payment_method: "Auto-pay".to_string(),
                location: None,
            },
        ],
        budgets: vec![
            budget(1, "Food & Dining", 600.0, 450.75),
            budget(2, "Transportation", 300.0, 285.50),
            budget(3, "Shopping", 400.0, 520.25),
            budget(4, "Utilities", 250.0, 225.00),
            budget(5, "Entertainment", 200.0, 175.80),
            budget(6, "Healthcare", 150.0, 95.00),
        ],
        goals: vec![
            FinancialGoal {
                id: 1,
                name: "Emergency Fund".to_string(),
                target_amount: 15000.0,
                current_amount: 8500.0,
                deadline: date(2024, 12, 31),
                category: "Safety".to_string(),
                description: Some("6 months of living expenses".to_string()),
                monthly_contribution: 500.0,
                priority: GoalPriority::High,
                status: GoalStatus::Active,
            },
            FinancialGoal {
                id: 2,
                name: "Dream Vacation".to_string(),
                target_amount: 5000.0,
                current_amount: 2800.0,
                deadline: date(2024, 8, 15),
                category: "Lifestyle".to_string(),
                description: Some("Two weeks in Europe".to_string()),
                monthly_contribution: 400.0,
                priority: GoalPriority::Medium,
                status: GoalStatus::Active,
            },
            FinancialGoal {
                id: 3,
                name: "New Car Down Payment".to_string(),
                target_amount: 8000.0,
                current_amount: 5200.0,
                deadline: date(2024, 9, 30),
                category: "Transportation".to_string(),
                description: Some("Down payment for reliable vehicle".to_string()),
                monthly_contribution: 350.0,
                priority: GoalPriority::High,
                status: GoalStatus::Active,
            },
            FinancialGoal {
                id: 4,
                name: "Home Renovation".to_string(),
                target_amount: 12000.0,
                current_amount: 3500.0,
                deadline: date(2025, 3, 1),
                category: "Home".to_string(),
                description: Some("Kitchen and bathroom upgrades".to_string()),
                monthly_contribution: 600.0,
                priority: GoalPriority::Medium,
                status: GoalStatus::Active,
            },
        ],
        snapshots: vec![
            snapshot("Jan", 5200.0, 3800.0),
            snapshot("Feb", 5200.0, 4100.0),
            snapshot("Mar", 5200.0, 3650.0),
            snapshot("Apr", 5200.0, 3900.0),
            snapshot("May", 5400.0, 4200.0),
            snapshot("Jun", 5400.0, 3850.0),
        ],
    }
}

fn budget(id: i64, name: &str, budgeted: f64, spent: f64) -> BudgetCategory {
    BudgetCategory {
        id,
        name: name.to_string(),
        budgeted,
        spent,
        kind: BudgetKind::Fixed,
    }
}

fn snapshot(month: &str, income: f64, expenses: f64) -> MonthlySnapshot {
    MonthlySnapshot {
        month: month.to_string(),
        income,
        expenses,
        savings: income - expenses,
    }
}
