//! Keel Core Library
//!
//! Shared functionality for the Keel personal finance dashboard:
//! - Domain models for transactions, budgets, goals, and monthly snapshots
//! - The in-memory ledger state container
//! - The financial metrics engine (aggregation, rates, health score, dates)
//! - Transaction list filtering
//! - Form-boundary validation for user-entered records
//! - The built-in demo dataset

pub mod error;
pub mod filter;
pub mod metrics;
pub mod models;
pub mod sample;
pub mod state;
pub mod validate;

pub use error::{Error, Result};
pub use filter::TransactionFilter;
pub use models::{
    AccountSummary, BudgetCategory, BudgetKind, FinancialGoal, GoalPriority, GoalStatus,
    MonthlySnapshot, NewBudgetCategory, NewGoal, NewTransaction, Transaction,
};
pub use state::Ledger;
