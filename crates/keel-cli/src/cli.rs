//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use clap::{Parser, Subcommand};

/// Keel - Personal finance dashboard in your terminal
#[derive(Parser)]
#[command(name = "keel")]
#[command(about = "Personal finance dashboard: budgets, goals, and analytics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Current date for deadline math (YYYY-MM-DD, defaults to the local date)
    #[arg(long, global = true)]
    pub today: Option<String>,

    /// Print reports as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the account overview
    Overview,

    /// Browse and add transactions
    Expenses {
        #[command(subcommand)]
        action: Option<ExpensesAction>,
    },

    /// Track budget categories
    Budget {
        #[command(subcommand)]
        action: Option<BudgetAction>,
    },

    /// Track savings goals
    Goals {
        #[command(subcommand)]
        action: Option<GoalsAction>,
    },

    /// Show trends and the financial health score
    Analytics,
}

#[derive(Subcommand)]
pub enum ExpensesAction {
    /// List transactions (default)
    List {
        /// Search merchant and description
        #[arg(short, long)]
        search: Option<String>,

        /// Only show one category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Add a transaction, then show the refreshed list
    Add {
        /// Merchant name
        #[arg(long)]
        merchant: String,

        /// Signed amount: negative = expense, positive = income
        #[arg(long, allow_hyphen_values = true)]
        amount: String,

        /// Category name
        #[arg(long)]
        category: String,

        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Optional note
        #[arg(long)]
        description: Option<String>,

        /// Payment method label
        #[arg(long, default_value = "Credit Card")]
        payment_method: String,

        /// Optional location
        #[arg(long)]
        location: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum BudgetAction {
    /// Show the budget report (default)
    List,

    /// Add a budget category, then show the refreshed report
    Add {
        /// Category name
        #[arg(long)]
        name: String,

        /// Monthly allowance
        #[arg(long)]
        budgeted: String,

        /// Allowance kind: fixed or percentage
        #[arg(long, default_value = "fixed")]
        kind: String,
    },
}

#[derive(Subcommand)]
pub enum GoalsAction {
    /// Show the goal report (default)
    List,

    /// Add a goal, then show the refreshed report
    Add {
        /// Goal name
        #[arg(long)]
        name: String,

        /// Target amount (must be positive)
        #[arg(long)]
        target: String,

        /// Amount saved so far
        #[arg(long, default_value = "0")]
        current: String,

        /// Deadline (YYYY-MM-DD)
        #[arg(long)]
        deadline: String,

        /// Goal category (e.g., Safety, Lifestyle, Home)
        #[arg(long)]
        category: String,

        /// Optional note
        #[arg(long)]
        description: Option<String>,

        /// Planned monthly contribution
        #[arg(long)]
        contribution: String,

        /// Priority: high, medium, or low
        #[arg(long, default_value = "medium")]
        priority: String,
    },
}
