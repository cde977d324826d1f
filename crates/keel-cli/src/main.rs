//! Keel CLI - Personal finance dashboard
//!
//! Usage:
//!   keel overview             Account overview cards
//!   keel expenses             Transaction list with filters
//!   keel budget               Budget utilization per category
//!   keel goals                Savings goals with deadline math
//!   keel analytics            Trends and the financial health score

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;
use keel_core::sample;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    // Each invocation works on a fresh in-memory ledger seeded with the
    // demo dataset; nothing persists between runs.
    let mut ledger = sample::demo_ledger();
    let today = commands::resolve_today(cli.today.as_deref())?;

    match cli.command {
        Commands::Overview => commands::cmd_overview(&ledger, cli.json),
        Commands::Expenses { action } => match action {
            None => commands::cmd_expenses_list(&ledger, None, None, cli.json),
            Some(ExpensesAction::List { search, category }) => {
                commands::cmd_expenses_list(&ledger, search, category, cli.json)
            }
            Some(ExpensesAction::Add {
                merchant,
                amount,
                category,
                date,
                description,
                payment_method,
                location,
            }) => commands::cmd_expenses_add(
                &mut ledger,
                &merchant,
                &amount,
                &category,
                date.as_deref(),
                description.as_deref(),
                &payment_method,
                location.as_deref(),
                today,
                cli.json,
            ),
        },
        Commands::Budget { action } => match action {
            None | Some(BudgetAction::List) => commands::cmd_budget(&ledger, cli.json),
            Some(BudgetAction::Add {
                name,
                budgeted,
                kind,
            }) => commands::cmd_budget_add(&mut ledger, &name, &budgeted, &kind, cli.json),
        },
        Commands::Goals { action } => match action {
            None | Some(GoalsAction::List) => commands::cmd_goals(&ledger, today, cli.json),
            Some(GoalsAction::Add {
                name,
                target,
                current,
                deadline,
                category,
                description,
                contribution,
                priority,
            }) => commands::cmd_goals_add(
                &mut ledger,
                &name,
                &target,
                &current,
                &deadline,
                &category,
                description.as_deref(),
                &contribution,
                &priority,
                today,
                cli.json,
            ),
        },
        Commands::Analytics => commands::cmd_analytics(&ledger, cli.json),
    }
}
