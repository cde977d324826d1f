//! CLI command implementations
//!
//! Commands are organized by dashboard view:
//! - `overview` - Account overview cards
//! - `expenses` - Transaction list and add action
//! - `budget` - Budget report and add action
//! - `goals` - Goal report and add action
//! - `analytics` - Trends and the health score

pub mod analytics;
pub mod budget;
pub mod expenses;
pub mod goals;
pub mod overview;

// Re-export command functions for main.rs
pub use analytics::*;
pub use budget::*;
pub use expenses::*;
pub use goals::*;
pub use overview::*;

use anyhow::{Context, Result};
use chrono::NaiveDate;

/// Resolve the injected "today" from the --today flag, falling back to
/// the local date. The engine never reads a clock itself.
pub fn resolve_today(flag: Option<&str>) -> Result<NaiveDate> {
    match flag {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .context("Invalid --today date format (use YYYY-MM-DD)"),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}...", &s[..max.saturating_sub(3)])
    }
}

/// Render an optional percentage; undefined ratios display as "n/a"
pub fn pct(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v),
        None => "n/a".to_string(),
    }
}

/// Render a signed dollar amount with an explicit sign
pub fn signed_dollars(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", amount.abs())
    } else {
        format!("+${:.2}", amount)
    }
}

/// Print a report as pretty JSON (the --json output mode)
pub fn print_json<T: serde::Serialize>(report: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
