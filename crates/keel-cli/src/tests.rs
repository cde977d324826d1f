//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use chrono::NaiveDate;
use keel_core::sample;

use crate::commands::{self, pct, signed_dollars, truncate};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

// ========== View Command Tests ==========

#[test]
fn test_cmd_overview() {
    let ledger = sample::demo_ledger();
    assert!(commands::cmd_overview(&ledger, false).is_ok());
    assert!(commands::cmd_overview(&ledger, true).is_ok());
}

#[test]
fn test_cmd_expenses_list() {
    let ledger = sample::demo_ledger();
    assert!(commands::cmd_expenses_list(&ledger, None, None, false).is_ok());
    assert!(commands::cmd_expenses_list(
        &ledger,
        Some("coffee".to_string()),
        Some("Food & Dining".to_string()),
        false
    )
    .is_ok());
}

#[test]
fn test_cmd_budget() {
    let ledger = sample::demo_ledger();
    assert!(commands::cmd_budget(&ledger, false).is_ok());
    assert!(commands::cmd_budget(&ledger, true).is_ok());
}

#[test]
fn test_cmd_goals() {
    let ledger = sample::demo_ledger();
    assert!(commands::cmd_goals(&ledger, today(), false).is_ok());
    assert!(commands::cmd_goals(&ledger, today(), true).is_ok());
}

#[test]
fn test_cmd_analytics() {
    let ledger = sample::demo_ledger();
    assert!(commands::cmd_analytics(&ledger, false).is_ok());
    assert!(commands::cmd_analytics(&ledger, true).is_ok());
}

// ========== Add Command Tests ==========

#[test]
fn test_cmd_expenses_add_appends() {
    let mut ledger = sample::demo_ledger();
    let before = ledger.transactions.len();

    let result = commands::cmd_expenses_add(
        &mut ledger,
        "Corner Store",
        "-8.25",
        "Food & Dining",
        Some("2024-01-20"),
        None,
        "Cash",
        None,
        today(),
        false,
    );

    assert!(result.is_ok());
    assert_eq!(ledger.transactions.len(), before + 1);
    assert_eq!(ledger.transactions[0].merchant, "Corner Store");
}

#[test]
fn test_cmd_expenses_add_defaults_date_to_today() {
    let mut ledger = sample::demo_ledger();
    commands::cmd_expenses_add(
        &mut ledger,
        "Corner Store",
        "-8.25",
        "Food & Dining",
        None,
        None,
        "Cash",
        None,
        today(),
        false,
    )
    .unwrap();
    assert_eq!(ledger.transactions[0].date, today());
}

#[test]
fn test_cmd_expenses_add_rejects_zero_amount() {
    let mut ledger = sample::demo_ledger();
    let before = ledger.transactions.len();

    let result = commands::cmd_expenses_add(
        &mut ledger,
        "Corner Store",
        "0",
        "Food & Dining",
        Some("2024-01-20"),
        None,
        "Cash",
        None,
        today(),
        false,
    );

    assert!(result.is_err());
    assert_eq!(ledger.transactions.len(), before);
}

#[test]
fn test_cmd_budget_add() {
    let mut ledger = sample::demo_ledger();
    let result = commands::cmd_budget_add(&mut ledger, "Groceries", "500", "fixed", false);
    assert!(result.is_ok());
    assert_eq!(ledger.budgets.last().unwrap().name, "Groceries");
}

#[test]
fn test_cmd_goals_add_rejects_bad_priority() {
    let mut ledger = sample::demo_ledger();
    let result = commands::cmd_goals_add(
        &mut ledger,
        "Laptop",
        "2000",
        "0",
        "2024-11-01",
        "Lifestyle",
        None,
        "150",
        "urgent",
        today(),
        false,
    );
    assert!(result.is_err());
    assert_eq!(ledger.goals.len(), 4);
}

// ========== Helper Tests ==========

#[test]
fn test_resolve_today() {
    let date = commands::resolve_today(Some("2024-06-15")).unwrap();
    assert_eq!(date, today());
    assert!(commands::resolve_today(Some("06/15/2024")).is_err());
    assert!(commands::resolve_today(None).is_ok());
}

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a much longer string", 10), "a much ...");
}

#[test]
fn test_pct_renders_undefined_as_na() {
    assert_eq!(pct(Some(96.65384615384616)), "96.7%");
    assert_eq!(pct(None), "n/a");
}

#[test]
fn test_signed_dollars() {
    assert_eq!(signed_dollars(-5.45), "-$5.45");
    assert_eq!(signed_dollars(2600.0), "+$2600.00");
    assert_eq!(signed_dollars(0.0), "+$0.00");
}
