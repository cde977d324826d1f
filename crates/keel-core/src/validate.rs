//! Form-boundary validation
//!
//! User-entered strings are parsed into well-typed records here, before
//! anything reaches the metrics functions. The engine itself assumes
//! well-formed input and never re-validates.

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::models::{GoalPriority, NewBudgetCategory, NewGoal, NewTransaction};

/// Parse a signed transaction amount. Zero is rejected: a transaction
/// must move money one way or the other.
pub fn parse_amount(input: &str) -> Result<f64> {
    let amount = parse_number(input)?;
    if amount == 0.0 {
        return Err(Error::InvalidRecord("amount must not be zero".to_string()));
    }
    Ok(amount)
}

/// Parse an amount that must be strictly positive (goal targets)
pub fn parse_positive_amount(input: &str) -> Result<f64> {
    let amount = parse_number(input)?;
    if amount <= 0.0 {
        return Err(Error::InvalidRecord(format!(
            "amount must be positive, got {}",
            amount
        )));
    }
    Ok(amount)
}

/// Parse an amount that must be zero or more (budgets, contributions,
/// current goal balances)
pub fn parse_non_negative_amount(input: &str) -> Result<f64> {
    let amount = parse_number(input)?;
    if amount < 0.0 {
        return Err(Error::InvalidRecord(format!(
            "amount must not be negative, got {}",
            amount
        )));
    }
    Ok(amount)
}

/// Parse a YYYY-MM-DD calendar date
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")?)
}

fn parse_number(input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| Error::InvalidRecord(format!("not a number: {:?}", input)))?;
    if !value.is_finite() {
        return Err(Error::InvalidRecord(format!("not a finite number: {}", value)));
    }
    Ok(value)
}

fn required(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidRecord(format!("{} must not be empty", field)));
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Assemble a validated transaction from form input
pub fn new_transaction(
    merchant: &str,
    amount: &str,
    category: &str,
    date: &str,
    description: Option<&str>,
    payment_method: &str,
    location: Option<&str>,
) -> Result<NewTransaction> {
    Ok(NewTransaction {
        merchant: required("merchant", merchant)?,
        amount: parse_amount(amount)?,
        category: required("category", category)?,
        date: parse_date(date)?,
        description: optional(description),
        payment_method: required("payment method", payment_method)?,
        location: optional(location),
    })
}

/// Assemble a validated budget category from form input
pub fn new_budget_category(name: &str, budgeted: &str, kind: &str) -> Result<NewBudgetCategory> {
    Ok(NewBudgetCategory {
        name: required("name", name)?,
        budgeted: parse_non_negative_amount(budgeted)?,
        kind: kind.parse().map_err(Error::InvalidRecord)?,
    })
}

/// Assemble a validated goal from form input
#[allow(clippy::too_many_arguments)]
pub fn new_goal(
    name: &str,
    target_amount: &str,
    current_amount: &str,
    deadline: &str,
    category: &str,
    description: Option<&str>,
    monthly_contribution: &str,
    priority: &str,
) -> Result<NewGoal> {
    Ok(NewGoal {
        name: required("name", name)?,
        target_amount: parse_positive_amount(target_amount)?,
        current_amount: parse_non_negative_amount(current_amount)?,
        deadline: parse_date(deadline)?,
        category: required("category", category)?,
        description: optional(description),
        monthly_contribution: parse_non_negative_amount(monthly_contribution)?,
        priority: priority.parse::<GoalPriority>().map_err(Error::InvalidRecord)?,
    })
}
