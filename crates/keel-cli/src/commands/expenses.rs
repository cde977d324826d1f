//! Transaction list and add commands

use anyhow::Result;
use chrono::NaiveDate;
use keel_core::metrics::aggregate;
use keel_core::{validate, Ledger, TransactionFilter};

use super::{print_json, signed_dollars, truncate};

pub fn cmd_expenses_list(
    ledger: &Ledger,
    search: Option<String>,
    category: Option<String>,
    json: bool,
) -> Result<()> {
    let filter = TransactionFilter::new().search(search).category(category);
    let visible = filter.apply(&ledger.transactions);

    if json {
        return print_json(&visible);
    }

    // Summary figures cover the whole ledger, not just the filtered view
    let expenses = aggregate::total_expenses(&ledger.transactions);
    let income = aggregate::total_income(&ledger.transactions);
    let net = aggregate::net_flow(&ledger.transactions);

    println!();
    println!("💳 Transactions");
    println!("   Total Expenses: -${:.2}", expenses);
    println!("   Total Income:   +${:.2}", income);
    println!("   Net Flow:       {}", signed_dollars(net));
    println!("   ─────────────────────────────────────────────────────────────");

    if visible.is_empty() {
        println!("   No transactions match the filter.");
        return Ok(());
    }

    println!(
        "   {:10} │ {:20} │ {:16} │ {:>10} │ {}",
        "Date", "Merchant", "Category", "Amount", "Method"
    );
    println!("   ───────────┼──────────────────────┼──────────────────┼────────────┼───────────");

    for tx in visible {
        println!(
            "   {:10} │ {:20} │ {:16} │ {:>10} │ {}",
            tx.date,
            truncate(&tx.merchant, 20),
            truncate(&tx.category, 16),
            signed_dollars(tx.amount),
            tx.payment_method
        );
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn cmd_expenses_add(
    ledger: &mut Ledger,
    merchant: &str,
    amount: &str,
    category: &str,
    date: Option<&str>,
    description: Option<&str>,
    payment_method: &str,
    location: Option<&str>,
    today: NaiveDate,
    json: bool,
) -> Result<()> {
    let date_str = match date {
        Some(d) => d.to_string(),
        None => today.format("%Y-%m-%d").to_string(),
    };
    let new = validate::new_transaction(
        merchant,
        amount,
        category,
        &date_str,
        description,
        payment_method,
        location,
    )?;
    let id = ledger.add_transaction(new);
    tracing::info!(id, merchant, "Transaction added");

    if !json {
        println!("✅ Added transaction #{}: {} {}", id, merchant, amount);
    }
    cmd_expenses_list(ledger, None, None, json)
}
