//! Budget report and add commands

use anyhow::Result;
use keel_core::metrics::{self, BudgetStanding};
use keel_core::{validate, Ledger};

use super::{pct, print_json, truncate};

pub fn cmd_budget(ledger: &Ledger, json: bool) -> Result<()> {
    let report = metrics::budget_report(ledger);

    if json {
        return print_json(&report);
    }

    println!();
    println!("📊 Budget");
    println!("   Monthly Income:  ${:.2}", report.monthly_income);
    println!("   Total Budgeted:  ${:.2}", report.totals.budgeted);
    println!("   Total Spent:     ${:.2}", report.totals.spent);
    if report.remaining >= 0.0 {
        println!("   Remaining:       ${:.2}", report.remaining);
    } else {
        println!("   Overspent by:    ${:.2}", report.remaining.abs());
    }
    println!("   Utilization:     {}", pct(report.utilization));
    println!("   ─────────────────────────────────────────────────────────────");

    if report.rows.is_empty() {
        println!("   No budget categories yet.");
        return Ok(());
    }

    println!(
        "   {:20} │ {:>10} │ {:>10} │ {:>7} │ Status",
        "Category", "Budgeted", "Spent", "%"
    );
    println!("   ─────────────────────┼────────────┼────────────┼─────────┼────────");

    for row in &report.rows {
        let icon = match row.standing {
            BudgetStanding::Good => "✅",
            BudgetStanding::Warning => "⚠️ ",
            BudgetStanding::Over => "🚨",
        };
        println!(
            "   {:20} │ {:>10.2} │ {:>10.2} │ {:>7} │ {} {}",
            truncate(&row.name, 20),
            row.budgeted,
            row.spent,
            pct(row.percentage),
            icon,
            row.standing
        );
        if let Some(over_by) = row.over_by {
            println!("   {:20}   Over budget by ${:.2}", "", over_by);
        }
    }

    println!();
    println!("   Over budget:     {}", report.over_count);
    println!("   Under budget:    {}", report.under_count);
    println!("   Avg utilization: {}", pct(report.average_utilization));

    Ok(())
}

pub fn cmd_budget_add(
    ledger: &mut Ledger,
    name: &str,
    budgeted: &str,
    kind: &str,
    json: bool,
) -> Result<()> {
    let new = validate::new_budget_category(name, budgeted, kind)?;
    let id = ledger.add_budget_category(new);
    tracing::info!(id, name, "Budget category added");

    if !json {
        println!("✅ Added budget category #{}: {} (${})", id, name, budgeted);
    }
    cmd_budget(ledger, json)
}
