//! Analytics command

use anyhow::Result;
use keel_core::metrics;
use keel_core::Ledger;

use super::{pct, print_json, truncate};

pub fn cmd_analytics(ledger: &Ledger, json: bool) -> Result<()> {
    let report = metrics::analytics(ledger);

    if json {
        return print_json(&report);
    }

    println!();
    println!("📈 Financial Analytics");
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   Health Score: {}/100 ({})",
        report.health_score, report.standing
    );
    println!(
        "      Savings rate     {:>2}/40    Expense growth  {:>2}/30    Income stability {:>2}/30",
        report.components.savings,
        report.components.expense_growth,
        report.components.income_stability
    );
    println!();
    println!("   Savings Rate (avg): {}", pct(report.avg_savings_rate));
    println!("   Expense Growth:     {}", pct(report.expense_growth));
    println!(
        "   Income Stability:   {}",
        if report.income_stable { "Stable" } else { "Unstable" }
    );
    println!();

    if report.months > 0 {
        println!(
            "   {:6} │ {:>9} │ {:>9} │ {:>9} │ {:>7}",
            "Month", "Income", "Expenses", "Savings", "Rate"
        );
        println!("   ───────┼───────────┼───────────┼───────────┼─────────");
        for (snap, point) in ledger.snapshots.iter().zip(&report.savings_rate_series) {
            println!(
                "   {:6} │ {:>9.2} │ {:>9.2} │ {:>9.2} │ {:>7}",
                snap.month,
                snap.income,
                snap.expenses,
                snap.savings,
                pct(point.rate)
            );
        }
        println!();
    }

    if !report.category_spending.is_empty() {
        println!("   Spending by Category");
        for cat in &report.category_spending {
            println!(
                "   {:20} ${:.2}",
                truncate(&cat.category, 20),
                cat.total
            );
        }
        println!("   Total: ${:.2}", report.total_category_spending);
        if let Some(avg) = report.avg_monthly_spending {
            println!("   Avg per month: ${:.2}", avg);
        }
    }

    Ok(())
}
