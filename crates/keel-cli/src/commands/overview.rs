//! Overview command

use anyhow::Result;
use keel_core::metrics;
use keel_core::Ledger;

use super::{pct, print_json, signed_dollars, truncate};

pub fn cmd_overview(ledger: &Ledger, json: bool) -> Result<()> {
    let report = metrics::overview(ledger);

    if json {
        return print_json(&report);
    }

    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│           💰 Keel Overview              │");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Total Balance:     ${:.2}", report.total_balance);
    println!("  Monthly Income:    ${:.2}", report.monthly_income);
    println!("  Monthly Expenses:  ${:.2}", report.monthly_expenses);
    println!("  Monthly Savings:   ${:.2}", report.monthly_savings);
    println!("  Credit Score:      {}", report.credit_score);
    println!();
    println!("  📈 Savings Rate:       {}", pct(report.savings_rate));
    println!("  📊 Budget Utilization: {}", pct(report.budget_utilization));
    println!(
        "  🛟 Emergency Fund:     ${:.2} of ${:.2} ({})",
        report.emergency_fund,
        report.emergency_goal,
        pct(report.emergency_fund_progress)
    );
    println!();

    println!("  🧾 Recent Transactions");
    for tx in &report.recent_transactions {
        println!(
            "     {:22} {:>12}  {}",
            truncate(&tx.merchant, 22),
            signed_dollars(tx.amount),
            tx.category
        );
    }
    println!();

    println!("  🎯 Goals");
    for goal in &report.goals {
        println!(
            "     {:22} {:>7}  (${:.0} / ${:.0})",
            truncate(&goal.name, 22),
            pct(goal.progress),
            goal.current_amount,
            goal.target_amount
        );
    }

    Ok(())
}
