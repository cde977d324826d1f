//! Goal report and add commands

use anyhow::Result;
use chrono::NaiveDate;
use keel_core::metrics;
use keel_core::{validate, Ledger};

use super::{pct, print_json, truncate};

pub fn cmd_goals(ledger: &Ledger, today: NaiveDate, json: bool) -> Result<()> {
    let report = metrics::goal_report(ledger, today);

    if json {
        return print_json(&report);
    }

    println!();
    println!("🎯 Goals");
    println!(
        "   Active: {}   Completed: {}",
        report.active_count, report.completed_count
    );
    println!(
        "   Saved ${:.2} of ${:.2} ({})   ${:.2}/month",
        report.totals.current,
        report.totals.target,
        pct(report.overall_progress),
        report.totals.monthly_contribution
    );
    println!("   ─────────────────────────────────────────────────────────────");

    if report.rows.is_empty() {
        println!("   No active goals.");
        return Ok(());
    }

    for row in &report.rows {
        println!(
            "   {:24} {:>7}  ${:.2} / ${:.2}  [{} priority]",
            truncate(&row.name, 24),
            pct(row.progress),
            row.current_amount,
            row.target_amount,
            row.priority
        );
        println!(
            "   {:24} deadline {}  {} days left  {} months at ${:.0}/mo",
            "",
            row.deadline,
            row.days_left,
            row.months_to_completion,
            row.monthly_contribution
        );
        if row.overdue {
            println!(
                "   {:24} ⛔ Goal overdue - adjust the target date or contribution",
                ""
            );
        }
        if row.needs_larger_contribution {
            println!(
                "   {:24} ⚠️  Over a year to completion - consider increasing contributions",
                ""
            );
        }
        println!();
    }

    println!("   On track (≤12 months): {}", report.on_track_count);
    println!("   High priority:         {}", report.high_priority_count);
    println!("   Average progress:      {}", pct(report.average_progress));

    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn cmd_goals_add(
    ledger: &mut Ledger,
    name: &str,
    target: &str,
    current: &str,
    deadline: &str,
    category: &str,
    description: Option<&str>,
    contribution: &str,
    priority: &str,
    today: NaiveDate,
    json: bool,
) -> Result<()> {
    let new = validate::new_goal(
        name,
        target,
        current,
        deadline,
        category,
        description,
        contribution,
        priority,
    )?;
    let id = ledger.add_goal(new);
    tracing::info!(id, name, "Goal added");

    if !json {
        println!("✅ Added goal #{}: {} (target ${})", id, name, target);
    }
    cmd_goals(ledger, today, json)
}
