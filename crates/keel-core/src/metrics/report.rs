//! Composite per-view reports
//!
//! One builder per dashboard view. Each assembles the aggregate, rate,
//! health, and date figures that view displays, so the presentation layer
//! only formats. All builders are pure; the goal view takes the injected
//! `today`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{BudgetKind, GoalPriority, GoalStatus, MonthlySnapshot, Transaction};
use crate::state::Ledger;

use super::aggregate::{self, BudgetTotals, CategoryTotal, GoalTotals};
use super::dates::{self, MonthsToGoal};
use super::health::{self, HealthStanding, INCOME_STABILITY_FLOOR};
use super::rates::{self, BudgetStanding};

/// Goal progress as shown on the overview cards
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewGoal {
    pub name: String,
    pub current_amount: f64,
    pub target_amount: f64,
    pub progress: Option<f64>,
}

/// The overview tab: account cards, recent activity, goal progress
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewReport {
    pub total_balance: f64,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub monthly_budget: f64,
    pub monthly_savings: f64,
    pub savings_rate: Option<f64>,
    pub budget_utilization: Option<f64>,
    pub emergency_fund: f64,
    pub emergency_goal: f64,
    pub emergency_fund_progress: Option<f64>,
    pub credit_score: u32,
    pub recent_transactions: Vec<Transaction>,
    pub goals: Vec<OverviewGoal>,
}

pub fn overview(ledger: &Ledger) -> OverviewReport {
    let account = &ledger.account;
    let report = OverviewReport {
        total_balance: account.total_balance,
        monthly_income: account.monthly_income,
        monthly_expenses: account.monthly_expenses,
        monthly_budget: account.monthly_budget,
        monthly_savings: account.savings,
        savings_rate: rates::savings_rate(account.monthly_income, account.monthly_expenses),
        budget_utilization: rates::budget_utilization(
            account.monthly_expenses,
            account.monthly_budget,
        ),
        emergency_fund: account.emergency_fund,
        emergency_goal: account.emergency_goal,
        emergency_fund_progress: rates::goal_progress(
            account.emergency_fund,
            account.emergency_goal,
        ),
        credit_score: account.credit_score,
        recent_transactions: ledger.transactions.iter().take(3).cloned().collect(),
        goals: ledger
            .active_goals()
            .into_iter()
            .map(|g| OverviewGoal {
                name: g.name.clone(),
                current_amount: g.current_amount,
                target_amount: g.target_amount,
                progress: rates::goal_progress(g.current_amount, g.target_amount),
            })
            .collect(),
    };
    tracing::debug!(
        goals = report.goals.len(),
        recent = report.recent_transactions.len(),
        "Overview assembled"
    );
    report
}

/// One budget category row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetRow {
    pub id: i64,
    pub name: String,
    pub kind: BudgetKind,
    pub budgeted: f64,
    pub spent: f64,
    pub percentage: Option<f64>,
    pub standing: BudgetStanding,
    /// Dollars past the allowance, present only when over budget
    pub over_by: Option<f64>,
}

/// The budget tab: per-category rows plus aggregate figures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetReport {
    pub monthly_income: f64,
    pub rows: Vec<BudgetRow>,
    pub totals: BudgetTotals,
    /// budgeted minus spent; negative when overspent overall
    pub remaining: f64,
    pub utilization: Option<f64>,
    pub over_count: usize,
    pub under_count: usize,
    /// Mean of per-category percentages, over categories where one is defined
    pub average_utilization: Option<f64>,
}

pub fn budget_report(ledger: &Ledger) -> BudgetReport {
    let rows: Vec<BudgetRow> = ledger
        .budgets
        .iter()
        .map(|cat| {
            let percentage = rates::category_percentage(cat.spent, cat.budgeted);
            let standing = BudgetStanding::from_percentage(percentage);
            BudgetRow {
                id: cat.id,
                name: cat.name.clone(),
                kind: cat.kind,
                budgeted: cat.budgeted,
                spent: cat.spent,
                percentage,
                standing,
                over_by: (standing == BudgetStanding::Over).then(|| cat.spent - cat.budgeted),
            }
        })
        .collect();

    let totals = aggregate::budget_totals(&ledger.budgets);
    let defined: Vec<f64> = rows.iter().filter_map(|r| r.percentage).collect();

    let report = BudgetReport {
        monthly_income: ledger.account.monthly_income,
        over_count: ledger.budgets.iter().filter(|c| c.spent > c.budgeted).count(),
        under_count: ledger.budgets.iter().filter(|c| c.spent < c.budgeted).count(),
        average_utilization: if defined.is_empty() {
            None
        } else {
            Some(defined.iter().sum::<f64>() / defined.len() as f64)
        },
        remaining: totals.budgeted - totals.spent,
        utilization: rates::budget_utilization(totals.spent, totals.budgeted),
        totals,
        rows,
    };
    tracing::debug!(
        categories = report.rows.len(),
        over = report.over_count,
        "Budget report assembled"
    );
    report
}

/// One goal row with its deadline math
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalRow {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub priority: GoalPriority,
    pub deadline: NaiveDate,
    pub target_amount: f64,
    pub current_amount: f64,
    pub monthly_contribution: f64,
    pub progress: Option<f64>,
    pub days_left: i64,
    pub months_to_completion: MonthsToGoal,
    pub overdue: bool,
    /// Pace is past the on-track horizon; suggest larger contributions
    pub needs_larger_contribution: bool,
}

/// The goals tab: per-goal rows plus portfolio figures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalReport {
    pub active_count: usize,
    pub completed_count: usize,
    pub totals: GoalTotals,
    pub overall_progress: Option<f64>,
    pub rows: Vec<GoalRow>,
    pub on_track_count: usize,
    pub high_priority_count: usize,
    pub average_progress: Option<f64>,
}

pub fn goal_report(ledger: &Ledger, today: NaiveDate) -> GoalReport {
    let rows: Vec<GoalRow> = ledger
        .active_goals()
        .into_iter()
        .map(|goal| {
            let days_left = dates::days_until(goal.deadline, today);
            let months =
                dates::months_to_completion(goal.target_amount, goal.current_amount, goal.monthly_contribution);
            GoalRow {
                id: goal.id,
                name: goal.name.clone(),
                category: goal.category.clone(),
                priority: goal.priority,
                deadline: goal.deadline,
                target_amount: goal.target_amount,
                current_amount: goal.current_amount,
                monthly_contribution: goal.monthly_contribution,
                progress: rates::goal_progress(goal.current_amount, goal.target_amount),
                days_left,
                months_to_completion: months,
                overdue: days_left < 0,
                needs_larger_contribution: !months.is_on_track(),
            }
        })
        .collect();

    let totals = aggregate::goal_totals(&ledger.goals, GoalStatus::Active);
    let defined: Vec<f64> = rows.iter().filter_map(|r| r.progress).collect();

    let report = GoalReport {
        active_count: totals.count,
        completed_count: ledger.goals_with_status(GoalStatus::Completed).len(),
        overall_progress: rates::goal_progress(totals.current, totals.target),
        on_track_count: rows.iter().filter(|r| r.months_to_completion.is_on_track()).count(),
        high_priority_count: rows.iter().filter(|r| r.priority == GoalPriority::High).count(),
        average_progress: if defined.is_empty() {
            None
        } else {
            Some(defined.iter().sum::<f64>() / defined.len() as f64)
        },
        totals,
        rows,
    };
    tracing::debug!(
        active = report.active_count,
        on_track = report.on_track_count,
        "Goal report assembled"
    );
    report
}

/// One point of the savings-rate trend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsRatePoint {
    pub month: String,
    pub rate: Option<f64>,
}

/// Health score component breakdown
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HealthComponents {
    pub savings: u8,
    pub expense_growth: u8,
    pub income_stability: u8,
}

/// The analytics tab: trend figures and the health score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub months: usize,
    pub current: Option<MonthlySnapshot>,
    pub previous: Option<MonthlySnapshot>,
    pub avg_savings_rate: Option<f64>,
    pub expense_growth: Option<f64>,
    pub income_stable: bool,
    pub savings_rate_series: Vec<SavingsRatePoint>,
    pub category_spending: Vec<CategoryTotal>,
    pub total_category_spending: f64,
    pub avg_monthly_spending: Option<f64>,
    pub components: HealthComponents,
    pub health_score: u8,
    pub standing: HealthStanding,
}

pub fn analytics(ledger: &Ledger) -> AnalyticsReport {
    let snapshots = &ledger.snapshots;

    let series: Vec<SavingsRatePoint> = snapshots
        .iter()
        .map(|s| SavingsRatePoint {
            month: s.month.clone(),
            rate: rates::savings_rate(s.income, s.expenses),
        })
        .collect();
    let defined_rates: Vec<f64> = series.iter().filter_map(|p| p.rate).collect();
    let avg_savings_rate = if defined_rates.is_empty() {
        None
    } else {
        Some(defined_rates.iter().sum::<f64>() / defined_rates.len() as f64)
    };

    let current = snapshots.last();
    let previous = snapshots.len().checked_sub(2).and_then(|i| snapshots.get(i));
    let expense_growth = match (current, previous) {
        (Some(cur), Some(prev)) => rates::expense_growth(cur.expenses, prev.expenses),
        _ => None,
    };

    let incomes: Vec<f64> = snapshots.iter().map(|s| s.income).collect();
    let category_spending = aggregate::category_totals(&ledger.transactions);
    let total_category_spending: f64 = category_spending.iter().map(|c| c.total).sum();

    // Undefined signals score as flat/zero rather than inventing a trend
    let components = HealthComponents {
        savings: health::savings_rate_points(avg_savings_rate.unwrap_or(0.0)),
        expense_growth: health::expense_growth_points(expense_growth.unwrap_or(0.0)),
        income_stability: health::income_stability_points(&incomes),
    };
    let health_score = health::health_score(
        avg_savings_rate.unwrap_or(0.0),
        expense_growth.unwrap_or(0.0),
        &incomes,
    );

    let report = AnalyticsReport {
        months: snapshots.len(),
        current: current.cloned(),
        previous: previous.cloned(),
        avg_savings_rate,
        expense_growth,
        income_stable: incomes.iter().all(|&i| i >= INCOME_STABILITY_FLOOR),
        savings_rate_series: series,
        avg_monthly_spending: if snapshots.is_empty() {
            None
        } else {
            Some(total_category_spending / snapshots.len() as f64)
        },
        category_spending,
        total_category_spending,
        components,
        health_score,
        standing: HealthStanding::from_score(health_score),
    };
    tracing::debug!(
        months = report.months,
        score = report.health_score,
        "Analytics assembled"
    );
    report
}
