//! Financial Metrics Engine
//!
//! Pure, synchronous functions that turn the ledger collections into the
//! figures the dashboard displays:
//!
//! - **Aggregation** - totals and grouped sums over transactions, budgets,
//!   and goals
//! - **Rates** - savings rate, budget utilization, goal progress, expense
//!   growth, with an explicit undefined sentinel for zero denominators
//! - **Health** - the fixed-threshold 0-100 financial health score
//! - **Dates** - days to deadline and months to goal completion, against
//!   a caller-supplied "today"
//! - **Reports** - composite per-view summaries built from the above
//!
//! ## Usage
//!
//! ```rust,ignore
//! use keel_core::{metrics, sample};
//!
//! let ledger = sample::demo_ledger();
//! let report = metrics::analytics(&ledger);
//! println!("health: {}/100 ({})", report.health_score, report.standing);
//! ```

pub mod aggregate;
pub mod dates;
pub mod health;
pub mod rates;
pub mod report;

pub use aggregate::{
    budget_totals, category_totals, goal_totals, net_flow, total_expenses, total_income,
    BudgetTotals, CategoryTotal, GoalTotals,
};
pub use dates::{days_until, months_to_completion, MonthsToGoal, ON_TRACK_HORIZON_MONTHS};
pub use health::{
    expense_growth_points, health_score, income_stability_points, savings_rate_points,
    HealthStanding, INCOME_STABILITY_FLOOR,
};
pub use rates::{
    budget_standing, budget_utilization, category_percentage, expense_growth, goal_progress,
    savings_rate, BudgetStanding, OVER_PERCENTAGE, WARNING_PERCENTAGE,
};
pub use report::{
    analytics, budget_report, goal_report, overview, AnalyticsReport, BudgetReport, BudgetRow,
    GoalReport, GoalRow, HealthComponents, OverviewGoal, OverviewReport, SavingsRatePoint,
};
