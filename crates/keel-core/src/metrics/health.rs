//! Financial health score
//!
//! A fixed rule table, not a model: three independent signals map to
//! point bands that sum to a 0-100 score. Band boundaries belong to the
//! higher band (`>=` comparisons throughout). Changing any threshold
//! changes observable behavior.

use serde::{Deserialize, Serialize};

/// Monthly income at or above this counts as stable
pub const INCOME_STABILITY_FLOOR: f64 = 5000.0;

/// Savings-rate component, max 40 points
pub fn savings_rate_points(avg_savings_rate: f64) -> u8 {
    if avg_savings_rate >= 20.0 {
        40
    } else if avg_savings_rate >= 15.0 {
        30
    } else if avg_savings_rate >= 10.0 {
        20
    } else {
        10
    }
}

/// Expense-growth component, max 30 points
pub fn expense_growth_points(expense_growth: f64) -> u8 {
    if expense_growth < 0.0 {
        30 // expenses decreased
    } else if expense_growth < 5.0 {
        20 // controlled growth
    } else if expense_growth < 10.0 {
        10 // moderate growth
    } else {
        0 // high growth
    }
}

/// Income-stability component, max 30 points. Vacuously stable for an
/// empty series.
pub fn income_stability_points(monthly_incomes: &[f64]) -> u8 {
    if monthly_incomes.iter().all(|&i| i >= INCOME_STABILITY_FLOOR) {
        30
    } else {
        15
    }
}

/// Composite 0-100 health score. The cap is defensive; the band maxima
/// already sum to 100.
pub fn health_score(avg_savings_rate: f64, expense_growth: f64, monthly_incomes: &[f64]) -> u8 {
    let score = savings_rate_points(avg_savings_rate)
        + expense_growth_points(expense_growth)
        + income_stability_points(monthly_incomes);
    score.min(100)
}

/// Display label for a health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStanding {
    Excellent,
    Good,
    NeedsAttention,
}

impl HealthStanding {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::Excellent
        } else if score >= 60 {
            Self::Good
        } else {
            Self::NeedsAttention
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::NeedsAttention => "Needs Attention",
        }
    }
}

impl std::fmt::Display for HealthStanding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
