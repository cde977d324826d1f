//! Deadline math
//!
//! "Today" is always a parameter; nothing here reads a system clock.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A goal pace slower than this is flagged as needing larger contributions
pub const ON_TRACK_HORIZON_MONTHS: i64 = 12;

/// Signed whole days from `today` to `deadline`. Negative means the
/// deadline has passed.
pub fn days_until(deadline: NaiveDate, today: NaiveDate) -> i64 {
    (deadline - today).num_days()
}

/// Months until a goal completes at its current contribution rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthsToGoal {
    /// Whole months of contributions remaining. Zero or negative means
    /// the goal is already funded.
    Months(i64),
    /// The remaining amount can never be reached (no contribution)
    Never,
}

impl MonthsToGoal {
    /// Already funded: nothing left to contribute
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Months(n) if *n <= 0)
    }

    /// Completes within the on-track horizon
    pub fn is_on_track(&self) -> bool {
        matches!(self, Self::Months(n) if *n <= ON_TRACK_HORIZON_MONTHS)
    }
}

impl std::fmt::Display for MonthsToGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Months(n) => write!(f, "{}", n),
            Self::Never => write!(f, "∞"),
        }
    }
}

/// Whole months to reach `target` from `current` at `monthly_contribution`
/// per month, rounded up. `Never` iff the contribution is zero or negative
/// while an amount remains outstanding.
pub fn months_to_completion(
    target: f64,
    current: f64,
    monthly_contribution: f64,
) -> MonthsToGoal {
    let remaining = target - current;
    if monthly_contribution <= 0.0 {
        if remaining > 0.0 {
            MonthsToGoal::Never
        } else {
            MonthsToGoal::Months(0)
        }
    } else {
        MonthsToGoal::Months((remaining / monthly_contribution).ceil() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_days_until_counts_whole_days() {
        let today = d(2024, 6, 15);
        assert_eq!(days_until(d(2024, 6, 15), today), 0);
        assert_eq!(days_until(d(2024, 6, 16), today), 1);
        assert_eq!(days_until(d(2024, 12, 31), today), 199);
    }

    #[test]
    fn test_days_until_is_negative_for_past_deadlines() {
        let today = d(2024, 9, 1);
        assert!(days_until(d(2024, 8, 15), today) < 0);
        assert_eq!(days_until(d(2024, 8, 31), today), -1);
    }

    #[test]
    fn test_months_round_up() {
        // (15000 - 8500) / 500 = 13 exactly
        assert_eq!(months_to_completion(15000.0, 8500.0, 500.0), MonthsToGoal::Months(13));
        // (5000 - 2800) / 400 = 5.5 -> 6
        assert_eq!(months_to_completion(5000.0, 2800.0, 400.0), MonthsToGoal::Months(6));
    }

    #[test]
    fn test_never_iff_no_contribution_and_amount_remaining() {
        assert_eq!(months_to_completion(5000.0, 2800.0, 0.0), MonthsToGoal::Never);
        assert_eq!(months_to_completion(5000.0, 2800.0, -10.0), MonthsToGoal::Never);
        // Already funded: no contribution needed
        assert_eq!(months_to_completion(5000.0, 5000.0, 0.0), MonthsToGoal::Months(0));
        assert_eq!(months_to_completion(5000.0, 6000.0, 0.0), MonthsToGoal::Months(0));
    }

    #[test]
    fn test_exceeded_goal_is_complete_not_an_error() {
        let months = months_to_completion(5000.0, 6000.0, 400.0);
        assert!(months.is_complete());
        assert!(matches!(months, MonthsToGoal::Months(n) if n <= 0));
    }

    #[test]
    fn test_on_track_horizon() {
        assert!(MonthsToGoal::Months(12).is_on_track());
        assert!(!MonthsToGoal::Months(13).is_on_track());
        assert!(!MonthsToGoal::Never.is_on_track());
        assert!(MonthsToGoal::Months(0).is_on_track());
    }
}
