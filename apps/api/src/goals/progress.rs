use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::day_boundary::{day_number, days_between};

/// Point-in-time progress of a goal span. Computed on read, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoalProgress {
    pub progress_percent: u32, // 0 – 100
    /// Day N of the goal; the creation day is day 1.
    pub current_day: i64,
    pub elapsed_days: i64,
    pub total_days: Option<i64>,
    pub days_remaining: Option<i64>,
    pub is_overdue: bool,
}

impl GoalProgress {
    pub fn compute(
        created_at: DateTime<Utc>,
        end_date: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Self {
        GoalProgress {
            progress_percent: compute_progress_percent(created_at, end_date, now),
            current_day: day_number(created_at, now),
            elapsed_days: days_between(created_at, now),
            total_days: end_date.map(|end| days_between(created_at, end)),
            days_remaining: end_date.map(|end| days_between(now, end).max(0)),
            is_overdue: end_date.is_some_and(|end| days_between(end, now) > 0),
        }
    }
}

/// Percentage of the goal span elapsed at `now`, in whole calendar days.
///
/// Always in `[0, 100]`:
/// - no end date → 0
/// - end date on or before the creation day → 0
/// - `now` before creation → 0, past the end date → 100
pub fn compute_progress_percent(
    created_at: DateTime<Utc>,
    end_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> u32 {
    let Some(end_date) = end_date else {
        return 0;
    };

    let total_days = days_between(created_at, end_date);
    if total_days <= 0 {
        return 0;
    }
    let elapsed_days = days_between(created_at, now);

    // total_days > 0, so div_euclid is floor division even for negative elapsed
    let raw = (elapsed_days * 100).div_euclid(total_days);
    raw.clamp(0, 100) as u32
}
