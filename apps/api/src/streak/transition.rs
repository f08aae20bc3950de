use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::day_boundary::days_between;

/// Persisted streak counters for one user.
///
/// Invariants after every transition:
/// - `longest_streak >= current_streak >= 0`
/// - `current_streak == 0` iff `last_entry_date` is `None`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakState {
    pub current_streak: i32,
    pub longest_streak: i32,
    pub last_entry_date: Option<DateTime<Utc>>,
}

/// Which rule an entry event triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakChange {
    /// First entry ever recorded.
    Started,
    /// Another entry on the day already counted.
    SameDay,
    /// Entry on the calendar day after the last one.
    Extended,
    /// Entry after one or more missed days; streak restarts at 1.
    Reset,
    /// Entry dated before the last recorded one; ignored.
    Backfilled,
}

impl StreakState {
    /// Computes the state after an entry created at `entry_at`.
    pub fn apply_entry(&self, entry_at: DateTime<Utc>) -> (StreakState, StreakChange) {
        let Some(last) = self.last_entry_date else {
            let next = StreakState {
                current_streak: 1,
                longest_streak: self.longest_streak.max(1),
                last_entry_date: Some(entry_at),
            };
            return (next, StreakChange::Started);
        };

        match days_between(last, entry_at) {
            gap if gap < 0 => (*self, StreakChange::Backfilled),
            0 => {
                let next = StreakState {
                    last_entry_date: Some(last.max(entry_at)),
                    ..*self
                };
                (next, StreakChange::SameDay)
            }
            1 => {
                let current = self.current_streak.saturating_add(1);
                let next = StreakState {
                    current_streak: current,
                    longest_streak: self.longest_streak.max(current),
                    last_entry_date: Some(entry_at),
                };
                (next, StreakChange::Extended)
            }
            _ => {
                let next = StreakState {
                    current_streak: 1,
                    longest_streak: self.longest_streak.max(1),
                    last_entry_date: Some(entry_at),
                };
                (next, StreakChange::Reset)
            }
        }
    }

    /// Whether the streak can still be extended as of `now`: the last entry
    /// was today or yesterday.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.last_entry_date
            .is_some_and(|last| (0..=1).contains(&days_between(last, now)))
    }
}
