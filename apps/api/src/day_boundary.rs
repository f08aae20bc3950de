//! Calendar-day arithmetic shared by streak tracking and goal progress.
//!
//! Both instants are reduced to their UTC calendar date before subtracting,
//! so the result never depends on time-of-day, sub-second precision, or the
//! caller's local timezone.

use chrono::{DateTime, NaiveDate, Utc};

/// UTC calendar date of an instant.
pub fn utc_day(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}

/// Signed number of calendar days from `a` to `b`. Negative when `b` falls on
/// an earlier day than `a`; zero for any two instants on the same day.
pub fn days_between(a: DateTime<Utc>, b: DateTime<Utc>) -> i64 {
    (utc_day(b) - utc_day(a)).num_days()
}

/// 1-based day index of `target` counted from `reference`.
/// The reference day itself is day 1.
pub fn day_number(reference: DateTime<Utc>, target: DateTime<Utc>) -> i64 {
    days_between(reference, target) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn test_same_instant_is_zero_days() {
        let a = at(2024, 3, 10, 12, 0, 0);
        assert_eq!(days_between(a, a), 0);
        assert_eq!(day_number(a, a), 1);
    }

    #[test]
    fn test_time_of_day_ignored() {
        let late = at(2024, 3, 10, 23, 59, 59) + Duration::milliseconds(999);
        let early_next = at(2024, 3, 11, 0, 0, 0);
        assert_eq!(days_between(late, early_next), 1);

        let morning = at(2024, 3, 10, 0, 0, 1);
        assert_eq!(days_between(morning, late), 0);
    }

    #[test]
    fn test_negative_when_target_precedes_reference() {
        let a = at(2024, 3, 10, 8, 0, 0);
        let b = at(2024, 3, 7, 20, 0, 0);
        assert_eq!(days_between(a, b), -3);
        assert_eq!(day_number(a, b), -2);
    }

    #[test]
    fn test_crosses_month_and_leap_day() {
        let a = at(2024, 2, 28, 18, 0, 0);
        let b = at(2024, 3, 1, 6, 0, 0);
        assert_eq!(days_between(a, b), 2);
    }

    #[test]
    fn test_offset_input_normalized_to_utc() {
        // 2024-01-01T23:30-05:00 is 2024-01-02T04:30Z
        let offset = chrono::FixedOffset::west_opt(5 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(2024, 1, 1, 23, 30, 0).unwrap();
        let a = at(2024, 1, 2, 0, 0, 0);
        assert_eq!(days_between(a, local.with_timezone(&Utc)), 0);
    }

    #[test]
    fn test_non_negative_for_ordered_instants() {
        let start = at(2023, 12, 31, 22, 0, 0);
        for hours in 0..200 {
            let later = start + Duration::hours(hours);
            assert!(days_between(start, later) >= 0, "failed at +{hours}h");
        }
    }
}
