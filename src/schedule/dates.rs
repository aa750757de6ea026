//! Calendar-day helpers for the schedule
//!
//! - Day keys: "YYYY-MM-DD", the format used in quiz ids and date queries
//! - Day index: days since 1970-01-01, the absolute position that drives
//!   every rotation and seed in the builders

use chrono::{Datelike, NaiveDate};

/// Format a date as a day key ("YYYY-MM-DD").
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use prepdeck::schedule::day_key;
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// assert_eq!(day_key(date), "2025-01-01");
/// ```
pub fn day_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Parse a day key back into a date.
pub fn parse_day_key(key: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = key.split('-').collect();
    if parts.len() != 3 || parts[0].len() != 4 || parts[1].len() != 2 || parts[2].len() != 2 {
        return None;
    }
    let year: i32 = parts[0].parse().ok()?;
    let month: u32 = parts[1].parse().ok()?;
    let day: u32 = parts[2].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Days since the Unix epoch. Negative before 1970.
pub fn day_index(date: NaiveDate) -> i64 {
    (date - NaiveDate::default()).num_days()
}

/// Iterate every day from `start` to `end`, both inclusive.
///
/// Yields nothing when `start > end`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day <= end)
}

/// Number of days in the inclusive range, zero when `start > end`.
pub fn span_days(start: NaiveDate, end: NaiveDate) -> usize {
    if start > end {
        0
    } else {
        (end - start).num_days() as usize + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_key_roundtrip() {
        let d = date(2023, 12, 28);
        assert_eq!(day_key(d), "2023-12-28");
        assert_eq!(parse_day_key("2023-12-28"), Some(d));
    }

    #[test]
    fn test_parse_day_key_rejects_loose_formats() {
        assert_eq!(parse_day_key("2023-2-8"), None);
        assert_eq!(parse_day_key("2023-02-30"), None);
        assert_eq!(parse_day_key("20230228"), None);
        assert_eq!(parse_day_key(""), None);
    }

    #[test]
    fn test_day_index() {
        assert_eq!(day_index(date(1970, 1, 1)), 0);
        assert_eq!(day_index(date(1970, 1, 2)), 1);
        assert_eq!(day_index(date(1969, 12, 31)), -1);
        assert_eq!(day_index(date(2025, 1, 1)), 20089);
    }

    #[test]
    fn test_days_inclusive() {
        let days: Vec<_> = days_inclusive(date(2024, 2, 28), date(2024, 3, 1)).collect();
        assert_eq!(days, vec![date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]);
        assert_eq!(span_days(date(2024, 2, 28), date(2024, 3, 1)), 3);

        assert_eq!(days_inclusive(date(2024, 3, 2), date(2024, 3, 1)).count(), 0);
        assert_eq!(span_days(date(2024, 3, 2), date(2024, 3, 1)), 0);
    }
}
