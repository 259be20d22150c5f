//! Text formatting utilities for the timeline demo.
//!
//! This module provides helper functions for formatting dates in a human-readable way.

use chrono::{NaiveDate, NaiveDateTime};

/// Date format accepted by the "Go to" field.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Formats a visible range as "Mar 1, 2025 – Mar 31, 2025".
pub fn format_range(start: NaiveDateTime, end: NaiveDateTime) -> String {
    format!("{} – {}", start.format("%b %-d, %Y"), end.format("%b %-d, %Y"))
}

/// Formats an axis tick label for the given tick spacing in days.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_tick(date, 1), "Mon 3");
/// assert_eq!(format_tick(date, 30), "Mar 2025");
/// ```
pub fn format_tick(date: NaiveDate, step_days: i64) -> String {
    match step_days {
        s if s >= 28 => date.format("%b %Y").to_string(),
        s if s >= 7 => date.format("%b %-d").to_string(),
        _ => date.format("%a %-d").to_string(),
    }
}

/// Parses a `YYYY-MM-DD` date from user input.
pub fn parse_date_input(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_INPUT_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_range() {
        let start = date(2025, 3, 1).and_hms_opt(0, 0, 0).unwrap();
        let end = date(2025, 3, 31).and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(format_range(start, end), "Mar 1, 2025 – Mar 31, 2025");
    }

    #[test]
    fn test_format_tick_by_step() {
        let d = date(2025, 3, 3);
        assert_eq!(format_tick(d, 1), "Mon 3");
        assert_eq!(format_tick(d, 7), "Mar 3");
        assert_eq!(format_tick(d, 30), "Mar 2025");
    }

    #[test]
    fn test_parse_date_input() {
        assert_eq!(parse_date_input(" 2025-03-03 "), Some(date(2025, 3, 3)));
        assert_eq!(parse_date_input("03/03/2025"), None);
        assert_eq!(parse_date_input(""), None);
    }
}
