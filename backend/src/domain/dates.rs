//! Date arithmetic shared by the grid builder and the event binder.
//!
//! Months are zero-based throughout (0 = January). Weekday offsets are always
//! Monday-first: 0 for Monday through 6 for Sunday, independent of how the
//! column headers are labelled.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use shared::ReferenceDate;

use super::errors::{CalendarError, CalendarResult};

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Get the number of days in a zero-based month
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    match month0 {
        1 => if is_leap_year(year) { 29 } else { 28 },
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// First calendar day of the referenced month
pub fn first_of_month(reference: ReferenceDate) -> CalendarResult<NaiveDate> {
    NaiveDate::from_ymd_opt(reference.year, reference.month + 1, 1)
        .ok_or(CalendarError::YearOutOfRange(reference.year))
}

/// Monday-first column index of a date (Monday = 0, Sunday = 6)
pub fn monday_first_offset(date: NaiveDate) -> u32 {
    // Same as (sunday_based + 6) % 7
    date.weekday().num_days_from_monday()
}

/// Date-time layouts accepted besides RFC 3339, all read as host-local
const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Extract the calendar date from an event date string.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive date-times. The whole
/// string must be well formed; the date is taken as written, so the time of
/// day and any offset do not shift it.
pub fn parse_event_date(date_str: &str) -> Option<NaiveDate> {
    let date_str = date_str.trim();

    if let Ok(date) = NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(date_str) {
        return Some(date_time.date_naive());
    }
    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(date_str, format).ok())
        .map(|date_time| date_time.date())
}

/// Parse a caller supplied "today" override
pub fn parse_today(date_str: &str) -> CalendarResult<NaiveDate> {
    parse_event_date(date_str).ok_or_else(|| CalendarError::InvalidToday(date_str.to_string()))
}

/// Look up the configured name of a zero-based month
pub fn month_name(month0: u32, names: &[String]) -> &str {
    names
        .get(month0 as usize)
        .map(String::as_str)
        .unwrap_or("?")
}

/// Format a date for human-readable display, e.g. "17 Outubro 2026"
pub fn format_date_for_display(date: NaiveDate, names: &[String]) -> String {
    format!("{} {} {}", date.day(), month_name(date.month0(), names), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 0), 31); // January
        assert_eq!(days_in_month(2025, 3), 30); // April
        assert_eq!(days_in_month(2025, 1), 28); // February (non-leap)
        assert_eq!(days_in_month(2024, 1), 29); // February (leap year)
        assert_eq!(days_in_month(2025, 10), 30); // November
        assert_eq!(days_in_month(2025, 11), 31); // December
    }

    #[test]
    fn test_days_in_month_matches_chrono() {
        for year in [1900, 2000, 2023, 2024, 2100] {
            for month0 in 0..12 {
                let first = date(year, month0 + 1, 1);
                let next = ReferenceDate { year, month: month0 }.next().unwrap();
                let next_first = date(next.year, next.month + 1, 1);
                let expected = (next_first - first).num_days() as u32;
                assert_eq!(days_in_month(year, month0), expected, "{year}-{month0}");
            }
        }
    }

    #[test]
    fn test_is_leap_year() {
        assert!(!is_leap_year(2025));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }

    #[test]
    fn test_monday_first_offset() {
        assert_eq!(monday_first_offset(date(2025, 9, 1)), 0); // Monday
        assert_eq!(monday_first_offset(date(2025, 11, 1)), 5); // Saturday
        assert_eq!(monday_first_offset(date(2025, 6, 1)), 6); // Sunday
    }

    #[test]
    fn test_monday_first_offset_matches_sunday_based_conversion() {
        let mut day = date(2025, 1, 1);
        for _ in 0..14 {
            let sunday_based = day.weekday().num_days_from_sunday();
            assert_eq!(monday_first_offset(day), (sunday_based + 6) % 7);
            if day.weekday() == Weekday::Mon {
                assert_eq!(monday_first_offset(day), 0);
            }
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_parse_event_date() {
        assert_eq!(parse_event_date("2025-06-13"), Some(date(2025, 6, 13)));
        assert_eq!(parse_event_date("2025-06-13T09:00:00-04:00"), Some(date(2025, 6, 13)));
        assert_eq!(parse_event_date("2025-06-13 23:59"), Some(date(2025, 6, 13)));
        assert_eq!(parse_event_date("2025-06-13T23:30:00Z"), Some(date(2025, 6, 13)));
        assert_eq!(parse_event_date("2025-06-13T08:15:00.250"), Some(date(2025, 6, 13)));
        assert_eq!(parse_event_date("  2025-06-13  "), Some(date(2025, 6, 13)));
        assert_eq!(parse_event_date("invalid-date"), None);
        assert_eq!(parse_event_date("2025-02-30"), None);
        assert_eq!(parse_event_date(""), None);
    }

    #[test]
    fn test_parse_event_date_rejects_garbage_after_date() {
        assert_eq!(parse_event_date("2025-11-03Tgarbage"), None);
        assert_eq!(parse_event_date("2025-11-03 lunch"), None);
        assert_eq!(parse_event_date("2025-11-03T25:00:00"), None);
        assert_eq!(parse_event_date("2025-11-03T09:00:00+99:00"), None);
    }

    #[test]
    fn test_parse_today() {
        assert_eq!(parse_today("2026-10-17"), Ok(date(2026, 10, 17)));
        assert_eq!(
            parse_today("yesterday"),
            Err(CalendarError::InvalidToday("yesterday".to_string()))
        );
    }

    #[test]
    fn test_first_of_month_out_of_range() {
        let reference = ReferenceDate { year: i32::MAX, month: 0 };
        assert_eq!(first_of_month(reference), Err(CalendarError::YearOutOfRange(i32::MAX)));
    }

    #[test]
    fn test_format_date_for_display() {
        let names: Vec<String> = ["Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho",
            "Julho", "Agosto", "Setembro", "Outubro", "Novembro", "Dezembro"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert_eq!(format_date_for_display(date(2026, 10, 17), &names), "17 Outubro 2026");
        assert_eq!(month_name(12, &names), "?");
    }
}
