//! Date helpers for API request paths.

use chrono::{Datelike, Local, NaiveDate};

/// Formats a date as `YYYY-MM-DD` for API request paths.
#[must_use]
pub fn format_api_date(date: NaiveDate) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month(),
        date.day()
    )
}

/// Parses a `YYYY-MM-DD` string, returning `None` for any other shape.
#[must_use]
pub fn parse_api_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Today's date in the local timezone, as used when a resource method is
/// called without an explicit date.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
