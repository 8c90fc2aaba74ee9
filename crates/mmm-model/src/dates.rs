//! Calendar-day parsing and formatting for the `date` column.
//!
//! Client exports carry dates in a handful of formats; everything is parsed
//! down to calendar-day granularity and re-emitted as ISO `YYYY-MM-DD`.
//! ISO day strings sort lexicographically in chronological order, which is
//! what lets the dataset keep its date column as plain strings.

use chrono::{NaiveDate, NaiveDateTime};

/// ISO day format used everywhere in the prepared output.
pub const ISO_DAY_FORMAT: &str = "%Y-%m-%d";

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y"];
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses a value to a calendar day.
///
/// Accepts ISO dates, `YYYY/MM/DD`, `DD-MM-YYYY`, and ISO datetimes
/// (`T` or space separated), truncating any time component. Returns `None`
/// for empty or unrecognized input.
#[must_use]
pub fn parse_day(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }
    None
}

/// Formats a calendar day as ISO `YYYY-MM-DD`.
#[must_use]
pub fn format_day(date: NaiveDate) -> String {
    date.format(ISO_DAY_FORMAT).to_string()
}
