//! Date formatting for CMS timestamps.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Display format: two-digit day, full month name, year (`05 March 2025`).
const DISPLAY_FORMAT: &str = "%d %B %Y";

/// Parse a CMS timestamp into a calendar date.
///
/// Accepts RFC 3339 (`2025-03-05T10:00:00.000000Z`), SQL-style
/// (`2025-03-05 10:00:00`) and bare dates (`2025-03-05`).
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
}

/// Render a CMS timestamp for display, or an empty string if it cannot be parsed.
pub fn display_date(raw: Option<&str>) -> String {
    raw.and_then(parse_date)
        .map(|date| date.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_default()
}
