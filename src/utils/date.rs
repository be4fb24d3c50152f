use chrono::{NaiveDate, NaiveDateTime};

/// Storage format of the `day` column.
pub const ISO_DAY: &str = "%Y-%m-%d";

/// Day format written by the first version of the league sheet.
pub const LEGACY_DAY: &str = "%d-%m-%Y";

/// Parse a day as typed by users or found in storage.
///
/// Accepts ISO dates, the legacy `DD-MM-YYYY` form, and full timestamps
/// (`2025-03-15T00:00:00`, `2025-03-15 00:00:00`) whose time part is dropped.
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    if let Ok(d) = NaiveDate::parse_from_str(s, ISO_DAY) {
        return Some(d);
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, LEGACY_DAY) {
        return Some(d);
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    None
}

pub fn to_db_str(day: &NaiveDate) -> String {
    day.format(ISO_DAY).to_string()
}

/// Render a day with the user-configured format, falling back to ISO when
/// the pattern is not a valid chrono format string.
pub fn display_day(day: &NaiveDate, pattern: &str) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    if write!(out, "{}", day.format(pattern)).is_err() {
        return to_db_str(day);
    }
    out
}
