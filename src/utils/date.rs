//! Date-key helpers.
//!
//! A date key identifies a calendar day as "DD/MM/YYYY". It is used to
//! detect day changes and to deduplicate history entries.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

const DATE_KEY_FORMAT: &str = "%d/%m/%Y";

pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Splits a date key into `(day, month, year)`.
///
/// Returns `None` unless the key has exactly three numeric components.
pub fn parse_date_key(key: &str) -> Option<(u32, u32, i32)> {
    let parts: Vec<&str> = key.split('/').collect();
    if parts.len() != 3 {
        return None;
    }

    let day = parts[0].trim().parse::<u32>().ok()?;
    let month = parts[1].trim().parse::<u32>().ok()?;
    let year = parts[2].trim().parse::<i32>().ok()?;

    Some((day, month, year))
}

/// Same key with "-" instead of "/", safe for file names.
pub fn file_safe_key(key: &str) -> String {
    key.replace('/', "-")
}

/// "Saturday, 17 October"
pub fn long_date_label(date: NaiveDate) -> String {
    date.format("%A, %-d %B").to_string()
}

/// Parse a "YYYY-MM" month selector.
pub fn parse_month(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d").ok()
}

/// Parse a pinned "now": RFC 3339, or local "YYYY-MM-DDTHH:MM[:SS]".
pub fn parse_instant(s: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
}
