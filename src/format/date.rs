//! Day/month/year date display (UTC)

use chrono::{DateTime, NaiveDate, Utc};

use super::NOT_AVAILABLE;

const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Format a Unix timestamp in milliseconds as `dd/mm/yyyy`
pub fn format_date_millis(millis: Option<i64>) -> String {
    millis
        .filter(|&ms| ms != 0)
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| dt.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Format an RFC 3339 timestamp or a plain `yyyy-mm-dd` date as `dd/mm/yyyy`
pub fn format_date_str(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return NOT_AVAILABLE.to_string();
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.naive_utc().format(DISPLAY_FORMAT).to_string();
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|_| NOT_AVAILABLE.to_string())
}
