use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Today's date as an ISO `YYYY-MM-DD` string, used to stamp new records.
pub fn today_iso_date() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Normalizes a `dateAdded` value to `YYYY-MM-DD` for display.
/// Supports various formats: ISO 8601, datetime with space separator, plain dates.
pub fn normalize_date_added(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    // Try parsing as ISO 8601 with timezone (e.g., "2024-01-15T10:30:00Z")
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d").to_string();
    }

    // Try parsing as ISO 8601 without timezone
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return dt.format("%Y-%m-%d").to_string();
    }

    // Try parsing as datetime with a space separator (e.g., "2024-01-15 10:30:00")
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return dt.format("%Y-%m-%d").to_string();
    }

    // Try parsing as a plain date
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }

    // If parsing fails, return the original string
    raw.to_string()
}
