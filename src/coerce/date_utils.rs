//! Module for parsing date-like text.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Parse a date string against a prioritized list of formats.
///
/// Each format is attempted as a zoned datetime, then as a naive datetime
/// assumed to be UTC, then as a bare date at midnight UTC. When no format
/// matches (or none are configured), standard UTC forms are tried: RFC
/// 3339, `%Y-%m-%dT%H:%M:%S`, and `%Y-%m-%d`.
#[must_use]
pub fn parse_date_string(s: &str, formats: &[&str]) -> Option<DateTime<Utc>> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in formats {
        if let Ok(zoned) = DateTime::parse_from_str(trimmed, format) {
            return Some(zoned.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return midnight_utc(date);
        }
    }

    // Standard UTC fallback chain
    if let Ok(zoned) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(zoned.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return midnight_utc(date);
    }

    None
}

fn midnight_utc(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0)
        .map(|naive| Utc.from_utc_datetime(&naive))
}
