//! Locale-aware formatting helpers

use chrono::{DateTime, NaiveDate};
use num_format::{Locale, SystemLocale, ToFormattedString};

/// Format a count with the system locale's thousands separators, falling
/// back to "en" grouping when the system locale cannot be determined.
pub(crate) fn format_count(value: u64) -> String {
    match SystemLocale::default() {
        Ok(locale) => value.to_formatted_string(&locale),
        Err(_) => value.to_formatted_string(&Locale::en),
    }
}

/// Render a joined timestamp as abbreviated month + 4-digit year.
///
/// Accepts RFC 3339, the legacy "Tue Jun 02 20:12:29 +0000 2009" shape, and
/// bare dates. Anything else yields `None`, which suppresses the "Joined"
/// segment.
pub(crate) fn format_joined(raw: &str) -> Option<String> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.format("%b %Y").to_string());
    }
    if let Ok(ts) = DateTime::parse_from_str(raw, "%a %b %d %H:%M:%S %z %Y") {
        return Some(ts.format("%b %Y").to_string());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.format("%b %Y").to_string());
    }
    None
}
