//! Date formatting and parsing for show start times.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Display styles used by the pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// `Sunday April, 1, 2035 at 8:00PM`
    Full,
    /// `Sun 04, 01, 2035 8:00PM`
    #[default]
    Medium,
}

impl DateStyle {
    fn pattern(self) -> &'static str {
        match self {
            DateStyle::Full => "%A %B, %-d, %Y at %-I:%M%p",
            DateStyle::Medium => "%a %m, %d, %Y %-I:%M%p",
        }
    }
}

/// Format a timestamp for display.
pub fn format_datetime(value: DateTime<Utc>, style: DateStyle) -> String {
    value.format(style.pattern()).to_string()
}

/// Value used to pre-fill the start time input.
pub fn form_value(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M:%S").to_string()
}

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse a submitted start time. Naive values are taken as UTC.
pub fn parse_start_time(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Some(parsed.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|naive| naive.and_utc())
}
