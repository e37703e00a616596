// Display helpers shared by the tool formatters

use chrono::{DateTime, TimeZone};

/// Separator line closing every result block.
pub const BLOCK_SEPARATOR: &str = "---";

/// Render an API timestamp as a local date/time, e.g. `1/2/2024, 3:04:05 AM`.
///
/// Timestamps that do not parse as RFC 3339 are returned unchanged.
pub fn format_timestamp<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed
            .with_timezone(tz)
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}
