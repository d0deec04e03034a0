//! crates/console-sink/src/timestamp.rs

use std::fmt;

use chrono::{DateTime, TimeZone};

/// `chrono` format string producing `YYYY-MM-DDTHH:MM:SS±HH:MM`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Renders `at` with second precision and its UTC offset.
///
/// # Examples
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use console_sink::format_timestamp;
///
/// let zone = FixedOffset::east_opt(2 * 3600).unwrap();
/// let at = zone.with_ymd_and_hms(2024, 12, 31, 23, 59, 1).unwrap();
/// assert_eq!(format_timestamp(&at), "2024-12-31T23:59:01+02:00");
/// ```
pub fn format_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}
