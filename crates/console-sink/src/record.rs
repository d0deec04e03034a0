//! crates/console-sink/src/record.rs

use chrono::{DateTime, FixedOffset, Local};
use levels::Severity;
use values::Loggable;

use crate::timestamp::format_timestamp;

/// The data of one admitted log call: its level, when it happened, and its
/// formatted values.
#[derive(Clone, Debug, PartialEq)]
pub struct LogRecord {
    level: Severity,
    timestamp: DateTime<FixedOffset>,
    values: Vec<Loggable>,
}

impl LogRecord {
    /// Creates a record with an explicit timestamp.
    #[must_use]
    pub const fn new(
        level: Severity,
        timestamp: DateTime<FixedOffset>,
        values: Vec<Loggable>,
    ) -> Self {
        Self {
            level,
            timestamp,
            values,
        }
    }

    /// Creates a record stamped with the current local time.
    #[must_use]
    pub fn now(level: Severity, values: Vec<Loggable>) -> Self {
        Self::new(level, Local::now().fixed_offset(), values)
    }

    /// The record's severity.
    #[must_use]
    pub const fn level(&self) -> Severity {
        self.level
    }

    /// When the record was created.
    #[must_use]
    pub const fn timestamp(&self) -> &DateTime<FixedOffset> {
        &self.timestamp
    }

    /// The timestamp rendered as `YYYY-MM-DDTHH:MM:SS±HH:MM`.
    #[must_use]
    pub fn timestamp_text(&self) -> String {
        format_timestamp(&self.timestamp)
    }

    /// The formatted values, in call order.
    #[must_use]
    pub fn values(&self) -> &[Loggable] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_text_uses_the_record_offset() {
        let zone = FixedOffset::east_opt(3600).unwrap();
        let at = zone.with_ymd_and_hms(2025, 7, 4, 18, 0, 9).unwrap();
        let record = LogRecord::new(Severity::Info, at, vec![Loggable::from("x")]);

        assert_eq!(record.timestamp_text(), "2025-07-04T18:00:09+01:00");
        assert_eq!(record.level(), Severity::Info);
        assert_eq!(record.values(), [Loggable::from("x")]);
    }
}
