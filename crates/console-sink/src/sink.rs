//! crates/console-sink/src/sink.rs
//!
//! The two rendering paths. Each turns a [`LogRecord`] plus the active style
//! token into the argument list of a single console call.

use levels::{Surface, TERMINAL_RESET};
use values::Loggable;

use crate::console::ConsoleLine;
use crate::record::LogRecord;

/// A rendering path for one [`Surface`].
pub trait Sink: Send + Sync {
    /// The style table this sink reads from.
    fn surface(&self) -> Surface;

    /// Renders `record` styled with `style`.
    fn render(&self, record: &LogRecord, style: &str) -> ConsoleLine;
}

/// ANSI terminal rendering.
///
/// Produces `[timestamp, style, "[LEVEL]", "\x1b[0m", value...]`, keeping
/// every value as its own argument.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalSink;

impl Sink for TerminalSink {
    fn surface(&self) -> Surface {
        Surface::Terminal
    }

    fn render(&self, record: &LogRecord, style: &str) -> ConsoleLine {
        let mut args = Vec::with_capacity(record.values().len() + 4);
        args.push(Loggable::Text(record.timestamp_text()));
        args.push(Loggable::from(style));
        args.push(Loggable::from(record.level().tag()));
        args.push(Loggable::from(TERMINAL_RESET));
        args.extend(record.values().iter().cloned());
        ConsoleLine::new(args)
    }
}

/// CSS-styled browser console rendering.
///
/// Produces a `%c` template carrying the timestamp, the lowercase level and
/// the space-joined values, followed by the level's CSS and an empty string
/// that resets styling after the tag.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSink;

impl Sink for BrowserSink {
    fn surface(&self) -> Surface {
        Surface::Browser
    }

    fn render(&self, record: &LogRecord, style: &str) -> ConsoleLine {
        let joined = ConsoleLine::new(record.values().to_vec());
        let template = format!(
            "{} %c[{}]%c {joined}",
            record.timestamp_text(),
            record.level()
        );
        ConsoleLine::new(vec![
            Loggable::Text(template),
            Loggable::from(style),
            Loggable::from(""),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};
    use levels::{Severity, StyleTable};
    use values::Number;

    fn record(level: Severity, values: Vec<Loggable>) -> LogRecord {
        let zone = FixedOffset::east_opt(0).unwrap();
        let at = zone.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();
        LogRecord::new(level, at, values)
    }

    #[test]
    fn terminal_line_layout() {
        let styles = StyleTable::terminal_defaults();
        let line = TerminalSink.render(
            &record(Severity::Error, vec![Loggable::from("peter")]),
            styles.get(Severity::Error),
        );

        assert_eq!(
            line.args(),
            [
                Loggable::from("2024-05-06T07:08:09+00:00"),
                Loggable::from("\x1b[31m"),
                Loggable::from("[ERROR]"),
                Loggable::from("\x1b[0m"),
                Loggable::from("peter"),
            ]
        );
    }

    #[test]
    fn terminal_keeps_values_separate() {
        let line = TerminalSink.render(
            &record(
                Severity::Info,
                vec![
                    Loggable::from("a"),
                    Loggable::Number(Number::Int(1)),
                    Loggable::from("a"),
                ],
            ),
            "",
        );
        assert_eq!(line.len(), 7);
        assert_eq!(line.args()[5], Loggable::Number(Number::Int(1)));
        assert_eq!(line.args()[6], "a");
    }

    #[test]
    fn browser_line_layout() {
        let styles = StyleTable::browser_defaults();
        let line = BrowserSink.render(
            &record(
                Severity::Warning,
                vec![Loggable::from("disk"), Loggable::Number(Number::Int(90))],
            ),
            styles.get(Severity::Warning),
        );

        assert_eq!(
            line.args(),
            [
                Loggable::from("2024-05-06T07:08:09+00:00 %c[warning]%c disk 90"),
                Loggable::from("color:orange; font-weight:bold; text-transform: uppercase;"),
                Loggable::from(""),
            ]
        );
    }

    #[test]
    fn browser_line_without_values_keeps_trailing_space() {
        let line = BrowserSink.render(&record(Severity::Trace, Vec::new()), "css");
        assert_eq!(line.args()[0], "2024-05-06T07:08:09+00:00 %c[trace]%c ");
    }

    #[test]
    fn sinks_report_their_surface() {
        assert_eq!(TerminalSink.surface(), Surface::Terminal);
        assert_eq!(BrowserSink.surface(), Surface::Browser);
    }
}
