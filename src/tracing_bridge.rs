//! src/tracing_bridge.rs
//! Bridge between the `tracing` crate and a [`Logger`].
//!
//! [`LoggischLayer`] is a `tracing-subscriber` layer that turns each event
//! into a log call. Event levels map onto severities, the logger's threshold
//! decides whether the event is written, and the event's fields become the
//! logged values.
//!
//! # Usage
//!
//! ```rust,ignore
//! loggisch::set_level(loggisch::Severity::Info);
//! loggisch::init_tracing().expect("no other global subscriber");
//!
//! tracing::info!(port = 8080, "listening");
//! ```

use std::fmt;
use std::ops::Deref;

use levels::Severity;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::global::logger;
use crate::logger::Logger;

/// A tracing layer writing events through a [`Logger`].
///
/// `L` is any shared handle to a logger: the `&'static Logger` returned by
/// [`logger()`](crate::logger()), an `Arc<Logger>`, or a leaked box.
#[derive(Clone, Debug)]
pub struct LoggischLayer<L = &'static Logger> {
    logger: L,
}

impl<L> LoggischLayer<L>
where
    L: Deref<Target = Logger>,
{
    /// Creates a layer forwarding into `logger`.
    pub const fn new(logger: L) -> Self {
        Self { logger }
    }

    /// The logger events are written to.
    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Map a tracing level to a severity.
    const fn level_to_severity(level: &Level) -> Severity {
        match *level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warning,
            Level::INFO => Severity::Info,
            Level::DEBUG => Severity::Debug,
            Level::TRACE => Severity::Trace,
        }
    }
}

impl<S, L> Layer<S> for LoggischLayer<L>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    L: Deref<Target = Logger> + Send + Sync + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let severity = Self::level_to_severity(event.metadata().level());
        if !self.logger.should_emit(severity) {
            return;
        }

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.logger.log(severity, visitor.into_values());
    }
}

/// Collects an event's message and its remaining fields.
#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Vec<String>,
}

impl FieldVisitor {
    fn into_values(self) -> Vec<String> {
        self.message.into_iter().chain(self.fields).collect()
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            self.fields.push(format!("{}={value:?}", field.name()));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        } else {
            self.fields.push(format!("{}={value}", field.name()));
        }
    }
}

/// Installs a [`LoggischLayer`] over the process-wide logger as the global
/// default subscriber.
///
/// Fails when another global subscriber is already set.
pub fn init_tracing() -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LoggischLayer::new(logger()))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    use console_sink::{Console, ConsoleLine, Environment};
    use tracing_subscriber::layer::SubscriberExt;

    #[derive(Clone, Default)]
    struct Lines(Arc<Mutex<Vec<ConsoleLine>>>);

    impl Console for Lines {
        fn write_line(&mut self, line: &ConsoleLine) -> io::Result<()> {
            self.0.lock().unwrap().push(line.clone());
            Ok(())
        }
    }

    fn capture(level: Severity, emit: impl FnOnce()) -> Vec<Vec<String>> {
        let lines = Lines::default();
        let logger = Arc::new(
            Logger::builder()
                .level(level)
                .environment(Environment::Terminal)
                .console(lines.clone())
                .build(),
        );
        let subscriber = tracing_subscriber::registry().with(LoggischLayer::new(logger));
        tracing::subscriber::with_default(subscriber, emit);

        let recorded = lines.0.lock().unwrap().clone();
        recorded
            .iter()
            .map(|line| line.args().iter().map(ToString::to_string).collect())
            .collect()
    }

    #[test]
    fn level_mapping() {
        type Bridge = LoggischLayer<Arc<Logger>>;
        assert_eq!(Bridge::level_to_severity(&Level::ERROR), Severity::Error);
        assert_eq!(Bridge::level_to_severity(&Level::WARN), Severity::Warning);
        assert_eq!(Bridge::level_to_severity(&Level::INFO), Severity::Info);
        assert_eq!(Bridge::level_to_severity(&Level::DEBUG), Severity::Debug);
        assert_eq!(Bridge::level_to_severity(&Level::TRACE), Severity::Trace);
    }

    #[test]
    fn message_comes_first_then_fields() {
        let lines = capture(Severity::Info, || {
            tracing::warn!(port = 8080, host = "localhost", "listening");
        });

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0][2], "[WARNING]");
        assert_eq!(lines[0][4..], ["listening", "port=8080", "host=localhost"]);
    }

    #[test]
    fn events_below_threshold_are_dropped() {
        let lines = capture(Severity::Warning, || {
            tracing::info!("hidden");
            tracing::debug!("hidden");
            tracing::error!("shown");
        });

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0][2], "[ERROR]");
        assert_eq!(lines[0][4], "shown");
    }

    #[test]
    fn events_without_message_log_their_fields() {
        let lines = capture(Severity::Trace, || {
            tracing::trace!(attempt = 3_u64);
        });

        assert_eq!(lines[0][2], "[TRACE]");
        assert_eq!(lines[0][4..], ["attempt=3"]);
    }
}
