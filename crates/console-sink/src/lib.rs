#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/console-sink/src/lib.rs
//!
//! # Overview
//!
//! `console-sink` turns an admitted log call into the argument list of a
//! single console write. It owns the two rendering paths, the host
//! write-line primitive they feed, and the probe deciding which path applies.
//!
//! # Design
//!
//! - [`LogRecord`] carries the level, the timestamp and the already formatted
//!   values of one call.
//! - A [`Sink`] renders a record plus a style token into a [`ConsoleLine`].
//!   [`TerminalSink`] emits ANSI-styled arguments; [`BrowserSink`] emits a
//!   `%c` template followed by its CSS arguments.
//! - A [`Console`] receives the line. [`WriterConsole`] streams it to any
//!   [`std::io::Write`] implementor, honouring its [`LineMode`]; on
//!   `wasm32-unknown-unknown` a `BrowserConsole` hands the arguments to
//!   the page's `console.log`.
//! - [`Environment`] ties a runtime kind to its sink and style surface.
//!
//! # Invariants
//!
//! - Every render produces exactly one [`ConsoleLine`].
//! - Timestamps are rendered as `YYYY-MM-DDTHH:MM:SS±HH:MM`.
//!
//! # Examples
//!
//! ```
//! use console_sink::{Console, Environment, LogRecord, WriterConsole};
//! use levels::{Severity, StyleTable};
//! use values::Loggable;
//!
//! let record = LogRecord::now(Severity::Error, vec![Loggable::from("peter")]);
//! let styles = StyleTable::terminal_defaults();
//! let line = Environment::Terminal.sink().render(&record, styles.get(Severity::Error));
//!
//! let mut console = WriterConsole::new(Vec::new());
//! console.write_line(&line).unwrap();
//!
//! let output = String::from_utf8(console.into_inner()).unwrap();
//! assert!(output.ends_with(" \x1b[31m [ERROR] \x1b[0m peter\n"));
//! ```

mod console;
mod environment;
mod line_mode;
mod record;
mod sink;
mod timestamp;

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
pub use console::BrowserConsole;
pub use console::{Console, ConsoleLine, LineModeGuard, WriterConsole, default_console};
pub use environment::Environment;
pub use line_mode::LineMode;
pub use record::LogRecord;
pub use sink::{BrowserSink, Sink, TerminalSink};
pub use timestamp::{TIMESTAMP_FORMAT, format_timestamp};
