#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! src/lib.rs
//!
//! # Overview
//!
//! `loggisch` is a leveled console logger. Messages below the configured
//! threshold are dropped; admitted ones are timestamped and rendered either
//! for an ANSI terminal or for a browser console that applies `%c` CSS
//! directives. Any value can be logged: strings and numbers are passed
//! through, structures are pretty-printed as JSON with shared and circular
//! references marked, and everything else falls back to a display string.
//!
//! # Design
//!
//! - [`Severity`] orders the six levels from `severe` down to `trace`.
//! - [`Logger`] owns a [`LevelStore`] holding the threshold and one
//!   [`StyleTable`] per [`Surface`], the [`Environment`] it renders for and
//!   the [`Console`] it writes to. [`LoggerBuilder`] configures one.
//! - [`logger()`] returns a process-wide logger that the free functions
//!   ([`error`](fn@error), [`set_level`], ...) and the macros ([`error!`], ...) use.
//! - With the `tracing` feature, `LoggischLayer` forwards `tracing` events
//!   into a logger.
//!
//! # Invariants
//!
//! - A call is written iff its severity is at least as severe as the
//!   threshold; suppressed calls format nothing.
//! - Each admitted call produces exactly one console line.
//! - Formatting never fails and never recurses forever.
//!
//! # Examples
//!
//! ```
//! use loggisch::{Environment, Logger, Severity, Shared, Value, WriterConsole};
//!
//! let logger = Logger::builder()
//!     .level(Severity::Debug)
//!     .environment(Environment::Terminal)
//!     .console(WriterConsole::new(Vec::new()))
//!     .build();
//!
//! let request = Shared::new(Value::object().with_field("path", "/"));
//! request.insert("self", &request);
//!
//! loggisch::debug!(logger: logger; "handling", &request, 3);
//! logger.warning(["cache miss"]);
//! # request.replace(Value::Null);
//! ```
//!
//! # See also
//!
//! - [`format_value`] for the value formatting rules.
//! - [`Sink`] for the two rendering layouts.

mod global;
mod logger;
mod macros;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use console_sink::{
    BrowserSink, Console, ConsoleLine, Environment, LineMode, LineModeGuard, LogRecord, Sink,
    TIMESTAMP_FORMAT, TerminalSink, WriterConsole, default_console, format_timestamp,
};
#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
pub use console_sink::BrowserConsole;
pub use global::{
    debug, error, get_browser_style, get_level, get_terminal_style, info, log, logger,
    set_browser_style, set_level, set_terminal_style, severe, trace, warning,
};
pub use levels::{
    LevelConfig, LevelStore, ParseSeverityError, ParseSurfaceError, Severity, StyleTable, Surface,
    TERMINAL_RESET,
};
pub use logger::{Logger, LoggerBuilder};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LoggischLayer, init_tracing};
pub use values::{
    CIRCULAR_MARKER, ErrorValue, FUNCTION_PLACEHOLDER, FormatError, Loggable, Number, Shared,
    UNLOGGABLE_PLACEHOLDER, Value, fallback_text, format_value, to_pretty_json,
};
