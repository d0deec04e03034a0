//! src/logger.rs
//!
//! The [`Logger`] type and its builder.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, PoisonError};

use console_sink::{Console, Environment, LogRecord, default_console};
use levels::{LevelConfig, LevelStore, Severity, StyleTable, Surface};
use values::{Value, format_value};

/// A leveled console logger.
///
/// A logger owns its [`LevelStore`], the [`Environment`] it renders for and
/// the [`Console`] it writes to. Every method takes `&self`, so one logger can
/// be shared across threads; each admitted call writes its line while holding
/// the console lock, which keeps lines from interleaving.
///
/// # Examples
///
/// ```
/// use loggisch::{Environment, Logger, LineMode, Severity, WriterConsole};
///
/// let logger = Logger::builder()
///     .level(Severity::Info)
///     .environment(Environment::Terminal)
///     .console(WriterConsole::with_line_mode(std::io::sink(), LineMode::WithNewline))
///     .build();
///
/// logger.info(["service started"]);
/// logger.debug(["suppressed"]);
/// assert!(!logger.should_emit(Severity::Debug));
/// ```
pub struct Logger {
    store: LevelStore,
    environment: AtomicU8,
    console: Mutex<Box<dyn Console + Send>>,
}

impl Logger {
    /// Logger with default levels, the probed environment and the default console.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts configuring a logger.
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// The level store consulted by every call.
    pub const fn store(&self) -> &LevelStore {
        &self.store
    }

    /// The active threshold.
    pub fn level(&self) -> Severity {
        self.store.level()
    }

    /// Replaces the threshold.
    pub fn set_level(&self, level: Severity) {
        self.store.set_level(level);
    }

    /// Reports whether a call at `level` would be written.
    pub fn should_emit(&self, level: Severity) -> bool {
        self.store.should_emit(level)
    }

    /// Snapshot of the terminal style table.
    pub fn terminal_styles(&self) -> StyleTable {
        self.store.terminal_styles()
    }

    /// Overwrites the terminal style for `level`.
    pub fn set_terminal_style(&self, level: Severity, token: impl Into<String>) {
        self.store.set_terminal_style(level, token);
    }

    /// Snapshot of the browser style table.
    pub fn browser_styles(&self) -> StyleTable {
        self.store.browser_styles()
    }

    /// Overwrites the browser style for `level`.
    pub fn set_browser_style(&self, level: Severity, token: impl Into<String>) {
        self.store.set_browser_style(level, token);
    }

    /// The environment subsequent calls render for.
    pub fn environment(&self) -> Environment {
        Environment::from_u8(self.environment.load(Ordering::Acquire)).unwrap_or_default()
    }

    /// Switches the environment for subsequent calls.
    pub fn set_environment(&self, environment: Environment) {
        self.environment.store(environment.to_u8(), Ordering::Release);
    }

    /// Swaps the console, returning the previous one.
    pub fn replace_console(&self, console: Box<dyn Console + Send>) -> Box<dyn Console + Send> {
        let mut current = self.console.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *current, console)
    }

    /// Logs `values` at `level`.
    ///
    /// Nothing is converted or formatted when the threshold suppresses
    /// `level`. Otherwise every value is formatted in order, rendered through
    /// the current environment's sink and written to the console as a single
    /// line. Console errors are discarded.
    pub fn log<I>(&self, level: Severity, values: I)
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        if !self.should_emit(level) {
            return;
        }

        let formatted = values
            .into_iter()
            .map(|value| format_value(&value.into()))
            .collect();
        let record = LogRecord::now(level, formatted);

        let sink = self.environment().sink();
        let style = self.store.style(sink.surface(), level);
        let line = sink.render(&record, &style);

        let mut console = self.console.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = console.write_line(&line);
    }

    /// Logs at [`Severity::Severe`].
    pub fn severe<I>(&self, values: I)
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.log(Severity::Severe, values);
    }

    /// Logs at [`Severity::Error`].
    pub fn error<I>(&self, values: I)
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.log(Severity::Error, values);
    }

    /// Logs at [`Severity::Warning`].
    pub fn warning<I>(&self, values: I)
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.log(Severity::Warning, values);
    }

    /// Logs at [`Severity::Info`].
    pub fn info<I>(&self, values: I)
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.log(Severity::Info, values);
    }

    /// Logs at [`Severity::Debug`].
    pub fn debug<I>(&self, values: I)
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.log(Severity::Debug, values);
    }

    /// Logs at [`Severity::Trace`].
    pub fn trace<I>(&self, values: I)
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.log(Severity::Trace, values);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("environment", &self.environment())
            .finish_non_exhaustive()
    }
}

/// Configures a [`Logger`] before it is shared.
///
/// Unset parts fall back to the defaults: threshold `error`, the default
/// style tables, [`Environment::detect`] and [`default_console`].
#[derive(Default)]
pub struct LoggerBuilder {
    config: LevelConfig,
    environment: Option<Environment>,
    console: Option<Box<dyn Console + Send>>,
}

impl LoggerBuilder {
    /// Sets the initial threshold.
    pub fn level(mut self, level: Severity) -> Self {
        self.config.level = Some(level);
        self
    }

    /// Fixes the environment instead of probing for it.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Writes to `console` instead of the default console.
    pub fn console<C>(mut self, console: C) -> Self
    where
        C: Console + Send + 'static,
    {
        self.console = Some(Box::new(console));
        self
    }

    /// Overrides one style token.
    pub fn style(mut self, surface: Surface, level: Severity, token: impl Into<String>) -> Self {
        self.config = self.config.with_style(surface, level, token);
        self
    }

    /// Layers a [`LevelConfig`] over the settings made so far.
    pub fn config(mut self, config: LevelConfig) -> Self {
        self.config.merge(config);
        self
    }

    /// Creates the logger.
    pub fn build(self) -> Logger {
        let store = LevelStore::new();
        self.config.apply(&store);
        let environment = self.environment.unwrap_or_else(Environment::detect);

        Logger {
            store,
            environment: AtomicU8::new(environment.to_u8()),
            console: Mutex::new(self.console.unwrap_or_else(default_console)),
        }
    }
}

impl fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("config", &self.config)
            .field("environment", &self.environment)
            .field("console", &self.console.is_some())
            .finish()
    }
}
