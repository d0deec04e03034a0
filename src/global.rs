//! src/global.rs
//!
//! The process-wide logger and the free functions operating on it.

use std::sync::OnceLock;

use levels::{Severity, StyleTable};
use values::Value;

use crate::logger::Logger;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger, created with defaults on first use.
pub fn logger() -> &'static Logger {
    LOGGER.get_or_init(Logger::new)
}

/// The process-wide threshold.
pub fn get_level() -> Severity {
    logger().level()
}

/// Replaces the process-wide threshold.
pub fn set_level(level: Severity) {
    logger().set_level(level);
}

/// Snapshot of the process-wide terminal style table.
pub fn get_terminal_style() -> StyleTable {
    logger().terminal_styles()
}

/// Overwrites one process-wide terminal style.
pub fn set_terminal_style(level: Severity, token: impl Into<String>) {
    logger().set_terminal_style(level, token);
}

/// Snapshot of the process-wide browser style table.
pub fn get_browser_style() -> StyleTable {
    logger().browser_styles()
}

/// Overwrites one process-wide browser style.
pub fn set_browser_style(level: Severity, token: impl Into<String>) {
    logger().set_browser_style(level, token);
}

/// Logs `values` at `level` through the process-wide logger.
pub fn log<I>(level: Severity, values: I)
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    logger().log(level, values);
}

/// Logs at [`Severity::Severe`] through the process-wide logger.
pub fn severe<I>(values: I)
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    log(Severity::Severe, values);
}

/// Logs at [`Severity::Error`] through the process-wide logger.
pub fn error<I>(values: I)
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    log(Severity::Error, values);
}

/// Logs at [`Severity::Warning`] through the process-wide logger.
pub fn warning<I>(values: I)
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    log(Severity::Warning, values);
}

/// Logs at [`Severity::Info`] through the process-wide logger.
pub fn info<I>(values: I)
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    log(Severity::Info, values);
}

/// Logs at [`Severity::Debug`] through the process-wide logger.
pub fn debug<I>(values: I)
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    log(Severity::Debug, values);
}

/// Logs at [`Severity::Trace`] through the process-wide logger.
pub fn trace<I>(values: I)
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    log(Severity::Trace, values);
}
