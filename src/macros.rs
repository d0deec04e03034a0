//! src/macros.rs
//!
//! Variadic logging macros.
//!
//! Each macro accepts any number of values of different types, converts them
//! with [`Value::from`](crate::Value) and logs them as one call. The gate is
//! checked first, so suppressed calls evaluate none of their arguments.
//! Prefix the arguments with `logger: <expr>;` to target a specific
//! [`Logger`](crate::Logger) instead of the process-wide one.

/// Logs values at an explicit [`Severity`](crate::Severity).
///
/// # Examples
///
/// ```
/// use loggisch::{Logger, Severity, WriterConsole};
///
/// let logger = Logger::builder().console(WriterConsole::new(std::io::sink())).build();
/// loggisch::log!(logger: logger; Severity::Error, "disk", 97.5, true);
/// loggisch::log!(Severity::Trace, "suppressed at the default threshold");
/// ```
#[macro_export]
macro_rules! log {
    (logger: $logger:expr; $level:expr $(, $value:expr)* $(,)?) => {{
        let logger: &$crate::Logger = &$logger;
        let level: $crate::Severity = $level;
        if logger.should_emit(level) {
            let values: ::std::vec::Vec<$crate::Value> =
                ::std::vec![$($crate::Value::from($value)),*];
            logger.log(level, values);
        }
    }};
    ($level:expr $(, $value:expr)* $(,)?) => {
        $crate::log!(logger: $crate::logger(); $level $(, $value)*)
    };
}

/// Logs values at [`Severity::Severe`](crate::Severity::Severe).
#[macro_export]
macro_rules! severe {
    (logger: $logger:expr; $($value:expr),* $(,)?) => {
        $crate::log!(logger: $logger; $crate::Severity::Severe $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::log!($crate::Severity::Severe $(, $value)*)
    };
}

/// Logs values at [`Severity::Error`](crate::Severity::Error).
#[macro_export]
macro_rules! error {
    (logger: $logger:expr; $($value:expr),* $(,)?) => {
        $crate::log!(logger: $logger; $crate::Severity::Error $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::log!($crate::Severity::Error $(, $value)*)
    };
}

/// Logs values at [`Severity::Warning`](crate::Severity::Warning).
#[macro_export]
macro_rules! warning {
    (logger: $logger:expr; $($value:expr),* $(,)?) => {
        $crate::log!(logger: $logger; $crate::Severity::Warning $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::log!($crate::Severity::Warning $(, $value)*)
    };
}

/// Logs values at [`Severity::Info`](crate::Severity::Info).
#[macro_export]
macro_rules! info {
    (logger: $logger:expr; $($value:expr),* $(,)?) => {
        $crate::log!(logger: $logger; $crate::Severity::Info $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::log!($crate::Severity::Info $(, $value)*)
    };
}

/// Logs values at [`Severity::Debug`](crate::Severity::Debug).
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr; $($value:expr),* $(,)?) => {
        $crate::log!(logger: $logger; $crate::Severity::Debug $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::log!($crate::Severity::Debug $(, $value)*)
    };
}

/// Logs values at [`Severity::Trace`](crate::Severity::Trace).
#[macro_export]
macro_rules! trace {
    (logger: $logger:expr; $($value:expr),* $(,)?) => {
        $crate::log!(logger: $logger; $crate::Severity::Trace $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::log!($crate::Severity::Trace $(, $value)*)
    };
}
