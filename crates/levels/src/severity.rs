//! crates/levels/src/severity.rs
//! The closed, ordered set of logging severities.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity of a log message, ordered from most to least severe.
///
/// The derived ordering follows the declaration order, so
/// `Severity::Severe < Severity::Trace`. A message is emitted when its
/// severity is at most as far down the list as the active threshold.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Severity {
    /// Unrecoverable condition.
    Severe,
    /// Failed operation. The default threshold.
    #[default]
    Error,
    /// Unexpected but tolerated condition.
    Warning,
    /// Informational progress message.
    Info,
    /// Diagnostic detail for developers.
    Debug,
    /// Fine-grained tracing output.
    Trace,
}

impl Severity {
    /// All severities in rank order, most severe first.
    ///
    /// # Examples
    ///
    /// ```
    /// use levels::Severity;
    ///
    /// let names: Vec<&str> = Severity::ALL.into_iter().map(Severity::as_str).collect();
    /// assert_eq!(names, ["severe", "error", "warning", "info", "debug", "trace"]);
    /// ```
    pub const ALL: [Self; 6] = [
        Self::Severe,
        Self::Error,
        Self::Warning,
        Self::Info,
        Self::Debug,
        Self::Trace,
    ];

    /// Position of the severity in [`Severity::ALL`]. Lower is more severe.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Looks up the severity at `rank`, returning `None` past [`Severity::Trace`].
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Self::Severe),
            1 => Some(Self::Error),
            2 => Some(Self::Warning),
            3 => Some(Self::Info),
            4 => Some(Self::Debug),
            5 => Some(Self::Trace),
            _ => None,
        }
    }

    /// Returns the lowercase name used in browser output and configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use levels::Severity;
    ///
    /// assert_eq!(Severity::Warning.as_str(), "warning");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Severe => "severe",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Returns the bracketed, uppercased tag written by terminal output.
    ///
    /// # Examples
    ///
    /// ```
    /// use levels::Severity;
    ///
    /// assert_eq!(Severity::Error.tag(), "[ERROR]");
    /// ```
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Severe => "[SEVERE]",
            Self::Error => "[ERROR]",
            Self::Warning => "[WARNING]",
            Self::Info => "[INFO]",
            Self::Debug => "[DEBUG]",
            Self::Trace => "[TRACE]",
        }
    }

    /// Reports whether a message at `self` passes a `threshold`.
    ///
    /// # Examples
    ///
    /// ```
    /// use levels::Severity;
    ///
    /// assert!(Severity::Severe.admitted_by(Severity::Error));
    /// assert!(Severity::Error.admitted_by(Severity::Error));
    /// assert!(!Severity::Warning.admitted_by(Severity::Error));
    /// ```
    #[must_use]
    pub const fn admitted_by(self, threshold: Self) -> bool {
        self.rank() <= threshold.rank()
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Severity`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error(
    "unrecognised log severity '{input}' (expected severe, error, warning, info, debug or trace)"
)]
pub struct ParseSeverityError {
    input: String,
}

impl ParseSeverityError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(input.trim()))
            .ok_or_else(|| ParseSeverityError {
                input: input.to_owned(),
            })
    }
}
