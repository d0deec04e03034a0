//! crates/levels/src/styles.rs
//! Rendering surfaces and the per-severity style tables attached to them.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use thiserror::Error;

use super::severity::Severity;

/// ANSI sequence that clears terminal styling after the level tag.
pub const TERMINAL_RESET: &str = "\x1b[0m";

/// Rendering surface a [`StyleTable`] applies to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Surface {
    /// ANSI escape sequences written to a terminal.
    Terminal,
    /// CSS declarations applied through `%c` directives in a browser console.
    Browser,
}

impl Surface {
    /// Both surfaces, terminal first.
    pub const ALL: [Self; 2] = [Self::Terminal, Self::Browser];

    /// Returns the lowercase surface name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::Browser => "browser",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Surface`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognised style surface '{input}' (expected terminal or browser)")]
pub struct ParseSurfaceError {
    input: String,
}

impl FromStr for Surface {
    type Err = ParseSurfaceError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|surface| surface.as_str().eq_ignore_ascii_case(input.trim()))
            .ok_or_else(|| ParseSurfaceError {
                input: input.to_owned(),
            })
    }
}

/// Style token for every [`Severity`] on one surface.
///
/// The table holds one slot per severity, so a lookup can never miss.
/// Setters overwrite a slot; nothing removes one. Tokens are opaque: any
/// string is accepted, including the empty string.
///
/// # Examples
///
/// ```
/// use levels::{Severity, StyleTable};
///
/// let mut table = StyleTable::terminal_defaults();
/// assert_eq!(table.get(Severity::Error), "\x1b[31m");
///
/// table.set(Severity::Error, "");
/// assert_eq!(&table[Severity::Error], "");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StyleTable {
    tokens: [String; 6],
}

impl StyleTable {
    /// Builds a table by asking `token` for each severity.
    pub fn from_fn<F, S>(mut token: F) -> Self
    where
        F: FnMut(Severity) -> S,
        S: Into<String>,
    {
        Self {
            tokens: Severity::ALL.map(|severity| token(severity).into()),
        }
    }

    /// Default ANSI colours for terminal output.
    #[must_use]
    pub fn terminal_defaults() -> Self {
        Self::from_fn(|severity| match severity {
            Severity::Severe => "\x1b[37m\x1b[41m",
            Severity::Error => "\x1b[31m",
            Severity::Warning => "\x1b[33m",
            Severity::Info => "\x1b[34m",
            Severity::Debug => "\x1b[32m",
            Severity::Trace => "\x1b[90m",
        })
    }

    /// Default CSS declarations for browser console output.
    #[must_use]
    pub fn browser_defaults() -> Self {
        Self::from_fn(|severity| match severity {
            Severity::Severe => {
                "background-color: red; color:white; font-weight:bold; text-transform: uppercase;"
            }
            Severity::Error => "color:red; font-weight:bold; text-transform: uppercase;",
            Severity::Warning => "color:orange; font-weight:bold; text-transform: uppercase;",
            Severity::Info => "color:blue; font-weight:bold; text-transform: uppercase;",
            Severity::Debug => "color:green; font-weight:bold; text-transform: uppercase;",
            Severity::Trace => "color:grey; font-weight:bold; text-transform: uppercase;",
        })
    }

    /// Default table for `surface`.
    #[must_use]
    pub fn defaults_for(surface: Surface) -> Self {
        match surface {
            Surface::Terminal => Self::terminal_defaults(),
            Surface::Browser => Self::browser_defaults(),
        }
    }

    /// Token configured for `severity`.
    #[must_use]
    pub fn get(&self, severity: Severity) -> &str {
        &self.tokens[severity.index()]
    }

    /// Overwrites the token for `severity`.
    pub fn set(&mut self, severity: Severity, token: impl Into<String>) {
        self.tokens[severity.index()] = token.into();
    }

    /// Iterates `(severity, token)` pairs in rank order.
    pub fn iter(&self) -> impl Iterator<Item = (Severity, &str)> + '_ {
        Severity::ALL
            .into_iter()
            .zip(self.tokens.iter().map(String::as_str))
    }
}

impl Index<Severity> for StyleTable {
    type Output = str;

    fn index(&self, severity: Severity) -> &Self::Output {
        self.get(severity)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for StyleTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.tokens.len()))?;
        for (severity, token) in self.iter() {
            map.serialize_entry(&severity, token)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for StyleTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;
        use std::collections::BTreeMap;

        let mut entries = BTreeMap::<Severity, String>::deserialize(deserializer)?;
        if let Some(missing) = Severity::ALL
            .into_iter()
            .find(|severity| !entries.contains_key(severity))
        {
            return Err(D::Error::custom(format!(
                "style table is missing an entry for '{missing}'"
            )));
        }
        Ok(Self::from_fn(|severity| {
            entries.remove(&severity).unwrap_or_default()
        }))
    }
}
