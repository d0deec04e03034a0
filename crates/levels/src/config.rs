//! crates/levels/src/config.rs
//! Declarative overrides for a [`LevelStore`].

use std::collections::BTreeMap;

use super::severity::Severity;
use super::store::LevelStore;
use super::styles::Surface;

/// Threshold and style overrides that can be captured from and applied to a store.
///
/// Every field is optional: applying a config only touches the entries it
/// names, matching the overwrite-only contract of the style setters. With
/// the `serde` feature the type can be embedded in a host's own
/// configuration format.
///
/// # Examples
///
/// ```
/// use levels::{LevelConfig, LevelStore, Severity, Surface};
///
/// let config = LevelConfig::default()
///     .with_level(Severity::Debug)
///     .with_style(Surface::Terminal, Severity::Debug, "\x1b[36m");
///
/// let store = LevelStore::new();
/// config.apply(&store);
///
/// assert_eq!(store.level(), Severity::Debug);
/// assert_eq!(store.style(Surface::Terminal, Severity::Debug), "\x1b[36m");
/// assert_eq!(store.style(Surface::Terminal, Severity::Info), "\x1b[34m");
/// ```
#[derive(Clone, Default, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LevelConfig {
    /// Threshold to install, if any.
    pub level: Option<Severity>,
    /// Terminal tokens to overwrite.
    pub terminal: BTreeMap<Severity, String>,
    /// Browser tokens to overwrite.
    pub browser: BTreeMap<Severity, String>,
}

impl LevelConfig {
    /// Captures the full state of `store`.
    pub fn snapshot(store: &LevelStore) -> Self {
        let collect = |surface| {
            store
                .styles(surface)
                .iter()
                .map(|(severity, token)| (severity, token.to_owned()))
                .collect()
        };

        Self {
            level: Some(store.level()),
            terminal: collect(Surface::Terminal),
            browser: collect(Surface::Browser),
        }
    }

    /// Sets the threshold override.
    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = Some(level);
        self
    }

    /// Adds a style override for one surface entry.
    pub fn with_style(
        mut self,
        surface: Surface,
        level: Severity,
        token: impl Into<String>,
    ) -> Self {
        self.overrides_mut(surface).insert(level, token.into());
        self
    }

    /// Overrides recorded for `surface`.
    pub fn overrides(&self, surface: Surface) -> &BTreeMap<Severity, String> {
        match surface {
            Surface::Terminal => &self.terminal,
            Surface::Browser => &self.browser,
        }
    }

    fn overrides_mut(&mut self, surface: Surface) -> &mut BTreeMap<Severity, String> {
        match surface {
            Surface::Terminal => &mut self.terminal,
            Surface::Browser => &mut self.browser,
        }
    }

    /// Layers `other` on top of `self`; entries named in `other` win.
    pub fn merge(&mut self, other: Self) {
        if other.level.is_some() {
            self.level = other.level;
        }
        self.terminal.extend(other.terminal);
        self.browser.extend(other.browser);
    }

    /// Reports whether applying the config would change nothing.
    pub fn is_empty(&self) -> bool {
        self.level.is_none() && self.terminal.is_empty() && self.browser.is_empty()
    }

    /// Writes every override into `store`.
    pub fn apply(&self, store: &LevelStore) {
        if let Some(level) = self.level {
            store.set_level(level);
        }
        for surface in Surface::ALL {
            for (&level, token) in self.overrides(surface) {
                store.set_style(surface, level, token.as_str());
            }
        }
    }
}
