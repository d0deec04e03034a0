//! crates/levels/src/store.rs
//! Shared threshold and style configuration consulted on every log call.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::severity::Severity;
use super::styles::{StyleTable, Surface};

/// Threshold and style tables for one logger.
///
/// The threshold lives in an atomic so concurrent [`set_level`](Self::set_level)
/// and [`should_emit`](Self::should_emit) calls never observe a torn value.
/// Each style table sits behind its own lock; a poisoned lock is recovered
/// rather than propagated because the tables hold plain strings.
///
/// # Examples
///
/// ```
/// use levels::{LevelStore, Severity, Surface};
///
/// let store = LevelStore::new();
/// assert_eq!(store.level(), Severity::Error);
/// assert!(!store.should_emit(Severity::Info));
///
/// store.set_level(Severity::Info);
/// assert!(store.should_emit(Severity::Warning));
///
/// store.set_style(Surface::Terminal, Severity::Info, "\x1b[1m");
/// assert_eq!(store.style(Surface::Terminal, Severity::Info), "\x1b[1m");
/// ```
#[derive(Debug)]
pub struct LevelStore {
    threshold: AtomicU8,
    terminal: RwLock<StyleTable>,
    browser: RwLock<StyleTable>,
}

impl LevelStore {
    /// Creates a store with threshold [`Severity::Error`] and default tables.
    #[must_use]
    pub fn new() -> Self {
        Self::with_level(Severity::default())
    }

    /// Creates a store with the given threshold and default tables.
    #[must_use]
    pub fn with_level(level: Severity) -> Self {
        Self {
            threshold: AtomicU8::new(level.rank()),
            terminal: RwLock::new(StyleTable::terminal_defaults()),
            browser: RwLock::new(StyleTable::browser_defaults()),
        }
    }

    /// Returns the active threshold.
    pub fn level(&self) -> Severity {
        Severity::from_rank(self.threshold.load(Ordering::Acquire)).unwrap_or_default()
    }

    /// Replaces the active threshold.
    pub fn set_level(&self, level: Severity) {
        let previous = self.threshold.swap(level.rank(), Ordering::AcqRel);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "loggisch::levels",
            previous = ?Severity::from_rank(previous),
            level = %level,
            "log threshold changed"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = previous;
    }

    /// Reports whether a message at `level` passes the current threshold.
    ///
    /// The threshold is read on every call; nothing is cached.
    pub fn should_emit(&self, level: Severity) -> bool {
        level.admitted_by(self.level())
    }

    /// Returns the token configured for `level` on `surface`.
    pub fn style(&self, surface: Surface, level: Severity) -> String {
        self.read(surface).get(level).to_owned()
    }

    /// Overwrites the token for `level` on `surface`.
    pub fn set_style(&self, surface: Surface, level: Severity, token: impl Into<String>) {
        let token = token.into();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "loggisch::levels",
            surface = %surface,
            level = %level,
            token = ?token,
            "style token changed"
        );
        self.write(surface).set(level, token);
    }

    /// Snapshot of the whole table for `surface`.
    pub fn styles(&self, surface: Surface) -> StyleTable {
        self.read(surface).clone()
    }

    /// Snapshot of the terminal table.
    pub fn terminal_styles(&self) -> StyleTable {
        self.styles(Surface::Terminal)
    }

    /// Overwrites one terminal token.
    pub fn set_terminal_style(&self, level: Severity, token: impl Into<String>) {
        self.set_style(Surface::Terminal, level, token);
    }

    /// Snapshot of the browser table.
    pub fn browser_styles(&self) -> StyleTable {
        self.styles(Surface::Browser)
    }

    /// Overwrites one browser token.
    pub fn set_browser_style(&self, level: Severity, token: impl Into<String>) {
        self.set_style(Surface::Browser, level, token);
    }

    /// Replaces the whole table for `surface`.
    pub fn replace_styles(&self, surface: Surface, table: StyleTable) -> StyleTable {
        std::mem::replace(&mut *self.write(surface), table)
    }

    /// Restores the default threshold and both default tables.
    pub fn reset(&self) {
        self.set_level(Severity::default());
        for surface in Surface::ALL {
            self.replace_styles(surface, StyleTable::defaults_for(surface));
        }
    }

    fn lock(&self, surface: Surface) -> &RwLock<StyleTable> {
        match surface {
            Surface::Terminal => &self.terminal,
            Surface::Browser => &self.browser,
        }
    }

    fn read(&self, surface: Surface) -> RwLockReadGuard<'_, StyleTable> {
        self.lock(surface)
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self, surface: Surface) -> RwLockWriteGuard<'_, StyleTable> {
        self.lock(surface)
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LevelStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LevelStore {
    fn clone(&self) -> Self {
        Self {
            threshold: AtomicU8::new(self.level().rank()),
            terminal: RwLock::new(self.terminal_styles()),
            browser: RwLock::new(self.browser_styles()),
        }
    }
}
