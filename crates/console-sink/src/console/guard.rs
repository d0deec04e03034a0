//! crates/console-sink/src/console/guard.rs

use std::ops::{Deref, DerefMut};

use super::WriterConsole;
use crate::line_mode::LineMode;

/// RAII guard that temporarily overrides a [`WriterConsole`]'s [`LineMode`].
///
/// Created by [`WriterConsole::scoped_line_mode`]. Dropping the guard restores
/// the mode that was active before; [`persist`](Self::persist) keeps the
/// override instead.
#[must_use = "dropping the guard immediately restores the previous line mode"]
pub struct LineModeGuard<'a, W> {
    console: &'a mut WriterConsole<W>,
    previous: LineMode,
}

impl<'a, W> LineModeGuard<'a, W> {
    pub(crate) const fn new(console: &'a mut WriterConsole<W>, previous: LineMode) -> Self {
        Self { console, previous }
    }

    /// The mode restored on drop.
    #[must_use]
    pub const fn previous_line_mode(&self) -> LineMode {
        self.previous
    }

    /// Drops the guard without restoring the previous mode.
    pub fn persist(mut self) {
        self.previous = self.console.line_mode();
    }
}

impl<W> Drop for LineModeGuard<'_, W> {
    fn drop(&mut self) {
        self.console.set_line_mode(self.previous);
    }
}

impl<W> Deref for LineModeGuard<'_, W> {
    type Target = WriterConsole<W>;

    fn deref(&self) -> &Self::Target {
        self.console
    }
}

impl<W> DerefMut for LineModeGuard<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.console
    }
}
