#![deny(unsafe_code)]
#![deny(missing_docs)]

//! crates/test-support/src/lib.rs
//!
//! Helpers shared by the workspace's integration tests: an in-memory console
//! that records every line, a console that always fails, a timestamp shape
//! check, and a lock serialising tests that touch the process-wide logger.

use std::io;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use console_sink::{Console, ConsoleLine};
use regex::Regex;
use values::Loggable;

/// Pattern every rendered timestamp must match.
pub const TIMESTAMP_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}[+-]\d{2}:\d{2}$";

/// Reports whether `text` is a complete `YYYY-MM-DDTHH:MM:SS±HH:MM` timestamp.
pub fn is_timestamp(text: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(TIMESTAMP_PATTERN).expect("timestamp pattern compiles"))
        .is_match(text)
}

/// Console that keeps every line in memory.
///
/// Clones share the same buffer, so a test can hand one clone to a logger and
/// inspect the lines through another.
#[derive(Clone, Debug, Default)]
pub struct RecordingConsole {
    lines: Arc<Mutex<Vec<ConsoleLine>>>,
}

impl RecordingConsole {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies of the recorded lines.
    pub fn lines(&self) -> Vec<ConsoleLine> {
        self.buffer().clone()
    }

    /// Removes and returns the recorded lines.
    pub fn take(&self) -> Vec<ConsoleLine> {
        std::mem::take(&mut *self.buffer())
    }

    /// Number of recorded lines.
    pub fn len(&self) -> usize {
        self.buffer().len()
    }

    /// Reports whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.buffer().is_empty()
    }

    /// The only recorded line. Panics unless exactly one line was written.
    pub fn single(&self) -> ConsoleLine {
        let lines = self.lines();
        assert_eq!(lines.len(), 1, "expected exactly one line, got {lines:?}");
        lines.into_iter().next().expect("length checked")
    }

    fn buffer(&self) -> MutexGuard<'_, Vec<ConsoleLine>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Console for RecordingConsole {
    fn write_line(&mut self, line: &ConsoleLine) -> io::Result<()> {
        self.buffer().push(line.clone());
        Ok(())
    }
}

/// Console whose every write fails with [`io::ErrorKind::BrokenPipe`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingConsole;

impl Console for FailingConsole {
    fn write_line(&mut self, _line: &ConsoleLine) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }
}

/// Renders each argument of `line` with its `Display` text.
pub fn text_args(line: &ConsoleLine) -> Vec<String> {
    line.args().iter().map(Loggable::to_string).collect()
}

/// Serialises tests that mutate process-wide state.
///
/// Hold the returned guard for the duration of the test. A test that panicked
/// while holding the lock does not poison it for the rest.
pub fn global_state_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}
