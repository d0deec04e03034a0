//! crates/console-sink/src/console/mod.rs
//!
//! The host write-line primitive and its stock implementations.

mod guard;
mod line;
mod writer;

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
mod browser;

use std::io;

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
pub use browser::BrowserConsole;
pub use guard::LineModeGuard;
pub use line::ConsoleLine;
pub use writer::WriterConsole;

/// Destination for rendered log lines.
///
/// A console receives exactly one [`ConsoleLine`] per emitted log call and
/// decides how its arguments reach the user. Implementations must not split a
/// line across several writes that could interleave with other callers.
pub trait Console {
    /// Writes one line.
    ///
    /// # Errors
    ///
    /// Returns any error reported by the underlying output.
    fn write_line(&mut self, line: &ConsoleLine) -> io::Result<()>;
}

impl<C> Console for Box<C>
where
    C: Console + ?Sized,
{
    fn write_line(&mut self, line: &ConsoleLine) -> io::Result<()> {
        (**self).write_line(line)
    }
}

impl<C> Console for &mut C
where
    C: Console + ?Sized,
{
    fn write_line(&mut self, line: &ConsoleLine) -> io::Result<()> {
        (**self).write_line(line)
    }
}

/// The console a logger uses when the host supplies none.
///
/// The browser console on `wasm32-unknown-unknown`, standard output elsewhere.
#[must_use]
pub fn default_console() -> Box<dyn Console + Send> {
    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    {
        Box::new(BrowserConsole::new())
    }
    #[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
    {
        Box::new(WriterConsole::stdout())
    }
}
