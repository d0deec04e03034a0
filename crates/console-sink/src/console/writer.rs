//! crates/console-sink/src/console/writer.rs

use std::io::{self, Write};

use super::guard::LineModeGuard;
use super::{Console, ConsoleLine};
use crate::line_mode::LineMode;

/// Console that streams lines into an [`io::Write`] implementor.
///
/// Each line is rendered with its arguments joined by single spaces and,
/// under [`LineMode::WithNewline`], a trailing `\n`. The rendered bytes are
/// handed to the writer in one `write_all` call.
///
/// # Examples
///
/// ```
/// use console_sink::{Console, ConsoleLine, LineMode, WriterConsole};
/// use values::Loggable;
///
/// let mut console = WriterConsole::new(Vec::new());
/// let line: ConsoleLine = ["a", "b"].into_iter().map(Loggable::from).collect();
/// console.write_line(&line).unwrap();
///
/// console.set_line_mode(LineMode::WithoutNewline);
/// console.write_line(&line).unwrap();
///
/// assert_eq!(console.into_inner(), b"a b\na b");
/// ```
#[derive(Clone, Debug)]
pub struct WriterConsole<W> {
    writer: W,
    line_mode: LineMode,
    buffer: String,
}

impl WriterConsole<io::Stdout> {
    /// Console writing to the process's standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W> WriterConsole<W> {
    /// Wraps `writer` with [`LineMode::WithNewline`].
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::default())
    }

    /// Wraps `writer` with an explicit [`LineMode`].
    pub const fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self {
            writer,
            line_mode,
            buffer: String::new(),
        }
    }

    /// Borrows the underlying writer.
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    pub const fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the console, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Swaps the writer, returning the previous one. The line mode is kept.
    pub fn replace_writer(&mut self, writer: W) -> W {
        std::mem::replace(&mut self.writer, writer)
    }

    /// Converts the writer with `f`, keeping the line mode.
    pub fn map_writer<F, W2>(self, f: F) -> WriterConsole<W2>
    where
        F: FnOnce(W) -> W2,
    {
        WriterConsole {
            writer: f(self.writer),
            line_mode: self.line_mode,
            buffer: self.buffer,
        }
    }

    /// The current line mode.
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Changes the line mode for subsequent writes.
    pub const fn set_line_mode(&mut self, line_mode: LineMode) {
        self.line_mode = line_mode;
    }

    /// Overrides the line mode until the returned guard is dropped.
    pub fn scoped_line_mode(&mut self, line_mode: LineMode) -> LineModeGuard<'_, W> {
        let previous = std::mem::replace(&mut self.line_mode, line_mode);
        LineModeGuard::new(self, previous)
    }
}

impl<W> WriterConsole<W>
where
    W: Write,
{
    /// Flushes the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns the writer's flush error.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W> Console for WriterConsole<W>
where
    W: Write,
{
    fn write_line(&mut self, line: &ConsoleLine) -> io::Result<()> {
        use std::fmt::Write as _;

        self.buffer.clear();
        // Writing into a String cannot fail.
        let _ = write!(self.buffer, "{line}");
        if self.line_mode.append_newline() {
            self.buffer.push('\n');
        }
        self.writer.write_all(self.buffer.as_bytes())
    }
}
