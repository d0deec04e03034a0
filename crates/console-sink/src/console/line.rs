//! crates/console-sink/src/console/line.rs

use std::fmt;

use values::Loggable;

/// The argument list of one console call.
///
/// Arguments are kept separate so consoles that understand them individually
/// (such as a browser console applying `%c` styles) receive them as-is.
/// [`Display`](fmt::Display) joins them with single spaces.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConsoleLine {
    args: Vec<Loggable>,
}

impl ConsoleLine {
    /// Creates a line from its arguments.
    #[must_use]
    pub const fn new(args: Vec<Loggable>) -> Self {
        Self { args }
    }

    /// The arguments in order.
    #[must_use]
    pub fn args(&self) -> &[Loggable] {
        &self.args
    }

    /// Number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Reports whether the line has no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Consumes the line, returning its arguments.
    #[must_use]
    pub fn into_args(self) -> Vec<Loggable> {
        self.args
    }
}

impl FromIterator<Loggable> for ConsoleLine {
    fn from_iter<I: IntoIterator<Item = Loggable>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for ConsoleLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut args = self.args.iter();
        if let Some(first) = args.next() {
            fmt::Display::fmt(first, f)?;
            for arg in args {
                f.write_str(" ")?;
                fmt::Display::fmt(arg, f)?;
            }
        }
        Ok(())
    }
}
