//! crates/console-sink/src/line_mode.rs

/// Controls whether a [`WriterConsole`](crate::WriterConsole) terminates each line it writes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LineMode {
    /// Append a newline terminator after each rendered line.
    #[default]
    WithNewline,
    /// Emit the rendered line without a trailing newline.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether the mode appends a trailing newline.
    ///
    /// # Examples
    ///
    /// ```
    /// use console_sink::LineMode;
    ///
    /// assert!(LineMode::WithNewline.append_newline());
    /// assert!(!LineMode::WithoutNewline.append_newline());
    /// ```
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }
}

impl From<bool> for LineMode {
    /// `true` maps to [`LineMode::WithNewline`], `false` to [`LineMode::WithoutNewline`].
    fn from(append_newline: bool) -> Self {
        if append_newline {
            Self::WithNewline
        } else {
            Self::WithoutNewline
        }
    }
}

impl From<LineMode> for bool {
    fn from(mode: LineMode) -> Self {
        mode.append_newline()
    }
}

#[cfg(test)]
mod tests {
    use super::LineMode;

    #[test]
    fn line_mode_conversions_round_trip() {
        assert_eq!(LineMode::from(true), LineMode::WithNewline);
        assert_eq!(LineMode::from(false), LineMode::WithoutNewline);

        let append: bool = LineMode::WithNewline.into();
        assert!(append);

        let append: bool = LineMode::WithoutNewline.into();
        assert!(!append);
    }

    #[test]
    fn default_appends_newline() {
        assert_eq!(LineMode::default(), LineMode::WithNewline);
    }
}
