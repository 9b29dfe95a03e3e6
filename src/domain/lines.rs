//! Line-addressed view over a text document.

use std::ops::Range;

/// Ordered lines of a document, split on `'\n'`.
///
/// Every `'\n'` is a delimiter, so a trailing newline produces a final empty
/// line and [`LineSequence::join`] restores the original text byte for byte.
/// The line count only changes through [`LineSequence::splice`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSequence {
    lines: Vec<String>,
}

/// Index or range outside the current line count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    pub len: usize,
}

impl LineSequence {
    /// Split text into lines.
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_owned).collect(),
        }
    }

    /// Rejoin lines with `'\n'`.
    #[must_use]
    pub fn join(&self) -> String {
        self.lines.join("\n")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Overwrite the line at `index`.
    pub fn set(&mut self, index: usize, content: impl Into<String>) -> Result<(), OutOfRange> {
        let len = self.lines.len();
        let slot = self.lines.get_mut(index).ok_or(OutOfRange { len })?;
        *slot = content.into();
        Ok(())
    }

    /// Replace the half-open `range` with `replacement`.
    ///
    /// The replacement may be longer or shorter than the range. Returns the
    /// lines that were removed.
    pub fn splice<I>(&mut self, range: Range<usize>, replacement: I) -> Result<Vec<String>, OutOfRange>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let len = self.lines.len();
        if range.start > range.end || range.end > len {
            return Err(OutOfRange { len });
        }
        let removed = self
            .lines
            .splice(range, replacement.into_iter().map(Into::into))
            .collect();
        Ok(removed)
    }
}
