//! Source text positions, ranges and the derived line view of a document.

use std::fmt;

// Re-export from text-size for compatibility
pub use text_size::TextRange;
pub use text_size::TextSize;

/// A line and column position in source text.
///
/// Both line and column are 0-indexed internally, but displayed as 1-indexed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct LineCol {
    /// 0-indexed line number
    pub line: u32,
    /// 0-indexed column (in UTF-8 bytes, not characters)
    pub col: u32,
}

impl LineCol {
    /// Create a new LineCol position.
    #[inline]
    pub const fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }

    /// Get 1-indexed line number (for display).
    #[inline]
    pub const fn line_one_indexed(self) -> u32 {
        self.line + 1
    }

    /// Get 1-indexed column number (for display).
    #[inline]
    pub const fn col_one_indexed(self) -> u32 {
        self.col + 1
    }
}

impl fmt::Debug for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line_one_indexed(), self.col_one_indexed())
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line_one_indexed(), self.col_one_indexed())
    }
}

/// The line structure of a text snapshot.
///
/// Lines are split on `\n`; a `\r` directly before the `\n` belongs to the
/// terminator, not to the line content. Text without any line break (including
/// the empty text) has exactly one line, and a trailing line break produces a
/// final empty line.
#[derive(Clone, Debug)]
pub struct LineIndex {
    /// Content range of each line, terminator excluded
    lines: Vec<TextRange>,
}

impl LineIndex {
    /// Build a line index from source text.
    pub fn new(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut lines = Vec::new();
        let mut start = 0usize;

        for (offset, &b) in bytes.iter().enumerate() {
            if b == b'\n' {
                let end = if offset > start && bytes[offset - 1] == b'\r' {
                    offset - 1
                } else {
                    offset
                };
                lines.push(range(start, end));
                start = offset + 1;
            }
        }
        lines.push(range(start, text.len()));

        Self { lines }
    }

    /// Content range of the given 0-indexed line.
    pub fn line(&self, line: usize) -> Option<TextRange> {
        self.lines.get(line).copied()
    }

    /// Iterate over the content range of every line, in order.
    pub fn lines(&self) -> impl Iterator<Item = TextRange> + '_ {
        self.lines.iter().copied()
    }

    /// The 0-indexed line containing `offset`.
    ///
    /// Offsets on a line terminator belong to the line it terminates.
    pub fn line_of(&self, offset: TextSize) -> usize {
        self.lines
            .partition_point(|range| range.start() <= offset)
            .saturating_sub(1)
    }

    /// Convert a byte offset to a line/column position.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let line = self.line_of(offset);
        let col = offset - self.lines[line].start();

        LineCol {
            line: line as u32,
            col: col.into(),
        }
    }

    /// Convert a line/column position to a byte offset.
    pub fn offset(&self, line_col: LineCol) -> Option<TextSize> {
        let line = self.lines.get(line_col.line as usize)?;
        Some(line.start() + TextSize::from(line_col.col))
    }

    /// Get the number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if there are no lines. Never true for an index built by [`LineIndex::new`].
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn range(start: usize, end: usize) -> TextRange {
    TextRange::new(TextSize::from(start as u32), TextSize::from(end as u32))
}
