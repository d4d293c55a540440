//! Source position and range types for the line/column coordinate model.
//!
//! The engine addresses source text as a sequence of lines.  A [`Position`]
//! names one character slot within that sequence; a [`Range`] names a
//! half-open region between two positions.  Both can be flattened onto a
//! single character offset over the newline-joined buffer, which is how the
//! rewrite engine applies substitutions.

use serde::{Deserialize, Serialize};

/// A line and column position within a sequence of source lines.
///
/// Both fields are zero-indexed.  Positions order lexicographically: first
/// by line, then by column (the derive respects field declaration order).
///
/// # Example
///
/// ```
/// use syngrep_core::Position;
///
/// let pos = Position::new(2, 7);
/// assert_eq!(pos.line(), 2);
/// assert_eq!(pos.column(), 7);
/// assert!(Position::new(1, 9) < Position::new(2, 0));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    /// Zero-indexed line number.
    pub line: usize,
    /// Zero-indexed column number within the line.
    pub column: usize,
}

impl Position {
    /// Creates a new line/column position.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Returns the zero-indexed line number.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the zero-indexed column number.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Flattens this position onto a character offset over the buffer
    /// formed by joining all lines with a single `\n` separator.
    ///
    /// `line_lengths` holds the character length of each line.  The offset
    /// counts every character of every full line before this one, one
    /// newline per such line, plus the column.
    ///
    /// # Example
    ///
    /// ```
    /// use syngrep_core::Position;
    ///
    /// // "ab\ncd" — the 'd' sits at flat offset 4.
    /// assert_eq!(Position::new(1, 1).flatten(&[2, 2]), 4);
    /// ```
    #[must_use]
    pub fn flatten(&self, line_lengths: &[usize]) -> usize {
        let chars_before: usize = line_lengths.iter().take(self.line).sum();
        chars_before + self.line + self.column
    }
}

/// A half-open region of source text between two positions.
///
/// `begin` is inclusive and `end` is exclusive.  A range may span multiple
/// lines.
///
/// # Example
///
/// ```
/// use syngrep_core::{Position, Range};
///
/// let range = Range::new(Position::new(0, 4), Position::new(0, 13));
/// assert_eq!(range.begin().column(), 4);
/// assert_eq!(range.end().column(), 13);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Range {
    /// Inclusive begin position.
    pub begin: Position,
    /// Exclusive end position.
    pub end: Position,
}

impl Range {
    /// Creates a new range from begin and end positions.
    #[must_use]
    pub const fn new(begin: Position, end: Position) -> Self {
        Self { begin, end }
    }

    /// Returns the inclusive begin position.
    #[must_use]
    pub const fn begin(&self) -> Position {
        self.begin
    }

    /// Returns the exclusive end position.
    #[must_use]
    pub const fn end(&self) -> Position {
        self.end
    }

    /// Returns `true` if the range covers no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.begin >= self.end
    }

    /// Flattens both endpoints onto offsets over the newline-joined buffer.
    ///
    /// See [`Position::flatten`] for the offset arithmetic.
    #[must_use]
    pub fn flatten(&self, line_lengths: &[usize]) -> (usize, usize) {
        (self.begin.flatten(line_lengths), self.end.flatten(line_lengths))
    }
}
