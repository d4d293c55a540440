//! Match result type produced by the matching engine.
//!
//! A [`Match`] is the longest accepting span found from one start position,
//! together with one collapsed range per completed capture group.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::position::Range;

/// A match produced by sweeping a compiled pattern over source text.
///
/// Group indices are assigned left to right in the order groups open in
/// the pattern, starting at 0.  Each group maps to a single range even
/// when the group was traversed repeatedly within the match; the span is
/// the consolidation of the first recorded begin and the last recorded
/// end during state exploration.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use syngrep_core::{Match, Position, Range};
///
/// let range = Range::new(Position::new(0, 0), Position::new(0, 3));
/// let m = Match::new(range, BTreeMap::new());
/// assert_eq!(m.range(), range);
/// assert!(m.groups().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// The overall matched span.
    pub range: Range,
    /// Capture group spans keyed by group index.
    pub groups: BTreeMap<usize, Range>,
}

impl Match {
    /// Creates a new match result.
    #[must_use]
    pub const fn new(range: Range, groups: BTreeMap<usize, Range>) -> Self {
        Self { range, groups }
    }

    /// Returns the overall matched span.
    #[must_use]
    pub const fn range(&self) -> Range {
        self.range
    }

    /// Returns the capture group spans keyed by group index.
    #[must_use]
    pub const fn groups(&self) -> &BTreeMap<usize, Range> {
        &self.groups
    }

    /// Returns the span of one capture group, if it completed.
    #[must_use]
    pub fn group(&self, index: usize) -> Option<Range> {
        self.groups.get(&index).copied()
    }
}
