//! Error types for pattern compilation, matching, and rewriting.
//!
//! Compilation failures are fatal for the pattern and reported before any
//! matching starts.  The absence of a match is never an error; the only
//! failure the matching/rewriting path can surface is an internal invariant
//! violation or a missing replacement entry.

use thiserror::Error;

/// Errors from pattern compilation and rewriting operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AutomataError {
    /// Group delimiters in the pattern do not nest or balance.
    #[error("unbalanced group delimiters: {message}")]
    UnbalancedGroup {
        /// Description of the imbalance.
        message: String,
    },

    /// An escape sequence was not recognised by the compiler.
    #[error("unknown meta token: '{token}'")]
    UnknownMetaToken {
        /// The escape sequence that was not recognised.
        token: String,
    },

    /// The rewrite engine observed matches out of sweep order.
    ///
    /// This indicates an internal bug, not a user error; the rewrite is
    /// aborted rather than producing corrupted output.
    #[error("invariant violation: {message}")]
    InvariantViolation {
        /// Description of the violated invariant.
        message: String,
    },

    /// A capture group has no corresponding replacement entry.
    #[error("no replacement text supplied for group {group}")]
    MissingReplacement {
        /// The group index lacking a replacement.
        group: usize,
    },
}

impl AutomataError {
    /// Creates an unbalanced group error.
    #[must_use]
    pub fn unbalanced_group(message: impl Into<String>) -> Self {
        Self::UnbalancedGroup {
            message: message.into(),
        }
    }

    /// Creates an unknown meta token error.
    #[must_use]
    pub fn unknown_meta_token(token: impl Into<String>) -> Self {
        Self::UnknownMetaToken {
            token: token.into(),
        }
    }

    /// Creates an invariant violation error.
    #[must_use]
    pub fn invariant_violation(message: impl Into<String>) -> Self {
        Self::InvariantViolation {
            message: message.into(),
        }
    }

    /// Creates a missing replacement error.
    #[must_use]
    pub const fn missing_replacement(group: usize) -> Self {
        Self::MissingReplacement { group }
    }
}
