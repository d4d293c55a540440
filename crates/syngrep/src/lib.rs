//! Syngrep: semantic-aware pattern matching and rewriting for source code.
//!
//! This facade crate re-exports the stable types from [`syngrep_core`] and
//! [`syngrep_automata`] and provides the top-level [`Grep`] entrypoint,
//! which binds source text to its semantic label table and answers match
//! and replace queries written in the `;`-escaped pattern notation.
//!
//! # Core types
//!
//! - [`Position`] and [`Range`] — zero-based line/column source coordinates
//! - [`Category`], [`Label`] and [`LabelTable`] — semantic span annotations
//! - [`Labeler`] — the interface a syntax analyser implements
//! - [`Match`] — a matched span with its capture group spans
//! - [`Pattern`], [`Matcher`], [`Rewriter`] — the engine underneath
//! - [`Grep`] — the match/replace entrypoint
//! - [`ExpressionLabeler`] — a reference labeler for a minimal expression
//!   language
//!
//! # Example
//!
//! ```
//! use syngrep::{ExpressionLabeler, Grep};
//!
//! let grep = Grep::new("x = y + 5 * 3", &ExpressionLabeler);
//! let matches = grep.find_all(";id + 5 * ;num")?;
//! assert_eq!(matches.len(), 1);
//! # Ok::<(), syngrep::AutomataError>(())
//! ```

mod engine;
mod labeler;

// Re-export the stable types from the engine crates.
pub use syngrep_automata::{
    Automaton, AutomataError, Condition, Edge, GroupMarker, Matcher, Matches, Pattern, Rewriter,
    State, StateId, render,
};
pub use syngrep_core::{
    Category, CategoryParseError, EngineConfig, Label, LabelTable, Labeler, Match, Position, Range,
};

pub use engine::Grep;
pub use labeler::ExpressionLabeler;

#[cfg(test)]
mod tests;
