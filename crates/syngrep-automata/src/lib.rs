//! Semantic-aware pattern matching automata for the syngrep engine.
//!
//! This crate provides the engine underneath the `syngrep` facade:
//!
//! - **Automaton construction** via [`Automaton`]'s Thompson-style
//!   builders (literal, semantic atom, concatenation, alternation,
//!   repetition, grouping)
//! - **Pattern compilation** via [`Pattern`] for the `;`-escaped notation
//! - **Matching** via [`Matcher`] — a longest-match sweep over every start
//!   position of a line buffer
//! - **Rewriting** via [`Rewriter`] — non-overlapping match selection and
//!   capture group substitution
//! - **Rendering** via [`render::to_dot`] for Graphviz snapshots
//!
//! # Pattern notation
//!
//! Patterns match verbatim text by default.  The escape marker `;`
//! introduces semantic atoms (`;id`, `;num`, `;str`, `;expr`, `;stmt`),
//! alternation (`;|`), postfix quantifiers (`;*`, `;+`, `;?`), and capture
//! groups (`;(` … `;)`).
//!
//! # Example
//!
//! ```
//! use syngrep_automata::{Matcher, Pattern};
//! use syngrep_core::LabelTable;
//!
//! let pattern = Pattern::compile("2;(1;+;)")?;
//! let lines = vec![String::from("212112")];
//! let matches = Matcher::new(&pattern).find_all(&lines, &LabelTable::new());
//! assert_eq!(matches.len(), 2);
//! # Ok::<(), syngrep_automata::AutomataError>(())
//! ```

mod automaton;
mod error;
mod matcher;
mod pattern;
pub mod render;
mod rewriter;

pub use automaton::{Automaton, Condition, Edge, GroupMarker, State, StateId};
pub use error::AutomataError;
pub use matcher::{Matcher, Matches};
pub use pattern::Pattern;
pub use rewriter::Rewriter;
