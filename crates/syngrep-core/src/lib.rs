//! Core data model for the syngrep matching pipeline.
//!
//! This crate provides the canonical type definitions shared by the syngrep
//! engine crates: line/column positions and ranges, semantic categories and
//! the position-keyed label table, match results with capture groups, and
//! engine configuration.  It is re-exported by the `syngrep` facade crate
//! for stable public consumption.
//!
//! # Core types
//!
//! - [`Position`] and [`Range`] — zero-based line/column source coordinates
//! - [`Category`], [`Label`] and [`LabelTable`] — semantic span annotations
//! - [`Labeler`] — the interface a syntax analyser implements to feed the
//!   engine
//! - [`Match`] — a matched span with its capture group spans
//! - [`EngineConfig`] — search limits
//!
//! # Example
//!
//! ```
//! use syngrep_core::{Category, Label, LabelTable, Position};
//!
//! let mut labels = LabelTable::new();
//! labels.insert(
//!     Position::new(0, 4),
//!     Label::new(Category::Identifier, Position::new(0, 5)),
//! );
//! assert_eq!(labels.labels_at(Position::new(0, 4)).len(), 1);
//! ```

mod config;
mod label;
mod match_result;
mod position;

pub use config::EngineConfig;
pub use label::{Category, CategoryParseError, Label, LabelTable, Labeler};
pub use match_result::Match;
pub use position::{Position, Range};

#[cfg(test)]
mod tests;
