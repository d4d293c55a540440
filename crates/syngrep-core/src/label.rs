//! Semantic categories, labels, and the position-keyed label table.
//!
//! A label states that the source region from its anchor position to its
//! end position belongs to a syntactic category.  The engine never computes
//! labels itself; it consumes a [`LabelTable`] produced once per source
//! text by an external [`Labeler`] (any syntax analyser whose node kinds
//! map onto [`Category`]).

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::position::Position;

/// Syntactic categories a semantic pattern atom can match.
///
/// Multiple categories may legitimately share an anchor position: an
/// identifier is usually also an expression.
///
/// # Example
///
/// ```
/// use syngrep_core::Category;
///
/// assert_eq!(Category::Number.as_str(), "num");
/// assert_eq!("expr".parse(), Ok(Category::Expression));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Category {
    /// An expression span.
    Expression,
    /// A statement span.
    Statement,
    /// An identifier span.
    Identifier,
    /// A numeric literal span.
    Number,
    /// A string literal span.
    StringLiteral,
}

impl Category {
    /// Returns the meta token naming this category in the pattern language.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Expression => "expr",
            Self::Statement => "stmt",
            Self::Identifier => "id",
            Self::Number => "num",
            Self::StringLiteral => "str",
        }
    }

    /// Returns all built-in categories.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Expression,
            Self::Statement,
            Self::Identifier,
            Self::Number,
            Self::StringLiteral,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when parsing a category meta token fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown category token: '{0}'")]
pub struct CategoryParseError(String);

impl CategoryParseError {
    /// Returns the input that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "expr" => Ok(Self::Expression),
            "stmt" => Ok(Self::Statement),
            "id" => Ok(Self::Identifier),
            "num" => Ok(Self::Number),
            "str" => Ok(Self::StringLiteral),
            other => Err(CategoryParseError(other.to_owned())),
        }
    }
}

/// One semantic span: a category together with its exclusive end position.
///
/// The begin position is the key under which the label is stored in the
/// [`LabelTable`], not part of the label itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// The syntactic category of the span.
    pub category: Category,
    /// The exclusive end position of the span.
    pub end: Position,
}

impl Label {
    /// Creates a new label.
    #[must_use]
    pub const fn new(category: Category, end: Position) -> Self {
        Self { category, end }
    }

    /// Returns the syntactic category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the exclusive end position.
    #[must_use]
    pub const fn end(&self) -> Position {
        self.end
    }
}

/// The position-keyed table of semantic spans for one source text.
///
/// Maps each begin position to the ordered labels anchored there.  Built
/// once by a [`Labeler`] before any matching starts and treated as
/// read-only for the lifetime of that source text.
///
/// # Example
///
/// ```
/// use syngrep_core::{Category, Label, LabelTable, Position};
///
/// let mut table = LabelTable::new();
/// let anchor = Position::new(0, 0);
/// table.insert(anchor, Label::new(Category::Identifier, Position::new(0, 1)));
/// table.insert(anchor, Label::new(Category::Expression, Position::new(0, 1)));
/// assert_eq!(table.labels_at(anchor).len(), 2);
/// assert!(table.labels_at(Position::new(0, 1)).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    entries: BTreeMap<Position, Vec<Label>>,
}

impl LabelTable {
    /// Creates an empty label table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Appends a label anchored at `begin`, preserving insertion order
    /// among labels sharing the anchor.
    pub fn insert(&mut self, begin: Position, label: Label) {
        self.entries.entry(begin).or_default().push(label);
    }

    /// Returns the labels anchored exactly at `begin`, in insertion order.
    ///
    /// Positions that are not table keys yield an empty slice.
    #[must_use]
    pub fn labels_at(&self, begin: Position) -> &[Label] {
        self.entries.get(&begin).map_or(&[], Vec::as_slice)
    }

    /// Returns an iterator over `(begin, labels)` entries in position order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = (Position, &[Label])> {
        self.entries
            .iter()
            .map(|(begin, labels)| (*begin, labels.as_slice()))
    }

    /// Returns the number of anchor positions in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The interface a syntax analyser implements to feed the engine.
///
/// Any parser for any source language can drive syngrep by mapping its
/// node kinds onto [`Category`] and reporting each node's begin and end
/// positions.  The table is rebuilt whenever the source text changes.
pub trait Labeler {
    /// Produces the label table for the given source lines.
    fn label(&self, lines: &[String]) -> LabelTable;
}
