//! The top-level match/replace entrypoint.
//!
//! A [`Grep`] binds source lines to the label table produced for them and
//! answers queries written in the pattern notation.  The label table is
//! computed once when the source is loaded and reused across every query;
//! each query compiles its pattern afresh.

use syngrep_automata::{AutomataError, Matcher, Pattern, Rewriter};
use syngrep_core::{EngineConfig, LabelTable, Labeler, Match};

/// Semantic grep over one source text.
///
/// # Example
///
/// ```
/// use syngrep::{ExpressionLabeler, Grep};
///
/// let grep = Grep::new("x = y + 5 * 3", &ExpressionLabeler);
/// let matches = grep.find_all(";num")?;
/// assert_eq!(matches.len(), 2);
/// # Ok::<(), syngrep::AutomataError>(())
/// ```
#[derive(Debug)]
pub struct Grep {
    lines: Vec<String>,
    labels: LabelTable,
    config: EngineConfig,
}

impl Grep {
    /// Loads source text and labels it with the given labeler.
    ///
    /// The text is split into lines on `\n`; the labeler runs once and its
    /// table is reused across all queries against this source.
    #[must_use]
    pub fn new(source: &str, labeler: &dyn Labeler) -> Self {
        let lines: Vec<String> = source.split('\n').map(str::to_owned).collect();
        let labels = labeler.label(&lines);
        Self {
            lines,
            labels,
            config: EngineConfig::default(),
        }
    }

    /// Builds a grep from already-split lines and a pre-computed table.
    #[must_use]
    pub fn from_parts(lines: Vec<String>, labels: LabelTable) -> Self {
        Self {
            lines,
            labels,
            config: EngineConfig::default(),
        }
    }

    /// Overrides the engine configuration.
    #[must_use]
    pub const fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the source lines this grep queries.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the label table this grep queries.
    #[must_use]
    pub const fn labels(&self) -> &LabelTable {
        &self.labels
    }

    /// Finds all matches of `pattern`, one longest match per accepting
    /// start position, in increasing start order.
    ///
    /// # Errors
    ///
    /// Returns a compilation error for an invalid pattern.  No match is
    /// not an error: an empty vector is a normal result.
    pub fn find_all(&self, pattern: &str) -> Result<Vec<Match>, AutomataError> {
        let compiled = Pattern::compile(pattern)?;
        Ok(Matcher::with_config(&compiled, self.config).find_all(&self.lines, &self.labels))
    }

    /// Finds the first match of `pattern`, if any.
    ///
    /// # Errors
    ///
    /// Returns a compilation error for an invalid pattern.
    pub fn find_first(&self, pattern: &str) -> Result<Option<Match>, AutomataError> {
        let compiled = Pattern::compile(pattern)?;
        Ok(Matcher::with_config(&compiled, self.config).find_first(&self.lines, &self.labels))
    }

    /// Replaces the capture group spans of every non-overlapping match.
    ///
    /// `replacements` maps group index to literal replacement text.
    ///
    /// # Errors
    ///
    /// Returns a compilation error for an invalid pattern, and the rewrite
    /// engine's errors for a missing replacement entry or an internal
    /// sweep-order violation.
    pub fn replace_all(
        &self,
        pattern: &str,
        replacements: &[String],
    ) -> Result<Vec<String>, AutomataError> {
        let compiled = Pattern::compile(pattern)?;
        Rewriter::with_config(&compiled, self.config).replace_all(
            &self.lines,
            &self.labels,
            replacements,
        )
    }

    /// Replaces the capture group spans of the first match only.
    ///
    /// # Errors
    ///
    /// Returns a compilation error for an invalid pattern, and the rewrite
    /// engine's errors for a missing replacement entry.
    pub fn replace_first(
        &self,
        pattern: &str,
        replacements: &[String],
    ) -> Result<Vec<String>, AutomataError> {
        let compiled = Pattern::compile(pattern)?;
        Rewriter::with_config(&compiled, self.config).replace_first(
            &self.lines,
            &self.labels,
            replacements,
        )
    }
}
