//! Rewrite engine: non-overlapping match selection and offset-adjusted
//! substitution of capture group spans.
//!
//! Replacement only ever targets group spans, never the whole-match span:
//! a match with no groups contributes nothing to the rewrite.  Positions
//! are flattened onto the newline-joined buffer and substitutions applied
//! in increasing offset order, so earlier length changes shift later
//! offsets naturally.

use syngrep_core::{EngineConfig, LabelTable, Match};

use crate::error::AutomataError;
use crate::matcher::Matcher;
use crate::pattern::Pattern;

/// Applies pattern-driven rewrites to source lines.
#[derive(Debug)]
pub struct Rewriter<'p> {
    matcher: Matcher<'p>,
}

impl<'p> Rewriter<'p> {
    /// Creates a rewriter with the default engine configuration.
    #[must_use]
    pub fn new(pattern: &'p Pattern) -> Self {
        Self {
            matcher: Matcher::new(pattern),
        }
    }

    /// Creates a rewriter with an explicit engine configuration.
    #[must_use]
    pub const fn with_config(pattern: &'p Pattern, config: EngineConfig) -> Self {
        Self {
            matcher: Matcher::with_config(pattern, config),
        }
    }

    /// Replaces the group spans of every kept match.
    ///
    /// The sweep's matches are kept greedily: a match is dropped when it
    /// collides with any match already kept, so kept matches are in
    /// increasing, non-overlapping start order.  `replacements` maps group
    /// index to literal replacement text.
    ///
    /// # Errors
    ///
    /// Returns [`AutomataError::InvariantViolation`] if the collision
    /// check observes matches out of sweep order (an internal bug), and
    /// [`AutomataError::MissingReplacement`] when a kept match captures a
    /// group index with no replacement entry.
    pub fn replace_all(
        &self,
        lines: &[String],
        labels: &LabelTable,
        replacements: &[String],
    ) -> Result<Vec<String>, AutomataError> {
        let mut kept: Vec<Match> = Vec::new();
        for candidate in self.matcher.matches(lines, labels) {
            if !collides_with_any(&kept, &candidate)? {
                kept.push(candidate);
            }
        }
        apply_replacements(lines, &kept, replacements)
    }

    /// Replaces the group spans of the first match only.
    ///
    /// # Errors
    ///
    /// Returns [`AutomataError::MissingReplacement`] when the match
    /// captures a group index with no replacement entry.
    pub fn replace_first(
        &self,
        lines: &[String],
        labels: &LabelTable,
        replacements: &[String],
    ) -> Result<Vec<String>, AutomataError> {
        let kept: Vec<Match> = self.matcher.find_first(lines, labels).into_iter().collect();
        apply_replacements(lines, &kept, replacements)
    }
}

/// Returns whether `candidate` collides with any already kept match.
fn collides_with_any(kept: &[Match], candidate: &Match) -> Result<bool, AutomataError> {
    for earlier in kept {
        if matches_collide(earlier, candidate)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Collision test for two matches in sweep (start) order.
///
/// The later match collides when it begins on the line the earlier match
/// ends on, strictly before the earlier end column.  A begin on a later
/// line never collides; a begin on an earlier line breaks the sweep-order
/// precondition and aborts the rewrite.
fn matches_collide(earlier: &Match, later: &Match) -> Result<bool, AutomataError> {
    let earlier_end = earlier.range().end();
    let later_begin = later.range().begin();
    if later_begin.line() == earlier_end.line() {
        Ok(later_begin.column() < earlier_end.column())
    } else if later_begin.line() > earlier_end.line() {
        Ok(false)
    } else {
        Err(AutomataError::invariant_violation(
            "collision check received matches out of sweep order",
        ))
    }
}

/// Substitutes the group spans of the kept matches over the joined buffer.
fn apply_replacements(
    lines: &[String],
    kept: &[Match],
    replacements: &[String],
) -> Result<Vec<String>, AutomataError> {
    let line_lengths: Vec<usize> = lines.iter().map(String::len).collect();

    let mut edits: Vec<(usize, usize, &str)> = Vec::new();
    for m in kept {
        for (index, range) in m.groups() {
            let replacement = replacements
                .get(*index)
                .ok_or_else(|| AutomataError::missing_replacement(*index))?;
            let (begin, end) = range.flatten(&line_lengths);
            edits.push((begin, end, replacement.as_str()));
        }
    }
    edits.sort_by_key(|(begin, end, _)| (*begin, *end));

    let buffer = lines.join("\n");
    let mut output = String::with_capacity(buffer.len());
    let mut cursor = 0;
    for (begin, end, replacement) in edits {
        if begin < cursor {
            // Nested group spans overlap an already substituted region.
            continue;
        }
        output.push_str(buffer.get(cursor..begin).unwrap_or_default());
        output.push_str(replacement);
        cursor = end;
    }
    output.push_str(buffer.get(cursor..).unwrap_or_default());

    Ok(output.split('\n').map(str::to_owned).collect())
}
