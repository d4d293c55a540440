//! Matching engine: position sweep, worklist exploration, and group
//! consolidation.
//!
//! The engine sweeps every start position of the buffer in reading order.
//! From each start it explores the automaton's reachable states with an
//! explicit worklist, keeps the lexicographically greatest accepting
//! position (the longest match from that start), and consolidates the
//! group markers recorded along the way into one collapsed span per group.
//!
//! Alternation carries no declaration-order priority: the engine reports
//! whichever derivation reaches farthest, treating alternation as a pure
//! language union.

use std::collections::{BTreeMap, HashSet};

use syngrep_core::{EngineConfig, LabelTable, Match, Position, Range};

use crate::automaton::{Automaton, StateId};
use crate::pattern::Pattern;

/// Executes a compiled pattern against source lines and their label table.
///
/// The matcher borrows the pattern; one matcher may be reused across many
/// buffers, and the underlying automaton is shared read-only by every
/// sweep.
#[derive(Debug)]
pub struct Matcher<'p> {
    pattern: &'p Pattern,
    config: EngineConfig,
}

impl<'p> Matcher<'p> {
    /// Creates a matcher with the default engine configuration.
    #[must_use]
    pub fn new(pattern: &'p Pattern) -> Self {
        Self::with_config(pattern, EngineConfig::default())
    }

    /// Creates a matcher with an explicit engine configuration.
    #[must_use]
    pub const fn with_config(pattern: &'p Pattern, config: EngineConfig) -> Self {
        Self { pattern, config }
    }

    /// Returns the pattern this matcher executes.
    #[must_use]
    pub const fn pattern(&self) -> &'p Pattern {
        self.pattern
    }

    /// Returns a lazy iterator over matches in increasing start order.
    ///
    /// Each start position contributes at most one match: the longest
    /// accepting span from that start.  Matches from consecutive starts
    /// may overlap; non-overlapping selection is the rewrite engine's
    /// concern.
    #[must_use]
    pub fn matches<'a>(&self, lines: &'a [String], labels: &'a LabelTable) -> Matches<'a, 'p> {
        let start = if lines.is_empty() {
            None
        } else {
            Some(Position::new(0, 0))
        };
        Matches {
            automaton: self.pattern.automaton(),
            config: self.config,
            lines,
            labels,
            next_start: start,
        }
    }

    /// Collects every match of the sweep.
    #[must_use]
    pub fn find_all(&self, lines: &[String], labels: &LabelTable) -> Vec<Match> {
        self.matches(lines, labels).collect()
    }

    /// Returns the first match of the sweep, if any.
    #[must_use]
    pub fn find_first(&self, lines: &[String], labels: &LabelTable) -> Option<Match> {
        self.matches(lines, labels).next()
    }
}

/// Lazy iterator over the matches of one sweep.
///
/// Produced by [`Matcher::matches`]; restartable only by starting a new
/// sweep.
#[derive(Debug)]
pub struct Matches<'a, 'p> {
    automaton: &'p Automaton,
    config: EngineConfig,
    lines: &'a [String],
    labels: &'a LabelTable,
    next_start: Option<Position>,
}

impl Iterator for Matches<'_, '_> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        while let Some(start) = self.next_start {
            self.next_start = next_start_position(self.lines, start);
            if let Some(found) = search_from(self.automaton, &self.config, self.lines, self.labels, start)
            {
                return Some(found);
            }
        }
        None
    }
}

/// Advances the sweep to the next candidate start position.
fn next_start_position(lines: &[String], current: Position) -> Option<Position> {
    let line_len = lines.get(current.line()).map_or(0, String::len);
    if current.column() + 1 < line_len {
        Some(Position::new(current.line(), current.column() + 1))
    } else if current.line() + 1 < lines.len() {
        Some(Position::new(current.line() + 1, 0))
    } else {
        None
    }
}

/// Group marker positions in worklist pop order.
///
/// Replicates an insertion-ordered map: the first record of a position
/// fixes its slot; a later record at the same position replaces the value
/// in place without moving the slot.
#[derive(Debug, Default)]
struct MarkerLog {
    entries: Vec<(Position, Vec<usize>)>,
}

impl MarkerLog {
    fn record(&mut self, pos: Position, groups: Vec<usize>) {
        if let Some(slot) = self.entries.iter_mut().find(|(existing, _)| *existing == pos) {
            slot.1 = groups;
            return;
        }
        self.entries.push((pos, groups));
    }

    fn entries(&self) -> &[(Position, Vec<usize>)] {
        &self.entries
    }
}

/// Explores the automaton from one start position.
///
/// Returns the longest match from this start, or `None` when no accepting
/// path exists.
fn search_from(
    automaton: &Automaton,
    config: &EngineConfig,
    lines: &[String],
    labels: &LabelTable,
    start: Position,
) -> Option<Match> {
    let accept = automaton.accept();
    let mut worklist: Vec<(StateId, Position)> = vec![(automaton.entry(), start)];
    let mut visited: HashSet<(StateId, Position)> = HashSet::new();
    let mut begins = MarkerLog::default();
    let mut ends = MarkerLog::default();
    let mut best_end: Option<Position> = None;
    let mut steps: usize = 0;

    while let Some((state_id, pos)) = worklist.pop() {
        if !visited.insert((state_id, pos)) {
            continue;
        }
        if steps >= config.max_steps() {
            break;
        }
        steps += 1;

        let begin_groups = automaton.groups_beginning_at(state_id);
        if !begin_groups.is_empty() {
            begins.record(pos, begin_groups);
        }
        let end_groups = automaton.groups_ending_at(state_id);
        if !end_groups.is_empty() {
            ends.record(pos, end_groups);
        }

        let Some(state) = automaton.state(state_id) else {
            continue;
        };
        for edge in state.edges() {
            for successor in edge.condition().check(lines, labels, pos) {
                if edge.target() == accept {
                    best_end = Some(best_end.map_or(successor, |best| best.max(successor)));
                }
                worklist.push((edge.target(), successor));
            }
        }
    }

    best_end.map(|end| Match::new(Range::new(start, end), consolidate(&begins, &ends)))
}

/// Consolidates group marker logs into one collapsed span per group.
///
/// Per group index: the first recorded begin position (pop order) opens
/// the span and the last recorded end position closes it; a group with a
/// begin but no end is dropped as incomplete.  A group traversed several
/// times within one match therefore collapses to a single span that may
/// not correspond to any single traversal — preserved engine behaviour.
fn consolidate(begins: &MarkerLog, ends: &MarkerLog) -> BTreeMap<usize, Range> {
    let mut spans: BTreeMap<usize, (Position, Option<Position>)> = BTreeMap::new();
    for (pos, groups) in begins.entries() {
        for group in groups {
            spans.entry(*group).or_insert((*pos, None));
        }
    }
    for (pos, groups) in ends.entries() {
        for group in groups {
            if let Some(slot) = spans.get_mut(group) {
                slot.1 = Some(*pos);
            }
        }
    }
    spans
        .into_iter()
        .filter_map(|(group, (begin, end))| end.map(|close| (group, Range::new(begin, close))))
        .collect()
}
