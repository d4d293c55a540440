//! Pattern compilation for the semantic grep notation.
//!
//! Patterns match verbatim text by default; the escape marker `;`
//! introduces meta tokens:
//!
//! - `;id`, `;num`, `;str`, `;expr`, `;stmt` — semantic category atoms
//! - `;|` — alternation
//! - `;*`, `;+`, `;?` — postfix quantifiers on the preceding atom
//! - `;(` and `;)` — capture group delimiters
//!
//! Concatenation is juxtaposition; quantifiers bind tighter than
//! concatenation, which binds tighter than alternation.  A quantifier
//! applies to the whole preceding literal run or semantic atom; delimit a
//! smaller piece with a group to quantify it.  A quantifier with no
//! preceding atom is accepted and has no effect.  Group indices are
//! assigned left to right in opening order, starting at 0.
//!
//! Compilation is a single left-to-right pass combining the automaton
//! builders, preceded by a balance check over the group delimiters.

use std::iter::Peekable;
use std::str::Chars;

use syngrep_core::Category;

use crate::automaton::Automaton;
use crate::error::AutomataError;

/// A compiled semantic grep pattern.
///
/// Owns the pattern source, the compiled automaton, and the number of
/// capture groups.  Compiled once and reused across all start positions
/// during a match or replace call.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    automaton: Automaton,
    group_count: usize,
}

impl Pattern {
    /// Compiles a pattern string into an automaton.
    ///
    /// # Errors
    ///
    /// Returns [`AutomataError::UnbalancedGroup`] when group delimiters do
    /// not nest or balance, and [`AutomataError::UnknownMetaToken`] for an
    /// unrecognised escape sequence (including a trailing bare `;`).
    pub fn compile(source: &str) -> Result<Self, AutomataError> {
        check_group_balance(source)?;

        let mut compiler = Compiler::new();
        let mut chars = source.chars().peekable();
        while let Some(ch) = chars.next() {
            if ch == ';' {
                compiler.handle_escape(&mut chars)?;
            } else {
                compiler.push_text(ch);
            }
        }
        let (automaton, group_count) = compiler.finish()?;

        Ok(Self {
            source: source.to_owned(),
            automaton,
            group_count,
        })
    }

    /// Returns the original pattern source.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the compiled automaton.
    #[must_use]
    pub const fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    /// Returns the number of capture groups in the pattern.
    #[must_use]
    pub const fn group_count(&self) -> usize {
        self.group_count
    }

    /// Returns whether the pattern has any capture groups.
    #[must_use]
    pub const fn has_groups(&self) -> bool {
        self.group_count > 0
    }
}

/// Verifies that `;(` and `;)` delimiters nest and balance.
fn check_group_balance(source: &str) -> Result<(), AutomataError> {
    let mut depth: usize = 0;
    let mut chars = source.chars();
    while let Some(ch) = chars.next() {
        if ch != ';' {
            continue;
        }
        match chars.next() {
            Some('(') => depth += 1,
            Some(')') => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    AutomataError::unbalanced_group("group closed without a matching open")
                })?;
            }
            _ => {}
        }
    }
    if depth == 0 {
        Ok(())
    } else {
        Err(AutomataError::unbalanced_group(format!(
            "{depth} group(s) left open at end of pattern"
        )))
    }
}

/// One nesting level of the compile pass: the alternation branches seen so
/// far, the concatenation accumulated on the open branch, and the pending
/// atom a quantifier would bind to.
#[derive(Debug, Default)]
struct Frame {
    group_index: Option<usize>,
    branches: Vec<Automaton>,
    current: Option<Automaton>,
    pending: Option<Automaton>,
}

impl Frame {
    fn open_group(index: usize) -> Self {
        Self {
            group_index: Some(index),
            ..Self::default()
        }
    }

    /// Folds the pending atom into the concatenation accumulator.
    fn flush_pending(&mut self) {
        if let Some(atom) = self.pending.take() {
            self.current = Some(Automaton::concat(self.current.take(), atom));
        }
    }

    /// Closes the open alternation branch.
    fn close_branch(&mut self) {
        self.flush_pending();
        let branch = self
            .current
            .take()
            .unwrap_or_else(|| Automaton::literal(""));
        self.branches.push(branch);
    }

    /// Folds all branches into one automaton.
    fn into_automaton(mut self) -> Automaton {
        self.close_branch();
        self.branches
            .into_iter()
            .reduce(Automaton::alternate)
            .unwrap_or_else(|| Automaton::literal(""))
    }
}

/// The single-pass pattern compiler state.
struct Compiler {
    frames: Vec<Frame>,
    text: String,
    next_group: usize,
}

impl Compiler {
    fn new() -> Self {
        Self {
            frames: vec![Frame::default()],
            text: String::new(),
            next_group: 0,
        }
    }

    fn push_text(&mut self, ch: char) {
        self.text.push(ch);
    }

    /// Turns the buffered literal run into the pending atom.
    fn flush_text(&mut self) {
        if self.text.is_empty() {
            return;
        }
        let atom = Automaton::literal(&self.text);
        self.text.clear();
        if let Some(frame) = self.frames.last_mut() {
            frame.flush_pending();
            frame.pending = Some(atom);
        }
    }

    fn handle_escape(&mut self, chars: &mut Peekable<Chars<'_>>) -> Result<(), AutomataError> {
        self.flush_text();
        match chars.next() {
            None => Err(AutomataError::unknown_meta_token(";")),
            Some('(') => {
                self.open_group();
                Ok(())
            }
            Some(')') => self.close_group(),
            Some('|') => {
                if let Some(frame) = self.frames.last_mut() {
                    frame.close_branch();
                }
                Ok(())
            }
            Some('*') => {
                self.quantify(Automaton::zero_or_more);
                Ok(())
            }
            Some('+') => {
                self.quantify(Automaton::one_or_more);
                Ok(())
            }
            Some('?') => {
                self.quantify(Automaton::zero_or_one);
                Ok(())
            }
            Some(head) if head.is_ascii_alphabetic() => self.semantic_atom(head, chars),
            Some(other) => Err(AutomataError::unknown_meta_token(format!(";{other}"))),
        }
    }

    fn open_group(&mut self) {
        let index = self.next_group;
        self.next_group += 1;
        self.frames.push(Frame::open_group(index));
    }

    fn close_group(&mut self) -> Result<(), AutomataError> {
        let Some(frame) = self.frames.pop() else {
            return Err(AutomataError::unbalanced_group(
                "group closed without a matching open",
            ));
        };
        let Some(index) = frame.group_index else {
            return Err(AutomataError::unbalanced_group(
                "group closed without a matching open",
            ));
        };
        let grouped = Automaton::group(frame.into_automaton(), index);
        let Some(parent) = self.frames.last_mut() else {
            return Err(AutomataError::unbalanced_group(
                "group closed without a matching open",
            ));
        };
        parent.flush_pending();
        parent.current = Some(Automaton::concat(parent.current.take(), grouped));
        Ok(())
    }

    /// Applies a quantifier builder to the pending atom, if any.
    fn quantify(&mut self, builder: fn(Automaton) -> Automaton) {
        if let Some(frame) = self.frames.last_mut() {
            if let Some(atom) = frame.pending.take() {
                frame.pending = Some(builder(atom));
            }
        }
    }

    fn semantic_atom(
        &mut self,
        head: char,
        chars: &mut Peekable<Chars<'_>>,
    ) -> Result<(), AutomataError> {
        let mut token = String::new();
        token.push(head);
        while chars.peek().is_some_and(char::is_ascii_alphabetic) {
            if let Some(ch) = chars.next() {
                token.push(ch);
            }
        }
        let category: Category = token
            .parse()
            .map_err(|_| AutomataError::unknown_meta_token(format!(";{token}")))?;
        if let Some(frame) = self.frames.last_mut() {
            frame.flush_pending();
            frame.pending = Some(Automaton::semantic(category));
        }
        Ok(())
    }

    fn finish(mut self) -> Result<(Automaton, usize), AutomataError> {
        self.flush_text();
        let Some(frame) = self.frames.pop() else {
            return Err(AutomataError::unbalanced_group("compiler frame underflow"));
        };
        if frame.group_index.is_some() || !self.frames.is_empty() {
            return Err(AutomataError::unbalanced_group(
                "group(s) left open at end of pattern",
            ));
        }
        Ok((frame.into_automaton(), self.next_group))
    }
}
