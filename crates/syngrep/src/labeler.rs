//! Reference labeler for a minimal expression language.
//!
//! Labels a line-oriented assignment language: `name = expr`,
//! `return expr`, or a bare expression, where an expression combines
//! identifier, integer, and string atoms with `+ - * /` at the usual
//! precedence.  Every atom is labelled with its own category and as an
//! expression, every infix application is labelled as an expression from
//! its leftmost operand, and every parsed line is labelled as a statement
//! over its trimmed extent — the same label shape a host language's
//! syntax tree walk would produce.
//!
//! The labeler is total: a line that does not fit the language simply
//! yields no labels.

use syngrep_core::{Category, Label, LabelTable, Labeler, Position};

/// Labeler for the minimal expression language.
///
/// # Example
///
/// ```
/// use syngrep::{Category, ExpressionLabeler, Labeler, Position};
///
/// let lines = vec![String::from("x = y + 5 * 3")];
/// let table = ExpressionLabeler.label(&lines);
/// let at_y = table.labels_at(Position::new(0, 4));
/// assert!(at_y.iter().any(|l| l.category() == Category::Identifier));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpressionLabeler;

impl Labeler for ExpressionLabeler {
    fn label(&self, lines: &[String]) -> LabelTable {
        let mut table = LabelTable::new();
        for (line_no, line) in lines.iter().enumerate() {
            let Some(tokens) = tokenize(line) else {
                continue;
            };
            if tokens.is_empty() {
                continue;
            }
            let parser = LineParser {
                line_no,
                line,
                tokens,
                cursor: 0,
                pending: Vec::new(),
            };
            if let Some(labels) = parser.parse() {
                for (anchor, label) in labels {
                    table.insert(anchor, label);
                }
            }
        }
        table
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Identifier,
    Number,
    StringLit,
    Operator(char),
    Equals,
}

#[derive(Debug, Clone, Copy)]
struct Token {
    kind: TokenKind,
    begin: usize,
    end: usize,
}

/// Splits a line into tokens, or `None` when the line falls outside the
/// language.
fn tokenize(line: &str) -> Option<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = line.char_indices().peekable();
    while let Some((offset, ch)) = chars.next() {
        if ch == ' ' || ch == '\t' {
            continue;
        }
        if ch.is_ascii_alphabetic() || ch == '_' {
            let mut end = offset + ch.len_utf8();
            while let Some((next_offset, next_ch)) = chars.peek().copied() {
                if next_ch.is_ascii_alphanumeric() || next_ch == '_' {
                    end = next_offset + next_ch.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }
            tokens.push(Token {
                kind: TokenKind::Identifier,
                begin: offset,
                end,
            });
        } else if ch.is_ascii_digit() {
            let mut end = offset + ch.len_utf8();
            while let Some((next_offset, next_ch)) = chars.peek().copied() {
                if next_ch.is_ascii_digit() {
                    end = next_offset + next_ch.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }
            tokens.push(Token {
                kind: TokenKind::Number,
                begin: offset,
                end,
            });
        } else if ch == '\'' || ch == '"' {
            let mut closed = false;
            let mut end = offset + ch.len_utf8();
            for (next_offset, next_ch) in chars.by_ref() {
                end = next_offset + next_ch.len_utf8();
                if next_ch == ch {
                    closed = true;
                    break;
                }
            }
            if !closed {
                return None;
            }
            tokens.push(Token {
                kind: TokenKind::StringLit,
                begin: offset,
                end,
            });
        } else if matches!(ch, '+' | '-' | '*' | '/') {
            tokens.push(Token {
                kind: TokenKind::Operator(ch),
                begin: offset,
                end: offset + ch.len_utf8(),
            });
        } else if ch == '=' {
            tokens.push(Token {
                kind: TokenKind::Equals,
                begin: offset,
                end: offset + ch.len_utf8(),
            });
        } else {
            return None;
        }
    }
    Some(tokens)
}

/// Recursive-descent parse of one tokenised line, accumulating labels.
///
/// Labels commit only when the whole line parses; a failure discards
/// everything recorded so far.
struct LineParser<'a> {
    line_no: usize,
    line: &'a str,
    tokens: Vec<Token>,
    cursor: usize,
    pending: Vec<(Position, Label)>,
}

impl LineParser<'_> {
    fn parse(mut self) -> Option<Vec<(Position, Label)>> {
        let first = self.tokens.first().copied()?;
        let last = self.tokens.last().copied()?;

        if self.is_keyword(0, "return") {
            self.cursor += 1;
            self.parse_expression()?;
        } else if self.is_assignment() {
            let target = self.tokens.first().copied()?;
            self.cursor += 2;
            self.emit_atom(target, Category::Identifier);
            self.parse_expression()?;
        } else {
            self.parse_expression()?;
        }

        if self.cursor != self.tokens.len() {
            return None;
        }
        self.pending.push((
            Position::new(self.line_no, first.begin),
            Label::new(
                Category::Statement,
                Position::new(self.line_no, last.end),
            ),
        ));
        Some(self.pending)
    }

    fn is_assignment(&self) -> bool {
        let target_is_name = self
            .tokens
            .first()
            .is_some_and(|token| token.kind == TokenKind::Identifier);
        let followed_by_equals = self
            .tokens
            .get(1)
            .is_some_and(|token| token.kind == TokenKind::Equals);
        target_is_name && followed_by_equals
    }

    fn is_keyword(&self, index: usize, keyword: &str) -> bool {
        self.tokens.get(index).is_some_and(|token| {
            token.kind == TokenKind::Identifier && self.token_text(*token) == keyword
        })
    }

    fn token_text(&self, token: Token) -> &str {
        self.line.get(token.begin..token.end).unwrap_or_default()
    }

    fn parse_expression(&mut self) -> Option<(usize, usize)> {
        let mut span = self.parse_term()?;
        while self.peek_operator(&['+', '-']) {
            self.cursor += 1;
            let right = self.parse_term()?;
            span = (span.0, right.1);
            self.emit_expression(span);
        }
        Some(span)
    }

    fn parse_term(&mut self) -> Option<(usize, usize)> {
        let mut span = self.parse_atom()?;
        while self.peek_operator(&['*', '/']) {
            self.cursor += 1;
            let right = self.parse_atom()?;
            span = (span.0, right.1);
            self.emit_expression(span);
        }
        Some(span)
    }

    fn parse_atom(&mut self) -> Option<(usize, usize)> {
        let token = self.tokens.get(self.cursor).copied()?;
        let category = match token.kind {
            TokenKind::Identifier => Category::Identifier,
            TokenKind::Number => Category::Number,
            TokenKind::StringLit => Category::StringLiteral,
            TokenKind::Operator(_) | TokenKind::Equals => return None,
        };
        if category == Category::Identifier && self.token_text(token) == "return" {
            return None;
        }
        self.cursor += 1;
        self.emit_atom(token, category);
        Some((token.begin, token.end))
    }

    fn peek_operator(&self, accepted: &[char]) -> bool {
        self.tokens.get(self.cursor).is_some_and(|token| {
            matches!(token.kind, TokenKind::Operator(op) if accepted.contains(&op))
        })
    }

    fn emit_atom(&mut self, token: Token, category: Category) {
        let anchor = Position::new(self.line_no, token.begin);
        let end = Position::new(self.line_no, token.end);
        self.pending.push((anchor, Label::new(category, end)));
        self.pending
            .push((anchor, Label::new(Category::Expression, end)));
    }

    fn emit_expression(&mut self, span: (usize, usize)) {
        self.pending.push((
            Position::new(self.line_no, span.0),
            Label::new(
                Category::Expression,
                Position::new(self.line_no, span.1),
            ),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(source: &str) -> Vec<String> {
        source.split('\n').map(str::to_owned).collect()
    }

    fn labels_of(table: &LabelTable, line: usize, column: usize) -> Vec<(Category, usize, usize)> {
        table
            .labels_at(Position::new(line, column))
            .iter()
            .map(|label| (label.category(), label.end().line(), label.end().column()))
            .collect()
    }

    #[test]
    fn assignment_labels_target_operands_and_statement() {
        let table = ExpressionLabeler.label(&lines("x = y + 5 * 3"));

        assert_eq!(
            labels_of(&table, 0, 0),
            vec![
                (Category::Identifier, 0, 1),
                (Category::Expression, 0, 1),
                (Category::Statement, 0, 13),
            ]
        );
        assert_eq!(
            labels_of(&table, 0, 4),
            vec![
                (Category::Identifier, 0, 5),
                (Category::Expression, 0, 5),
                (Category::Expression, 0, 13),
            ]
        );
        // The tighter-binding product labels its own sub-expression.
        assert_eq!(
            labels_of(&table, 0, 8),
            vec![
                (Category::Number, 0, 9),
                (Category::Expression, 0, 9),
                (Category::Expression, 0, 13),
            ]
        );
        assert_eq!(
            labels_of(&table, 0, 12),
            vec![(Category::Number, 0, 13), (Category::Expression, 0, 13)]
        );
    }

    #[test]
    fn string_atoms_are_labelled_with_quotes_included() {
        let table = ExpressionLabeler.label(&lines("s = 's'"));
        assert_eq!(
            labels_of(&table, 0, 4),
            vec![
                (Category::StringLiteral, 0, 7),
                (Category::Expression, 0, 7),
            ]
        );
    }

    #[test]
    fn return_statement_labels_value_and_statement() {
        let table = ExpressionLabeler.label(&lines("   return z*z"));
        assert_eq!(
            labels_of(&table, 0, 3),
            vec![(Category::Statement, 0, 13)]
        );
        assert_eq!(
            labels_of(&table, 0, 10),
            vec![
                (Category::Identifier, 0, 11),
                (Category::Expression, 0, 11),
                (Category::Expression, 0, 13),
            ]
        );
    }

    #[test]
    fn bare_number_line_is_expression_and_statement() {
        let table = ExpressionLabeler.label(&lines("21211"));
        assert_eq!(
            labels_of(&table, 0, 0),
            vec![
                (Category::Number, 0, 5),
                (Category::Expression, 0, 5),
                (Category::Statement, 0, 5),
            ]
        );
    }

    #[test]
    fn unparseable_lines_yield_no_labels() {
        let table = ExpressionLabeler.label(&lines("def f(x, y):"));
        assert!(table.is_empty());
    }

    #[test]
    fn unterminated_string_yields_no_labels() {
        let table = ExpressionLabeler.label(&lines("s = 'oops"));
        assert!(table.is_empty());
    }

    #[test]
    fn half_parsed_lines_commit_nothing() {
        // The trailing operator fails the parse after atoms were seen.
        let table = ExpressionLabeler.label(&lines("x = y +"));
        assert!(table.is_empty());
    }

    #[test]
    fn each_line_is_labelled_independently() {
        let table = ExpressionLabeler.label(&lines("a = 1\nb = 2"));
        assert!(!labels_of(&table, 0, 0).is_empty());
        assert!(!labels_of(&table, 1, 0).is_empty());
    }
}
