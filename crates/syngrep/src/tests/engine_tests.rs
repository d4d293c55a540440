//! Tests for the [`Grep`] entrypoint over the reference labeler.
//!
//! The sources mirror a small corpus of assignment-language snippets; the
//! engine is greedy per start position, so it reports the longest match
//! from each start rather than every possible span.

use rstest::rstest;

use crate::{AutomataError, EngineConfig, ExpressionLabeler, Grep, Match};

const SIMPLE_FUNCTION: &str = "def f(x, y):\n   z = x + y\n   s = 's'\n   return z*z";
const SIMPLE_STATEMENT: &str = "x = y + 5 * 3";
const NUMBER_RUN: &str = "21211";

fn spans(matches: &[Match]) -> Vec<((usize, usize), (usize, usize))> {
    matches
        .iter()
        .map(|m| {
            let range = m.range();
            (
                (range.begin().line(), range.begin().column()),
                (range.end().line(), range.end().column()),
            )
        })
        .collect()
}

#[test]
fn plaintext_single_character() {
    let grep = Grep::new(SIMPLE_FUNCTION, &ExpressionLabeler);
    let matches = grep.find_all("s").expect("match");
    assert_eq!(spans(&matches), vec![((2, 3), (2, 4)), ((2, 8), (2, 9))]);
}

#[test]
fn plaintext_string_with_literal_star() {
    let grep = Grep::new(SIMPLE_FUNCTION, &ExpressionLabeler);
    let matches = grep.find_all("z*z").expect("match");
    assert_eq!(spans(&matches), vec![((3, 10), (3, 13))]);
}

#[test]
fn alternation_unions_both_branches() {
    let grep = Grep::new(SIMPLE_FUNCTION, &ExpressionLabeler);
    let matches = grep.find_all("z*z;|s").expect("match");
    assert_eq!(
        spans(&matches),
        vec![((2, 3), (2, 4)), ((2, 8), (2, 9)), ((3, 10), (3, 13))]
    );
}

#[test]
fn semantic_concat_finds_the_sum() {
    let grep = Grep::new(SIMPLE_STATEMENT, &ExpressionLabeler);
    let matches = grep.find_all(";id + 5 * ;num").expect("match");
    assert_eq!(spans(&matches), vec![((0, 4), (0, 13))]);
}

#[test]
fn number_atoms() {
    let grep = Grep::new(SIMPLE_STATEMENT, &ExpressionLabeler);
    let matches = grep.find_all(";num").expect("match");
    assert_eq!(spans(&matches), vec![((0, 8), (0, 9)), ((0, 12), (0, 13))]);
}

#[test]
fn string_atoms() {
    let grep = Grep::new(SIMPLE_FUNCTION, &ExpressionLabeler);
    let matches = grep.find_all(";str").expect("match");
    assert_eq!(spans(&matches), vec![((2, 7), (2, 10))]);
}

#[test]
fn expression_atoms_report_longest_per_start() {
    let grep = Grep::new(SIMPLE_STATEMENT, &ExpressionLabeler);
    let matches = grep.find_all(";expr").expect("match");
    assert_eq!(
        spans(&matches),
        vec![
            ((0, 0), (0, 1)),
            ((0, 4), (0, 13)),
            ((0, 8), (0, 13)),
            ((0, 12), (0, 13)),
        ]
    );
}

#[test]
fn statement_atom_spans_the_line() {
    let grep = Grep::new(SIMPLE_STATEMENT, &ExpressionLabeler);
    let matches = grep.find_all(";stmt").expect("match");
    assert_eq!(spans(&matches), vec![((0, 0), (0, 13))]);
}

#[test]
fn identifier_atoms() {
    let grep = Grep::new(SIMPLE_STATEMENT, &ExpressionLabeler);
    let matches = grep.find_all(";id").expect("match");
    assert_eq!(spans(&matches), vec![((0, 0), (0, 1)), ((0, 4), (0, 5))]);
}

#[test]
fn quantified_digit_runs() {
    let grep = Grep::new(NUMBER_RUN, &ExpressionLabeler);
    let matches = grep.find_all("2;(1;+;)").expect("match");
    assert_eq!(spans(&matches), vec![((0, 0), (0, 2)), ((0, 2), (0, 5))]);
}

#[test]
fn comprehensive_pattern_compiles_and_finds_nothing() {
    let grep = Grep::new(SIMPLE_FUNCTION, &ExpressionLabeler);
    let matches = grep
        .find_all("assert(;(2;?1;*;) == len(;str));|assertEqual(2;(1;+;), ;(;id;|num;))")
        .expect("compile");
    assert!(matches.is_empty());
}

#[test]
fn find_first_returns_the_earliest_match() {
    let grep = Grep::new(SIMPLE_FUNCTION, &ExpressionLabeler);
    let found = grep.find_first("s").expect("compile").expect("match");
    assert_eq!(spans(&[found]), vec![((2, 3), (2, 4))]);
}

#[test]
fn find_first_without_match_is_none() {
    let grep = Grep::new(SIMPLE_FUNCTION, &ExpressionLabeler);
    assert!(grep.find_first("missing").expect("compile").is_none());
}

#[test]
fn replace_all_rewrites_every_kept_match() {
    let grep = Grep::new(SIMPLE_FUNCTION, &ExpressionLabeler);
    let result = grep
        .replace_all(";(z;)", &[String::from("w")])
        .expect("replace");
    assert_eq!(
        result,
        vec![
            String::from("def f(x, y):"),
            String::from("   w = x + y"),
            String::from("   s = 's'"),
            String::from("   return w*w"),
        ]
    );
}

#[test]
fn replace_first_rewrites_only_the_first_match() {
    let grep = Grep::new(SIMPLE_FUNCTION, &ExpressionLabeler);
    let result = grep
        .replace_first(";(z;)", &[String::from("w")])
        .expect("replace");
    assert_eq!(
        result,
        vec![
            String::from("def f(x, y):"),
            String::from("   w = x + y"),
            String::from("   s = 's'"),
            String::from("   return z*z"),
        ]
    );
}

#[rstest]
#[case(";(;(;x))")]
#[case(";(open")]
fn unbalanced_patterns_surface_compile_errors(#[case] pattern: &str) {
    let grep = Grep::new(SIMPLE_STATEMENT, &ExpressionLabeler);
    let err = grep.find_all(pattern).expect_err("should fail");
    assert!(matches!(err, AutomataError::UnbalancedGroup { .. }));
}

#[test]
fn unknown_meta_tokens_surface_compile_errors() {
    let grep = Grep::new(SIMPLE_STATEMENT, &ExpressionLabeler);
    let err = grep.find_all(";unknown").expect_err("should fail");
    assert!(matches!(err, AutomataError::UnknownMetaToken { .. }));
}

#[test]
fn config_override_is_respected() {
    let grep =
        Grep::new(SIMPLE_STATEMENT, &ExpressionLabeler).with_config(EngineConfig::new(4));
    // A tight exploration cap still sweeps to completion.
    let matches = grep.find_all("x").expect("match");
    assert_eq!(spans(&matches), vec![((0, 0), (0, 1))]);
}

#[test]
fn from_parts_reuses_a_precomputed_table() {
    let lines: Vec<String> = SIMPLE_STATEMENT
        .split('\n')
        .map(str::to_owned)
        .collect();
    let labels = crate::Labeler::label(&ExpressionLabeler, &lines);
    let grep = Grep::from_parts(lines, labels);
    let matches = grep.find_all(";num").expect("match");
    assert_eq!(matches.len(), 2);
}
