//! Tests for the [`Match`] type.

use std::collections::BTreeMap;

use crate::{Match, Position, Range};

fn sample_range() -> Range {
    Range::new(Position::new(0, 4), Position::new(0, 13))
}

#[test]
fn match_without_groups() {
    let m = Match::new(sample_range(), BTreeMap::new());
    assert_eq!(m.range(), sample_range());
    assert!(m.groups().is_empty());
    assert_eq!(m.group(0), None);
}

#[test]
fn match_group_lookup() {
    let group = Range::new(Position::new(0, 5), Position::new(0, 8));
    let mut groups = BTreeMap::new();
    groups.insert(0, group);

    let m = Match::new(sample_range(), groups);
    assert_eq!(m.group(0), Some(group));
    assert_eq!(m.group(1), None);
}

#[test]
fn match_groups_iterate_in_index_order() {
    let mut groups = BTreeMap::new();
    groups.insert(2, sample_range());
    groups.insert(0, sample_range());
    groups.insert(1, sample_range());

    let m = Match::new(sample_range(), groups);
    let indices: Vec<usize> = m.groups().keys().copied().collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn match_serde_round_trip() {
    let mut groups = BTreeMap::new();
    groups.insert(0, Range::new(Position::new(0, 5), Position::new(0, 8)));
    let m = Match::new(sample_range(), groups);

    let json = serde_json::to_string(&m).expect("serialize");
    let back: Match = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(m, back);
}
