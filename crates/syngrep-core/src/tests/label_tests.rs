//! Tests for [`Category`], [`Label`], and [`LabelTable`].

use std::str::FromStr;

use rstest::rstest;

use crate::{Category, Label, LabelTable, Position};

#[rstest]
#[case("expr", Category::Expression)]
#[case("stmt", Category::Statement)]
#[case("id", Category::Identifier)]
#[case("num", Category::Number)]
#[case("str", Category::StringLiteral)]
fn category_tokens_round_trip(#[case] token: &str, #[case] category: Category) {
    assert_eq!(Category::from_str(token), Ok(category));
    assert_eq!(category.as_str(), token);
    assert_eq!(format!("{category}"), token);
}

#[test]
fn category_parse_rejects_unknown_token() {
    let err = Category::from_str("ident").expect_err("should reject");
    assert_eq!(err.input(), "ident");
}

#[test]
fn category_all_lists_every_builtin() {
    assert_eq!(Category::all().len(), 5);
}

#[test]
fn labels_at_returns_insertion_order() {
    let mut table = LabelTable::new();
    let anchor = Position::new(0, 4);
    table.insert(anchor, Label::new(Category::Identifier, Position::new(0, 5)));
    table.insert(anchor, Label::new(Category::Expression, Position::new(0, 13)));

    let labels = table.labels_at(anchor);
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[0].category(), Category::Identifier);
    assert_eq!(labels[1].category(), Category::Expression);
}

#[test]
fn labels_at_missing_anchor_is_empty() {
    let table = LabelTable::new();
    assert!(table.labels_at(Position::new(0, 0)).is_empty());
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
}

#[test]
fn iter_yields_anchors_in_position_order() {
    let mut table = LabelTable::new();
    table.insert(
        Position::new(1, 0),
        Label::new(Category::Statement, Position::new(1, 9)),
    );
    table.insert(
        Position::new(0, 2),
        Label::new(Category::Number, Position::new(0, 3)),
    );

    let anchors: Vec<Position> = table.iter().map(|(begin, _)| begin).collect();
    assert_eq!(anchors, vec![Position::new(0, 2), Position::new(1, 0)]);
}

#[test]
fn label_serde_round_trip() {
    let label = Label::new(Category::Identifier, Position::new(0, 1));
    let json = serde_json::to_string(&label).expect("serialize");
    let back: Label = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(label, back);
}
