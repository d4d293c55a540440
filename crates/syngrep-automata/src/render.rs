//! Graphviz DOT rendering of compiled automata.
//!
//! An optional diagnostic collaborator: it takes an automaton snapshot and
//! produces DOT text for external rendering.  The matching and rewriting
//! paths never depend on it.

use crate::automaton::{Automaton, Condition};

/// Renders an automaton as a Graphviz DOT digraph.
///
/// States appear as numbered nodes, edges carry their condition as a
/// label, and group markers are drawn as dotted edges from their begin to
/// their end state.
#[must_use]
pub fn to_dot(automaton: &Automaton) -> String {
    let mut out = String::from("digraph automaton {\n    rankdir=LR;\n");
    for (id, state) in automaton.states().iter().enumerate() {
        out.push_str(&format!("    s{id} [label=\"{id}\"];\n"));
        for edge in state.edges() {
            let label = condition_label(edge.condition());
            out.push_str(&format!(
                "    s{id} -> s{target} [label=\"{label}\"];\n",
                target = edge.target()
            ));
        }
    }
    for marker in automaton.groups() {
        out.push_str(&format!(
            "    s{begin} -> s{end} [style=dotted, label=\"group {index}\"];\n",
            begin = marker.begin(),
            end = marker.end(),
            index = marker.index()
        ));
    }
    out.push_str("}\n");
    out
}

fn condition_label(condition: &Condition) -> String {
    match condition {
        Condition::Literal(text) => format!("str:'{}'", escape_label(text)),
        Condition::Semantic(category) => category.as_str().to_owned(),
        Condition::Epsilon => String::from("eps"),
        Condition::LineBreak => String::from("break"),
    }
}

fn escape_label(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Pattern;

    #[test]
    fn dot_output_names_every_state() {
        let pattern = Pattern::compile("a;|b").expect("compile");
        let dot = to_dot(pattern.automaton());
        for id in 0..pattern.automaton().states().len() {
            assert!(dot.contains(&format!("s{id} ")));
        }
        assert!(dot.starts_with("digraph automaton {"));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn dot_output_marks_groups_as_dotted_edges() {
        let pattern = Pattern::compile(";(ab;)").expect("compile");
        let dot = to_dot(pattern.automaton());
        assert!(dot.contains("style=dotted"));
        assert!(dot.contains("group 0"));
    }

    #[test]
    fn dot_output_escapes_quoted_literals() {
        let pattern = Pattern::compile("say \"hi\"").expect("compile");
        let dot = to_dot(pattern.automaton());
        assert!(dot.contains("say \\\"hi\\\""));
    }
}
