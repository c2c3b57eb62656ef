use std::collections::HashSet;

use common::types::PathSummary;
use rate_path_core::GraphContext;

/// Quotes a node name as a DOT ID, escaping `"` and `\`.
fn quoted_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len() + 2);
    id.push('"');
    for ch in name.chars() {
        if ch == '"' || ch == '\\' {
            id.push('\\');
        }
        id.push(ch);
    }
    id.push('"');
    id
}

/// Renders the graph in Graphviz DOT format.
///
/// Nodes and edges of `highlight` are drawn in red, and highlighted edges are
/// labelled with their rate. Everything else is drawn plain.
pub fn to_dot(context: &GraphContext, highlight: Option<&PathSummary>) -> String {
    let on_path: HashSet<&str> = highlight
        .map(|path| path.nodes.iter().map(String::as_str).collect())
        .unwrap_or_default();
    let path_edges: HashSet<(&str, &str)> = highlight
        .map(|path| {
            path.nodes
                .windows(2)
                .map(|pair| (pair[0].as_str(), pair[1].as_str()))
                .collect()
        })
        .unwrap_or_default();

    let mut dot = String::from("digraph rates {\n");
    dot.push_str("  rankdir=LR;\n\n");

    for node in context.pool().iter() {
        let name = node.name();
        if on_path.contains(name) {
            dot.push_str(&format!("  {} [color=red];\n", quoted_id(name)));
        } else {
            dot.push_str(&format!("  {};\n", quoted_id(name)));
        }
    }

    dot.push('\n');

    for node in context.pool().iter() {
        for child in node.children() {
            let from = node.name();
            let to = child.as_str();
            match context.weights().get(from, to) {
                Some(rate) if path_edges.contains(&(from, to)) => dot.push_str(&format!(
                    "  {} -> {} [label=\"{}\", color=red];\n",
                    quoted_id(from),
                    quoted_id(to),
                    rate
                )),
                _ => dot.push_str(&format!("  {} -> {};\n", quoted_id(from), quoted_id(to))),
            }
        }
    }

    dot.push_str("}\n");
    dot
}
