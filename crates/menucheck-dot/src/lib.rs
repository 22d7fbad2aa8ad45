//! Generate Graphviz DOT visualizations of menu graphs.
//!
//! Every menu becomes a node and every parent → child link an edge. Roots
//! are drawn as bold ellipses. Given the [`Classification`] of the same
//! graph, nodes that sit on an invalid path are filled light red and the
//! edges that close a cycle are drawn red and dashed.
//!
//! # Example
//!
//! ```
//! use menucheck::v1::{MenuGraph, MenuRecord, validate};
//! use menucheck_dot::{render, RenderOptions};
//!
//! let graph = MenuGraph::from_records(&[
//!     MenuRecord::root(1).with_children([2]).with_data("House"),
//!     MenuRecord::child_of(2, 1).with_children([1]),
//! ]);
//! let result = validate(&graph);
//!
//! let dot = render(&graph, &result, &RenderOptions::default());
//! assert!(dot.contains("digraph menus"));
//! assert!(dot.contains("\"2\" -> \"1\" [color=\"#d32f2f\", style=dashed, penwidth=2]"));
//! ```
//!
//! Pipe the output through Graphviz to produce images:
//!
//! ```bash
//! menucheck render dot --input pages.json | dot -Tpng -o menus.png
//! ```

use std::collections::HashSet;

use menucheck::v1::{Classification, MenuGraph, MenuId, query};

const INVALID_FILL: &str = "#ffcccc";
const ROOT_FILL: &str = "#e3f2fd";
const NODE_FILL: &str = "#f5f5f5";
const BACK_EDGE: &str = "#d32f2f";

/// Options controlling what information is rendered in the DOT output.
pub struct RenderOptions {
    /// Include each menu's `data` text under its id.
    pub show_labels: bool,
    /// Color nodes on invalid paths and the edges closing each cycle.
    pub highlight_invalid: bool,
    /// Append a legend cluster.
    pub show_legend: bool,
    /// Graph title drawn at the top.
    pub title: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_labels: true,
            highlight_invalid: true,
            show_legend: true,
            title: None,
        }
    }
}

/// Render a [`MenuGraph`] as a DOT digraph, highlighting what `result`
/// found invalid.
pub fn render(graph: &MenuGraph, result: &Classification, options: &RenderOptions) -> String {
    let (tainted, back_edges) = if options.highlight_invalid {
        let tainted = query::nodes_on_invalid_paths(result);
        let back_edges: HashSet<(MenuId, MenuId)> =
            result.invalid().iter().flat_map(query::back_edges).collect();
        (tainted, back_edges)
    } else {
        (HashSet::new(), HashSet::new())
    };

    let mut dot = String::new();
    dot.push_str("digraph menus {\n");
    dot.push_str("  rankdir=TB;\n");
    dot.push_str("  node [shape=box, style=\"rounded,filled\", fontname=\"Helvetica\"];\n");
    dot.push_str("  edge [color=\"#666666\"];\n\n");

    if let Some(title) = &options.title {
        dot.push_str("  labelloc=\"t\";\n");
        dot.push_str(&format!("  label=\"{}\";\n", escape_dot(title)));
        dot.push_str("  fontsize=16;\n");
        dot.push_str("  fontname=\"Helvetica-Bold\";\n\n");
    }

    for &id in graph.nodes() {
        let label = format_node_label_html(graph, id, options);
        let is_root = graph.is_root(id);
        let fillcolor = if tainted.contains(&id) {
            INVALID_FILL
        } else if is_root {
            ROOT_FILL
        } else {
            NODE_FILL
        };

        let mut attrs = format!("label={}, fillcolor=\"{}\"", label, fillcolor);
        if is_root {
            attrs.push_str(", shape=ellipse, style=\"filled,bold\", penwidth=2");
        } else if tainted.contains(&id) {
            attrs.push_str(", style=\"rounded,filled,dashed\"");
        }
        dot.push_str(&format!("  \"{}\" [{}];\n", id, attrs));
    }

    dot.push('\n');

    // One edge per distinct parent -> child link, in adjacency order.
    let mut drawn: HashSet<(MenuId, MenuId)> = HashSet::new();
    for &id in graph.nodes() {
        for &child in graph.children_of(id) {
            if !drawn.insert((id, child)) {
                continue;
            }
            if back_edges.contains(&(id, child)) {
                dot.push_str(&format!(
                    "  \"{}\" -> \"{}\" [color=\"{}\", style=dashed, penwidth=2];\n",
                    id, child, BACK_EDGE
                ));
            } else {
                dot.push_str(&format!("  \"{}\" -> \"{}\";\n", id, child));
            }
        }
    }

    if options.show_legend {
        dot.push_str("\n  // Legend\n");
        dot.push_str("  subgraph cluster_legend {\n");
        dot.push_str("    label=\"Legend\";\n");
        dot.push_str("    fontname=\"Helvetica-Bold\";\n");
        dot.push_str("    style=filled;\n");
        dot.push_str("    fillcolor=\"#f8f8f8\";\n");
        dot.push_str("    node [shape=box, style=\"rounded,filled\", width=0.9, fontname=\"Helvetica\", fontsize=10];\n");
        dot.push_str(&format!(
            "    leg_root [label=\"root\", shape=ellipse, style=\"filled,bold\", fillcolor=\"{}\"];\n",
            ROOT_FILL
        ));
        dot.push_str(&format!(
            "    leg_menu [label=\"menu\", fillcolor=\"{}\"];\n",
            NODE_FILL
        ));
        if options.highlight_invalid {
            dot.push_str(&format!(
                "    leg_invalid [label=\"on a cycle\", fillcolor=\"{}\", style=\"rounded,filled,dashed\"];\n",
                INVALID_FILL
            ));
            dot.push_str("    leg_root -> leg_menu -> leg_invalid [style=invis];\n");
        } else {
            dot.push_str("    leg_root -> leg_menu [style=invis];\n");
        }
        dot.push_str("  }\n");
    }

    dot.push_str("}\n");
    dot
}

fn format_node_label_html(graph: &MenuGraph, id: MenuId, options: &RenderOptions) -> String {
    let mut rows = vec![format!("<b>{}</b>", id)];

    if options.show_labels
        && let Some(text) = graph.label_of(id)
    {
        let text = if text.chars().count() > 40 {
            let truncated: String = text.chars().take(37).collect();
            format!("{}...", truncated)
        } else {
            text.to_string()
        };
        rows.push(format!(
            "<font point-size=\"10\">{}</font>",
            escape_html(&text)
        ));
    }

    format!("<{}>", rows.join("<br/>"))
}

/// Escape a string for use inside a double-quoted DOT attribute.
pub fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Escape a string for use inside a DOT HTML-like label.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
