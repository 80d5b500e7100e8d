//! Deterministic text rendering of a document subtree.
//!
//! One line per node, indented two spaces per depth:
//! `tag.classes [attrs] {styles} "content"`, with each section omitted when
//! empty. Attributes and styles render in sorted order, so the output is
//! stable for snapshot assertions.

use crate::dom::{Dom, NodeId};

/// Render the subtree under `root` as an indented outline.
///
/// Lines are joined with `'\n'`; the final line has no trailing newline.
pub fn dom_outline(dom: &Dom, root: NodeId) -> String {
    let mut lines = Vec::new();
    render(dom, root, 0, &mut lines);
    lines.join("\n")
}

fn render(dom: &Dom, id: NodeId, depth: usize, lines: &mut Vec<String>) {
    let Some(data) = dom.get(id) else { return };

    let mut line = String::new();
    line.push_str(&"  ".repeat(depth));
    line.push_str(&data.tag);

    for class in &data.classes {
        line.push('.');
        line.push_str(class);
    }

    let attrs: Vec<String> = data
        .attrs()
        .map(|(name, value)| format!("{name}={value:?}"))
        .collect();
    if !attrs.is_empty() {
        line.push_str(&format!(" [{}]", attrs.join(" ")));
    }

    let styles: Vec<String> = data
        .style_entries()
        .map(|(property, value)| format!("{property}: {value}"))
        .collect();
    if !styles.is_empty() {
        line.push_str(&format!(" {{{}}}", styles.join("; ")));
    }

    if let Some(content) = &data.content {
        line.push_str(&format!(" {content:?}"));
    }

    lines.push(line);
    for &child in dom.children(id) {
        render(dom, child, depth + 1, lines);
    }
}

// ===========================================================================
// Tests
// ===========================================================================
