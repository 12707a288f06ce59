use crate::types::{ContainerRole, ListKind, Node};
use std::fmt::{self, Write};

/// Deterministic outline of a document tree for tests and debug logging.
/// Not a stable format.
///
/// One line per node, two spaces of indent per level:
/// - `#root`, `<paragraph>`, `<list bulleted>`, `<item-group>`, `<item>`
/// - leaves as `"text"` followed by `[outer > inner]` when styled
/// - ` #id` appended to every line unless `ignore_ids`
#[derive(Clone, Copy, Debug)]
pub struct SnapshotOptions {
    pub ignore_ids: bool,
    pub show_styling: bool,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            ignore_ids: true,
            show_styling: true,
        }
    }
}

#[derive(Debug)]
pub struct Outline {
    lines: Vec<String>,
}

impl Outline {
    pub fn new(root: &Node, options: SnapshotOptions) -> Self {
        let mut lines = Vec::new();
        walk(root, &options, 0, &mut lines);
        Self { lines }
    }

    pub fn as_lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Shorthand for `Outline::new(root, SnapshotOptions::default()).render()`.
pub fn outline(root: &Node) -> String {
    Outline::new(root, SnapshotOptions::default()).render()
}

fn walk(node: &Node, options: &SnapshotOptions, depth: usize, out: &mut Vec<String>) {
    const INDENT_STEP: usize = 2;
    let mut line = " ".repeat(depth * INDENT_STEP);
    write_node_line(&mut line, node, options);
    out.push(line);
    for c in node.children() {
        walk(c, options, depth + 1, out);
    }
}

fn write_node_line(out: &mut String, node: &Node, options: &SnapshotOptions) {
    match node {
        Node::Root { .. } => out.push_str("#root"),
        Node::Container { role, .. } => {
            out.push('<');
            out.push_str(match role {
                ContainerRole::Paragraph => "paragraph",
                ContainerRole::List(ListKind::Bulleted) => "list bulleted",
                ContainerRole::List(ListKind::Numbered) => "list numbered",
                ContainerRole::ListItemGroup => "item-group",
            });
            out.push('>');
        }
        Node::ListItem {
            content, children, ..
        } => {
            out.push_str("<item>");
            if children.is_empty() || !content.is_empty() {
                out.push(' ');
                write_quoted(out, content);
            }
        }
        Node::Leaf {
            content, styling, ..
        } => {
            write_quoted(out, content);
            if options.show_styling && !styling.is_empty() {
                out.push_str(" [");
                for (i, tag) in styling.tags().iter().enumerate() {
                    if i != 0 {
                        out.push_str(" > ");
                    }
                    out.push_str(tag.name());
                }
                out.push(']');
            }
        }
    }
    if !options.ignore_ids {
        let _ = write!(out, " {}", node.id());
    }
}

fn write_quoted(out: &mut String, text: &str) {
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out.push('"');
}
