//! Structural invariant checks over a snapshot.

use std::collections::HashMap;
use std::fmt;

use crate::types::{Id, Node};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    /// The top node is not a `Root`.
    RootNotAtTop(Id),
    /// A `Root` below the top.
    NestedRoot(Id),
    /// A structural node (root, container, list item with children) has text.
    ContentOnStructural(Id),
    /// Several nodes share one identity.
    IdentityCollision { id: Id, count: usize },
    UnassignedId,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::RootNotAtTop(id) => write!(f, "top node {id} is not a root"),
            Violation::NestedRoot(id) => write!(f, "root {id} nested below the top"),
            Violation::ContentOnStructural(id) => {
                write!(f, "structural node {id} carries content")
            }
            Violation::IdentityCollision { id, count } => {
                write!(f, "identity {id} shared by {count} nodes")
            }
            Violation::UnassignedId => f.write_str("node without identity"),
        }
    }
}

/// Every invariant breach in the tree under `root`, in pre-order.
///
/// Collisions are reported once per identity, after the walk.
pub fn validate(root: &Node) -> Vec<Violation> {
    let mut out = Vec::new();
    if !matches!(root, Node::Root { .. }) {
        out.push(Violation::RootNotAtTop(root.id()));
    }

    let mut seen: HashMap<Id, usize> = HashMap::new();
    let mut order = Vec::new();
    walk(root, true, &mut out, &mut seen, &mut order);

    for id in order {
        let count = seen[&id];
        if count > 1 {
            out.push(Violation::IdentityCollision { id, count });
        }
    }
    out
}

fn walk(
    node: &Node,
    top: bool,
    out: &mut Vec<Violation>,
    seen: &mut HashMap<Id, usize>,
    order: &mut Vec<Id>,
) {
    let id = node.id();
    if !id.is_assigned() {
        out.push(Violation::UnassignedId);
    } else {
        let count = seen.entry(id).or_insert(0);
        if *count == 0 {
            order.push(id);
        }
        *count += 1;
    }

    if !top && matches!(node, Node::Root { .. }) {
        out.push(Violation::NestedRoot(id));
    }
    if let Node::ListItem {
        content, children, ..
    } = node
        && !children.is_empty()
        && !content.is_empty()
    {
        out.push(Violation::ContentOnStructural(id));
    }

    for c in node.children() {
        walk(c, false, out, seen, order);
    }
}

pub fn is_valid(root: &Node) -> bool {
    validate(root).is_empty()
}
