//! Identity lookup and leaf-order traversal over one tree snapshot.
//!
//! Every query takes the root of the snapshot it answers for. Identities are
//! only meaningful inside that snapshot; an unknown identity is an ordinary
//! outcome here (`None`, an empty `Vec`, or an unchanged tree), never a panic.
//!
//! Structural nodes (root, containers, list items with children) are
//! transparent for leaf order: the cursor only ever lands on leaf-like nodes.

use std::ops::ControlFlow;

use crate::types::{Id, Node};

/// Every node carrying `id`, in depth-first pre-order.
///
/// Normally zero or one match. More than one is an identity collision, which
/// callers must surface rather than pick a winner.
pub fn find_by_identity(root: &Node, id: Id) -> Vec<&Node> {
    fn walk<'a>(node: &'a Node, id: Id, out: &mut Vec<&'a Node>) {
        if node.id() == id {
            out.push(node);
        }
        for c in node.children() {
            walk(c, id, out);
        }
    }

    let mut out = Vec::new();
    walk(root, id, &mut out);
    out
}

/// The leaf-like node immediately before the node carrying `id`.
pub fn previous_leaf(root: &Node, id: Id) -> Option<&Node> {
    fn walk<'a>(
        node: &'a Node,
        id: Id,
        last: &mut Option<&'a Node>,
    ) -> ControlFlow<Option<&'a Node>> {
        if node.id() == id {
            return ControlFlow::Break(*last);
        }
        if node.is_leaf_like() {
            *last = Some(node);
        }
        for c in node.children() {
            walk(c, id, last)?;
        }
        ControlFlow::Continue(())
    }

    let mut last = None;
    match walk(root, id, &mut last) {
        ControlFlow::Break(found) => found,
        ControlFlow::Continue(()) => {
            log::trace!(target: "doc.traverse", "previous_leaf: {id} not in snapshot");
            None
        }
    }
}

/// The first leaf-like node reached after the node carrying `id`.
///
/// Only the part of the tree at and after `id` is searched: the walk flips a
/// "found" flag on the match and returns the next leaf it visits. For a
/// structural `id` that is its first descendant leaf.
pub fn next_leaf(root: &Node, id: Id) -> Option<&Node> {
    fn walk<'a>(node: &'a Node, id: Id, found: &mut bool) -> Option<&'a Node> {
        if *found && node.is_leaf_like() {
            return Some(node);
        }
        if node.id() == id {
            *found = true;
        }
        node.children().iter().find_map(|c| walk(c, id, found))
    }

    let mut found = false;
    let next = walk(root, id, &mut found);
    if !found {
        log::trace!(target: "doc.traverse", "next_leaf: {id} not in snapshot");
    }
    next
}

/// `node` itself when leaf-like, else its first leaf-like descendant.
pub fn first_leaf(node: &Node) -> Option<&Node> {
    if node.is_leaf_like() {
        return Some(node);
    }
    node.children().iter().find_map(first_leaf)
}

/// All leaf-like nodes in document order.
pub fn leaves(root: &Node) -> Vec<&Node> {
    fn walk<'a>(node: &'a Node, out: &mut Vec<&'a Node>) {
        if node.is_leaf_like() {
            out.push(node);
        }
        for c in node.children() {
            walk(c, out);
        }
    }

    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

/// A copy of the tree without the node carrying `id`.
///
/// A node with children is replaced by those children, in order, at its
/// former position (splice-up), so removing a wrapper never drops content.
/// A childless node is dropped. The root is never removable; asking for it
/// (or for an unknown id) returns an unchanged copy.
pub fn splice_out(root: &Node, id: Id) -> Node {
    if root.id() == id {
        log::debug!(target: "doc.traverse", "splice_out: refusing to remove root {id}");
        return root.clone();
    }

    fn spliced(node: &Node, id: Id) -> Vec<Node> {
        let children: Vec<Node> = node
            .children()
            .iter()
            .flat_map(|c| spliced(c, id))
            .collect();
        if node.id() == id {
            children
        } else {
            vec![node.with_children(children)]
        }
    }

    let children = root
        .children()
        .iter()
        .flat_map(|c| spliced(c, id))
        .collect();
    root.with_children(children)
}
