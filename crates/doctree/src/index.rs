//! Flat per-snapshot index over a document tree.
//!
//! Invariants:
//! - An index answers for exactly one snapshot; it is rebuilt after every
//!   replacement, never patched.
//! - Records are stored in pre-order. `live` maps each identity to the first
//!   record carrying it; later duplicates are listed in `collisions()`.
//! - Leaf order matches [`crate::traverse::leaves`].

use std::collections::HashMap;

use crate::types::{Id, Node};

#[derive(Clone, Debug)]
struct NodeRecord {
    leaf_like: bool,
    /// Leaf-like nodes visited before this one in document order.
    leaves_before: usize,
    char_len: usize,
    first_char: Option<char>,
}

#[derive(Clone, Debug, Default)]
pub struct DocIndex {
    records: Vec<NodeRecord>,
    live: HashMap<Id, usize>,
    leaves: Vec<Id>,
    collisions: Vec<Id>,
}

impl DocIndex {
    pub fn build(root: &Node) -> Self {
        let mut index = DocIndex::default();
        index.visit(root);
        if !index.collisions.is_empty() {
            log::warn!(
                target: "doc.index",
                "snapshot has {} colliding identities",
                index.collisions.len()
            );
        }
        index
    }

    fn visit(&mut self, node: &Node) {
        let idx = self.records.len();
        let leaf_like = node.is_leaf_like();
        self.records.push(NodeRecord {
            leaf_like,
            leaves_before: self.leaves.len(),
            char_len: node.content().chars().count(),
            first_char: node.content().chars().next(),
        });
        if self.live.contains_key(&node.id()) {
            if !self.collisions.contains(&node.id()) {
                self.collisions.push(node.id());
            }
        } else {
            self.live.insert(node.id(), idx);
        }
        if leaf_like {
            self.leaves.push(node.id());
        }
        for c in node.children() {
            self.visit(c);
        }
    }

    fn record(&self, id: Id) -> Option<&NodeRecord> {
        self.live.get(&id).map(|&idx| &self.records[idx])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: Id) -> bool {
        self.live.contains_key(&id)
    }

    pub fn is_leaf_like(&self, id: Id) -> bool {
        self.record(id).is_some_and(|r| r.leaf_like)
    }

    /// Content length, in characters, of the node carrying `id`.
    pub fn char_len(&self, id: Id) -> Option<usize> {
        self.record(id).map(|r| r.char_len)
    }

    /// First character of the node's content; `None` when it is empty.
    pub fn first_char(&self, id: Id) -> Option<char> {
        self.record(id)?.first_char
    }

    /// Leaf-like identities in document order.
    pub fn leaves(&self) -> &[Id] {
        &self.leaves
    }

    pub fn previous_leaf(&self, id: Id) -> Option<Id> {
        let before = self.record(id)?.leaves_before;
        before.checked_sub(1).map(|i| self.leaves[i])
    }

    pub fn next_leaf(&self, id: Id) -> Option<Id> {
        let record = self.record(id)?;
        let next = record.leaves_before + usize::from(record.leaf_like);
        self.leaves.get(next).copied()
    }

    /// Identities carried by more than one node.
    pub fn collisions(&self) -> &[Id] {
        &self.collisions
    }
}
