use crate::types::{Id, Node, RawId};

/// Monotonic identity source for one document lineage.
///
/// Each snapshot carries the generator that minted its ids, so a successor
/// built from a clone never reuses an identity the predecessor handed out.
#[derive(Clone, Debug)]
pub struct IdGen {
    next: RawId,
}

impl IdGen {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// A generator that will never produce `max` or anything below it.
    pub fn starting_after(max: RawId) -> Self {
        Self {
            next: max.saturating_add(1).max(1),
        }
    }

    pub fn fresh(&mut self) -> Id {
        let id = Id(self.next);
        self.next = self.next.wrapping_add(1).max(1);
        id
    }
}

impl Default for IdGen {
    fn default() -> Self {
        Self::new()
    }
}

/// Give every unassigned node (`Id(0)`) a fresh identity, pre-order.
pub fn assign_node_ids(root: &mut Node, ids: &mut IdGen) {
    if !root.id().is_assigned() {
        root.set_id(ids.fresh());
    }
    if let Some(children) = root.children_mut() {
        for c in children {
            assign_node_ids(c, ids);
        }
    }
}

pub(crate) fn max_id(node: &Node) -> RawId {
    node.children()
        .iter()
        .map(max_id)
        .fold(node.id().0, RawId::max)
}
