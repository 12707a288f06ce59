//! Re-emission of a snapshot for presentation.
//!
//! A presentation pass may hand out fresh identities for every node. Anything
//! holding an old identity re-resolves it through the returned [`IdRemap`].

use std::collections::HashMap;

use crate::id::IdGen;
use crate::types::{Document, Id, Node};

/// Old → new identity mapping produced by one re-emission.
#[derive(Clone, Debug, Default)]
pub struct IdRemap {
    /// `None` when identities were preserved.
    map: Option<HashMap<Id, Id>>,
}

impl IdRemap {
    pub fn identity() -> Self {
        Self { map: None }
    }

    pub fn is_identity(&self) -> bool {
        self.map.is_none()
    }

    /// The identity `old` carries in the re-emitted snapshot.
    ///
    /// `None` if `old` was not part of the source snapshot.
    pub fn resolve(&self, old: Id) -> Option<Id> {
        match &self.map {
            None => Some(old),
            Some(map) => map.get(&old).copied(),
        }
    }

    pub fn len(&self) -> usize {
        self.map.as_ref().map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Re-emit `doc` for presentation.
///
/// With `preserve_ids` the snapshot is returned as-is alongside an identity
/// remap. Otherwise every node gets a fresh identity from the document's
/// generator, the version is bumped, and the remap records old → new.
/// Colliding identities map to the fresh id of their first occurrence.
pub fn reemit(doc: &Document, preserve_ids: bool) -> (Document, IdRemap) {
    if preserve_ids {
        return (doc.clone(), IdRemap::identity());
    }

    fn walk(node: &Node, ids: &mut IdGen, map: &mut HashMap<Id, Id>) -> Node {
        let fresh = ids.fresh();
        map.entry(node.id()).or_insert(fresh);
        let children = node
            .children()
            .iter()
            .map(|c| walk(c, ids, map))
            .collect();
        let mut copy = node.with_children(children);
        copy.set_id(fresh);
        copy
    }

    let mut ids = doc.ids().clone();
    let mut map = HashMap::new();
    let root = walk(doc.root(), &mut ids, &mut map);
    log::trace!(target: "doc.emit", "re-emitted {} identities", map.len());
    (doc.successor(root, ids), IdRemap { map: Some(map) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traverse::{find_by_identity, leaves};

    fn doc() -> Document {
        Document::new(Node::root(vec![Node::paragraph(vec![
            Node::leaf("hi "),
            Node::leaf("yup"),
        ])]))
    }

    #[test]
    fn fresh_emission_remaps_every_node() {
        let doc = doc();
        let (next, remap) = reemit(&doc, false);

        assert_eq!(remap.len(), 4);
        assert!(next.version() > doc.version());
        for old in leaves(doc.root()) {
            let new = remap.resolve(old.id()).unwrap();
            assert_ne!(new, old.id());
            assert!(find_by_identity(next.root(), old.id()).is_empty());
            assert_eq!(find_by_identity(next.root(), new)[0].content(), old.content());
        }
    }

    #[test]
    fn preserved_emission_is_identity() {
        let doc = doc();
        let (next, remap) = reemit(&doc, true);
        assert!(remap.is_identity());
        assert_eq!(next.root(), doc.root());
        assert_eq!(next.version(), doc.version());
        assert_eq!(remap.resolve(Id(12345)), Some(Id(12345)));
    }

    #[test]
    fn unknown_identity_does_not_resolve() {
        let (_, remap) = reemit(&doc(), false);
        assert_eq!(remap.resolve(Id(12345)), None);
    }
}
