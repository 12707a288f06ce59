//! Host hit results → document positions.
//!
//! Hosts render the tree into their own element hierarchy, where only some
//! elements carry a document identity (a text node inside a styled span, for
//! instance, does not). Resolution walks up from the element that was hit to
//! the nearest ancestor whose identity is live in the current snapshot.

use std::collections::HashMap;

use core_types::Point;
use doctree::mutate::{EditError, resolve_unique};
use doctree::{Document, Id, first_leaf};
use input_core::{LeafPosition, PointerPhase};
use tools::utf8::char_len;

use crate::Rectangle;

/// Opaque handle to an element in the host's rendered hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HostElement(pub u64);

/// What the host reports under a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HostHit {
    pub element: HostElement,
    /// Character offset inside the element's text.
    pub offset: usize,
    /// Caret rectangle the host computed for `offset`.
    pub rect: Rectangle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub point: Point,
    /// Element the host delivered the event to, if known.
    pub target: Option<HostElement>,
}

pub trait HitTester {
    fn hit_test(&self, point: Point) -> Option<HostHit>;
}

impl<F> HitTester for F
where
    F: Fn(Point) -> Option<HostHit>,
{
    fn hit_test(&self, point: Point) -> Option<HostHit> {
        self(point)
    }
}

pub trait HostTree {
    fn parent(&self, element: HostElement) -> Option<HostElement>;

    /// Document identity the host attached to `element`, if any.
    fn node_identity(&self, element: HostElement) -> Option<Id>;
}

/// Resolve a hit to a leaf position in `doc`.
///
/// Walks up from `hit.element` until an element's identity resolves. A leaf
/// identity keeps the hit offset (clamped); a structural identity descends to
/// its first leaf with the offset clamped to that leaf. Identities that are
/// no longer live are skipped. A collision stops the walk: there is no way to
/// tell which node was meant.
pub fn resolve_from_hit(
    hit: &HostHit,
    host: &dyn HostTree,
    doc: &Document,
) -> Option<LeafPosition> {
    let mut element = Some(hit.element);
    while let Some(el) = element {
        if let Some(id) = host.node_identity(el) {
            match resolve_unique(doc.root(), id) {
                Ok(node) => {
                    let Some(leaf) = first_leaf(node) else {
                        log::debug!(target: "layout.hit_test", "{id} has no leaf");
                        return None;
                    };
                    let offset = hit.offset.min(char_len(leaf.content()));
                    return Some(LeafPosition::new(leaf.id(), offset));
                }
                Err(EditError::IdentityCollision { .. }) => return None,
                Err(_) => {
                    log::trace!(target: "layout.hit_test", "skipping stale identity {id}");
                }
            }
        }
        element = host.parent(el);
    }
    log::debug!(
        target: "layout.hit_test",
        "no identity-bearing ancestor for {:?}",
        hit.element
    );
    None
}

/// Hit-test a pointer event and resolve it.
///
/// When nothing is under the point, the event target (if any) is used at
/// offset 0.
pub fn resolve_pointer(
    event: &PointerEvent,
    tester: &dyn HitTester,
    host: &dyn HostTree,
    doc: &Document,
) -> Option<(LeafPosition, HostHit)> {
    let hit = tester.hit_test(event.point).or_else(|| {
        event.target.map(|element| HostHit {
            element,
            offset: 0,
            rect: Rectangle::default(),
        })
    })?;
    resolve_from_hit(&hit, host, doc).map(|pos| (pos, hit))
}

/// In-memory host tree for headless hosts and tests.
#[derive(Clone, Debug, Default)]
pub struct MapHost {
    parents: HashMap<HostElement, HostElement>,
    identities: HashMap<HostElement, Id>,
}

impl MapHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        element: HostElement,
        parent: Option<HostElement>,
        identity: Option<Id>,
    ) {
        if let Some(parent) = parent {
            self.parents.insert(element, parent);
        }
        if let Some(id) = identity {
            self.identities.insert(element, id);
        }
    }
}

impl HostTree for MapHost {
    fn parent(&self, element: HostElement) -> Option<HostElement> {
        self.parents.get(&element).copied()
    }

    fn node_identity(&self, element: HostElement) -> Option<Id> {
        self.identities.get(&element).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doctree::{Node, StyleTag};

    fn doc() -> Document {
        Document::new(Node::root(vec![Node::paragraph(vec![
            Node::leaf("hi "),
            Node::styled("is bold ", [StyleTag::Bold]),
        ])]))
    }

    fn hit(element: u64, offset: usize) -> HostHit {
        HostHit {
            element: HostElement(element),
            offset,
            rect: Rectangle::default(),
        }
    }

    #[test]
    fn walks_up_to_identity_bearing_span() {
        let doc = doc();
        let bold = doc.root().children()[0].children()[1].id();
        let mut host = MapHost::new();
        // <p id=paragraph><span id=bold><b><#text/></b></span></p>
        host.insert(HostElement(1), None, Some(doc.root().children()[0].id()));
        host.insert(HostElement(2), Some(HostElement(1)), Some(bold));
        host.insert(HostElement(3), Some(HostElement(2)), None);
        host.insert(HostElement(4), Some(HostElement(3)), None);

        let pos = resolve_from_hit(&hit(4, 2), &host, &doc);
        assert_eq!(pos, Some(LeafPosition::new(bold, 2)));
    }

    #[test]
    fn container_identity_descends_and_clamps() {
        let doc = doc();
        let first = doc.root().children()[0].children()[0].id();
        let mut host = MapHost::new();
        host.insert(HostElement(1), None, Some(doc.root().children()[0].id()));

        let pos = resolve_from_hit(&hit(1, 50), &host, &doc);
        assert_eq!(pos, Some(LeafPosition::new(first, 3)));
    }

    #[test]
    fn stale_identity_is_skipped() {
        let doc = doc();
        let paragraph = doc.root().children()[0].id();
        let mut host = MapHost::new();
        host.insert(HostElement(1), None, Some(paragraph));
        host.insert(HostElement(2), Some(HostElement(1)), Some(Id(4040)));

        let pos = resolve_from_hit(&hit(2, 1), &host, &doc).unwrap();
        assert_eq!(pos.offset, 1);
        assert_eq!(pos.leaf, doc.root().children()[0].children()[0].id());
    }

    #[test]
    fn no_identity_anywhere_is_none() {
        let mut host = MapHost::new();
        host.insert(HostElement(1), None, None);
        assert_eq!(resolve_from_hit(&hit(1, 0), &host, &doc()), None);
    }

    #[test]
    fn pointer_falls_back_to_event_target() {
        let doc = doc();
        let leaf = doc.root().children()[0].children()[0].id();
        let mut host = MapHost::new();
        host.insert(HostElement(9), None, Some(leaf));

        let nothing = |_: Point| -> Option<HostHit> { None };
        let event = PointerEvent {
            phase: PointerPhase::Press,
            point: Point::new(1.0, 1.0),
            target: Some(HostElement(9)),
        };
        let (pos, _) = resolve_pointer(&event, &nothing, &host, &doc).unwrap();
        assert_eq!(pos, LeafPosition::new(leaf, 0));
    }
}
