//! Copy-and-replace point edits.
//!
//! Contract:
//! - An edit never touches its input snapshot. It builds a replacement leaf
//!   under a fresh identity and grafts it into a full copy of the tree with
//!   [`update_node`], an identity match-and-replace rather than a path splice.
//! - The same call computes where the cursor lands in the new snapshot, so a
//!   cursor is never recomputed against a stale tree.
//! - Targets resolve by identity. No match is `NotFound`; several matches are
//!   an `IdentityCollision` and the edit is rejected instead of guessing.
//! - A structural target is descended to its first leaf.
//! - Offsets are character offsets, clamped to `[0, len]`.

use std::fmt;

use crate::traverse::{find_by_identity, first_leaf, next_leaf, previous_leaf, splice_out};
use crate::types::{Document, Id, Node, StyleStack};
use tools::utf8::{char_at, char_len, clamp_offset, split_at_char};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditError {
    /// No node in the snapshot carries this identity.
    NotFound(Id),
    /// The edit would cross the first/last leaf of the document.
    BoundaryReached,
    /// More than one node carries this identity.
    IdentityCollision { id: Id, count: usize },
    /// The identity resolved to a structural node without any leaf below it.
    NotALeaf(Id),
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::NotFound(id) => write!(f, "no node with identity {id}"),
            EditError::BoundaryReached => f.write_str("document boundary reached"),
            EditError::IdentityCollision { id, count } => {
                write!(f, "identity {id} shared by {count} nodes")
            }
            EditError::NotALeaf(id) => write!(f, "{id} has no leaf to edit"),
        }
    }
}

impl std::error::Error for EditError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditKind {
    Inserted,
    DeletedInterior,
    /// Deleted the last character of the previous leaf (cursor was at 0).
    MergedIntoPrevious,
    /// Deleted a leaf's only character, and with it the leaf.
    RemovedLeaf,
}

/// Result of a successful edit: the new snapshot and the cursor in it.
#[derive(Clone, Debug)]
pub struct Edit {
    pub doc: Document,
    pub kind: EditKind,
    /// Leaf the cursor rests on in `doc`.
    pub leaf: Id,
    pub offset: usize,
    /// Character the caret moved across, for caret geometry.
    pub crossed: Option<char>,
    /// Styling of the leaf `crossed` was read from. For a removed leaf this
    /// is the removed leaf's styling, not the landing leaf's.
    pub crossed_styling: StyleStack,
}

/// The single node carrying `id`.
pub fn resolve_unique(root: &Node, id: Id) -> Result<&Node, EditError> {
    match find_by_identity(root, id).as_slice() {
        [] => Err(EditError::NotFound(id)),
        [node] => Ok(*node),
        many => {
            log::warn!(
                target: "doc.mutate",
                "identity collision: {id} shared by {} nodes",
                many.len()
            );
            Err(EditError::IdentityCollision {
                id,
                count: many.len(),
            })
        }
    }
}

/// The leaf-like node for `id`, descending out of structural nodes.
pub fn resolve_leaf(root: &Node, id: Id) -> Result<&Node, EditError> {
    let node = resolve_unique(root, id)?;
    first_leaf(node).ok_or(EditError::NotALeaf(id))
}

/// Identity match-and-replace: the first node (pre-order) carrying `old`
/// is replaced wholesale, subtree included, by `new_node`. Everything else
/// is copied unchanged.
pub fn update_node(root: &Node, old: Id, new_node: Node) -> Node {
    fn walk(node: &Node, old: Id, new_node: &mut Option<Node>) -> Node {
        if node.id() == old
            && let Some(replacement) = new_node.take()
        {
            return replacement;
        }
        if node.children().is_empty() || new_node.is_none() {
            return node.clone();
        }
        let children = node
            .children()
            .iter()
            .map(|c| walk(c, old, new_node))
            .collect();
        node.with_children(children)
    }

    let mut new_node = Some(new_node);
    let out = walk(root, old, &mut new_node);
    if new_node.is_some() {
        log::debug!(target: "doc.mutate", "update_node: {old} not in snapshot");
    }
    out
}

/// `content` with `ch` inserted at the (clamped) character offset.
pub fn insert_char_at(content: &str, offset: usize, ch: char) -> String {
    let (head, tail) = split_at_char(content, offset);
    let mut out = String::with_capacity(content.len() + ch.len_utf8());
    out.push_str(head);
    out.push(ch);
    out.push_str(tail);
    out
}

/// `content` without the character before `offset`; `None` at offset 0.
pub fn remove_char_before(content: &str, offset: usize) -> Option<String> {
    let offset = offset.min(char_len(content));
    if offset == 0 {
        return None;
    }
    let (head, _) = split_at_char(content, offset - 1);
    let (_, tail) = split_at_char(content, offset);
    Some(format!("{head}{tail}"))
}

/// Insert `ch` before the character at `offset` in the leaf `target`.
///
/// The cursor lands right after the inserted character.
pub fn insert_character(
    doc: &Document,
    target: Id,
    ch: char,
    offset: usize,
) -> Result<Edit, EditError> {
    let leaf = resolve_leaf(doc.root(), target)?;
    let requested = offset;
    let offset = clamp_offset(leaf.content(), requested);
    if offset != requested {
        log::trace!(target: "doc.mutate", "insert: clamped offset {requested} to {offset}");
    }

    let mut ids = doc.ids().clone();
    let new_id = ids.fresh();
    let replacement = leaf.with_content(new_id, insert_char_at(leaf.content(), offset, ch));
    let root = update_node(doc.root(), leaf.id(), replacement);

    Ok(Edit {
        doc: doc.successor(root, ids),
        kind: EditKind::Inserted,
        leaf: new_id,
        offset: offset + 1,
        crossed: Some(ch),
        crossed_styling: leaf.styling().clone(),
    })
}

/// Delete the character before `offset` in the leaf `target`.
///
/// Cases, in priority order:
/// 1. The leaf holds exactly one character, wherever the cursor sits in it:
///    the leaf is removed and the cursor moves to the end of the previous
///    leaf (or the start of the next one at the document head).
/// 2. The cursor is at offset 0: the previous leaf loses its last character
///    and the cursor moves there.
/// 3. Otherwise the character before the cursor is removed in place.
pub fn delete_character_before(
    doc: &Document,
    target: Id,
    offset: usize,
) -> Result<Edit, EditError> {
    let leaf = resolve_leaf(doc.root(), target)?;
    let content = leaf.content();
    let requested = offset;
    let offset = clamp_offset(content, requested);
    if offset != requested {
        log::trace!(target: "doc.mutate", "delete: clamped offset {requested} to {offset}");
    }

    if char_len(content) == 1 {
        return remove_leaf(doc, leaf);
    }
    if offset == 0 {
        return merge_into_previous(doc, leaf);
    }

    let crossed = char_at(content, offset - 1);
    let Some(new_content) = remove_char_before(content, offset) else {
        return Err(EditError::BoundaryReached);
    };
    let mut ids = doc.ids().clone();
    let new_id = ids.fresh();
    let root = update_node(doc.root(), leaf.id(), leaf.with_content(new_id, new_content));

    Ok(Edit {
        doc: doc.successor(root, ids),
        kind: EditKind::DeletedInterior,
        leaf: new_id,
        offset: offset - 1,
        crossed,
        crossed_styling: leaf.styling().clone(),
    })
}

fn remove_leaf(doc: &Document, leaf: &Node) -> Result<Edit, EditError> {
    let root = doc.root();
    let (landing, offset) = match previous_leaf(root, leaf.id()) {
        Some(prev) => (prev.id(), char_len(prev.content())),
        None => match next_leaf(root, leaf.id()) {
            Some(next) => (next.id(), 0),
            None => {
                log::debug!(
                    target: "doc.mutate",
                    "refusing to remove {}: it is the only leaf",
                    leaf.id()
                );
                return Err(EditError::BoundaryReached);
            }
        },
    };

    Ok(Edit {
        doc: doc.successor(splice_out(root, leaf.id()), doc.ids().clone()),
        kind: EditKind::RemovedLeaf,
        leaf: landing,
        offset,
        crossed: leaf.content().chars().next(),
        crossed_styling: leaf.styling().clone(),
    })
}

fn merge_into_previous(doc: &Document, leaf: &Node) -> Result<Edit, EditError> {
    let root = doc.root();
    let prev = previous_leaf(root, leaf.id()).ok_or(EditError::BoundaryReached)?;
    let prev_len = char_len(prev.content());

    let Some(new_content) = remove_char_before(prev.content(), prev_len) else {
        // Nothing left to merge into: drop the empty run and stay put.
        log::debug!(target: "doc.mutate", "dropping empty leaf {}", prev.id());
        return Ok(Edit {
            doc: doc.successor(splice_out(root, prev.id()), doc.ids().clone()),
            kind: EditKind::RemovedLeaf,
            leaf: leaf.id(),
            offset: 0,
            crossed: None,
            crossed_styling: StyleStack::new(),
        });
    };

    let mut ids = doc.ids().clone();
    let new_id = ids.fresh();
    let crossed = prev.content().chars().last();
    let root = update_node(root, prev.id(), prev.with_content(new_id, new_content));

    Ok(Edit {
        doc: doc.successor(root, ids),
        kind: EditKind::MergedIntoPrevious,
        leaf: new_id,
        offset: prev_len - 1,
        crossed,
        crossed_styling: prev.styling().clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traverse::leaves;
    use crate::types::StyleTag;

    fn doc() -> Document {
        Document::new(Node::root(vec![
            Node::paragraph(vec![
                Node::leaf("hi "),
                Node::styled("is bold ", [StyleTag::Bold]),
                Node::leaf("yup"),
            ]),
            Node::paragraph(vec![Node::leaf("a")]),
        ]))
    }

    fn leaf(doc: &Document, content: &str) -> Id {
        leaves(doc.root())
            .into_iter()
            .find(|n| n.content() == content)
            .map(Node::id)
            .unwrap()
    }

    fn content_of(doc: &Document, id: Id) -> String {
        resolve_unique(doc.root(), id).unwrap().content().to_string()
    }

    #[test]
    fn insert_at_start_prepends() {
        let doc = doc();
        let target = leaf(&doc, "hi ");
        let edit = insert_character(&doc, target, '!', 0).unwrap();

        assert_eq!(content_of(&edit.doc, edit.leaf), "!hi ");
        assert_eq!(edit.offset, 1);
        assert_ne!(edit.leaf, target);
        assert!(find_by_identity(edit.doc.root(), target).is_empty());
    }

    #[test]
    fn insert_past_end_is_clamped_to_append() {
        let doc = doc();
        let edit = insert_character(&doc, leaf(&doc, "yup"), 's', 40).unwrap();
        assert_eq!(content_of(&edit.doc, edit.leaf), "yups");
        assert_eq!(edit.offset, 4);
    }

    #[test]
    fn insert_keeps_styling_and_input_snapshot() {
        let doc = doc();
        let bold = leaf(&doc, "is bold ");
        let edit = insert_character(&doc, bold, 'X', 2).unwrap();
        let node = resolve_unique(edit.doc.root(), edit.leaf).unwrap();

        assert_eq!(node.content(), "isX bold ");
        assert_eq!(node.styling().innermost(), Some(&StyleTag::Bold));
        assert_eq!(content_of(&doc, bold), "is bold ");
        assert!(edit.doc.version() > doc.version());
    }

    #[test]
    fn delete_at_end_removes_last_character() {
        let doc = doc();
        let edit = delete_character_before(&doc, leaf(&doc, "yup"), 3).unwrap();
        assert_eq!(edit.kind, EditKind::DeletedInterior);
        assert_eq!(content_of(&edit.doc, edit.leaf), "yu");
        assert_eq!(edit.offset, 2);
        assert_eq!(edit.crossed, Some('p'));
    }

    #[test]
    fn deleting_only_character_removes_leaf() {
        let doc = doc();
        let single = leaf(&doc, "a");
        let edit = delete_character_before(&doc, single, 1).unwrap();

        assert_eq!(edit.kind, EditKind::RemovedLeaf);
        assert!(find_by_identity(edit.doc.root(), single).is_empty());
        assert_eq!(content_of(&edit.doc, edit.leaf), "yup");
        assert_eq!(edit.offset, 3);
    }

    #[test]
    fn single_character_leaf_is_removed_even_with_cursor_before_it() {
        let doc = Document::new(Node::root(vec![Node::leaf("yup"), Node::leaf("a")]));
        let a = leaf(&doc, "a");
        let edit = delete_character_before(&doc, a, 0).unwrap();

        assert_eq!(edit.kind, EditKind::RemovedLeaf);
        let contents: Vec<&str> = leaves(edit.doc.root()).into_iter().map(Node::content).collect();
        assert_eq!(contents, vec!["yup"]);
        assert_eq!(content_of(&edit.doc, edit.leaf), "yup");
        assert_eq!(edit.offset, 3);
        assert_eq!(edit.crossed, Some('a'));
    }

    #[test]
    fn removed_leaf_reports_its_own_styling() {
        let doc = Document::new(Node::root(vec![
            Node::leaf("xy"),
            Node::styled("a", [StyleTag::Bold]),
        ]));
        let edit = delete_character_before(&doc, leaf(&doc, "a"), 1).unwrap();

        assert_eq!(content_of(&edit.doc, edit.leaf), "xy");
        assert!(resolve_unique(edit.doc.root(), edit.leaf).unwrap().styling().is_empty());
        assert_eq!(edit.crossed_styling, StyleStack::from([StyleTag::Bold]));
    }

    #[test]
    fn delete_at_start_merges_into_previous_leaf() {
        let doc = doc();
        let edit = delete_character_before(&doc, leaf(&doc, "yup"), 0).unwrap();

        assert_eq!(edit.kind, EditKind::MergedIntoPrevious);
        assert_eq!(content_of(&edit.doc, edit.leaf), "is bold");
        assert_eq!(edit.offset, 7);
        assert_eq!(edit.crossed, Some(' '));
    }

    #[test]
    fn delete_at_document_start_is_a_boundary() {
        let doc = doc();
        let err = delete_character_before(&doc, leaf(&doc, "hi "), 0).unwrap_err();
        assert_eq!(err, EditError::BoundaryReached);
    }

    #[test]
    fn removing_first_single_character_leaf_lands_on_next() {
        let doc = Document::new(Node::root(vec![Node::paragraph(vec![
            Node::leaf("x"),
            Node::leaf("rest"),
        ])]));
        let edit = delete_character_before(&doc, leaf(&doc, "x"), 1).unwrap();
        assert_eq!(content_of(&edit.doc, edit.leaf), "rest");
        assert_eq!(edit.offset, 0);
    }

    #[test]
    fn only_leaf_is_never_removed() {
        let doc = Document::new(Node::root(vec![Node::leaf("x")]));
        let err = delete_character_before(&doc, leaf(&doc, "x"), 1).unwrap_err();
        assert_eq!(err, EditError::BoundaryReached);
    }

    #[test]
    fn merging_into_empty_leaf_drops_it() {
        let doc = Document::new(Node::root(vec![Node::leaf(""), Node::leaf("yup")]));
        let yup = leaf(&doc, "yup");
        let edit = delete_character_before(&doc, yup, 0).unwrap();

        assert_eq!(edit.kind, EditKind::RemovedLeaf);
        assert_eq!(edit.leaf, yup);
        assert_eq!(leaves(edit.doc.root()).len(), 1);
    }

    #[test]
    fn unknown_target_is_not_found() {
        let doc = doc();
        let err = insert_character(&doc, Id(777), 'x', 0).unwrap_err();
        assert_eq!(err, EditError::NotFound(Id(777)));
    }

    #[test]
    fn colliding_target_is_rejected() {
        let mut root = Node::root(vec![Node::leaf("a"), Node::leaf("b")]);
        if let Some(children) = root.children_mut() {
            children[0].set_id(Id(5));
            children[1].set_id(Id(5));
        }
        let doc = Document::new(root);
        let err = insert_character(&doc, Id(5), 'x', 0).unwrap_err();
        assert_eq!(err, EditError::IdentityCollision { id: Id(5), count: 2 });
    }

    #[test]
    fn container_target_descends_to_first_leaf() {
        let doc = doc();
        let paragraph = doc.root().children()[0].id();
        let edit = insert_character(&doc, paragraph, '>', 0).unwrap();
        assert_eq!(content_of(&edit.doc, edit.leaf), ">hi ");
    }

    #[test]
    fn update_node_replaces_first_match_only() {
        let root = Node::root(vec![Node::leaf("a"), Node::leaf("b")]);
        let doc = Document::new(root);
        let a = leaf(&doc, "a");
        let out = update_node(doc.root(), a, Node::leaf("z"));
        let contents: Vec<&str> = leaves(&out).into_iter().map(Node::content).collect();
        assert_eq!(contents, vec!["z", "b"]);
    }

    #[test]
    fn text_primitives_handle_edges() {
        assert_eq!(insert_char_at("", 0, 'x'), "x");
        assert_eq!(insert_char_at("a€", 1, 'b'), "ab€");
        assert_eq!(remove_char_before("abc", 0), None);
        assert_eq!(remove_char_before("a€c", 2).as_deref(), Some("ac"));
        assert_eq!(remove_char_before("abc", 99).as_deref(), Some("ab"));
    }
}
