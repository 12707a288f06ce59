//! Character-wise and leaf-wise cursor movement.
//!
//! Movement is a pure function of the snapshot and the current position:
//! - Interior moves shift the offset by one and report the crossed character.
//! - Left at offset 0 enters the previous leaf at its end.
//! - Right at the end enters the next leaf at `forward_entry_offset`
//!   (clamped), crossing that leaf's first character.
//! - No neighbouring leaf means no move.
//! - Neighbours come from the snapshot's [`DocIndex`], which must have been
//!   built from the same snapshot.
//!
//! Note the asymmetry: entering forward lands *after* the first character,
//! entering backward lands after the last.

use core_types::Direction;
use doctree::mutate::resolve_leaf;
use doctree::{DocIndex, Document};
use tools::utf8::{char_at, char_len};

use crate::cursor::LeafPosition;
use crate::transition::NoOp;

/// Offset at which a forward boundary move enters the next leaf.
pub const FORWARD_ENTRY_OFFSET: usize = 1;

/// Result of one navigation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub to: LeafPosition,
    pub crossed: Option<char>,
}

/// Move one step from `from` in `direction`.
///
/// A structural `from.leaf` is first descended to its first leaf.
pub fn step(
    doc: &Document,
    index: &DocIndex,
    from: LeafPosition,
    direction: Direction,
    forward_entry_offset: usize,
) -> Result<Step, NoOp> {
    if !direction.is_horizontal() {
        return Err(NoOp::Reserved(direction));
    }

    let leaf = resolve_leaf(doc.root(), from.leaf)?;
    let content = leaf.content();
    let len = char_len(content);
    let offset = from.offset.min(len);

    let step = match direction {
        Direction::Right if offset < len => Step {
            to: LeafPosition::new(leaf.id(), offset + 1),
            crossed: char_at(content, offset),
        },
        Direction::Right => {
            let next = index.next_leaf(leaf.id()).ok_or(NoOp::BoundaryReached)?;
            let next_len = index.char_len(next).unwrap_or(0);
            Step {
                to: LeafPosition::new(next, forward_entry_offset.min(next_len)),
                crossed: index.first_char(next),
            }
        }
        Direction::Left if offset > 0 => Step {
            to: LeafPosition::new(leaf.id(), offset - 1),
            crossed: char_at(content, offset - 1),
        },
        Direction::Left => {
            let prev = index.previous_leaf(leaf.id()).ok_or(NoOp::BoundaryReached)?;
            Step {
                to: LeafPosition::new(prev, index.char_len(prev).unwrap_or(0)),
                crossed: None,
            }
        }
        Direction::Up | Direction::Down => return Err(NoOp::Reserved(direction)),
    };

    log::trace!(
        target: "input.nav",
        "{direction:?}: {}@{} -> {}@{}",
        from.leaf,
        from.offset,
        step.to.leaf,
        step.to.offset
    );
    Ok(step)
}

/// The position a structural or stale target actually rests on.
pub fn settle(doc: &Document, pos: LeafPosition) -> Result<LeafPosition, NoOp> {
    let leaf = resolve_leaf(doc.root(), pos.leaf)?;
    let offset = if leaf.id() == pos.leaf {
        pos.offset.min(char_len(leaf.content()))
    } else {
        0
    };
    Ok(LeafPosition::new(leaf.id(), offset))
}
