//! Cursor position over the leaves of a document.

use doctree::Id;

/// A character position inside one leaf.
///
/// `offset` counts characters: `0` sits before the first character and the
/// leaf's length after the last.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LeafPosition {
    pub leaf: Id,
    pub offset: usize,
}

impl LeafPosition {
    #[inline]
    pub const fn new(leaf: Id, offset: usize) -> Self {
        Self { leaf, offset }
    }
}

/// The text cursor.
///
/// `anchor_offset` follows `offset` on keyboard moves and is pinned together
/// with it on pointer press; it is where a future shift-extend would start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    pub leaf: Id,
    pub offset: usize,
    pub anchor_offset: usize,
}

impl Cursor {
    pub const fn at(leaf: Id, offset: usize) -> Self {
        Self {
            leaf,
            offset,
            anchor_offset: offset,
        }
    }

    pub const fn position(&self) -> LeafPosition {
        LeafPosition::new(self.leaf, self.offset)
    }

    /// This cursor with both offsets clamped to `[0, len]`.
    pub fn clamped(self, len: usize) -> Self {
        Self {
            leaf: self.leaf,
            offset: self.offset.min(len),
            anchor_offset: self.anchor_offset.min(len),
        }
    }

    /// Move to `pos`, dragging the anchor along.
    pub(crate) fn move_to(&mut self, pos: LeafPosition) {
        *self = Self::at(pos.leaf, pos.offset);
    }
}

impl From<LeafPosition> for Cursor {
    fn from(pos: LeafPosition) -> Self {
        Self::at(pos.leaf, pos.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_bounds_both_offsets() {
        let cursor = Cursor {
            leaf: Id(3),
            offset: 9,
            anchor_offset: 2,
        };
        let clamped = cursor.clamped(4);
        assert_eq!(clamped.offset, 4);
        assert_eq!(clamped.anchor_offset, 2);
        assert_eq!(cursor.clamped(1).anchor_offset, 1);
    }

    #[test]
    fn move_to_drags_anchor() {
        let mut cursor = Cursor::at(Id(1), 0);
        cursor.move_to(LeafPosition::new(Id(2), 5));
        assert_eq!(cursor, Cursor::at(Id(2), 5));
        assert_eq!(cursor.anchor_offset, 5);
    }
}
