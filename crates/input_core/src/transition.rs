use std::fmt;

use core_types::Direction;
use doctree::{EditError, EditKind, Id, StyleStack};

/// Why an event left the editor state untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NoOp {
    NotFound(Id),
    BoundaryReached,
    IdentityCollision { id: Id, count: usize },
    NotALeaf(Id),
    /// The key has no editing meaning.
    Ignored,
    /// Vertical movement is classified but not acted on.
    Reserved(Direction),
}

impl From<EditError> for NoOp {
    fn from(err: EditError) -> Self {
        match err {
            EditError::NotFound(id) => NoOp::NotFound(id),
            EditError::BoundaryReached => NoOp::BoundaryReached,
            EditError::IdentityCollision { id, count } => NoOp::IdentityCollision { id, count },
            EditError::NotALeaf(id) => NoOp::NotALeaf(id),
        }
    }
}

impl fmt::Display for NoOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoOp::NotFound(id) => write!(f, "no node with identity {id}"),
            NoOp::BoundaryReached => f.write_str("document boundary reached"),
            NoOp::IdentityCollision { id, count } => {
                write!(f, "identity {id} shared by {count} nodes")
            }
            NoOp::NotALeaf(id) => write!(f, "{id} has no leaf"),
            NoOp::Ignored => f.write_str("ignored key"),
            NoOp::Reserved(dir) => write!(f, "{dir:?} movement is not supported"),
        }
    }
}

impl std::error::Error for NoOp {}

/// The one state change an input event produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// A new document snapshot was installed.
    Edited {
        kind: EditKind,
        crossed: Option<char>,
        /// Styling `crossed` was rendered with; the removed leaf's when the
        /// edit removed one.
        crossed_styling: StyleStack,
        direction: Direction,
    },
    /// The cursor moved; the document is unchanged.
    Moved {
        crossed: Option<char>,
        direction: Direction,
    },
    /// A pointer gesture moved the cursor and/or selection.
    Pointer,
    Unchanged(NoOp),
}

impl Transition {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Transition::Unchanged(_))
    }

    /// Character the caret crossed and which way, for caret geometry.
    pub fn caret_shift(&self) -> Option<(char, Direction)> {
        match self {
            Transition::Edited {
                crossed: Some(ch),
                direction,
                ..
            }
            | Transition::Moved {
                crossed: Some(ch),
                direction,
            } => Some((*ch, *direction)),
            _ => None,
        }
    }
}
