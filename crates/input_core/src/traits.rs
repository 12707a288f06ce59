//! Editor store trait defining the interface hosts drive.
//!
//! Hosts and the session layer talk to this trait rather than to
//! [`EditorState`](crate::EditorState) directly, so tests and alternative
//! frontends can swap in their own store.

use core_types::{Direction, DocVersion};
use doctree::{Document, IdRemap, Node};

use crate::cursor::{Cursor, LeafPosition};
use crate::key::{Intent, Key, PointerPhase};
use crate::selection::Selection;
use crate::transition::{NoOp, Transition};

pub trait EditorStore {
    // =========================================================================
    // Events
    // =========================================================================

    /// Classify `key` and apply the resulting intent.
    fn handle_key(&mut self, key: &Key) -> Transition;

    fn apply(&mut self, intent: Intent) -> Transition;

    fn move_cursor(&mut self, direction: Direction) -> Transition;

    /// Insert `ch` before the cursor.
    fn insert_char(&mut self, ch: char) -> Transition;

    /// Remove the character before the cursor.
    fn delete_backward(&mut self) -> Transition;

    fn pointer(&mut self, phase: PointerPhase, at: Option<LeafPosition>) -> Transition;

    fn set_cursor(&mut self, pos: LeafPosition) -> Result<(), NoOp>;

    /// Re-emit for presentation, remapping held identities.
    fn reemit(&mut self) -> IdRemap;

    // =========================================================================
    // Read-Only Getters
    // =========================================================================

    fn document(&self) -> &Document;

    fn version(&self) -> DocVersion;

    fn cursor(&self) -> Cursor;

    fn selection(&self) -> &Selection;

    fn current_leaf(&self) -> Option<&Node>;
}

impl EditorStore for crate::store::EditorState {
    #[inline]
    fn handle_key(&mut self, key: &Key) -> Transition {
        crate::store::EditorState::handle_key(self, key)
    }

    #[inline]
    fn apply(&mut self, intent: Intent) -> Transition {
        crate::store::EditorState::apply(self, intent)
    }

    #[inline]
    fn move_cursor(&mut self, direction: Direction) -> Transition {
        crate::store::EditorState::move_cursor(self, direction)
    }

    #[inline]
    fn insert_char(&mut self, ch: char) -> Transition {
        crate::store::EditorState::insert_char(self, ch)
    }

    #[inline]
    fn delete_backward(&mut self) -> Transition {
        crate::store::EditorState::delete_backward(self)
    }

    #[inline]
    fn pointer(&mut self, phase: PointerPhase, at: Option<LeafPosition>) -> Transition {
        crate::store::EditorState::pointer(self, phase, at)
    }

    #[inline]
    fn set_cursor(&mut self, pos: LeafPosition) -> Result<(), NoOp> {
        crate::store::EditorState::set_cursor(self, pos)
    }

    #[inline]
    fn reemit(&mut self) -> IdRemap {
        crate::store::EditorState::reemit(self)
    }

    #[inline]
    fn document(&self) -> &Document {
        crate::store::EditorState::document(self)
    }

    #[inline]
    fn version(&self) -> DocVersion {
        crate::store::EditorState::version(self)
    }

    #[inline]
    fn cursor(&self) -> Cursor {
        crate::store::EditorState::cursor(self)
    }

    #[inline]
    fn selection(&self) -> &Selection {
        crate::store::EditorState::selection(self)
    }

    #[inline]
    fn current_leaf(&self) -> Option<&Node> {
        crate::store::EditorState::current_leaf(self)
    }
}
