//! Editor state: the current snapshot plus cursor and selection over it.
//!
//! Every input event goes through exactly one method here and yields exactly
//! one [`Transition`]. A rejected event leaves the state untouched; an
//! accepted edit installs the new snapshot, rebuilds the index, and moves the
//! cursor to where the edit put it.

use core_types::{Direction, DocVersion};
use doctree::{
    DocIndex, Document, IdRemap, Node, Outline, SnapshotOptions, delete_character_before,
    insert_character, reemit,
};
use doctree::mutate::resolve_unique;

use crate::config::EditorConfig;
use crate::cursor::{Cursor, LeafPosition};
use crate::key::{Intent, Key, PointerPhase};
use crate::nav;
use crate::selection::Selection;
use crate::transition::{NoOp, Transition};

/// Document, cursor, and selection for one editing session.
///
/// # Example
///
/// ```
/// use doctree::seed::sample_document;
/// use input_core::{EditorState, Key};
///
/// let mut state = EditorState::new(sample_document());
/// state.handle_key(&Key::from_name("!"));
///
/// assert_eq!(state.current_leaf().map(|n| n.content()), Some("!hi "));
/// assert_eq!(state.cursor().offset, 1);
/// ```
#[derive(Clone, Debug)]
pub struct EditorState {
    doc: Document,
    index: DocIndex,
    cursor: Cursor,
    selection: Selection,
    config: EditorConfig,
}

impl EditorState {
    pub fn new(doc: Document) -> Self {
        Self::with_config(doc, EditorConfig::default())
    }

    /// Start at offset 0 of the first leaf.
    pub fn with_config(doc: Document, config: EditorConfig) -> Self {
        let index = DocIndex::build(doc.root());
        let start = index.leaves().first().copied().unwrap_or(doc.root().id());
        Self {
            cursor: Cursor::at(start, 0),
            doc,
            index,
            selection: Selection::default(),
            config,
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn version(&self) -> DocVersion {
        self.doc.version()
    }

    pub fn index(&self) -> &DocIndex {
        &self.index
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The cursor, offsets clamped to the current leaf.
    pub fn cursor(&self) -> Cursor {
        let len = self.index.char_len(self.cursor.leaf).unwrap_or(0);
        self.cursor.clamped(len)
    }

    /// The leaf the cursor rests on, if it resolves uniquely.
    pub fn current_leaf(&self) -> Option<&Node> {
        resolve_unique(self.doc.root(), self.cursor.leaf).ok()
    }

    pub fn handle_key(&mut self, key: &Key) -> Transition {
        self.apply(Intent::from_key(key))
    }

    pub fn apply(&mut self, intent: Intent) -> Transition {
        match intent {
            Intent::Move(direction) => self.move_cursor(direction),
            Intent::DeleteBackward => self.delete_backward(),
            Intent::Insert(ch) => self.insert_char(ch),
            Intent::Ignore => self.reject(NoOp::Ignored),
        }
    }

    pub fn move_cursor(&mut self, direction: Direction) -> Transition {
        let from = self.cursor.position();
        let forward_entry_offset = self.config.forward_entry_offset;
        match nav::step(&self.doc, &self.index, from, direction, forward_entry_offset) {
            Ok(step) => {
                self.cursor.move_to(step.to);
                Transition::Moved {
                    crossed: step.crossed,
                    direction,
                }
            }
            Err(reason) => self.reject(reason),
        }
    }

    pub fn insert_char(&mut self, ch: char) -> Transition {
        match insert_character(&self.doc, self.cursor.leaf, ch, self.cursor.offset) {
            Ok(edit) => {
                let transition = Transition::Edited {
                    kind: edit.kind,
                    crossed: edit.crossed,
                    crossed_styling: edit.crossed_styling,
                    direction: Direction::Right,
                };
                self.cursor.move_to(LeafPosition::new(edit.leaf, edit.offset));
                self.install(edit.doc);
                transition
            }
            Err(err) => self.reject(err.into()),
        }
    }

    pub fn delete_backward(&mut self) -> Transition {
        match delete_character_before(&self.doc, self.cursor.leaf, self.cursor.offset) {
            Ok(edit) => {
                let transition = Transition::Edited {
                    kind: edit.kind,
                    crossed: edit.crossed,
                    crossed_styling: edit.crossed_styling,
                    direction: Direction::Left,
                };
                self.cursor.move_to(LeafPosition::new(edit.leaf, edit.offset));
                self.install(edit.doc);
                transition
            }
            Err(err) => self.reject(err.into()),
        }
    }

    /// Apply one pointer phase at an already-resolved position.
    ///
    /// Press moves the cursor (anchor included) and starts a selection;
    /// release closes it. `None` means the pointer hit nothing editable.
    pub fn pointer(&mut self, phase: PointerPhase, at: Option<LeafPosition>) -> Transition {
        let settled = match at.map(|pos| nav::settle(&self.doc, pos)).transpose() {
            Ok(settled) => settled,
            Err(reason) => return self.reject(reason),
        };
        match phase {
            PointerPhase::Press => match settled {
                Some(pos) => {
                    self.cursor.move_to(pos);
                    self.selection.press(settled);
                }
                None => self.selection.clear(),
            },
            PointerPhase::Release => self.selection.release(settled),
        }
        Transition::Pointer
    }

    /// Place the cursor directly.
    pub fn set_cursor(&mut self, pos: LeafPosition) -> Result<(), NoOp> {
        let pos = nav::settle(&self.doc, pos)?;
        self.cursor.move_to(pos);
        Ok(())
    }

    /// Re-emit the snapshot for presentation and carry cursor and selection
    /// over to the new identities.
    pub fn reemit(&mut self) -> IdRemap {
        let (doc, remap) = reemit(&self.doc, self.config.preserve_ids_on_render);
        if remap.is_identity() {
            return remap;
        }

        match remap.resolve(self.cursor.leaf) {
            Some(leaf) => self.cursor.leaf = leaf,
            None => {
                log::warn!(
                    target: "input.store",
                    "cursor leaf {} lost on re-emit, resetting",
                    self.cursor.leaf
                );
                self.cursor = Cursor::at(doc.root().id(), 0);
            }
        }
        let remap_pos = |pos: Option<LeafPosition>| {
            pos.and_then(|p| remap.resolve(p.leaf).map(|leaf| LeafPosition::new(leaf, p.offset)))
        };
        self.selection.start = remap_pos(self.selection.start);
        self.selection.end = remap_pos(self.selection.end);

        self.install(doc);
        if !self.index.is_leaf_like(self.cursor.leaf)
            && let Some(&first) = self.index.leaves().first()
        {
            self.cursor = Cursor::at(first, 0);
        }
        remap
    }

    fn install(&mut self, doc: Document) {
        self.index = DocIndex::build(doc.root());
        self.doc = doc;

        let index = &self.index;
        for end in [&mut self.selection.start, &mut self.selection.end] {
            if end.is_some_and(|pos| !index.contains(pos.leaf)) {
                *end = None;
            }
        }
        if self.selection.range().is_none() {
            self.selection.visible = false;
        }
        log::trace!(
            target: "input.store",
            "installed {:?}, cursor {}@{}",
            self.doc.version(),
            self.cursor.leaf,
            self.cursor.offset
        );
        if log::log_enabled!(target: "input.store", log::Level::Trace) {
            let options = SnapshotOptions {
                ignore_ids: false,
                ..SnapshotOptions::default()
            };
            log::trace!(
                target: "input.store",
                "tree:\n{}",
                Outline::new(self.doc.root(), options)
            );
        }
    }

    fn reject(&self, reason: NoOp) -> Transition {
        match &reason {
            NoOp::IdentityCollision { .. } => {
                log::warn!(target: "input.store", "event rejected: {reason}")
            }
            _ => log::debug!(target: "input.store", "no transition: {reason}"),
        }
        Transition::Unchanged(reason)
    }
}
