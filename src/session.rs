//! One editing session: input events in, document + cursor + caret out.
//!
//! The session is the only place where the three engines meet. Key and
//! pointer events go to the editor state; whatever character the cursor
//! crossed is handed to the caret resolver together with the styling of the
//! leaf the cursor landed on.

use doctree::seed::sample_document;
use doctree::{Document, IdRemap, StyleStack};
use input_core::{
    Cursor, EditorConfig, EditorState, Key, PointerPhase, Selection, Transition,
};
use layout::{
    CaretPos, FixedAdvanceMeasurer, HitTester, HostTree, PointerEvent, TextMeasurer,
    resolve_caret_geometry, resolve_pointer,
};

pub struct Session {
    state: EditorState,
    caret: CaretPos,
    measurer: Box<dyn TextMeasurer>,
}

impl Session {
    pub fn new(doc: Document, config: EditorConfig, measurer: Box<dyn TextMeasurer>) -> Self {
        let state = EditorState::with_config(doc, config);
        let height = measurer.line_height(StyleStack::plain());
        Self {
            state,
            caret: CaretPos {
                height,
                ..CaretPos::default()
            },
            measurer,
        }
    }

    /// The sample document with default config and a fixed-advance measurer.
    pub fn with_sample() -> Self {
        Self::new(
            sample_document(),
            EditorConfig::default(),
            Box::new(FixedAdvanceMeasurer::default()),
        )
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn document(&self) -> &Document {
        self.state.document()
    }

    pub fn cursor(&self) -> Cursor {
        self.state.cursor()
    }

    pub fn selection(&self) -> &Selection {
        self.state.selection()
    }

    pub fn caret(&self) -> CaretPos {
        self.caret
    }

    /// Override the caret, e.g. after the host has laid the document out.
    pub fn set_caret(&mut self, caret: CaretPos) {
        self.caret = caret;
    }

    /// Handle a host key name such as `"ArrowLeft"` or `"a"`.
    pub fn key(&mut self, name: &str) -> Transition {
        self.handle_key(&Key::from_name(name))
    }

    pub fn handle_key(&mut self, key: &Key) -> Transition {
        let transition = self.state.handle_key(key);
        self.follow(&transition);
        transition
    }

    /// Resolve a pointer event through the host delegates and apply it.
    ///
    /// A press that lands on a leaf moves the caret to the rectangle the
    /// host reported for the hit.
    pub fn pointer(
        &mut self,
        event: &PointerEvent,
        tester: &dyn HitTester,
        host: &dyn HostTree,
    ) -> Transition {
        let resolved = resolve_pointer(event, tester, host, self.state.document());
        let transition = self.state.pointer(event.phase, resolved.map(|(pos, _)| pos));

        if let (PointerPhase::Press, Some((_, hit)), false) =
            (event.phase, resolved, transition.is_unchanged())
        {
            let height = if hit.rect.height > 0.0 {
                hit.rect.height
            } else {
                self.measurer.line_height(self.current_styling())
            };
            self.caret = CaretPos {
                x: hit.rect.x,
                y: hit.rect.y,
                height,
            };
        }
        transition
    }

    /// Re-emit the document for the presentation layer.
    pub fn render(&mut self) -> IdRemap {
        let remap = self.state.reemit();
        log::trace!(
            target: "folio.session",
            "render: {} remapped identities",
            remap.len()
        );
        remap
    }

    fn current_styling(&self) -> &StyleStack {
        self.state
            .current_leaf()
            .map_or(StyleStack::plain(), |leaf| leaf.styling())
    }

    fn follow(&mut self, transition: &Transition) {
        let (direction, crossed_styling) = match transition {
            Transition::Edited {
                direction,
                crossed_styling,
                ..
            } => (*direction, Some(crossed_styling)),
            Transition::Moved { direction, .. } => (*direction, None),
            Transition::Pointer => return,
            Transition::Unchanged(reason) => {
                log::debug!(target: "folio.session", "unchanged: {reason}");
                return;
            }
        };
        let crossed = transition.caret_shift().map(|(ch, _)| ch);
        let styling = crossed_styling.unwrap_or_else(|| self.current_styling());
        self.caret = resolve_caret_geometry(
            self.caret,
            styling,
            crossed,
            direction,
            self.measurer.as_ref(),
        );
    }
}
