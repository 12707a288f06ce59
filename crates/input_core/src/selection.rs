//! Pointer-driven selection.

use crate::cursor::LeafPosition;

/// Selection endpoints captured from a pointer press and release.
///
/// Endpoints may sit in different leaves. `visible` only controls whether the
/// host should draw the selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: Option<LeafPosition>,
    pub end: Option<LeafPosition>,
    pub visible: bool,
}

impl Selection {
    /// Start a new gesture: record `start`, forget the previous end.
    pub fn press(&mut self, start: Option<LeafPosition>) {
        self.start = start;
        self.end = None;
        self.visible = false;
    }

    /// Finish the gesture. The selection becomes visible when it spans at
    /// least one character.
    pub fn release(&mut self, end: Option<LeafPosition>) {
        self.end = end;
        self.visible = match (self.start, self.end) {
            (Some(start), Some(end)) => start != end,
            _ => false,
        };
    }

    /// Both endpoints, when the gesture completed.
    pub fn range(&self) -> Option<(LeafPosition, LeafPosition)> {
        Some((self.start?, self.end?))
    }

    /// `true` when there is no span to act on.
    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.range().is_none_or(|(start, end)| start == end)
    }

    pub fn clear(&mut self) {
        *self = Selection::default();
    }
}
