use crate::nav::FORWARD_ENTRY_OFFSET;

/// Editor behaviour knobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditorConfig {
    /// Offset at which a forward boundary move enters the next leaf.
    pub forward_entry_offset: usize,
    /// Keep node identities when re-emitting for presentation.
    pub preserve_ids_on_render: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            forward_entry_offset: FORWARD_ENTRY_OFFSET,
            preserve_ids_on_render: false,
        }
    }
}
