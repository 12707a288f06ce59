//! # input_core
//!
//! Host-agnostic cursor, selection, and navigation layer for the document
//! engine.
//!
//! - [`Key`] / [`Intent`]: host key names classified into editing intents
//! - [`Cursor`] / [`Selection`]: positions over leaves, in characters
//! - [`nav`]: character-wise and leaf-wise movement
//! - [`EditorState`]: one transition per input event
//!
//! ## Design Principles
//!
//! This crate does not depend on layout, text measurement, or any host
//! toolkit. Pointer positions arrive already resolved to a [`LeafPosition`];
//! caret pixels are computed by the caller from the returned [`Transition`].

mod config;
mod cursor;
mod key;
pub mod nav;
mod selection;
mod store;
mod traits;
mod transition;

pub use config::EditorConfig;
pub use cursor::{Cursor, LeafPosition};
pub use key::{Intent, Key, PointerPhase};
pub use nav::FORWARD_ENTRY_OFFSET;
pub use selection::Selection;
pub use store::EditorState;
pub use traits::EditorStore;
pub use transition::{NoOp, Transition};
