//! # folio
//!
//! A rich-text document engine: an immutable-and-replaced document tree,
//! character point edits, cursor navigation over leaves, and caret placement
//! through host-supplied measurement and hit-testing delegates.
//!
//! The engines live in their own crates and are re-exported here; [`Session`]
//! wires them together for a host.

pub mod session;

pub use core_types;
pub use doctree;
pub use input_core;
pub use layout;

pub use session::Session;
