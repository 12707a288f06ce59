pub mod emit;
pub mod index;
pub mod mutate;
pub mod perf_fixtures;
pub mod seed;
pub mod snapshot;
pub mod traverse;
pub mod validate;

mod id;
mod types;

pub use crate::emit::{IdRemap, reemit};
pub use crate::id::{IdGen, assign_node_ids};
pub use crate::index::DocIndex;
pub use crate::mutate::{
    Edit, EditError, EditKind, delete_character_before, insert_character, update_node,
};
pub use crate::snapshot::{Outline, SnapshotOptions, outline};
pub use crate::traverse::{
    find_by_identity, first_leaf, leaves, next_leaf, previous_leaf, splice_out,
};
pub use crate::types::{ContainerRole, Document, Id, ListKind, Node, RawId, StyleStack, StyleTag};
pub use crate::validate::{Violation, validate};
