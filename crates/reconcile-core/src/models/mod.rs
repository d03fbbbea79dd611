//! Value types exchanged with the engine.
//!
//! Everything here is plain data: constructed by a collaborator, handed to
//! the engine, never mutated in place. All types serialize to the JSON
//! shapes used on the wire by the surrounding sync services.

pub mod change;
pub mod crdt_state;
pub mod edit;
pub mod editor_operation;
pub mod operation;
pub mod strategy;
pub mod timestamp;
pub mod vector_clock;

pub use change::Change;
pub use crdt_state::CrdtState;
pub use edit::Edit;
pub use editor_operation::{EditorOpKind, EditorOperation};
pub use operation::Operation;
pub use strategy::Strategy;
pub use vector_clock::{CausalOrder, VectorClock};
