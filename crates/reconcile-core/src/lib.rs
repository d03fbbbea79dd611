//! # reconcile-core
//!
//! Foundation crate for the reconcile conflict-resolution engine.
//! Defines the edit value types, errors, config, tracing setup, and constants.
//! The engine crate depends on this; so do collaborators that only need to
//! build or (de)serialize edits.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::ReconcileConfig;
pub use errors::{ReconcileError, ReconcileResult};
pub use models::{
    CausalOrder, Change, CrdtState, Edit, EditorOpKind, EditorOperation, Operation, Strategy,
    VectorClock,
};
