//! # reconcile-engine
//!
//! Pure functions that reconcile concurrent edits from independent writers
//! without a central lock. Three strategies, one per collaboration mode:
//!
//! - [`last_write_wins`]: whole-value writes; later timestamp wins, greater
//!   user id breaks ties
//! - [`operational_transform`]: character-level edits; local operations are
//!   rebased over remote ones already applied to the buffer
//! - [`crdt_merge`]: replica states joined by vector clock
//!
//! ## Supporting pieces
//!
//! - [`apply_operations`]: replays an ordered operation list onto a string
//! - [`detect_conflicts`]: cheap range-overlap pre-check
//! - [`create_crdt_state`] / [`increment_crdt`]: replica state lifecycle
//! - [`convert_editor_operation`]: normalizes editor-shaped edits
//! - [`resolve_conflict`]: strategy dispatcher; [`ConflictResolver`] is the
//!   configured facade over it
//!
//! ## Concurrency
//!
//! Nothing here holds state or does I/O. Every function takes its inputs by
//! value or shared reference and returns fresh values, so calls from many
//! threads need no locking. Ordering contracts belong to the caller: apply
//! transformed operations in the returned order, only after the remote
//! operations, and merge CRDT states that are consistent snapshots.

pub mod adapter;
pub mod crdt;
pub mod dispatch;
pub mod lww;
pub mod ot;
pub mod resolver;

// Re-export public API
pub use adapter::{convert_editor_operation, convert_editor_operations};
pub use crdt::{create_crdt_state, crdt_merge, increment_crdt};
pub use dispatch::{resolve_conflict, resolve_conflict_tagged};
pub use lww::last_write_wins;
pub use ot::{apply_operations, detect_conflicts, operational_transform, transform_operation};
pub use resolver::{ConflictResolver, TransformOutcome};
