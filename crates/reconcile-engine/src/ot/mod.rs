//! Operational transform over text-editing operations.
//!
//! - `apply`: replays an ordered operation list onto a string
//! - `detect`: range-overlap predicate used as a pre-check
//! - `transform`: rebases local operations over already-applied remote ones

pub mod apply;
pub mod detect;
pub mod transform;

pub use apply::apply_operations;
pub use detect::detect_conflicts;
pub use transform::{operational_transform, transform_operation};
