//! Error handling for reconcile.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod editor_error;
pub mod error_code;
pub mod reconcile_error;
pub mod resolve_error;

pub use config_error::ConfigError;
pub use editor_error::EditorOpError;
pub use error_code::ReconcileErrorCode;
pub use reconcile_error::{ReconcileError, ReconcileResult};
pub use resolve_error::ResolveError;
