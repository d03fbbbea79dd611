//! Top-level error aggregating every subsystem error.

use super::error_code::ReconcileErrorCode;
use super::{ConfigError, EditorOpError, ResolveError};

/// Errors that can escape the public API.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    EditorOp(#[from] EditorOpError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Convenience alias used throughout the workspace.
pub type ReconcileResult<T> = std::result::Result<T, ReconcileError>;

impl ReconcileError {
    /// Whether retrying the same call could succeed.
    ///
    /// Always `false`: the engine is pure, so the same inputs fail the same way.
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}

impl ReconcileErrorCode for ReconcileError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Resolve(e) => e.error_code(),
            Self::EditorOp(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
