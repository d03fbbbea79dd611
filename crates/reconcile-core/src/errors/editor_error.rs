//! Editor operation conversion errors.

use super::error_code::{self, ReconcileErrorCode};

/// Errors raised when an editor-shaped operation cannot be normalized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorOpError {
    #[error("editor {kind} operation is missing required field `{field}`")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },
}

impl ReconcileErrorCode for EditorOpError {
    fn error_code(&self) -> &'static str {
        error_code::MALFORMED_EDITOR_OP
    }
}
