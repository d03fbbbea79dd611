//! Editor operation adapter.
//!
//! Editors emit `insert` / `delete` / `replace` events whose fields are all
//! optional on the wire. This module validates them once at the boundary and
//! produces canonical [`Operation`]s. A replace becomes an insert that also
//! carries the span it overwrites, so downstream code never sees a fourth
//! operation kind.

use reconcile_core::errors::EditorOpError;
use reconcile_core::{EditorOpKind, EditorOperation, Operation, ReconcileResult};
use tracing::debug;

/// Convert one editor operation.
///
/// # Errors
///
/// `EditorOpError::MissingField` when an `insert`/`replace` has no `content`
/// or a `delete`/`replace` has no `length`.
pub fn convert_editor_operation(editor_op: &EditorOperation) -> ReconcileResult<Operation> {
    let kind = editor_op.kind.as_str();
    let op = match editor_op.kind {
        EditorOpKind::Insert => Operation::insert(editor_op.position, content(editor_op, kind)?),
        EditorOpKind::Delete => Operation::delete(editor_op.position, length(editor_op, kind)?),
        EditorOpKind::Replace => Operation::replace(
            editor_op.position,
            length(editor_op, kind)?,
            content(editor_op, kind)?,
        ),
    };
    Ok(op)
}

/// Convert a batch in order, stopping at the first malformed entry.
pub fn convert_editor_operations(
    editor_ops: &[EditorOperation],
) -> ReconcileResult<Vec<Operation>> {
    let ops = editor_ops
        .iter()
        .map(convert_editor_operation)
        .collect::<ReconcileResult<Vec<_>>>()?;
    debug!(count = ops.len(), "converted editor operations");
    Ok(ops)
}

fn content<'a>(editor_op: &'a EditorOperation, kind: &'static str) -> Result<&'a str, EditorOpError> {
    editor_op
        .content
        .as_deref()
        .ok_or(EditorOpError::MissingField {
            kind,
            field: "content",
        })
}

fn length(editor_op: &EditorOperation, kind: &'static str) -> Result<usize, EditorOpError> {
    editor_op.length.ok_or(EditorOpError::MissingField {
        kind,
        field: "length",
    })
}
