//! Position rebasing of local operations over remote ones.
//!
//! Precondition: `remote_ops` have already been applied, in order, to the
//! base that `local_ops` were computed against. Each local operation is
//! folded over every remote operation in order, and only its position moves:
//!
//! | remote            | condition                  | new local position                      |
//! |-------------------|----------------------------|-----------------------------------------|
//! | `Insert`          | `remote.pos <= local.pos`  | `local.pos + chars(remote.content)`     |
//! | `Delete`          | `remote.pos <= local.pos`  | `max(remote.pos, local.pos - length)`   |
//! | replace-`Insert`  | any                        | the `Delete` rule, then the `Insert` rule |
//! | `Retain`          | any                        | unchanged                               |
//!
//! The local kind does not change the arithmetic. For a local `Delete` that
//! overlaps a remote `Delete` the clamp pins it to the remote boundary; that
//! case is a best-effort heuristic and is not guaranteed to converge.
//! Non-overlapping insert/insert, insert/delete and delete/insert pairs do
//! converge.

use reconcile_core::Operation;
use tracing::{trace, warn};

/// Rebase every local operation over `remote_ops`, preserving order.
pub fn operational_transform(local_ops: &[Operation], remote_ops: &[Operation]) -> Vec<Operation> {
    local_ops
        .iter()
        .map(|op| transform_operation(op, remote_ops))
        .collect()
}

/// Rebase a single local operation over `remote_ops`.
pub fn transform_operation(local: &Operation, remote_ops: &[Operation]) -> Operation {
    let position = remote_ops.iter().fold(local.position(), |position, remote| {
        if let (Operation::Delete { length, .. }, Operation::Delete { .. }) = (local, remote) {
            if overlaps_delete(position, *length, remote) {
                warn!(
                    local_position = position,
                    remote_position = remote.position(),
                    "overlapping deletes; clamping to remote boundary"
                );
            }
        }
        shift(position, remote)
    });

    trace!(
        kind = local.kind(),
        from = local.position(),
        to = position,
        "transformed operation"
    );
    local.with_position(position)
}

fn shift(position: usize, remote: &Operation) -> usize {
    match remote {
        Operation::Insert {
            position: at,
            content,
            replaces,
        } => {
            let position = match replaces {
                Some(span) => shift_past_delete(position, *at, *span),
                None => position,
            };
            if *at <= position {
                position.saturating_add(content.chars().count())
            } else {
                position
            }
        }
        Operation::Delete {
            position: at,
            length,
        } => shift_past_delete(position, *at, *length),
        Operation::Retain { .. } => position,
    }
}

fn shift_past_delete(position: usize, at: usize, length: usize) -> usize {
    if at <= position {
        position.saturating_sub(length).max(at)
    } else {
        position
    }
}

fn overlaps_delete(position: usize, length: usize, remote: &Operation) -> bool {
    let local = position..position.saturating_add(length);
    let remote = remote.range();
    !local.is_empty() && !remote.is_empty() && local.start < remote.end && remote.start < local.end
}
