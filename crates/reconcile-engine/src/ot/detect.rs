//! Conflict detection.

use std::ops::Range;

use reconcile_core::Operation;

/// True iff some local operation's affected range intersects some remote
/// operation's range.
///
/// Ranges are half-open `[position, position + extent)`; empty ranges never
/// intersect anything. O(n·m), meant as a cheap check before a transform.
pub fn detect_conflicts(local_ops: &[Operation], remote_ops: &[Operation]) -> bool {
    local_ops.iter().any(|local| {
        let local_range = local.range();
        remote_ops
            .iter()
            .any(|remote| intersects(&local_range, &remote.range()))
    })
}

fn intersects(a: &Range<usize>, b: &Range<usize>) -> bool {
    !a.is_empty() && !b.is_empty() && a.start < b.end && b.start < a.end
}
