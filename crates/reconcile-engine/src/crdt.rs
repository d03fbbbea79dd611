//! Vector-clock CRDT state lifecycle and merge.
//!
//! A replica starts with [`create_crdt_state`], records each local edit with
//! [`increment_crdt`], and folds in a peer's snapshot with [`crdt_merge`].
//! The vector clock is authoritative for causality; `counter` is only a
//! scalar summary used to pick which payload survives a merge.

use reconcile_core::{CrdtState, VectorClock};
use tracing::debug;

/// Fresh replica state: `counter = 0`, `vector_clock = { site_id: 0 }`.
pub fn create_crdt_state<T>(site_id: impl Into<String>, initial_data: T) -> CrdtState<T> {
    let site_id = site_id.into();
    let mut vector_clock = VectorClock::new();
    vector_clock.set(&site_id, 0);

    CrdtState {
        site_id,
        counter: 0,
        data: initial_data,
        vector_clock,
    }
}

/// Record one local edit: bump `counter` and mirror it into this site's
/// clock entry. `data` is carried over untouched; pair with
/// [`CrdtState::with_data`] to change the payload.
///
/// Saturates at `u64::MAX` instead of wrapping.
pub fn increment_crdt<T>(state: CrdtState<T>) -> CrdtState<T> {
    let counter = state.counter.saturating_add(1);
    let mut vector_clock = state.vector_clock;
    vector_clock.set(&state.site_id, counter);

    CrdtState {
        site_id: state.site_id,
        counter,
        data: state.data,
        vector_clock,
    }
}

/// Merge a remote snapshot into the local replica's view.
///
/// - `vector_clock` is the component-wise max of both clocks
/// - `counter` is the sum of the merged clock's entries
/// - `data` comes from the side with the strictly greater counter; ties keep
///   the local payload
/// - `site_id` stays the local one, since the local replica performs the merge
///
/// The clock join is commutative and associative. The payload choice is
/// only symmetric when the counters differ.
pub fn crdt_merge<T: Clone>(local: &CrdtState<T>, remote: &CrdtState<T>) -> CrdtState<T> {
    let vector_clock = local.vector_clock.join(&remote.vector_clock);
    let counter = vector_clock.total();
    let take_remote = remote.counter > local.counter;

    let order = local.causal_order(remote);
    debug!(
        local_site = %local.site_id,
        remote_site = %remote.site_id,
        local_counter = local.counter,
        remote_counter = remote.counter,
        merged_counter = counter,
        ?order,
        take_remote,
        "crdt merge"
    );

    let data = if take_remote {
        remote.data.clone()
    } else {
        local.data.clone()
    };

    CrdtState {
        site_id: local.site_id.clone(),
        counter,
        data,
        vector_clock,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reconcile_core::CausalOrder;

    #[test]
    fn create_starts_at_zero() {
        let state = create_crdt_state("site-1", "x");
        assert_eq!(state.counter, 0);
        assert_eq!(state.vector_clock.get("site-1"), 0);
        assert_eq!(state.vector_clock.len(), 1);
        assert_eq!(state.data, "x");
    }

    #[test]
    fn increment_mirrors_counter_into_clock() {
        let state = increment_crdt(increment_crdt(create_crdt_state("s", 0)));
        assert_eq!(state.counter, 2);
        assert_eq!(state.vector_clock.get("s"), 2);
        assert_eq!(state.data, 0);
    }

    #[test]
    fn increment_saturates() {
        let mut state = create_crdt_state("s", ());
        state.counter = u64::MAX;
        let state = increment_crdt(state);
        assert_eq!(state.counter, u64::MAX);
        assert_eq!(state.vector_clock.get("s"), u64::MAX);
    }

    #[test]
    fn merge_joins_clocks_and_sums_counter() {
        let a = increment_crdt(increment_crdt(create_crdt_state("site-1", "x")));
        let b = increment_crdt(create_crdt_state("site-2", "y"));

        let merged = crdt_merge(&a, &b);
        assert_eq!(merged.vector_clock.get("site-1"), 2);
        assert_eq!(merged.vector_clock.get("site-2"), 1);
        assert_eq!(merged.counter, 3);
        assert_eq!(merged.data, "x");
        assert_eq!(merged.site_id, "site-1");
    }

    #[test]
    fn remote_payload_wins_on_greater_counter() {
        let a = create_crdt_state("a", 1);
        let b = increment_crdt(create_crdt_state("b", 2));
        assert_eq!(crdt_merge(&a, &b).data, 2);
        assert_eq!(crdt_merge(&a, &b).site_id, "a");
    }

    #[test]
    fn counter_tie_keeps_local_payload() {
        let a = increment_crdt(create_crdt_state("a", "local"));
        let b = increment_crdt(create_crdt_state("b", "remote"));
        assert_eq!(crdt_merge(&a, &b).data, "local");
        assert_eq!(crdt_merge(&b, &a).data, "remote");
    }

    #[test]
    fn merged_state_dominates_both_inputs() {
        let a = increment_crdt(create_crdt_state("a", ()));
        let b = increment_crdt(create_crdt_state("b", ()));
        let merged = crdt_merge(&a, &b);
        assert_eq!(a.causal_order(&merged), CausalOrder::Before);
        assert_eq!(b.causal_order(&merged), CausalOrder::Before);
    }

    #[test]
    fn merge_leaves_inputs_untouched() {
        let a = increment_crdt(create_crdt_state("a", vec![1]));
        let b = increment_crdt(increment_crdt(create_crdt_state("b", vec![2])));
        let (a_before, b_before) = (a.clone(), b.clone());
        let _ = crdt_merge(&a, &b);
        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }
}
