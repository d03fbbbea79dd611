//! Property tests for reconcile-engine.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use reconcile_core::{CausalOrder, Change, Operation, VectorClock};
use reconcile_engine::{
    apply_operations, create_crdt_state, crdt_merge, detect_conflicts, increment_crdt,
    last_write_wins, operational_transform,
};

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        (0..30usize, "[a-z]{0,5}").prop_map(|(p, s)| Operation::insert(p, s)),
        (0..30usize, 0..10usize).prop_map(|(p, l)| Operation::delete(p, l)),
        (0..30usize, 0..10usize).prop_map(|(p, l)| Operation::retain(p, l)),
        (0..30usize, 0..10usize, "[a-z]{0,5}").prop_map(|(p, l, s)| Operation::replace(p, l, s)),
    ]
}

fn clock_strategy() -> impl Strategy<Value = VectorClock> {
    prop::collection::vec(("[a-d]", 0..10u64), 0..5)
        .prop_map(|entries| entries.into_iter().collect())
}

/// A base document plus an insert position, a delete range and two payloads.
fn edit_pair_strategy() -> impl Strategy<Value = (String, usize, usize, usize, String)> {
    "[a-z]{1,20}".prop_flat_map(|base| {
        let n = base.chars().count();
        (Just(base), 0..=n, 0..n, 1..=n, "[A-Z]{1,4}")
    })
}

/// Both application orders of a concurrent pair produce the same document.
fn converges(base: &str, a: &Operation, b: &Operation) -> bool {
    let a = std::slice::from_ref(a);
    let b = std::slice::from_ref(b);
    let a_first = apply_operations(&apply_operations(base, a), &operational_transform(b, a));
    let b_first = apply_operations(&apply_operations(base, b), &operational_transform(a, b));
    a_first == b_first
}

// =============================================================================
// Last-write-wins
// =============================================================================
proptest! {
    #[test]
    fn lww_winner_is_order_independent(
        t1 in 0..5i64, t2 in 0..5i64,
        u1 in "[a-c]{1,2}", u2 in "[a-c]{1,2}",
    ) {
        let a = Change::new(Utc.timestamp_opt(t1, 0).unwrap(), u1, 1);
        let b = Change::new(Utc.timestamp_opt(t2, 0).unwrap(), u2, 2);

        let ab = last_write_wins(a.clone(), b.clone());
        let ba = last_write_wins(b, a);
        prop_assert_eq!((ab.timestamp, ab.user_id), (ba.timestamp, ba.user_id));
    }
}

// =============================================================================
// Vector clock join laws
// =============================================================================
proptest! {
    #[test]
    fn join_is_commutative(a in clock_strategy(), b in clock_strategy()) {
        prop_assert_eq!(a.join(&b), b.join(&a));
    }

    #[test]
    fn join_is_associative(a in clock_strategy(), b in clock_strategy(), c in clock_strategy()) {
        prop_assert_eq!(a.join(&b).join(&c), a.join(&b.join(&c)));
    }

    #[test]
    fn join_is_idempotent(a in clock_strategy()) {
        prop_assert_eq!(a.join(&a), a);
    }

    #[test]
    fn join_is_an_upper_bound(a in clock_strategy(), b in clock_strategy()) {
        let joined = a.join(&b);
        for side in [&a, &b] {
            let order = side.compare(&joined);
            prop_assert!(matches!(order, CausalOrder::Before | CausalOrder::Equal));
        }
    }

    #[test]
    fn merge_counter_never_regresses(n1 in 0..20u64, n2 in 0..20u64) {
        let a = (0..n1).fold(create_crdt_state("a", ()), |s, _| increment_crdt(s));
        let b = (0..n2).fold(create_crdt_state("b", ()), |s, _| increment_crdt(s));
        let merged = crdt_merge(&a, &b);
        prop_assert!(merged.counter >= a.counter.max(b.counter));
        prop_assert_eq!(merged.counter, n1 + n2);
    }
}

// =============================================================================
// Operational transform: intention preservation for non-overlapping pairs
// =============================================================================
proptest! {
    #[test]
    fn insert_insert_converges((base, p, q, _, s) in edit_pair_strategy(), t in "[0-9]{1,4}") {
        prop_assume!(p != q);
        let a = Operation::insert(p, s);
        let b = Operation::insert(q, t);
        prop_assert!(converges(&base, &a, &b));
    }

    #[test]
    fn insert_delete_converges((base, p, q, l, s) in edit_pair_strategy()) {
        let n = base.chars().count();
        let l = l.min(n - q);
        prop_assume!(l > 0);
        prop_assume!(p <= q || p >= q + l);

        let insert = Operation::insert(p, s);
        let delete = Operation::delete(q, l);
        prop_assert!(converges(&base, &insert, &delete));
    }
}

// =============================================================================
// Application and detection
// =============================================================================
proptest! {
    #[test]
    fn retain_is_identity(
        base in "\\PC{0,30}",
        spans in prop::collection::vec((0..40usize, 0..40usize), 0..6),
    ) {
        let ops: Vec<Operation> = spans.into_iter().map(|(p, l)| Operation::retain(p, l)).collect();
        prop_assert_eq!(apply_operations(&base, &ops), base);
    }

    #[test]
    fn apply_never_panics(
        base in "[a-z]{0,20}",
        ops in prop::collection::vec(operation_strategy(), 0..8),
    ) {
        let out = apply_operations(&base, &ops);
        let inserted: usize = ops
            .iter()
            .map(|op| match op {
                Operation::Insert { content, .. } => content.chars().count(),
                _ => 0,
            })
            .sum();
        prop_assert!(out.chars().count() <= base.chars().count() + inserted);
    }

    #[test]
    fn detection_is_symmetric(
        local in prop::collection::vec(operation_strategy(), 0..5),
        remote in prop::collection::vec(operation_strategy(), 0..5),
    ) {
        prop_assert_eq!(detect_conflicts(&local, &remote), detect_conflicts(&remote, &local));
    }

    #[test]
    fn transform_preserves_count_and_payload(
        local in prop::collection::vec(operation_strategy(), 0..5),
        remote in prop::collection::vec(operation_strategy(), 0..5),
    ) {
        let out = operational_transform(&local, &remote);
        prop_assert_eq!(out.len(), local.len());
        for (before, after) in local.iter().zip(&out) {
            prop_assert_eq!(before.with_position(after.position()), after.clone());
        }
    }
}
