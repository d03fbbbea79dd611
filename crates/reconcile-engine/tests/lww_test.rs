//! Last-write-wins integration tests.

use chrono::{DateTime, Duration, TimeZone, Utc};
use reconcile_core::Change;
use reconcile_engine::last_write_wins;

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

#[test]
fn winner_is_returned_verbatim() {
    let local = Change::new(base(), "alice", vec!["a", "b"]);
    let remote = Change::new(base() - Duration::milliseconds(1), "zed", vec!["c"]);
    let winner = last_write_wins(local.clone(), remote);
    assert_eq!(winner, local);
}

#[test]
fn one_millisecond_is_enough() {
    let local = Change::new(base(), "zzz", 0);
    let remote = Change::new(base() + Duration::milliseconds(1), "aaa", 1);
    assert_eq!(last_write_wins(local, remote).data, 1);
}

#[test]
fn tie_break_is_order_independent() {
    let a = Change::new(base(), "user-1", "one");
    let b = Change::new(base(), "user-2", "two");
    assert_eq!(last_write_wins(a.clone(), b.clone()), last_write_wins(b, a));
}

#[test]
fn user_ids_compare_as_strings() {
    // "user-10" < "user-9" lexicographically.
    let a = Change::new(base(), "user-10", "ten");
    let b = Change::new(base(), "user-9", "nine");
    assert_eq!(last_write_wins(a, b).data, "nine");
}

#[test]
fn epoch_millis_and_iso_compare_as_the_same_instant() {
    let local: Change<String> = serde_json::from_str(
        r#"{"timestamp": "2024-03-01T12:00:00Z", "userId": "b", "data": "iso"}"#,
    )
    .unwrap();
    let remote: Change<String> = serde_json::from_str(
        r#"{"timestamp": 1709294400000, "userId": "a", "data": "millis"}"#,
    )
    .unwrap();
    assert_eq!(last_write_wins(local, remote).data, "iso");
}

#[test]
fn repeated_resolution_converges_on_latest() {
    let writes: Vec<Change<u32>> = (0..10)
        .map(|i| Change::new(base() + Duration::seconds(i64::from(i % 4)), format!("w{i}"), i))
        .collect();

    let winner = writes
        .iter()
        .cloned()
        .reduce(last_write_wins)
        .unwrap();
    // Latest second is 3 (writers 3 and 7); "w7" > "w3".
    assert_eq!(winner.data, 7);

    let reversed = writes.into_iter().rev().reduce(last_write_wins).unwrap();
    assert_eq!(reversed.data, 7);
}
