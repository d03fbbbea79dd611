//! Last-Write-Wins resolver.
//!
//! Compares `(timestamp, user_id)` pairs: the strictly later timestamp wins;
//! on equal timestamps the lexicographically greater user id wins. The
//! winner is returned verbatim, never blended with the loser.
//!
//! # Examples
//!
//! ```
//! use chrono::{Duration, Utc};
//! use reconcile_core::Change;
//! use reconcile_engine::last_write_wins;
//!
//! let now = Utc::now();
//! let local = Change::new(now, "user-a", "draft");
//! let remote = Change::new(now + Duration::seconds(1), "user-b", "final");
//!
//! assert_eq!(last_write_wins(local, remote).data, "final");
//! ```

use reconcile_core::Change;
use tracing::debug;

/// Pick the winning write between two competing changes.
///
/// Total and deterministic. If both `timestamp` and `user_id` are equal the
/// candidates are indistinguishable under the ordering and `remote` is
/// returned.
pub fn last_write_wins<T>(local: Change<T>, remote: Change<T>) -> Change<T> {
    let local_wins = local.timestamp > remote.timestamp
        || (local.timestamp == remote.timestamp && local.user_id > remote.user_id);

    let tie = local.timestamp == remote.timestamp;
    let winner = if local_wins { "local" } else { "remote" };
    debug!(
        local_user = %local.user_id,
        remote_user = %remote.user_id,
        tie,
        winner,
        "last-write-wins resolved"
    );

    if local_wins {
        local
    } else {
        remote
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn at(secs: i64) -> chrono::DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn later_local_wins() {
        let local = Change::new(at(5), "user-a", 1);
        let remote = Change::new(at(4), "user-z", 2);
        assert_eq!(last_write_wins(local, remote).data, 1);
    }

    #[test]
    fn later_remote_wins() {
        let local = Change::new(at(4), "user-z", 1);
        let remote = Change::new(at(4) + Duration::milliseconds(1), "user-a", 2);
        assert_eq!(last_write_wins(local, remote).data, 2);
    }

    #[test]
    fn tie_goes_to_greater_user_id() {
        let a = Change::new(at(0), "user-a", "a");
        let b = Change::new(at(0), "user-b", "b");
        assert_eq!(last_write_wins(a.clone(), b.clone()).user_id, "user-b");
        assert_eq!(last_write_wins(b, a).user_id, "user-b");
    }

    #[test]
    fn identical_keys_return_remote() {
        let local = Change::new(at(0), "same", "local");
        let remote = Change::new(at(0), "same", "remote");
        assert_eq!(last_write_wins(local, remote).data, "remote");
    }
}
