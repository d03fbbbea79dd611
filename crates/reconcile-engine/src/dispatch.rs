//! Strategy dispatcher.
//!
//! Routes a pair of edits to the resolver for the chosen strategy. The match
//! over [`Strategy`] is exhaustive, so an unknown strategy can only enter
//! through a string tag, which [`resolve_conflict_tagged`] rejects with
//! `ResolveError::UnknownStrategy`.

use reconcile_core::errors::ResolveError;
use reconcile_core::{Edit, ReconcileResult, Strategy};
use tracing::debug;

use crate::{crdt_merge, last_write_wins, operational_transform};

/// Resolve `local` against `remote` with `strategy`.
///
/// | strategy                | inputs         | result                          |
/// |-------------------------|----------------|---------------------------------|
/// | `last-write-wins`       | `Change`       | the winning `Change`            |
/// | `operational-transform` | `Operations`   | local ops rebased over remote   |
/// | `crdt`                  | `Replica`      | merged replica                  |
///
/// # Errors
///
/// `ResolveError::StrategyMismatch` if either input is not the variant the
/// strategy resolves.
pub fn resolve_conflict<T: Clone>(
    strategy: Strategy,
    local: Edit<T>,
    remote: Edit<T>,
) -> ReconcileResult<Edit<T>> {
    debug!(
        %strategy,
        local = local.kind(),
        remote = remote.kind(),
        "dispatching conflict"
    );

    let resolved = match (strategy, local, remote) {
        (Strategy::LastWriteWins, Edit::Change(local), Edit::Change(remote)) => {
            Edit::Change(last_write_wins(local, remote))
        }
        (Strategy::OperationalTransform, Edit::Operations(local), Edit::Operations(remote)) => {
            Edit::Operations(operational_transform(&local, &remote))
        }
        (Strategy::Crdt, Edit::Replica(local), Edit::Replica(remote)) => {
            Edit::Replica(crdt_merge(&local, &remote))
        }
        (strategy, local, remote) => {
            return Err(ResolveError::StrategyMismatch {
                strategy: strategy.to_string(),
                found: format!("{}/{}", local.kind(), remote.kind()),
            }
            .into())
        }
    };
    Ok(resolved)
}

/// Like [`resolve_conflict`], for callers holding the strategy as a string.
///
/// # Errors
///
/// `ResolveError::UnknownStrategy` for any tag other than
/// `last-write-wins`, `operational-transform` or `crdt`. Never retryable.
pub fn resolve_conflict_tagged<T: Clone>(
    tag: &str,
    local: Edit<T>,
    remote: Edit<T>,
) -> ReconcileResult<Edit<T>> {
    let strategy: Strategy = tag.parse()?;
    resolve_conflict(strategy, local, remote)
}
