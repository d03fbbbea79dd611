//! Per-replica CRDT state.

use serde::{Deserialize, Serialize};

use super::vector_clock::{CausalOrder, VectorClock};

/// One replica's view of a shared value plus its causal metadata.
///
/// Invariant: `vector_clock.get(&site_id) == counter`. The engine only ever
/// produces new states from old ones; a state handed to it is never changed.
///
/// Wire shape: `{ "siteId", "counter", "data", "vectorClock" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrdtState<T> {
    /// Replica that owns this state.
    pub site_id: String,
    /// Number of local edits this replica has recorded, or after a merge, the
    /// total causal progress summed over every site.
    pub counter: u64,
    /// Opaque application payload.
    pub data: T,
    pub vector_clock: VectorClock,
}

impl<T> CrdtState<T> {
    /// Replace the payload, keeping site and causal metadata.
    ///
    /// Pair with `increment_crdt` to record a local edit.
    #[must_use]
    pub fn with_data(self, data: T) -> Self {
        Self { data, ..self }
    }

    /// Causal relation of this state's clock to `other`'s.
    pub fn causal_order<U>(&self, other: &CrdtState<U>) -> CausalOrder {
        self.vector_clock.compare(&other.vector_clock)
    }
}
