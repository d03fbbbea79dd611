//! The dispatcher's sum type over every edit representation.

use serde::{Deserialize, Serialize};

use super::{Change, CrdtState, Operation};

/// One side of a conflict, or the resolved result.
///
/// A document picks one representation per collaboration mode; the variant
/// has to match the strategy it is resolved with.
///
/// Wire shape: `{ "kind": "change" | "operations" | "replica", "value": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Edit<T> {
    Change(Change<T>),
    Operations(Vec<Operation>),
    Replica(CrdtState<T>),
}

impl<T> Edit<T> {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Change(_) => "change",
            Self::Operations(_) => "operations",
            Self::Replica(_) => "replica",
        }
    }

    pub fn into_change(self) -> Option<Change<T>> {
        match self {
            Self::Change(change) => Some(change),
            _ => None,
        }
    }

    pub fn into_operations(self) -> Option<Vec<Operation>> {
        match self {
            Self::Operations(ops) => Some(ops),
            _ => None,
        }
    }

    pub fn into_replica(self) -> Option<CrdtState<T>> {
        match self {
            Self::Replica(state) => Some(state),
            _ => None,
        }
    }
}

impl<T> From<Change<T>> for Edit<T> {
    fn from(change: Change<T>) -> Self {
        Self::Change(change)
    }
}

impl<T> From<Vec<Operation>> for Edit<T> {
    fn from(ops: Vec<Operation>) -> Self {
        Self::Operations(ops)
    }
}

impl<T> From<CrdtState<T>> for Edit<T> {
    fn from(state: CrdtState<T>) -> Self {
        Self::Replica(state)
    }
}
