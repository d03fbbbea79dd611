//! A competing full-value write.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One writer's candidate for the whole value of a piece of shared state.
///
/// Built by a caller per edit event and consumed once by the last-write-wins
/// resolver, which hands back one of the two candidates unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Change<T> {
    /// When the write happened, as observed by the writer.
    #[serde(with = "super::timestamp")]
    pub timestamp: DateTime<Utc>,
    /// Identity of the writer. Breaks timestamp ties.
    pub user_id: String,
    /// The written value.
    pub data: T,
}

impl<T> Change<T> {
    pub fn new(timestamp: DateTime<Utc>, user_id: impl Into<String>, data: T) -> Self {
        Self {
            timestamp,
            user_id: user_id.into(),
            data,
        }
    }
}
