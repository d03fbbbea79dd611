//! Conflict resolution strategies.
//!
//! # Examples
//!
//! ```
//! use reconcile_core::Strategy;
//!
//! let s: Strategy = "operational-transform".parse().unwrap();
//! assert_eq!(s, Strategy::OperationalTransform);
//! assert_eq!(s.to_string(), "operational-transform");
//! assert!("three-way-merge".parse::<Strategy>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ResolveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Whole-value writes; the later timestamp wins.
    LastWriteWins,
    /// Character-level edits; local operations are rebased over remote ones.
    OperationalTransform,
    /// Replica states joined by vector clock.
    Crdt,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::LastWriteWins,
        Strategy::OperationalTransform,
        Strategy::Crdt,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::LastWriteWins => "last-write-wins",
            Self::OperationalTransform => "operational-transform",
            Self::Crdt => "crdt",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ResolveError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == tag)
            .ok_or_else(|| ResolveError::UnknownStrategy(tag.to_string()))
    }
}
