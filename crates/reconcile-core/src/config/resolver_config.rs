//! Resolver configuration.
//!
//! # Examples
//!
//! ```
//! use reconcile_core::config::ResolverConfig;
//! use reconcile_core::Strategy;
//!
//! let config = ResolverConfig::default();
//! assert_eq!(config.default_strategy, Strategy::LastWriteWins);
//! assert!(config.precheck_conflicts);
//! ```

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::models::Strategy;

/// Configuration for the `ConflictResolver` facade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Strategy used by `resolve` when the caller does not name one.
    /// Default: last-write-wins.
    pub default_strategy: Strategy,
    /// Run the range-overlap pre-check alongside every transform and log
    /// whether it found a conflict. Default: true.
    pub precheck_conflicts: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_strategy: constants::DEFAULT_STRATEGY,
            precheck_conflicts: constants::DEFAULT_PRECHECK_CONFLICTS,
        }
    }
}
