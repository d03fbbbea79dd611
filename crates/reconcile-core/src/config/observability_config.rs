//! Logging configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive used when `RECONCILE_LOG` is unset.
    /// Default: "reconcile=info".
    pub log_filter: String,
    /// Include the event target in each line. Default: true.
    pub with_target: bool,
    /// Emit JSON lines instead of human-readable text. Default: false.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: constants::DEFAULT_LOG_FILTER.to_string(),
            with_target: constants::DEFAULT_LOG_WITH_TARGET,
            json: constants::DEFAULT_LOG_JSON,
        }
    }
}
