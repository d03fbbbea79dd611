// Single source of truth for all default values.

use crate::models::Strategy;

// --- Resolver ---
pub const DEFAULT_STRATEGY: Strategy = Strategy::LastWriteWins;
pub const DEFAULT_PRECHECK_CONFLICTS: bool = true;

// --- Observability ---
pub const LOG_ENV_VAR: &str = "RECONCILE_LOG";
pub const DEFAULT_LOG_FILTER: &str = "reconcile=info";
pub const DEFAULT_LOG_WITH_TARGET: bool = true;
pub const DEFAULT_LOG_JSON: bool = false;

// --- Config resolution ---
pub const PROJECT_CONFIG_FILENAME: &str = "reconcile.toml";
pub const ENV_DEFAULT_STRATEGY: &str = "RECONCILE_DEFAULT_STRATEGY";
pub const ENV_PRECHECK_CONFLICTS: &str = "RECONCILE_PRECHECK_CONFLICTS";
