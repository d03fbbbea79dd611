//! Top-level reconcile configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ObservabilityConfig, ResolverConfig};
use crate::constants;
use crate::errors::ConfigError;
use crate::models::Strategy;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`RECONCILE_*`)
/// 2. Project config (`reconcile.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReconcileConfig {
    pub resolver: ResolverConfig,
    pub observability: ObservabilityConfig,
}

impl ReconcileConfig {
    /// Load configuration for a project rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let project_config_path = root.join(constants::PROJECT_CONFIG_FILENAME);
        let mut config = if project_config_path.exists() {
            ::tracing::debug!(path = %project_config_path.display(), "loading project config");
            Self::from_file(&project_config_path)?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config)?;
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (missing keys take defaults).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ReconcileConfig) -> Result<(), ConfigError> {
        if config.observability.log_filter.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_filter".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment variable overrides.
    ///
    /// An unparseable strategy tag is an error; an unparseable boolean is
    /// ignored and the lower layer's value kept.
    fn apply_env_overrides(config: &mut ReconcileConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var(constants::ENV_DEFAULT_STRATEGY) {
            config.resolver.default_strategy =
                val.parse::<Strategy>().map_err(|e| ConfigError::InvalidValue {
                    field: constants::ENV_DEFAULT_STRATEGY.to_string(),
                    message: e.to_string(),
                })?;
        }
        if let Ok(val) = std::env::var(constants::ENV_PRECHECK_CONFLICTS) {
            if let Some(v) = parse_bool(&val) {
                config.resolver.precheck_conflicts = v;
            }
        }
        if let Ok(val) = std::env::var(constants::LOG_ENV_VAR) {
            config.observability.log_filter = val;
        }
        Ok(())
    }
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
