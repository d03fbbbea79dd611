//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::constants;

static INIT: Once = Once::new();

/// Initialize the reconcile tracing/logging system with compiled defaults.
///
/// Reads the `RECONCILE_LOG` environment variable for per-module levels,
/// e.g. `RECONCILE_LOG=reconcile_engine::ot=trace,reconcile_engine=debug`.
/// Falls back to `reconcile=info` if unset or invalid.
///
/// Idempotent: only the first call in a process installs a subscriber, and
/// a subscriber installed by the host application is left in place.
pub fn init_tracing() {
    init_tracing_with_config(&ObservabilityConfig::default());
}

/// Initialize tracing from an `ObservabilityConfig`.
///
/// `RECONCILE_LOG` still takes precedence over `config.log_filter`.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(constants::LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(&config.log_filter))
            .unwrap_or_else(|_| EnvFilter::new(constants::DEFAULT_LOG_FILTER));

        let text = (!config.json).then(|| {
            fmt::layer()
                .with_target(config.with_target)
                .with_thread_ids(true)
        });
        let json = config
            .json
            .then(|| fmt::layer().json().with_target(config.with_target));

        // A host may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(text)
            .with(json)
            .with(filter)
            .try_init();
    });
}
