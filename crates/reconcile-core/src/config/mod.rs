//! Configuration system for reconcile.
//! TOML-based, 3-layer resolution: env > project file > defaults.

pub mod observability_config;
pub mod reconcile_config;
pub mod resolver_config;

pub use observability_config::ObservabilityConfig;
pub use reconcile_config::ReconcileConfig;
pub use resolver_config::ResolverConfig;
