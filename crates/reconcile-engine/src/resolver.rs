//! `ConflictResolver`, the configured facade over the strategy dispatcher.

use reconcile_core::config::ResolverConfig;
use reconcile_core::{Edit, Operation, ReconcileConfig, ReconcileResult, Strategy};
use serde::Serialize;
use tracing::{debug, info};

use crate::{detect_conflicts, operational_transform, resolve_conflict};

/// Result of a transform that also ran the overlap pre-check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformOutcome {
    /// Local operations rebased over the remote ones, in application order.
    pub operations: Vec<Operation>,
    /// Whether any local range overlapped a remote range before rebasing.
    pub conflicted: bool,
}

/// Holds a `ResolverConfig` and resolves edit pairs with it.
///
/// Stateless apart from the config, so one instance can be shared freely
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct ConflictResolver {
    config: ResolverConfig,
}

impl ConflictResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn from_config(config: &ReconcileConfig) -> Self {
        info!(
            default_strategy = %config.resolver.default_strategy,
            precheck_conflicts = config.resolver.precheck_conflicts,
            "conflict resolver configured"
        );
        Self::new(config.resolver.clone())
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn default_strategy(&self) -> Strategy {
        self.config.default_strategy
    }

    /// Resolve with the configured default strategy.
    pub fn resolve<T: Clone>(&self, local: Edit<T>, remote: Edit<T>) -> ReconcileResult<Edit<T>> {
        self.resolve_with(self.config.default_strategy, local, remote)
    }

    /// Resolve with an explicit strategy.
    ///
    /// With `precheck_conflicts` on, operation lists go through
    /// [`transform_checked`](Self::transform_checked) so the overlap flag is
    /// logged; the returned operations are the same either way.
    pub fn resolve_with<T: Clone>(
        &self,
        strategy: Strategy,
        local: Edit<T>,
        remote: Edit<T>,
    ) -> ReconcileResult<Edit<T>> {
        match (strategy, local, remote) {
            (Strategy::OperationalTransform, Edit::Operations(local), Edit::Operations(remote))
                if self.config.precheck_conflicts =>
            {
                let outcome = self.transform_checked(&local, &remote);
                Ok(Edit::Operations(outcome.operations))
            }
            (strategy, local, remote) => resolve_conflict(strategy, local, remote),
        }
    }

    /// Rebase `local_ops` over `remote_ops` and report whether their ranges
    /// overlapped. Positions are always re-derived.
    pub fn transform_checked(
        &self,
        local_ops: &[Operation],
        remote_ops: &[Operation],
    ) -> TransformOutcome {
        let conflicted = detect_conflicts(local_ops, remote_ops);
        let operations = operational_transform(local_ops, remote_ops);
        debug!(
            local = local_ops.len(),
            remote = remote_ops.len(),
            conflicted,
            "checked transform"
        );
        TransformOutcome {
            operations,
            conflicted,
        }
    }
}
