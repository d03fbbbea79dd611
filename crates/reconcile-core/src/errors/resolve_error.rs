//! Strategy dispatch errors.

use super::error_code::{self, ReconcileErrorCode};

/// Errors raised by the strategy dispatcher.
///
/// Both variants are programming errors on the caller's side: they are
/// surfaced immediately and never worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The strategy tag does not name any known strategy.
    #[error("Unknown conflict resolution strategy: {0}")]
    UnknownStrategy(String),

    /// The inputs handed to a strategy are not the shape it resolves.
    #[error("strategy {strategy} cannot resolve {found} inputs")]
    StrategyMismatch {
        /// Tag of the selected strategy.
        strategy: String,
        /// Kinds of the inputs that were supplied, e.g. `change/operations`.
        found: String,
    },
}

impl ReconcileErrorCode for ResolveError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownStrategy(_) => error_code::UNKNOWN_STRATEGY,
            Self::StrategyMismatch { .. } => error_code::STRATEGY_MISMATCH,
        }
    }
}
