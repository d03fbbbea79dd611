//! ReconcileErrorCode trait for foreign-boundary conversion.

/// Every error enum implements this to provide a structured error code
/// string for hosts that cannot match on Rust types (FFI, JSON replies).
pub trait ReconcileErrorCode {
    /// Returns the error code string (e.g., "UNKNOWN_STRATEGY").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const UNKNOWN_STRATEGY: &str = "UNKNOWN_STRATEGY";
pub const STRATEGY_MISMATCH: &str = "STRATEGY_MISMATCH";
pub const MALFORMED_EDITOR_OP: &str = "MALFORMED_EDITOR_OP";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
