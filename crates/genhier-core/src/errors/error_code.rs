//! ErrorCode trait for caller-side error classification.

/// Every error enum implements this to expose a stable category string.
/// Callers use it to tell a broken configuration or bad input apart from a
/// misuse of the prepare/build sequence.
pub trait ErrorCode {
    /// Returns the category code (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const DATA_ERROR: &str = "DATA_ERROR";
pub const NOT_PREPARED: &str = "NOT_PREPARED";
pub const MALFORMED_HIERARCHY: &str = "MALFORMED_HIERARCHY";
pub const CONFIG_PARSE_ERROR: &str = "CONFIG_PARSE_ERROR";
