use super::error_code::{self, ErrorCode};

/// Builder validation errors, reported from `is_valid()` and `prepare()`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("no intervals specified")]
    NoIntervals,

    #[error("gap between {left} and {right}")]
    Gap { left: String, right: String },

    #[error("repeating interval {interval}")]
    RepeatingInterval { interval: String },

    #[error("missing level definition for level {level}")]
    MissingLevel { level: usize },

    #[error("level {level} contains no groups")]
    EmptyLevel { level: usize },

    #[error("invalid {bound} bound: {reason}")]
    BoundOrder { bound: String, reason: String },
}

impl ErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }
}
