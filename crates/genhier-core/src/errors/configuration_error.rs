use super::error_code::{self, ErrorCode};

/// Builder configuration errors. Raised by setters, never deferred.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("group size must be positive, got {size}")]
    NonPositiveGroupSize { size: usize },

    #[error("interval lower bound {min} must be smaller than upper bound {max}")]
    InvertedInterval { min: String, max: String },

    #[error("bound '{value}' cannot be parsed as {type_name}")]
    UnparsableBound { value: String, type_name: String },

    #[error("aggregate function '{function}' is not supported for data type {type_name}")]
    UnsupportedFunction { function: String, type_name: String },

    #[error("invalid parameter '{parameter}' for aggregate function '{function}'")]
    InvalidParameter { function: String, parameter: String },

    #[error("comparator cannot order '{left}' and '{right}'")]
    ComparatorFailed { left: String, right: String },

    #[error("value '{value}' is not part of the explicit order")]
    UnorderedValue { value: String },

    #[error("no priority assigned to value '{value}'")]
    MissingPriority { value: String },

    #[error("unknown date granularity '{name}'")]
    UnknownGranularity { name: String },

    #[error("{field} must be a single character, got '{value}'")]
    InvalidCharacter { field: String, value: String },
}

impl ErrorCode for ConfigurationError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
