use super::error_code::{self, ErrorCode};

/// Per-value data errors raised while preparing a hierarchy.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DataError {
    #[error("{value} is below the lower label bound {bound}")]
    BelowLabelBound { value: String, bound: String },

    #[error("{value} is at or above the upper label bound {bound}")]
    AtOrAboveLabelBound { value: String, bound: String },

    #[error("'{value}' cannot be parsed as {type_name}")]
    Unparsable { value: String, type_name: String },

    #[error("no interval found for {value}")]
    NoMatchingInterval { value: String },
}

impl ErrorCode for DataError {
    fn error_code(&self) -> &'static str {
        error_code::DATA_ERROR
    }
}
