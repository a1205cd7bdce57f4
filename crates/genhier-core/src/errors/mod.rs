mod configuration_error;
mod data_error;
pub mod error_code;
mod validation_error;

pub use configuration_error::ConfigurationError;
pub use data_error::DataError;
pub use error_code::ErrorCode;
pub use validation_error::ValidationError;

/// Result alias used across every genhier crate.
pub type HierarchyResult<T> = Result<T, HierarchyError>;

/// Top-level error for hierarchy construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HierarchyError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("data error: {0}")]
    Data(#[from] DataError),

    #[error("{builder} builder is not prepared: call prepare() before build()")]
    NotPrepared { builder: &'static str },

    #[error("malformed hierarchy: {reason}")]
    MalformedHierarchy { reason: String },

    #[error("config parse error: {message}")]
    ConfigParse { message: String },
}

impl HierarchyError {
    /// True when the caller should fix its input or configuration rather
    /// than its call sequence.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            HierarchyError::Configuration(_)
                | HierarchyError::Validation(_)
                | HierarchyError::Data(_)
        )
    }
}

impl ErrorCode for HierarchyError {
    fn error_code(&self) -> &'static str {
        match self {
            HierarchyError::Configuration(e) => e.error_code(),
            HierarchyError::Validation(e) => e.error_code(),
            HierarchyError::Data(e) => e.error_code(),
            HierarchyError::NotPrepared { .. } => error_code::NOT_PREPARED,
            HierarchyError::MalformedHierarchy { .. } => error_code::MALFORMED_HIERARCHY,
            HierarchyError::ConfigParse { .. } => error_code::CONFIG_PARSE_ERROR,
        }
    }
}
