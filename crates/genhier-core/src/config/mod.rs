mod date_config;
pub mod defaults;
mod interval_config;
mod observability_config;
mod priority_config;
mod redaction_config;

pub use date_config::DateConfig;
pub use interval_config::IntervalConfig;
pub use observability_config::ObservabilityConfig;
pub use priority_config::PriorityConfig;
pub use redaction_config::RedactionConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{HierarchyError, HierarchyResult};

/// Top-level configuration aggregating every builder section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenHierConfig {
    pub interval: IntervalConfig,
    pub redaction: RedactionConfig,
    pub priority: PriorityConfig,
    pub date: DateConfig,
    pub observability: ObservabilityConfig,
}

impl GenHierConfig {
    /// Parse a TOML document. Missing sections and keys take their defaults.
    pub fn from_toml(source: &str) -> HierarchyResult<Self> {
        toml::from_str(source).map_err(|e| HierarchyError::ConfigParse {
            message: e.to_string(),
        })
    }

    /// Render the configuration back to TOML.
    pub fn to_toml(&self) -> HierarchyResult<String> {
        toml::to_string(self).map_err(|e| HierarchyError::ConfigParse {
            message: e.to_string(),
        })
    }
}
