use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Date builder configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DateConfig {
    /// Per-granularity strftime overrides. Key is the snake_case granularity name.
    pub formats: BTreeMap<String, String>,
}
