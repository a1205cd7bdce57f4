use serde::{Deserialize, Serialize};

use super::defaults;

/// Interval builder configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntervalConfig {
    /// Whether the default interval label closes its lower end.
    pub default_lower_included: bool,
    /// Whether the default interval label closes its upper end.
    pub default_upper_included: bool,
}

impl Default for IntervalConfig {
    fn default() -> Self {
        Self {
            default_lower_included: defaults::DEFAULT_INTERVAL_LOWER_INCLUDED,
            default_upper_included: defaults::DEFAULT_INTERVAL_UPPER_INCLUDED,
        }
    }
}
