use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::PriorityOrder;

/// Priority builder configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityConfig {
    /// Upper limit on the number of suppression levels.
    pub max_levels: usize,
    /// Label that replaces suppressed values.
    pub wildcard: String,
    /// Which end of the ranking is suppressed first.
    pub order: PriorityOrder,
}

impl Default for PriorityConfig {
    fn default() -> Self {
        Self {
            max_levels: defaults::DEFAULT_PRIORITY_MAX_LEVELS,
            wildcard: defaults::DEFAULT_PRIORITY_WILDCARD.to_string(),
            order: defaults::DEFAULT_PRIORITY_ORDER,
        }
    }
}
