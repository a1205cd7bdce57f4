use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::Direction;

/// Redaction builder configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RedactionConfig {
    /// Character that replaces redacted positions.
    pub redaction_character: char,
    /// Character used to pad values to the domain's maximum length.
    pub padding_character: char,
    /// Direction in which characters are redacted.
    pub redaction_order: Direction,
    /// Alignment of values before padding. Left-to-right pads on the right.
    pub alignment_order: Direction,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            redaction_character: defaults::DEFAULT_REDACTION_CHARACTER,
            padding_character: defaults::DEFAULT_PADDING_CHARACTER,
            redaction_order: defaults::DEFAULT_REDACTION_ORDER,
            alignment_order: defaults::DEFAULT_ALIGNMENT_ORDER,
        }
    }
}
