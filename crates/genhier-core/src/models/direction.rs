use serde::{Deserialize, Serialize};

/// Reading direction used for redaction and padding alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

/// Which end of the priority ranking is suppressed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityOrder {
    /// The most important values disappear first.
    HighestToLowest,
    /// The least important values disappear first.
    LowestToHighest,
}
