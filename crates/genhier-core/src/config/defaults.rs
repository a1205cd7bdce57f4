// Single source of truth for all default values.

use crate::models::{Direction, PriorityOrder};

// --- Interval ---
pub const DEFAULT_INTERVAL_LOWER_INCLUDED: bool = true;
pub const DEFAULT_INTERVAL_UPPER_INCLUDED: bool = false;

// --- Redaction ---
pub const DEFAULT_REDACTION_CHARACTER: char = '*';
pub const DEFAULT_PADDING_CHARACTER: char = '*';
pub const DEFAULT_REDACTION_ORDER: Direction = Direction::RightToLeft;
pub const DEFAULT_ALIGNMENT_ORDER: Direction = Direction::LeftToRight;

// --- Priority ---
pub const DEFAULT_PRIORITY_MAX_LEVELS: usize = 10;
pub const DEFAULT_PRIORITY_WILDCARD: &str = "*";
pub const DEFAULT_PRIORITY_ORDER: PriorityOrder = PriorityOrder::LowestToHighest;

// --- Date ---
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
