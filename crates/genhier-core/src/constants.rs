/// genhier version string.
pub const GENHIER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Raw token that every data type parses as a missing value.
pub const NULL_VALUE: &str = "NULL";

/// Label of the implicit catch-all level.
pub const ANY_VALUE: &str = "*";

/// Branching factor of the interval index tree.
pub const INDEX_FANOUT: usize = 2;

/// Prefix of bottom-coded labels.
pub const LOWER_BOUND_PREFIX: &str = "<";

/// Prefix of top-coded labels.
pub const UPPER_BOUND_PREFIX: &str = ">=";

/// Separator between a label and its disambiguation counter.
pub const LABEL_SUFFIX_SEPARATOR: char = '-';

/// Environment variable read by [`crate::observability::init_tracing`].
pub const LOG_ENV_VAR: &str = "GENHIER_LOG";
