//! # genhier-priority
//!
//! Suppresses values band by band in priority order until every value is
//! replaced by the wildcard.

mod builder;

pub use builder::{PriorityBasedBuilder, PrioritySource};
