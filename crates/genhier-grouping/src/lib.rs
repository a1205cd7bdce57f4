//! # genhier-grouping
//!
//! The grouping engine shared by every grouping-based builder:
//! level/group definitions, an arena of label-carrying groups, and the
//! label deduplication that turns prepared groups into a hierarchy.
//! Also hosts the order-based builder.

pub mod engine;
pub mod level;
pub mod order;

pub use engine::{GroupArena, GroupId, GroupPreparer, PreparedGroups};
pub use level::{Group, Level, Levels};
pub use order::{Comparator, ElementOrder, OrderBasedBuilder};
