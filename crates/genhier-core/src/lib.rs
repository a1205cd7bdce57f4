//! # genhier-core
//!
//! Foundation crate for the genhier generalization-hierarchy builders.
//! Defines the data type contract, the hierarchy artifact, the builder trait
//! and its state machine, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod datatype;
pub mod errors;
pub mod hierarchy;
pub mod models;
pub mod observability;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::GenHierConfig;
pub use datatype::{
    DataType, DateType, Decimal, DecimalType, IntegerType, OrderedStringType, RatioScale,
    StringType, ValueKind,
};
pub use errors::{ErrorCode, HierarchyError, HierarchyResult};
pub use hierarchy::Hierarchy;
pub use models::{Direction, PriorityOrder};
pub use traits::{BuilderKind, BuilderState, IHierarchyBuilder};
