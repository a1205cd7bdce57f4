mod builder;

pub use builder::{BuilderKind, BuilderState, IHierarchyBuilder};
