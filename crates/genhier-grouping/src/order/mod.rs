//! Order-based builder: sort, then fold consecutive runs of values.

mod builder;
mod close_elements;
mod sort;

pub use builder::OrderBasedBuilder;
pub use sort::{Comparator, ElementOrder};
