//! # genhier-date
//!
//! Generalizes timestamps through calendar granularities, one column per
//! granularity in the order given.

mod builder;
mod granularity;

pub use builder::DateBasedBuilder;
pub use granularity::Granularity;
