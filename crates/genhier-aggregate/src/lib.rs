//! # genhier-aggregate
//!
//! Strategies that turn a group of raw values into one label: means, bounds,
//! intervals, common prefixes, sets and constants.

pub mod function;
mod numeric;
mod textual;

pub use function::AggregateFunction;
