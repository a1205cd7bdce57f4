//! # genhier-redaction
//!
//! Builds hierarchies by masking one more character per level, after padding
//! every value to the longest length in the domain.

mod builder;
mod domain;

pub use builder::RedactionBasedBuilder;
pub use domain::DomainProperties;
