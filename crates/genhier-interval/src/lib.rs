//! # genhier-interval
//!
//! Interval-based generalization. Declared intervals are indexed by a
//! balanced tree of fanout 2 and repeat periodically beyond their covered
//! window. Snap bounds merge the outer periods into one interval each;
//! values past the snap bounds are bottom/top coded; values past the label
//! bounds are rejected.

pub mod builder;
pub mod index;
pub mod interval;
pub mod range;
mod stage;

pub use builder::IntervalBasedBuilder;
pub use index::{repeat_window, IndexNode, IntervalIndex, NodeContent};
pub use interval::{Interval, IntervalKind, Side};
pub use range::{Range, ResolvedRange};
