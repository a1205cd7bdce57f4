mod direction;

pub use direction::{Direction, PriorityOrder};
