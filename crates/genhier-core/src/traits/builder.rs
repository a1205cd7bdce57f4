use serde::{Deserialize, Serialize};

use crate::errors::{HierarchyError, HierarchyResult};
use crate::hierarchy::Hierarchy;

/// The closed set of builder families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuilderKind {
    IntervalBased,
    OrderBased,
    RedactionBased,
    PriorityBased,
    DateBased,
}

impl BuilderKind {
    pub fn name(self) -> &'static str {
        match self {
            BuilderKind::IntervalBased => "interval-based",
            BuilderKind::OrderBased => "order-based",
            BuilderKind::RedactionBased => "redaction-based",
            BuilderKind::PriorityBased => "priority-based",
            BuilderKind::DateBased => "date-based",
        }
    }
}

/// Hierarchy construction in two steps.
///
/// `prepare` computes the builder's internal structures for a data array
/// and returns the distinct-value count of every column. `build` consumes
/// that prepared state exactly once; building again requires preparing again.
pub trait IHierarchyBuilder {
    fn kind(&self) -> BuilderKind;

    fn is_prepared(&self) -> bool;

    fn prepare(&mut self, data: &[String]) -> HierarchyResult<Vec<usize>>;

    fn build(&mut self) -> HierarchyResult<Hierarchy>;

    /// Prepare and build in one call.
    fn build_from(&mut self, data: &[String]) -> HierarchyResult<Hierarchy> {
        self.prepare(data)?;
        self.build()
    }
}

/// Prepared/not-prepared state of a builder. `P` is the payload computed by
/// `prepare` and consumed by `build`.
#[derive(Debug, Clone)]
pub enum BuilderState<P> {
    Unprepared,
    Prepared(P),
}

impl<P> Default for BuilderState<P> {
    fn default() -> Self {
        BuilderState::Unprepared
    }
}

impl<P> BuilderState<P> {
    pub fn is_prepared(&self) -> bool {
        matches!(self, BuilderState::Prepared(_))
    }

    /// Drop any prepared payload. Called by every setter.
    pub fn reset(&mut self) {
        *self = BuilderState::Unprepared;
    }

    pub fn prepared(&self) -> Option<&P> {
        match self {
            BuilderState::Prepared(payload) => Some(payload),
            BuilderState::Unprepared => None,
        }
    }

    /// Move the payload out, leaving the state unprepared.
    pub fn take(&mut self, kind: BuilderKind) -> HierarchyResult<P> {
        match std::mem::take(self) {
            BuilderState::Prepared(payload) => Ok(payload),
            BuilderState::Unprepared => Err(HierarchyError::NotPrepared {
                builder: kind.name(),
            }),
        }
    }
}
