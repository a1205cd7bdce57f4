use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use genhier_aggregate::AggregateFunction;
use genhier_core::constants::{LOWER_BOUND_PREFIX, NULL_VALUE, UPPER_BOUND_PREFIX};
use genhier_core::errors::HierarchyResult;
use genhier_core::{DataType, RatioScale};
use serde::{Deserialize, Serialize};

/// Which end of the domain an out-of-bound interval codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Lower,
    Upper,
}

/// The identity of an interval: its bounds and flavor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IntervalKind<V> {
    /// `[min, max)`.
    Normal { min: V, max: V },
    /// Missing values.
    Null,
    /// Bottom coding (`<bound`) or top coding (`>=bound`).
    OutOfBound { side: Side, bound: V },
}

/// An interval plus the function that renders its label.
///
/// Equality and hashing only look at [`IntervalKind`].
#[derive(Debug, Clone)]
pub struct Interval<V> {
    kind: IntervalKind<V>,
    function: AggregateFunction,
}

impl<V> Interval<V> {
    pub fn normal(min: V, max: V, function: AggregateFunction) -> Self {
        Self {
            kind: IntervalKind::Normal { min, max },
            function,
        }
    }

    pub fn null() -> Self {
        Self {
            kind: IntervalKind::Null,
            function: AggregateFunction::default(),
        }
    }

    pub fn out_of_bound(side: Side, bound: V) -> Self {
        Self {
            kind: IntervalKind::OutOfBound { side, bound },
            function: AggregateFunction::default(),
        }
    }

    pub fn kind(&self) -> &IntervalKind<V> {
        &self.kind
    }

    pub fn function(&self) -> &AggregateFunction {
        &self.function
    }

    /// `(min, max)` of a normal interval.
    pub fn bounds(&self) -> Option<(&V, &V)> {
        match &self.kind {
            IntervalKind::Normal { min, max } => Some((min, max)),
            _ => None,
        }
    }

    pub fn min(&self) -> Option<&V> {
        self.bounds().map(|(min, _)| min)
    }

    pub fn max(&self) -> Option<&V> {
        self.bounds().map(|(_, max)| max)
    }

    pub fn is_null(&self) -> bool {
        matches!(self.kind, IntervalKind::Null)
    }

    pub fn is_out_of_bound(&self) -> bool {
        matches!(self.kind, IntervalKind::OutOfBound { .. })
    }
}

impl<V> Interval<V> {
    /// The label this interval contributes to the hierarchy.
    pub fn label<D: DataType<Value = V>>(&self, ty: &D) -> HierarchyResult<String> {
        match &self.kind {
            IntervalKind::Normal { min, max } => self
                .function
                .aggregate(ty, &[ty.format(min), ty.format(max)]),
            IntervalKind::Null => Ok(NULL_VALUE.to_string()),
            IntervalKind::OutOfBound {
                side: Side::Lower,
                bound,
            } => Ok(format!("{LOWER_BOUND_PREFIX}{}", ty.format(bound))),
            IntervalKind::OutOfBound {
                side: Side::Upper,
                bound,
            } => Ok(format!("{UPPER_BOUND_PREFIX}{}", ty.format(bound))),
        }
    }

    /// `[min, max)` rendering for diagnostics.
    pub fn describe<D: DataType<Value = V>>(&self, ty: &D) -> String {
        match &self.kind {
            IntervalKind::Normal { min, max } => {
                format!("[{}, {})", ty.format(min), ty.format(max))
            }
            IntervalKind::Null => NULL_VALUE.to_string(),
            IntervalKind::OutOfBound { side, bound } => {
                let prefix = match side {
                    Side::Lower => LOWER_BOUND_PREFIX,
                    Side::Upper => UPPER_BOUND_PREFIX,
                };
                format!("{prefix}{}", ty.format(bound))
            }
        }
    }

    /// `min <= value < max`. Only normal intervals contain values.
    pub fn contains<D: DataType<Value = V>>(&self, ty: &D, value: &V) -> bool {
        self.bounds().is_some_and(|(min, max)| {
            ty.compare(value, min) != Ordering::Less && ty.compare(value, max) == Ordering::Less
        })
    }
}

impl<V: Clone> Interval<V> {
    /// The same interval moved by `offset`.
    pub(crate) fn shifted<D: RatioScale<Value = V>>(&self, ty: &D, offset: &V) -> Self {
        let kind = match &self.kind {
            IntervalKind::Normal { min, max } => IntervalKind::Normal {
                min: ty.add(min, offset),
                max: ty.add(max, offset),
            },
            other => other.clone(),
        };
        Self {
            kind,
            function: self.function.clone(),
        }
    }
}

impl<V: PartialEq> PartialEq for Interval<V> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl<V: Eq> Eq for Interval<V> {}

impl<V: Hash> Hash for Interval<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
    }
}
