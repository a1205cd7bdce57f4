//! Balanced index over the declared intervals.
//!
//! Leaves group runs of [`INDEX_FANOUT`] consecutive intervals; inner nodes
//! group runs of nodes the same way until one root remains. Every node
//! covers exactly the union of its children.

use std::cmp::Ordering;

use genhier_core::constants::INDEX_FANOUT;
use genhier_core::errors::{HierarchyError, HierarchyResult, ValidationError};
use genhier_core::{DataType, RatioScale};

use crate::interval::Interval;

#[derive(Debug, Clone)]
pub enum NodeContent<V> {
    /// Positions of the covered intervals in the index.
    Leaf(Vec<usize>),
    Inner(Vec<IndexNode<V>>),
}

#[derive(Debug, Clone)]
pub struct IndexNode<V> {
    min: V,
    max: V,
    content: NodeContent<V>,
}

impl<V> IndexNode<V> {
    pub fn min(&self) -> &V {
        &self.min
    }

    pub fn max(&self) -> &V {
        &self.max
    }

    pub fn content(&self) -> &NodeContent<V> {
        &self.content
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.content, NodeContent::Leaf(_))
    }

    /// Depth of the subtree, 1 for a leaf.
    pub fn depth(&self) -> usize {
        match &self.content {
            NodeContent::Leaf(_) => 1,
            NodeContent::Inner(children) => {
                1 + children.iter().map(IndexNode::depth).max().unwrap_or(0)
            }
        }
    }

    fn covers<D: DataType<Value = V>>(&self, ty: &D, value: &V) -> bool {
        ty.compare(value, &self.min) != Ordering::Less
            && ty.compare(value, &self.max) == Ordering::Less
    }
}

/// The declared intervals and their tree.
#[derive(Debug, Clone)]
pub struct IntervalIndex<V> {
    intervals: Vec<Interval<V>>,
    root: IndexNode<V>,
}

impl<V: Clone> IntervalIndex<V> {
    /// Index contiguous, ordered, normal intervals.
    pub fn new(intervals: Vec<Interval<V>>) -> HierarchyResult<Self> {
        let bounds = intervals
            .iter()
            .map(|interval| {
                interval
                    .bounds()
                    .map(|(min, max)| (min.clone(), max.clone()))
                    .ok_or_else(|| HierarchyError::MalformedHierarchy {
                        reason: "only bounded intervals can be indexed".to_string(),
                    })
            })
            .collect::<HierarchyResult<Vec<_>>>()?;

        let mut nodes: Vec<IndexNode<V>> = bounds
            .chunks(INDEX_FANOUT)
            .enumerate()
            .map(|(chunk, run)| {
                let start = chunk * INDEX_FANOUT;
                IndexNode {
                    min: run[0].0.clone(),
                    max: run[run.len() - 1].1.clone(),
                    content: NodeContent::Leaf((start..start + run.len()).collect()),
                }
            })
            .collect();

        while nodes.len() > 1 {
            let mut parents = Vec::with_capacity(nodes.len().div_ceil(INDEX_FANOUT));
            let mut pending = nodes.into_iter();
            loop {
                let children: Vec<IndexNode<V>> = pending.by_ref().take(INDEX_FANOUT).collect();
                let (min, max) = match (children.first(), children.last()) {
                    (Some(first), Some(last)) => (first.min.clone(), last.max.clone()),
                    _ => break,
                };
                parents.push(IndexNode {
                    min,
                    max,
                    content: NodeContent::Inner(children),
                });
            }
            nodes = parents;
        }

        let root = nodes.pop().ok_or(ValidationError::NoIntervals)?;
        Ok(Self { intervals, root })
    }

    pub fn root(&self) -> &IndexNode<V> {
        &self.root
    }

    pub fn intervals(&self) -> &[Interval<V>] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Lower end of the covered window.
    pub fn min(&self) -> &V {
        &self.root.min
    }

    /// Upper end (exclusive) of the covered window.
    pub fn max(&self) -> &V {
        &self.root.max
    }

    /// The declared interval containing `value`, without periodic shifting.
    pub fn lookup<D: DataType<Value = V>>(&self, ty: &D, value: &V) -> Option<&Interval<V>> {
        if !self.root.covers(ty, value) {
            return None;
        }
        let mut node = &self.root;
        loop {
            match &node.content {
                NodeContent::Leaf(positions) => {
                    return positions
                        .iter()
                        .map(|&p| &self.intervals[p])
                        .find(|interval| interval.contains(ty, value));
                }
                NodeContent::Inner(children) => {
                    node = children.iter().find(|child| child.covers(ty, value))?;
                }
            }
        }
    }

    /// The interval containing `value`, with the declared intervals repeated
    /// periodically on both sides of the covered window.
    pub fn lookup_periodic<D>(&self, ty: &D, value: &V) -> Option<Interval<V>>
    where
        D: RatioScale<Value = V>,
    {
        let (shift, translated) = translate(ty, self.min(), self.max(), value);
        let found = self.lookup(ty, &translated)?;
        Some(found.shifted(ty, &self.offset(ty, shift)))
    }

    /// Like [`IntervalIndex::lookup_periodic`], but a value sitting exactly
    /// on an interval's lower bound maps to the preceding interval. Used to
    /// find the last interval before the upper snap bound.
    pub fn lookup_upper_snap<D>(&self, ty: &D, value: &V) -> Option<Interval<V>>
    where
        D: RatioScale<Value = V>,
    {
        let (shift, translated) = translate(ty, self.min(), self.max(), value);
        let position = self
            .intervals
            .iter()
            .position(|interval| interval.contains(ty, &translated))?;
        let on_lower_bound = self.intervals[position]
            .min()
            .is_some_and(|min| ty.compare(&translated, min) == Ordering::Equal);
        let (position, shift) = match (on_lower_bound, position) {
            (false, _) => (position, shift),
            (true, 0) => (self.intervals.len() - 1, shift - 1.0),
            (true, p) => (p - 1, shift),
        };
        Some(self.intervals[position].shifted(ty, &self.offset(ty, shift)))
    }

    fn offset<D: RatioScale<Value = V>>(&self, ty: &D, shift: f64) -> V {
        let width = ty.subtract(self.max(), self.min());
        ty.multiply(&width, shift)
    }
}

/// The window `[lo, hi)` containing `value` when `[min, max)` repeats
/// forever in both directions.
pub fn repeat_window<D: RatioScale>(
    ty: &D,
    min: &D::Value,
    max: &D::Value,
    value: &D::Value,
) -> (D::Value, D::Value) {
    let (shift, _) = translate(ty, min, max, value);
    let width = ty.subtract(max, min);
    let offset = ty.multiply(&width, shift);
    (ty.add(min, &offset), ty.add(max, &offset))
}

/// Number of whole windows between `min` and `value`, and `value` moved
/// into `[min, max)`.
fn translate<D: RatioScale>(
    ty: &D,
    min: &D::Value,
    max: &D::Value,
    value: &D::Value,
) -> (f64, D::Value) {
    let width = ty.subtract(max, min);
    let mut shift = ty.ratio(&ty.subtract(value, min), &width).floor();
    let mut translated = ty.subtract(value, &ty.multiply(&width, shift));
    match ty.compare(&translated, max) {
        Ordering::Equal => {
            shift += 1.0;
            translated = min.clone();
        }
        Ordering::Greater => {
            shift += 1.0;
            translated = ty.subtract(value, &ty.multiply(&width, shift));
        }
        Ordering::Less if ty.compare(&translated, min) == Ordering::Less => {
            shift -= 1.0;
            translated = ty.subtract(value, &ty.multiply(&width, shift));
        }
        Ordering::Less => {}
    }
    (shift, translated)
}
