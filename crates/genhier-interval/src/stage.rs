//! One generalization level of the interval builder.

use std::cmp::Ordering;
use std::collections::HashMap;

use genhier_core::errors::{DataError, HierarchyResult};
use genhier_core::RatioScale;
use genhier_grouping::{GroupArena, GroupId, Level};
use tracing::trace;

use crate::index::IntervalIndex;
use crate::interval::{Interval, IntervalKind, Side};
use crate::range::ResolvedRange;

/// Groups shared by all stages of one `prepare`, keyed by interval and label.
pub(crate) type Interner<V> = HashMap<(IntervalKind<V>, String), GroupId>;

/// Lookup structures for one set of intervals under fixed ranges.
pub(crate) struct StageContext<'a, D: RatioScale> {
    ty: &'a D,
    lower: &'a ResolvedRange<D::Value>,
    upper: &'a ResolvedRange<D::Value>,
    index: IntervalIndex<D::Value>,
    lower_snap: Interval<D::Value>,
    upper_snap: Interval<D::Value>,
}

impl<'a, D: RatioScale> StageContext<'a, D> {
    pub(crate) fn new(
        ty: &'a D,
        intervals: Vec<Interval<D::Value>>,
        lower: &'a ResolvedRange<D::Value>,
        upper: &'a ResolvedRange<D::Value>,
    ) -> HierarchyResult<Self> {
        let index = IntervalIndex::new(intervals)?;

        let first = index
            .lookup_periodic(ty, &lower.repeat)
            .ok_or_else(|| no_match(ty, &lower.repeat))?;
        let first_max = first.max().ok_or_else(|| no_match(ty, &lower.repeat))?;
        let lower_snap = Interval::normal(
            lower.snap.clone(),
            first_max.clone(),
            first.function().clone(),
        );

        let last = index
            .lookup_upper_snap(ty, &upper.repeat)
            .ok_or_else(|| no_match(ty, &upper.repeat))?;
        let last_min = last.min().ok_or_else(|| no_match(ty, &upper.repeat))?;
        let upper_snap = Interval::normal(
            last_min.clone(),
            upper.snap.clone(),
            last.function().clone(),
        );

        Ok(Self {
            ty,
            lower,
            upper,
            index,
            lower_snap,
            upper_snap,
        })
    }

    pub(crate) fn intervals(&self) -> &[Interval<D::Value>] {
        self.index.intervals()
    }

    /// Map a raw value to its first-level interval.
    pub(crate) fn classify(&self, value: Option<&D::Value>) -> HierarchyResult<Interval<D::Value>> {
        let ty = self.ty;
        let Some(value) = value else {
            return Ok(Interval::null());
        };
        if ty.compare(value, &self.lower.label) == Ordering::Less {
            return Err(DataError::BelowLabelBound {
                value: ty.format(value),
                bound: ty.format(&self.lower.label),
            }
            .into());
        }
        if ty.compare(value, &self.lower.snap) == Ordering::Less {
            trace!(value = %ty.format(value), "bottom coded");
            return Ok(Interval::out_of_bound(Side::Lower, self.lower.snap.clone()));
        }
        if ty.compare(value, &self.upper.label) != Ordering::Less {
            return Err(DataError::AtOrAboveLabelBound {
                value: ty.format(value),
                bound: ty.format(&self.upper.label),
            }
            .into());
        }
        if ty.compare(value, &self.upper.snap) != Ordering::Less {
            trace!(value = %ty.format(value), "top coded");
            return Ok(Interval::out_of_bound(Side::Upper, self.upper.snap.clone()));
        }
        self.locate(value)
    }

    /// Map an interval of the previous level to its interval at this level.
    pub(crate) fn advance(
        &self,
        previous: &Interval<D::Value>,
    ) -> HierarchyResult<Interval<D::Value>> {
        match previous.kind() {
            IntervalKind::Normal { min, .. } => self.locate(min),
            _ => Ok(previous.clone()),
        }
    }

    fn locate(&self, value: &D::Value) -> HierarchyResult<Interval<D::Value>> {
        let ty = self.ty;
        let found = self
            .index
            .lookup_periodic(ty, value)
            .ok_or_else(|| no_match(ty, value))?;
        let Some((min, max)) = found.bounds() else {
            return Ok(found);
        };
        let below_lower_snap = self
            .lower_snap
            .max()
            .is_some_and(|snap_max| ty.compare(min, snap_max) == Ordering::Less);
        if below_lower_snap {
            return Ok(self.lower_snap.clone());
        }
        let above_upper_snap = self
            .upper_snap
            .min()
            .is_some_and(|snap_min| ty.compare(max, snap_min) == Ordering::Greater);
        if above_upper_snap {
            return Ok(self.upper_snap.clone());
        }
        Ok(found)
    }
}

fn no_match<D: RatioScale>(ty: &D, value: &D::Value) -> genhier_core::HierarchyError {
    DataError::NoMatchingInterval {
        value: ty.format(value),
    }
    .into()
}

/// Distinct intervals of one level and the slot every input maps to.
pub(crate) struct Stage<V> {
    distinct: Vec<Interval<V>>,
    ids: Vec<GroupId>,
    slots: Vec<usize>,
    seen: HashMap<IntervalKind<V>, usize>,
}

impl<V: Clone + Eq + std::hash::Hash> Stage<V> {
    pub(crate) fn new() -> Self {
        Self {
            distinct: Vec::new(),
            ids: Vec::new(),
            slots: Vec::new(),
            seen: HashMap::new(),
        }
    }

    /// Record the interval for the next input.
    pub(crate) fn place<D: RatioScale<Value = V>>(
        &mut self,
        interval: Interval<V>,
        ty: &D,
        arena: &mut GroupArena,
        interner: &mut Interner<V>,
    ) -> HierarchyResult<()> {
        if let Some(&slot) = self.seen.get(interval.kind()) {
            self.slots.push(slot);
            return Ok(());
        }
        let label = interval.label(ty)?;
        let id = *interner
            .entry((interval.kind().clone(), label))
            .or_insert_with_key(|(_, label)| arena.push(label.clone()));
        let slot = self.distinct.len();
        self.seen.insert(interval.kind().clone(), slot);
        self.distinct.push(interval);
        self.ids.push(id);
        self.slots.push(slot);
        Ok(())
    }

    pub(crate) fn distinct(&self) -> &[Interval<V>] {
        &self.distinct
    }

    pub(crate) fn slots(&self) -> &[usize] {
        &self.slots
    }

    /// Group of every row, given each row's slot in this stage.
    pub(crate) fn column(&self, row_slots: &[usize]) -> Vec<GroupId> {
        row_slots.iter().map(|&slot| self.ids[slot]).collect()
    }
}

/// Fold consecutive intervals into the groups of `level`. Consumption wraps
/// around the interval list, shifting by the covered width on every wrap.
pub(crate) fn merge<D: RatioScale>(
    ty: &D,
    intervals: &[Interval<D::Value>],
    level: &Level,
) -> Vec<Interval<D::Value>> {
    let bounds: Vec<(&D::Value, &D::Value)> =
        intervals.iter().filter_map(Interval::bounds).collect();
    let (Some(first), Some(last)) = (bounds.first(), bounds.last()) else {
        return Vec::new();
    };
    let width = ty.subtract(last.1, first.0);
    let count = bounds.len();

    let mut merged = Vec::with_capacity(level.groups().len());
    let mut start = 0;
    let mut wraps = 0;
    for group in level.groups() {
        let end = start + group.size() - 1;
        let min = ty.add(bounds[start].0, &ty.multiply(&width, wraps as f64));
        let max = ty.add(
            bounds[end % count].1,
            &ty.multiply(&width, (wraps + end / count) as f64),
        );
        merged.push(Interval::normal(min, max, group.function().clone()));
        let next = start + group.size();
        wraps += next / count;
        start = next % count;
    }
    merged
}
