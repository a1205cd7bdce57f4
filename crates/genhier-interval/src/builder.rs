use std::cmp::Ordering;

use genhier_aggregate::AggregateFunction;
use genhier_core::config::IntervalConfig;
use genhier_core::constants::ANY_VALUE;
use genhier_core::errors::{ConfigurationError, HierarchyResult, ValidationError};
use genhier_core::{BuilderKind, BuilderState, Hierarchy, IHierarchyBuilder, RatioScale};
use genhier_grouping::engine::{self, GroupArena, GroupId, GroupPreparer, PreparedGroups};
use genhier_grouping::Levels;
use tracing::{debug, info};

use crate::interval::Interval;
use crate::range::{self, Range, ResolvedRange};
use crate::stage::{self, Interner, Stage, StageContext};

/// Generalizes ratio-scale values through contiguous intervals.
///
/// Level 1 of the hierarchy is given by the declared intervals. Each
/// declared grouping level folds the intervals of the level below into
/// wider ones.
#[derive(Debug, Clone)]
pub struct IntervalBasedBuilder<D: RatioScale> {
    ty: D,
    intervals: Vec<Interval<D::Value>>,
    lower: Range<D::Value>,
    upper: Range<D::Value>,
    levels: Levels,
    default_function: AggregateFunction,
    state: BuilderState<PreparedGroups>,
}

impl<D: RatioScale> IntervalBasedBuilder<D> {
    pub fn new(ty: D) -> Self {
        Self::with_config(ty, &IntervalConfig::default())
    }

    pub fn with_config(ty: D, config: &IntervalConfig) -> Self {
        Self {
            ty,
            intervals: Vec::new(),
            lower: Range::default(),
            upper: Range::default(),
            levels: Levels::new(),
            default_function: AggregateFunction::interval(
                config.default_lower_included,
                config.default_upper_included,
            ),
            state: BuilderState::Unprepared,
        }
    }

    pub fn data_type(&self) -> &D {
        &self.ty
    }

    pub fn intervals(&self) -> &[Interval<D::Value>] {
        &self.intervals
    }

    pub fn levels(&self) -> &Levels {
        &self.levels
    }

    pub fn lower_range(&self) -> &Range<D::Value> {
        &self.lower
    }

    pub fn upper_range(&self) -> &Range<D::Value> {
        &self.upper
    }

    /// Function used by [`IntervalBasedBuilder::add_interval_default`].
    pub fn default_function(&self) -> &AggregateFunction {
        &self.default_function
    }

    /// Append `[min, max)`. Intervals must be added in ascending order.
    pub fn add_interval(
        &mut self,
        min: D::Value,
        max: D::Value,
        function: AggregateFunction,
    ) -> HierarchyResult<&mut Self> {
        if self.ty.compare(&min, &max) != Ordering::Less {
            return Err(ConfigurationError::InvertedInterval {
                min: self.ty.format(&min),
                max: self.ty.format(&max),
            }
            .into());
        }
        function.check_supported(&self.ty)?;
        self.intervals.push(Interval::normal(min, max, function));
        self.state.reset();
        Ok(self)
    }

    pub fn add_interval_default(
        &mut self,
        min: D::Value,
        max: D::Value,
    ) -> HierarchyResult<&mut Self> {
        let function = self.default_function.clone();
        self.add_interval(min, max, function)
    }

    /// Append an interval given as raw text.
    pub fn add_interval_str(
        &mut self,
        min: &str,
        max: &str,
        function: AggregateFunction,
    ) -> HierarchyResult<&mut Self> {
        let min = self.parse_bound(min)?;
        let max = self.parse_bound(max)?;
        self.add_interval(min, max, function)
    }

    fn parse_bound(&self, raw: &str) -> HierarchyResult<D::Value> {
        self.ty.parse(raw).ok().flatten().ok_or_else(|| {
            ConfigurationError::UnparsableBound {
                value: raw.to_string(),
                type_name: self.ty.name().to_string(),
            }
            .into()
        })
    }

    pub fn clear_intervals(&mut self) {
        self.intervals.clear();
        self.state.reset();
    }

    pub fn set_lower_range(&mut self, range: Range<D::Value>) {
        self.lower = range;
        self.state.reset();
    }

    pub fn set_upper_range(&mut self, range: Range<D::Value>) {
        self.upper = range;
        self.state.reset();
    }

    /// Declare a group at `level`. Level 0 folds the declared intervals.
    pub fn add_group(
        &mut self,
        level: usize,
        size: usize,
        function: AggregateFunction,
    ) -> HierarchyResult<&mut Self> {
        function.check_supported(&self.ty)?;
        self.levels.add_group(level, size, function)?;
        self.state.reset();
        Ok(self)
    }

    pub fn clear_levels(&mut self) {
        self.levels.clear();
        self.state.reset();
    }

    /// Check intervals, levels and ranges without touching any data.
    pub fn is_valid(&self) -> HierarchyResult<()> {
        self.resolved_ranges().map(|_| ())
    }

    fn resolved_ranges(
        &self,
    ) -> HierarchyResult<(ResolvedRange<D::Value>, ResolvedRange<D::Value>)> {
        let ty = &self.ty;
        let (Some(first), Some(last)) = (self.intervals.first(), self.intervals.last()) else {
            return Err(ValidationError::NoIntervals.into());
        };
        for pair in self.intervals.windows(2) {
            let (Some(left), Some(right)) = (pair[0].max(), pair[1].min()) else {
                continue;
            };
            match ty.compare(right, left) {
                Ordering::Less => {
                    return Err(ValidationError::RepeatingInterval {
                        interval: pair[1].describe(ty),
                    }
                    .into())
                }
                Ordering::Greater => {
                    return Err(ValidationError::Gap {
                        left: ty.format(left),
                        right: ty.format(right),
                    }
                    .into())
                }
                Ordering::Equal => {}
            }
        }
        self.levels.validate()?;

        let (Some(first_min), Some(last_max)) = (first.min(), last.max()) else {
            return Err(ValidationError::NoIntervals.into());
        };
        let lower = self.lower.resolve(first_min);
        let upper = self.upper.resolve(last_max);
        range::validate(ty, &lower, &upper)?;
        Ok((lower, upper))
    }
}

impl<D: RatioScale> GroupPreparer for IntervalBasedBuilder<D> {
    fn prepare_groups(
        &self,
        data: &[String],
        arena: &mut GroupArena,
    ) -> HierarchyResult<Vec<Vec<GroupId>>> {
        let ty = &self.ty;
        let (lower, upper) = self.resolved_ranges()?;
        let values = data
            .iter()
            .map(|raw| ty.parse(raw))
            .collect::<HierarchyResult<Vec<_>>>()?;

        let mut interner = Interner::new();
        let mut context = StageContext::new(ty, self.intervals.clone(), &lower, &upper)?;
        let mut stage = Stage::new();
        for value in &values {
            let interval = context.classify(value.as_ref())?;
            stage.place(interval, ty, arena, &mut interner)?;
        }
        let mut row_slots = stage.slots().to_vec();
        let mut columns = vec![stage.column(&row_slots)];

        let mut levels = self.levels.iter();
        while stage.distinct().len() > 1 {
            let Some((height, level)) = levels.next() else {
                debug!(
                    groups = stage.distinct().len(),
                    "no grouping left, appending catch-all level"
                );
                let any = arena.push(ANY_VALUE);
                columns.push(vec![any; data.len()]);
                break;
            };
            let merged = stage::merge(ty, context.intervals(), level);
            debug!(height, intervals = merged.len(), "merged intervals");
            context = StageContext::new(ty, merged, &lower, &upper)?;

            let mut next = Stage::new();
            for interval in stage.distinct() {
                next.place(context.advance(interval)?, ty, arena, &mut interner)?;
            }
            for slot in &mut row_slots {
                *slot = next.slots()[*slot];
            }
            columns.push(next.column(&row_slots));
            stage = next;
        }
        Ok(columns)
    }
}

impl<D: RatioScale> IHierarchyBuilder for IntervalBasedBuilder<D> {
    fn kind(&self) -> BuilderKind {
        BuilderKind::IntervalBased
    }

    fn is_prepared(&self) -> bool {
        self.state.is_prepared()
    }

    fn prepare(&mut self, data: &[String]) -> HierarchyResult<Vec<usize>> {
        self.state.reset();
        let prepared = engine::prepare(self, data)?;
        let counts = prepared.distinct_counts();
        info!(
            rows = data.len(),
            intervals = self.intervals.len(),
            levels = prepared.levels(),
            "interval-based hierarchy prepared"
        );
        self.state = BuilderState::Prepared(prepared);
        Ok(counts)
    }

    fn build(&mut self) -> HierarchyResult<Hierarchy> {
        let kind = self.kind();
        let prepared = self.state.take(kind)?;
        prepared.into_hierarchy()
    }
}
