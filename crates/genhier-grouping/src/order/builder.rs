use std::collections::HashMap;
use std::ops::Range;

use genhier_aggregate::AggregateFunction;
use genhier_core::constants::ANY_VALUE;
use genhier_core::errors::{HierarchyError, HierarchyResult, ValidationError};
use genhier_core::{BuilderKind, BuilderState, DataType, Hierarchy, IHierarchyBuilder};
use tracing::{debug, info};

use super::close_elements::CloseElements;
use super::sort::ElementOrder;
use crate::engine::{self, GroupArena, GroupId, GroupPreparer, PreparedGroups};
use crate::level::{Level, Levels};

/// Sorts the distinct values, then folds consecutive runs into groups level
/// by level.
#[derive(Debug, Clone)]
pub struct OrderBasedBuilder<D: DataType> {
    ty: D,
    order: ElementOrder,
    levels: Levels,
    state: BuilderState<PreparedGroups>,
}

impl<D: DataType> OrderBasedBuilder<D> {
    pub fn new(ty: D) -> Self {
        Self::with_order(ty, ElementOrder::Natural)
    }

    pub fn with_order(ty: D, order: ElementOrder) -> Self {
        Self {
            ty,
            order,
            levels: Levels::new(),
            state: BuilderState::Unprepared,
        }
    }

    pub fn data_type(&self) -> &D {
        &self.ty
    }

    pub fn order(&self) -> &ElementOrder {
        &self.order
    }

    pub fn levels(&self) -> &Levels {
        &self.levels
    }

    pub fn set_order(&mut self, order: ElementOrder) {
        self.order = order;
        self.state.reset();
    }

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

    pub fn is_valid(&self) -> HierarchyResult<()> {
        if self.levels.get(0).is_none() {
            return Err(ValidationError::MissingLevel { level: 0 }.into());
        }
        self.levels.validate()
    }
}

impl<D: DataType> GroupPreparer for OrderBasedBuilder<D> {
    fn prepare_groups(
        &self,
        data: &[String],
        arena: &mut GroupArena,
    ) -> HierarchyResult<Vec<Vec<GroupId>>> {
        self.is_valid()?;
        if data.is_empty() {
            return Ok(Vec::new());
        }
        let permutation = self.order.permutation(&self.ty, data)?;
        let rows = data.len();

        // Runs are cut over distinct values so equal raw values share a group.
        let mut position: HashMap<&str, usize> = HashMap::new();
        let mut distinct: Vec<&str> = Vec::new();
        for &row in &permutation {
            position.entry(data[row].as_str()).or_insert_with(|| {
                distinct.push(data[row].as_str());
                distinct.len() - 1
            });
        }

        let mut group_of = vec![None; distinct.len()];
        let mut current = Vec::new();
        if let Some(first) = self.levels.get(0) {
            fold_runs(first, distinct.len(), |run, function| {
                let members = distinct[run.clone()].iter().map(|v| v.to_string()).collect();
                let element = CloseElements::new(members, function, &self.ty, arena)?;
                for slot in &mut group_of[run] {
                    *slot = Some(element.id);
                }
                current.push(element);
                Ok(())
            })?;
        }
        let column = data
            .iter()
            .map(|raw| position.get(raw.as_str()).and_then(|&i| group_of[i]))
            .collect();
        let mut columns = vec![resolve(column)?];

        for (height, level) in self.levels.iter().skip(1) {
            if current.len() <= 1 {
                debug!(height, "single group left, stopping early");
                break;
            }
            let mut merged_into: HashMap<GroupId, GroupId> = HashMap::new();
            let mut next = Vec::new();
            fold_runs(level, current.len(), |run, function| {
                let merged =
                    CloseElements::merge(&current[run.clone()], function, &self.ty, arena)?;
                for element in &current[run] {
                    merged_into.insert(element.id, merged.id);
                }
                next.push(merged);
                Ok(())
            })?;
            let previous = columns.last().map(Vec::as_slice).unwrap_or_default();
            let column = previous
                .iter()
                .map(|id| merged_into.get(id).copied())
                .collect();
            columns.push(resolve(column)?);
            current = next;
        }

        if current.len() > 1 {
            debug!(groups = current.len(), "appending catch-all level");
            let any = arena.push(ANY_VALUE);
            columns.push(vec![any; rows]);
        }
        Ok(columns)
    }
}

/// Apply the groups of `level` cyclically over `items` consecutive items.
fn fold_runs(
    level: &Level,
    items: usize,
    mut make: impl FnMut(Range<usize>, &AggregateFunction) -> HierarchyResult<()>,
) -> HierarchyResult<()> {
    let mut start = 0;
    while start < items {
        for group in level.groups() {
            let end = (start + group.size()).min(items);
            make(start..end, group.function())?;
            start = end;
            if start == items {
                break;
            }
        }
    }
    Ok(())
}

fn resolve(column: Vec<Option<GroupId>>) -> HierarchyResult<Vec<GroupId>> {
    column
        .into_iter()
        .enumerate()
        .map(|(row, id)| {
            id.ok_or_else(|| HierarchyError::MalformedHierarchy {
                reason: format!("row {row} was not assigned to a group"),
            })
        })
        .collect()
}

impl<D: DataType> IHierarchyBuilder for OrderBasedBuilder<D> {
    fn kind(&self) -> BuilderKind {
        BuilderKind::OrderBased
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
            levels = prepared.levels(),
            "order-based hierarchy prepared"
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
