use std::collections::{HashMap, HashSet};

use genhier_core::config::PriorityConfig;
use genhier_core::errors::{ConfigurationError, HierarchyResult};
use genhier_core::{
    BuilderKind, BuilderState, DataType, Hierarchy, IHierarchyBuilder, PriorityOrder,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Where the priority of a value comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrioritySource {
    /// The data type's order: larger values have higher priority.
    #[default]
    Natural,
    /// Priorities per raw value; larger numbers have higher priority.
    Explicit(HashMap<String, i64>),
}

/// Replaces values with a wildcard, lowest (or highest) priority first.
#[derive(Debug, Clone)]
pub struct PriorityBasedBuilder<D: DataType> {
    ty: D,
    source: PrioritySource,
    order: PriorityOrder,
    max_levels: usize,
    wildcard: String,
    state: BuilderState<Hierarchy>,
}

impl<D: DataType> PriorityBasedBuilder<D> {
    pub fn new(ty: D) -> Self {
        Self::with_config(ty, &PriorityConfig::default())
    }

    pub fn with_config(ty: D, config: &PriorityConfig) -> Self {
        Self {
            ty,
            source: PrioritySource::Natural,
            order: config.order,
            max_levels: config.max_levels,
            wildcard: config.wildcard.clone(),
            state: BuilderState::Unprepared,
        }
    }

    pub fn source(&self) -> &PrioritySource {
        &self.source
    }

    pub fn order(&self) -> PriorityOrder {
        self.order
    }

    pub fn max_levels(&self) -> usize {
        self.max_levels
    }

    pub fn wildcard(&self) -> &str {
        &self.wildcard
    }

    pub fn set_source(&mut self, source: PrioritySource) {
        self.source = source;
        self.state.reset();
    }

    pub fn set_priorities<I, S>(&mut self, priorities: I)
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let map = priorities.into_iter().map(|(v, p)| (v.into(), p)).collect();
        self.set_source(PrioritySource::Explicit(map));
    }

    pub fn set_order(&mut self, order: PriorityOrder) {
        self.order = order;
        self.state.reset();
    }

    /// Zero levels yields a hierarchy holding only the raw values.
    pub fn set_max_levels(&mut self, max_levels: usize) {
        self.max_levels = max_levels;
        self.state.reset();
    }

    pub fn set_wildcard(&mut self, wildcard: impl Into<String>) {
        self.wildcard = wildcard.into();
        self.state.reset();
    }

    /// Distinct values, the first to be suppressed first.
    fn ranking<'a>(&self, data: &'a [String]) -> HierarchyResult<Vec<&'a str>> {
        let mut seen = HashSet::new();
        let distinct: Vec<&str> = data
            .iter()
            .map(String::as_str)
            .filter(|v| seen.insert(*v))
            .collect();

        let mut ranked = match &self.source {
            PrioritySource::Natural => {
                let mut keyed = distinct
                    .into_iter()
                    .map(|raw| -> HierarchyResult<_> { Ok((self.ty.parse(raw)?, raw)) })
                    .collect::<HierarchyResult<Vec<_>>>()?;
                keyed.sort_by(|(a, raw_a), (b, raw_b)| {
                    self.ty
                        .compare_nullable(a.as_ref(), b.as_ref())
                        .then_with(|| raw_a.cmp(raw_b))
                });
                keyed.into_iter().map(|(_, raw)| raw).collect::<Vec<_>>()
            }
            PrioritySource::Explicit(priorities) => {
                let mut keyed = distinct
                    .into_iter()
                    .map(|raw| {
                        priorities
                            .get(raw)
                            .map(|&p| (p, raw))
                            .ok_or_else(|| ConfigurationError::MissingPriority {
                                value: raw.to_string(),
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                keyed.sort();
                keyed.into_iter().map(|(_, raw)| raw).collect()
            }
        };
        if self.order == PriorityOrder::HighestToLowest {
            ranked.reverse();
        }
        Ok(ranked)
    }
}

impl<D: DataType> IHierarchyBuilder for PriorityBasedBuilder<D> {
    fn kind(&self) -> BuilderKind {
        BuilderKind::PriorityBased
    }

    fn is_prepared(&self) -> bool {
        self.state.is_prepared()
    }

    fn prepare(&mut self, data: &[String]) -> HierarchyResult<Vec<usize>> {
        self.state.reset();
        let ranked = self.ranking(data)?;
        let distinct = ranked.len();
        let levels = distinct.min(self.max_levels);
        let bands: HashMap<&str, usize> = ranked
            .iter()
            .enumerate()
            .map(|(rank, raw)| (*raw, rank * levels / distinct))
            .collect();
        debug!(distinct, levels, "priority bands computed");

        let rows = data
            .iter()
            .map(|raw| {
                let band = bands.get(raw.as_str()).copied().unwrap_or(0);
                let mut row = Vec::with_capacity(levels + 1);
                row.push(raw.clone());
                row.extend((1..=levels).map(|height| {
                    if band < height {
                        self.wildcard.clone()
                    } else {
                        raw.clone()
                    }
                }));
                row
            })
            .collect();
        let hierarchy = Hierarchy::new(rows)?;
        let counts = hierarchy.distinct_per_level();
        info!(rows = data.len(), levels, "priority-based hierarchy prepared");
        self.state = BuilderState::Prepared(hierarchy);
        Ok(counts)
    }

    fn build(&mut self) -> HierarchyResult<Hierarchy> {
        let kind = self.kind();
        self.state.take(kind)
    }
}
