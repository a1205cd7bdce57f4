use std::collections::BTreeMap;

use genhier_aggregate::AggregateFunction;
use genhier_core::errors::{ConfigurationError, HierarchyResult, ValidationError};
use serde::{Deserialize, Serialize};

/// `size` consecutive items folded into one label by `function`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    size: usize,
    function: AggregateFunction,
}

impl Group {
    pub fn new(size: usize, function: AggregateFunction) -> HierarchyResult<Self> {
        if size == 0 {
            return Err(ConfigurationError::NonPositiveGroupSize { size }.into());
        }
        Ok(Self { size, function })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn function(&self) -> &AggregateFunction {
        &self.function
    }
}

/// Ordered groups of one hierarchy height.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    groups: Vec<Group>,
}

impl Level {
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn push(&mut self, group: Group) {
        self.groups.push(group);
    }

    /// Total number of items covered by one pass over the groups.
    pub fn span(&self) -> usize {
        self.groups.iter().map(Group::size).sum()
    }
}

/// Mapping height → level. Heights must be contiguous from zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Levels {
    levels: BTreeMap<usize, Level>,
}

impl Levels {
    pub fn new() -> Self {
        Self::default()
    }

    /// The level at `index`, created empty if missing.
    pub fn level_mut(&mut self, index: usize) -> &mut Level {
        self.levels.entry(index).or_default()
    }

    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(&index)
    }

    pub fn add_group(
        &mut self,
        level: usize,
        size: usize,
        function: AggregateFunction,
    ) -> HierarchyResult<()> {
        let group = Group::new(size, function)?;
        self.level_mut(level).push(group);
        Ok(())
    }

    /// One past the highest declared level.
    pub fn height(&self) -> usize {
        self.levels.keys().next_back().map_or(0, |max| max + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn clear(&mut self) {
        self.levels.clear();
    }

    /// Levels in height order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Level)> {
        self.levels.iter().map(|(i, l)| (*i, l))
    }

    /// Every height below the maximum must be declared and non-empty.
    pub fn validate(&self) -> HierarchyResult<()> {
        for index in 0..self.height() {
            match self.levels.get(&index) {
                None => return Err(ValidationError::MissingLevel { level: index }.into()),
                Some(level) if level.is_empty() => {
                    return Err(ValidationError::EmptyLevel { level: index }.into())
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}
