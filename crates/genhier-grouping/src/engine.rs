//! Prepared groups and label deduplication.
//!
//! A grouping-based builder assigns every row to one group per level. Groups
//! live in a [`GroupArena`]; equal groups share one [`GroupId`]. When the
//! hierarchy is built, the first group to claim a textual label keeps it
//! verbatim; any other group rendering the same text gets `label-1`,
//! `label-2`, ... so distinct groups never collide and equal groups always
//! share one string.

use std::collections::{HashMap, HashSet};

use genhier_core::constants::LABEL_SUFFIX_SEPARATOR;
use genhier_core::errors::{HierarchyError, HierarchyResult};
use genhier_core::Hierarchy;

/// Index of a group in its arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(usize);

impl GroupId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Owns the labels of every group created while preparing one hierarchy.
#[derive(Debug, Clone, Default)]
pub struct GroupArena {
    labels: Vec<String>,
}

impl GroupArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new group carrying `label`.
    pub fn push(&mut self, label: impl Into<String>) -> GroupId {
        self.labels.push(label.into());
        GroupId(self.labels.len() - 1)
    }

    pub fn label(&self, id: GroupId) -> &str {
        &self.labels[id.0]
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Assigns rows to groups, one column per level above the raw values.
pub trait GroupPreparer {
    fn prepare_groups(
        &self,
        data: &[String],
        arena: &mut GroupArena,
    ) -> HierarchyResult<Vec<Vec<GroupId>>>;
}

/// Output of a successful `prepare`, consumed by `build`.
#[derive(Debug, Clone)]
pub struct PreparedGroups {
    data: Vec<String>,
    arena: GroupArena,
    columns: Vec<Vec<GroupId>>,
}

impl PreparedGroups {
    pub fn new(
        data: Vec<String>,
        arena: GroupArena,
        columns: Vec<Vec<GroupId>>,
    ) -> HierarchyResult<Self> {
        if let Some((level, column)) = columns
            .iter()
            .enumerate()
            .find(|(_, c)| c.len() != data.len())
        {
            return Err(HierarchyError::MalformedHierarchy {
                reason: format!(
                    "level {} assigns {} rows, expected {}",
                    level + 1,
                    column.len(),
                    data.len()
                ),
            });
        }
        Ok(Self {
            data,
            arena,
            columns,
        })
    }

    /// Number of generalization levels above the raw values.
    pub fn levels(&self) -> usize {
        self.columns.len()
    }

    /// Distinct values per column, raw column first.
    pub fn distinct_counts(&self) -> Vec<usize> {
        let mut counts = Vec::with_capacity(self.columns.len() + 1);
        counts.push(self.data.iter().collect::<HashSet<_>>().len());
        for column in &self.columns {
            counts.push(column.iter().collect::<HashSet<_>>().len());
        }
        counts
    }

    /// Render group ids to deduplicated labels.
    pub fn into_hierarchy(self) -> HierarchyResult<Hierarchy> {
        let PreparedGroups {
            data,
            arena,
            columns,
        } = self;

        // label -> (group -> assigned string)
        let mut multiplicities: HashMap<&str, HashMap<GroupId, String>> = HashMap::new();
        let mut rows = Vec::with_capacity(data.len());
        for (row, raw) in data.into_iter().enumerate() {
            let mut labels = Vec::with_capacity(columns.len() + 1);
            labels.push(raw);
            for column in &columns {
                let id = column[row];
                let base = arena.label(id);
                let assigned = multiplicities.entry(base).or_default();
                let claimed = assigned.len();
                let label = assigned.entry(id).or_insert_with(|| {
                    if claimed == 0 {
                        base.to_string()
                    } else {
                        format!("{base}{LABEL_SUFFIX_SEPARATOR}{claimed}")
                    }
                });
                labels.push(label.clone());
            }
            rows.push(labels);
        }
        Hierarchy::new(rows)
    }
}

/// Run a preparer over `data`.
pub fn prepare<P>(preparer: &P, data: &[String]) -> HierarchyResult<PreparedGroups>
where
    P: GroupPreparer + ?Sized,
{
    let mut arena = GroupArena::new();
    let columns = preparer.prepare_groups(data, &mut arena)?;
    PreparedGroups::new(data.to_vec(), arena, columns)
}
