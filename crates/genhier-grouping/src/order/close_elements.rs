use genhier_aggregate::AggregateFunction;
use genhier_core::errors::HierarchyResult;
use genhier_core::DataType;

use crate::engine::{GroupArena, GroupId};

/// A run of sorted values folded into one label. Keeps its members so higher
/// levels can aggregate over the original values.
#[derive(Debug, Clone)]
pub(crate) struct CloseElements {
    pub(crate) id: GroupId,
    members: Vec<String>,
}

impl CloseElements {
    pub(crate) fn new<D: DataType>(
        members: Vec<String>,
        function: &AggregateFunction,
        ty: &D,
        arena: &mut GroupArena,
    ) -> HierarchyResult<Self> {
        let label = function.aggregate(ty, &members)?;
        Ok(Self {
            id: arena.push(label),
            members,
        })
    }

    pub(crate) fn merge<D: DataType>(
        elements: &[CloseElements],
        function: &AggregateFunction,
        ty: &D,
        arena: &mut GroupArena,
    ) -> HierarchyResult<Self> {
        let members = elements
            .iter()
            .flat_map(|e| e.members.iter().cloned())
            .collect();
        Self::new(members, function, ty, arena)
    }
}
