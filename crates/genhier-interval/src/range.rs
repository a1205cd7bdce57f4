use std::cmp::Ordering;

use genhier_core::errors::{ConfigurationError, HierarchyResult, ValidationError};
use genhier_core::DataType;

/// Bounds of one side of the domain.
///
/// Moving outward: values past `repeat_bound` fold into a single snap
/// interval, values past `snap_bound` are bottom/top coded, values past
/// `label_bound` are rejected. Unset bounds take defaults when the builder
/// validates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range<V> {
    pub repeat_bound: Option<V>,
    pub snap_bound: Option<V>,
    pub label_bound: Option<V>,
}

impl<V> Default for Range<V> {
    fn default() -> Self {
        Self {
            repeat_bound: None,
            snap_bound: None,
            label_bound: None,
        }
    }
}

impl<V> Range<V> {
    pub fn new(repeat_bound: Option<V>, snap_bound: Option<V>, label_bound: Option<V>) -> Self {
        Self {
            repeat_bound,
            snap_bound,
            label_bound,
        }
    }

    /// Parse the three bounds from raw text.
    pub fn parse<D: DataType<Value = V>>(
        ty: &D,
        repeat_bound: Option<&str>,
        snap_bound: Option<&str>,
        label_bound: Option<&str>,
    ) -> HierarchyResult<Self> {
        let parse = |raw: Option<&str>| -> HierarchyResult<Option<V>> {
            raw.map(|raw| {
                ty.parse(raw).ok().flatten().ok_or_else(|| {
                    ConfigurationError::UnparsableBound {
                        value: raw.to_string(),
                        type_name: ty.name().to_string(),
                    }
                    .into()
                })
            })
            .transpose()
        };
        Ok(Self::new(
            parse(repeat_bound)?,
            parse(snap_bound)?,
            parse(label_bound)?,
        ))
    }
}

impl<V: Clone> Range<V> {
    /// Fill unset bounds: repeat from `edge`, snap from repeat, label from snap.
    pub fn resolve(&self, edge: &V) -> ResolvedRange<V> {
        let repeat = self.repeat_bound.clone().unwrap_or_else(|| edge.clone());
        let snap = self.snap_bound.clone().unwrap_or_else(|| repeat.clone());
        let label = self.label_bound.clone().unwrap_or_else(|| snap.clone());
        ResolvedRange {
            repeat,
            snap,
            label,
        }
    }
}

/// A [`Range`] with every bound set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRange<V> {
    pub repeat: V,
    pub snap: V,
    pub label: V,
}

/// Check the ordering of resolved lower and upper ranges.
pub(crate) fn validate<D: DataType>(
    ty: &D,
    lower: &ResolvedRange<D::Value>,
    upper: &ResolvedRange<D::Value>,
) -> HierarchyResult<()> {
    let check = |bound: &str, a: &D::Value, b: &D::Value, allowed: Ordering, what: &str| {
        if ty.compare(a, b) == allowed.reverse() {
            Err(ValidationError::BoundOrder {
                bound: bound.to_string(),
                reason: format!("{} {} {}", ty.format(a), what, ty.format(b)),
            })
        } else {
            Ok(())
        }
    };
    check("repeat", &lower.repeat, &upper.repeat, Ordering::Less, "exceeds upper")?;
    check("snap", &lower.snap, &upper.snap, Ordering::Less, "exceeds upper")?;
    check("label", &lower.label, &upper.label, Ordering::Less, "exceeds upper")?;
    check("lower snap", &lower.snap, &lower.repeat, Ordering::Less, "exceeds repeat bound")?;
    check("upper snap", &upper.snap, &upper.repeat, Ordering::Greater, "is below repeat bound")?;
    check("lower label", &lower.label, &lower.snap, Ordering::Less, "exceeds snap bound")?;
    check("upper label", &upper.label, &upper.snap, Ordering::Greater, "is below snap bound")?;
    Ok(())
}
