use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use genhier_core::errors::{ConfigurationError, HierarchyResult};
use genhier_core::DataType;

/// Caller-supplied ordering over raw values. `None` means the pair cannot
/// be ordered.
pub type Comparator = Arc<dyn Fn(&str, &str) -> Option<Ordering> + Send + Sync>;

/// How the order-based builder sorts its input.
#[derive(Clone, Default)]
pub enum ElementOrder {
    /// The data type's own `compare`, nulls last.
    #[default]
    Natural,
    Comparator(Comparator),
    /// Values ranked by their position in this list.
    Explicit(Vec<String>),
}

impl fmt::Debug for ElementOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementOrder::Natural => f.write_str("Natural"),
            ElementOrder::Comparator(_) => f.write_str("Comparator(..)"),
            ElementOrder::Explicit(order) => f.debug_tuple("Explicit").field(order).finish(),
        }
    }
}

impl ElementOrder {
    pub fn comparator<F>(compare: F) -> Self
    where
        F: Fn(&str, &str) -> Option<Ordering> + Send + Sync + 'static,
    {
        ElementOrder::Comparator(Arc::new(compare))
    }

    pub fn explicit<I, S>(order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ElementOrder::Explicit(order.into_iter().map(Into::into).collect())
    }

    /// Row indices of `data` in sorted order. The sort is stable, so equal
    /// values keep their input order.
    pub(crate) fn permutation<D: DataType>(
        &self,
        ty: &D,
        data: &[String],
    ) -> HierarchyResult<Vec<usize>> {
        let mut permutation: Vec<usize> = (0..data.len()).collect();
        match self {
            ElementOrder::Natural => {
                let parsed = data
                    .iter()
                    .map(|raw| ty.parse(raw))
                    .collect::<HierarchyResult<Vec<_>>>()?;
                permutation.sort_by(|&a, &b| {
                    ty.compare_nullable(parsed[a].as_ref(), parsed[b].as_ref())
                });
            }
            ElementOrder::Explicit(order) => {
                let positions: HashMap<&str, usize> = order
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (v.as_str(), i))
                    .collect();
                let ranks = data
                    .iter()
                    .map(|raw| {
                        positions.get(raw.as_str()).copied().ok_or_else(|| {
                            ConfigurationError::UnorderedValue { value: raw.clone() }
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                permutation.sort_by_key(|&i| ranks[i]);
            }
            ElementOrder::Comparator(compare) => {
                let mut failure = None;
                permutation.sort_by(|&a, &b| match compare(&data[a], &data[b]) {
                    Some(ordering) => ordering,
                    None => {
                        failure.get_or_insert((a, b));
                        Ordering::Equal
                    }
                });
                if let Some((a, b)) = failure {
                    return Err(ConfigurationError::ComparatorFailed {
                        left: data[a].clone(),
                        right: data[b].clone(),
                    }
                    .into());
                }
            }
        }
        Ok(permutation)
    }
}
