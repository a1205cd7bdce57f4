//! The hierarchy artifact: one row per input record, column 0 holds the raw
//! value and column `j > 0` its generalization at level `j`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::{HierarchyError, HierarchyResult};

/// Rectangular matrix of labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")]
pub struct Hierarchy {
    rows: Vec<Vec<String>>,
}

impl Hierarchy {
    /// Wrap rows, rejecting ragged input.
    pub fn new(rows: Vec<Vec<String>>) -> HierarchyResult<Self> {
        if let Some(first) = rows.first() {
            let width = first.len();
            if width == 0 {
                return Err(HierarchyError::MalformedHierarchy {
                    reason: "rows must contain at least the raw value".to_string(),
                });
            }
            if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
                return Err(HierarchyError::MalformedHierarchy {
                    reason: format!(
                        "row {index} has {} columns, expected {width}",
                        row.len()
                    ),
                });
            }
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns, raw column included.
    pub fn height(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// All labels of one level, in row order.
    pub fn column(&self, level: usize) -> Option<Vec<&str>> {
        if level >= self.height() {
            return None;
        }
        Some(self.rows.iter().map(|r| r[level].as_str()).collect())
    }

    /// Number of distinct labels per column.
    pub fn distinct_per_level(&self) -> Vec<usize> {
        (0..self.height())
            .map(|level| {
                self.rows
                    .iter()
                    .map(|r| r[level].as_str())
                    .collect::<HashSet<_>>()
                    .len()
            })
            .collect()
    }

    /// Content hash of the artifact. Two builds agree bit for bit iff their
    /// fingerprints agree.
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(self.rows.len() as u64).to_le_bytes());
        hasher.update(&(self.height() as u64).to_le_bytes());
        for cell in self.rows.iter().flatten() {
            hasher.update(&(cell.len() as u64).to_le_bytes());
            hasher.update(cell.as_bytes());
        }
        hasher.finalize().to_hex().to_string()
    }
}

impl TryFrom<Vec<Vec<String>>> for Hierarchy {
    type Error = HierarchyError;

    fn try_from(rows: Vec<Vec<String>>) -> Result<Self, Self::Error> {
        Hierarchy::new(rows)
    }
}

impl From<Hierarchy> for Vec<Vec<String>> {
    fn from(hierarchy: Hierarchy) -> Self {
        hierarchy.rows
    }
}
