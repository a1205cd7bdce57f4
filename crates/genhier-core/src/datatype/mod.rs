//! Data type contract consumed by the builders.
//!
//! Values travel through the builders as raw strings. A [`DataType`] parses
//! them, orders them, and formats them back. Types that also implement
//! [`RatioScale`] support the interval arithmetic used for periodic lookup.

mod date;
mod decimal;
mod integer;
mod string;

pub use date::DateType;
pub use decimal::{Decimal, DecimalType};
pub use integer::IntegerType;
pub use string::{OrderedStringType, StringType};

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::constants::NULL_VALUE;
use crate::errors::{DataError, HierarchyResult};

/// Kind of value wrapped by a data type. Selects how means are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Temporal,
    Integral,
    Floating,
    Text,
}

impl ValueKind {
    /// True for kinds that can be averaged.
    pub fn is_numeric(self) -> bool {
        !matches!(self, ValueKind::Text)
    }
}

/// Parse, order and format values of one attribute.
pub trait DataType: Clone + fmt::Debug {
    type Value: Clone + Eq + Hash + fmt::Debug;

    /// Human-readable type name, used in error messages.
    fn name(&self) -> &'static str;

    fn kind(&self) -> ValueKind;

    /// Parse raw text into a value. The token `NULL` yields `Ok(None)`.
    fn parse(&self, raw: &str) -> HierarchyResult<Option<Self::Value>>;

    fn format(&self, value: &Self::Value) -> String;

    fn compare(&self, a: &Self::Value, b: &Self::Value) -> Ordering;

    /// Numeric view of a value, for numeric kinds only.
    fn to_scalar(&self, _value: &Self::Value) -> Option<f64> {
        None
    }

    /// Inverse of [`DataType::to_scalar`].
    fn from_scalar(&self, _scalar: f64) -> Option<Self::Value> {
        None
    }

    /// Compare two parsed values, nulls last.
    fn compare_nullable(&self, a: Option<&Self::Value>, b: Option<&Self::Value>) -> Ordering {
        match (a, b) {
            (Some(x), Some(y)) => self.compare(x, y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

/// Ratio-scale arithmetic required by interval construction.
pub trait RatioScale: DataType {
    fn add(&self, value: &Self::Value, delta: &Self::Value) -> Self::Value;

    fn subtract(&self, a: &Self::Value, b: &Self::Value) -> Self::Value;

    fn multiply(&self, value: &Self::Value, factor: f64) -> Self::Value;

    /// `a / b` as a real number.
    fn ratio(&self, a: &Self::Value, b: &Self::Value) -> f64;
}

pub(crate) fn is_null(raw: &str) -> bool {
    raw == NULL_VALUE
}

pub(crate) fn unparsable(raw: &str, type_name: &str) -> DataError {
    DataError::Unparsable {
        value: raw.to_string(),
        type_name: type_name.to_string(),
    }
}
