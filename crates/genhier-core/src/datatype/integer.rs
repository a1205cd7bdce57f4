use std::cmp::Ordering;

use super::{is_null, unparsable, DataType, RatioScale, ValueKind};
use crate::errors::HierarchyResult;

/// Signed 64-bit integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerType;

impl DataType for IntegerType {
    type Value = i64;

    fn name(&self) -> &'static str {
        "Integer"
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Integral
    }

    fn parse(&self, raw: &str) -> HierarchyResult<Option<i64>> {
        if is_null(raw) {
            return Ok(None);
        }
        raw.trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| unparsable(raw, self.name()).into())
    }

    fn format(&self, value: &i64) -> String {
        value.to_string()
    }

    fn compare(&self, a: &i64, b: &i64) -> Ordering {
        a.cmp(b)
    }

    fn to_scalar(&self, value: &i64) -> Option<f64> {
        Some(*value as f64)
    }

    fn from_scalar(&self, scalar: f64) -> Option<i64> {
        // Saturating cast: NaN becomes 0.
        Some(scalar.round() as i64)
    }
}

impl RatioScale for IntegerType {
    fn add(&self, value: &i64, delta: &i64) -> i64 {
        value.saturating_add(*delta)
    }

    fn subtract(&self, a: &i64, b: &i64) -> i64 {
        a.saturating_sub(*b)
    }

    fn multiply(&self, value: &i64, factor: f64) -> i64 {
        if factor.fract() == 0.0 {
            value.saturating_mul(factor as i64)
        } else {
            (*value as f64 * factor).round() as i64
        }
    }

    fn ratio(&self, a: &i64, b: &i64) -> f64 {
        *a as f64 / *b as f64
    }
}
