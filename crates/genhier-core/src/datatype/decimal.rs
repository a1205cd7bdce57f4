use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::{is_null, unparsable, DataType, RatioScale, ValueKind};
use crate::errors::HierarchyResult;

/// A 64-bit float with bitwise equality, so decimals can key hash maps.
/// `-0.0` is normalised to `0.0`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Decimal(pub f64);

impl Decimal {
    fn bits(self) -> u64 {
        if self.0 == 0.0 {
            0.0_f64.to_bits()
        } else {
            self.0.to_bits()
        }
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for Decimal {}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<f64> for Decimal {
    fn from(value: f64) -> Self {
        Decimal(value)
    }
}

/// Significant digits kept when rendering a decimal. Drops the binary
/// rounding noise that periodic offsets accumulate.
const SIGNIFICANT_DIGITS: usize = 15;

/// Floating-point numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecimalType;

impl DataType for DecimalType {
    type Value = Decimal;

    fn name(&self) -> &'static str {
        "Decimal"
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Floating
    }

    fn parse(&self, raw: &str) -> HierarchyResult<Option<Decimal>> {
        if is_null(raw) {
            return Ok(None);
        }
        raw.trim()
            .parse::<f64>()
            .map(|v| Some(Decimal(v)))
            .map_err(|_| unparsable(raw, self.name()).into())
    }

    fn format(&self, value: &Decimal) -> String {
        let rounded = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value.0)
            .parse::<f64>()
            .unwrap_or(value.0);
        Decimal(rounded).to_string()
    }

    fn compare(&self, a: &Decimal, b: &Decimal) -> Ordering {
        a.0.partial_cmp(&b.0)
            .unwrap_or_else(|| a.0.total_cmp(&b.0))
    }

    fn to_scalar(&self, value: &Decimal) -> Option<f64> {
        Some(value.0)
    }

    fn from_scalar(&self, scalar: f64) -> Option<Decimal> {
        Some(Decimal(scalar))
    }
}

impl RatioScale for DecimalType {
    fn add(&self, value: &Decimal, delta: &Decimal) -> Decimal {
        Decimal(value.0 + delta.0)
    }

    fn subtract(&self, a: &Decimal, b: &Decimal) -> Decimal {
        Decimal(a.0 - b.0)
    }

    fn multiply(&self, value: &Decimal, factor: f64) -> Decimal {
        Decimal(value.0 * factor)
    }

    fn ratio(&self, a: &Decimal, b: &Decimal) -> f64 {
        a.0 / b.0
    }
}
