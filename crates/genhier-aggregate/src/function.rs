use std::fmt;

use genhier_core::datatype::{DataType, ValueKind};
use genhier_core::errors::{ConfigurationError, HierarchyResult};
use serde::{Deserialize, Serialize};

use crate::{numeric, textual};

/// Folds the raw values of one group into a representative label.
///
/// Functions are stateless and deterministic. Numeric variants need a data
/// type whose [`ValueKind`] is numeric; [`AggregateFunction::check_supported`]
/// is called by the builders when a function is attached so the error
/// surfaces at configuration time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "function", rename_all = "snake_case")]
pub enum AggregateFunction {
    /// Mean of all non-null values.
    ArithmeticMean,
    /// Mean in log10 space, exponentiated.
    GeometricMean,
    /// Mean of the minimum and the maximum.
    ArithmeticMeanOfBounds,
    /// Geometric mean of the minimum and the maximum.
    GeometricMeanOfBounds,
    /// `[min, max]`.
    Bounds,
    /// `[min, max)` and friends.
    Interval {
        lower_included: bool,
        upper_included: bool,
    },
    /// Longest shared prefix, optionally padded with a redaction character.
    CommonPrefix { redaction: Option<char> },
    /// A fixed label.
    Constant { value: String },
    /// `{a, b, c}`.
    Set,
    /// Every value truncated to `length` characters, joined with `-`.
    SetOfPrefixes { length: usize },
}

impl AggregateFunction {
    pub fn interval(lower_included: bool, upper_included: bool) -> Self {
        AggregateFunction::Interval {
            lower_included,
            upper_included,
        }
    }

    pub fn common_prefix(redaction: Option<char>) -> Self {
        AggregateFunction::CommonPrefix { redaction }
    }

    pub fn constant(value: impl Into<String>) -> Self {
        AggregateFunction::Constant {
            value: value.into(),
        }
    }

    pub fn set_of_prefixes(length: usize) -> HierarchyResult<Self> {
        if length == 0 {
            return Err(ConfigurationError::InvalidParameter {
                function: "Set of prefixes".to_string(),
                parameter: length.to_string(),
            }
            .into());
        }
        Ok(AggregateFunction::SetOfPrefixes { length })
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            AggregateFunction::ArithmeticMean => "Arithmetic mean",
            AggregateFunction::GeometricMean => "Geometric mean",
            AggregateFunction::ArithmeticMeanOfBounds => "Arithmetic mean of lower and upper bound",
            AggregateFunction::GeometricMeanOfBounds => "Geometric mean of lower and upper bound",
            AggregateFunction::Bounds => "Bounding values",
            AggregateFunction::Interval { .. } => "Interval",
            AggregateFunction::CommonPrefix { .. } => "Common prefix",
            AggregateFunction::Constant { .. } => "Constant value",
            AggregateFunction::Set => "Set of values",
            AggregateFunction::SetOfPrefixes { .. } => "Set of prefixes",
        }
    }

    fn is_numeric(&self) -> bool {
        matches!(
            self,
            AggregateFunction::ArithmeticMean
                | AggregateFunction::GeometricMean
                | AggregateFunction::ArithmeticMeanOfBounds
                | AggregateFunction::GeometricMeanOfBounds
        )
    }

    pub fn supports(&self, kind: ValueKind) -> bool {
        !self.is_numeric() || kind.is_numeric()
    }

    pub fn check_supported<D: DataType>(&self, ty: &D) -> HierarchyResult<()> {
        if self.supports(ty.kind()) {
            Ok(())
        } else {
            Err(ConfigurationError::UnsupportedFunction {
                function: self.name().to_string(),
                type_name: ty.name().to_string(),
            }
            .into())
        }
    }

    /// Whether this variant carries a string parameter.
    pub fn has_parameter(&self) -> bool {
        matches!(
            self,
            AggregateFunction::CommonPrefix { .. }
                | AggregateFunction::Constant { .. }
                | AggregateFunction::SetOfPrefixes { .. }
        )
    }

    /// The current parameter rendered as text.
    pub fn parameter(&self) -> Option<String> {
        match self {
            AggregateFunction::CommonPrefix { redaction } => {
                Some(redaction.map(String::from).unwrap_or_default())
            }
            AggregateFunction::Constant { value } => Some(value.clone()),
            AggregateFunction::SetOfPrefixes { length } => Some(length.to_string()),
            _ => None,
        }
    }

    pub fn accepts_parameter(&self, parameter: &str) -> bool {
        match self {
            AggregateFunction::CommonPrefix { .. } => parameter.chars().count() <= 1,
            AggregateFunction::Constant { .. } => true,
            AggregateFunction::SetOfPrefixes { .. } => {
                parameter.parse::<usize>().is_ok_and(|n| n > 0)
            }
            _ => false,
        }
    }

    /// A new instance of the same variant carrying `parameter`.
    pub fn with_parameter(&self, parameter: &str) -> HierarchyResult<Self> {
        if !self.accepts_parameter(parameter) {
            return Err(ConfigurationError::InvalidParameter {
                function: self.name().to_string(),
                parameter: parameter.to_string(),
            }
            .into());
        }
        Ok(match self {
            AggregateFunction::CommonPrefix { .. } => {
                AggregateFunction::common_prefix(parameter.chars().next())
            }
            AggregateFunction::Constant { .. } => AggregateFunction::constant(parameter),
            AggregateFunction::SetOfPrefixes { .. } => AggregateFunction::SetOfPrefixes {
                // accepts_parameter guarantees a positive integer
                length: parameter.parse().unwrap_or(1),
            },
            other => other.clone(),
        })
    }

    /// Fold `values` into one label.
    pub fn aggregate<D, S>(&self, ty: &D, values: &[S]) -> HierarchyResult<String>
    where
        D: DataType,
        S: AsRef<str>,
    {
        match self {
            AggregateFunction::ArithmeticMean => numeric::arithmetic_mean(self, ty, values),
            AggregateFunction::GeometricMean => numeric::geometric_mean(self, ty, values),
            AggregateFunction::ArithmeticMeanOfBounds => {
                let bounds = textual::min_max(ty, values)?;
                numeric::arithmetic_mean(self, ty, &bounds_as_values(ty, bounds))
            }
            AggregateFunction::GeometricMeanOfBounds => {
                let bounds = textual::min_max(ty, values)?;
                numeric::geometric_mean(self, ty, &bounds_as_values(ty, bounds))
            }
            AggregateFunction::Bounds => textual::bounds(ty, values, true, true),
            AggregateFunction::Interval {
                lower_included,
                upper_included,
            } => textual::bounds(ty, values, *lower_included, *upper_included),
            AggregateFunction::CommonPrefix { redaction } => {
                Ok(textual::common_prefix(values, *redaction))
            }
            AggregateFunction::Constant { value } => Ok(value.clone()),
            AggregateFunction::Set => Ok(textual::set(values)),
            AggregateFunction::SetOfPrefixes { length } => {
                Ok(textual::set_of_prefixes(values, *length))
            }
        }
    }
}

fn bounds_as_values<D: DataType>(ty: &D, bounds: Option<(D::Value, D::Value)>) -> Vec<String> {
    match bounds {
        Some((min, max)) => vec![ty.format(&min), ty.format(&max)],
        None => Vec::new(),
    }
}

impl Default for AggregateFunction {
    fn default() -> Self {
        AggregateFunction::interval(true, false)
    }
}

impl fmt::Display for AggregateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parameter() {
            Some(parameter) if !parameter.is_empty() => write!(f, "{} ({parameter})", self.name()),
            _ => write!(f, "{}", self.name()),
        }
    }
}
