use std::cmp::Ordering;
use std::fmt::Write;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

use super::{is_null, unparsable, DataType, RatioScale, ValueKind};
use crate::config::defaults;
use crate::errors::HierarchyResult;

/// Timestamps parsed with a strftime pattern, held as UTC milliseconds since
/// the epoch. Differences between dates are durations in the same unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateType {
    format: String,
}

impl DateType {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.format
    }

    /// Convert a timestamp back to a calendar date-time.
    pub fn to_datetime(&self, millis: i64) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(millis)
    }

    /// Format a timestamp with an arbitrary pattern. `%q` expands to the
    /// quarter (1-4). Returns `None` for out-of-range timestamps or invalid
    /// patterns.
    pub fn format_with(&self, millis: i64, pattern: &str) -> Option<String> {
        let datetime = self.to_datetime(millis)?;
        let quarter = (datetime.month0() / 3 + 1).to_string();
        let pattern = pattern.replace("%q", &quarter);
        let mut out = String::new();
        write!(out, "{}", datetime.format(&pattern)).ok()?;
        Some(out)
    }
}

impl Default for DateType {
    fn default() -> Self {
        Self::new(defaults::DEFAULT_DATE_FORMAT)
    }
}

impl DataType for DateType {
    type Value = i64;

    fn name(&self) -> &'static str {
        "Date"
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Temporal
    }

    fn parse(&self, raw: &str) -> HierarchyResult<Option<i64>> {
        if is_null(raw) {
            return Ok(None);
        }
        let raw_trimmed = raw.trim();
        let parsed = NaiveDateTime::parse_from_str(raw_trimmed, &self.format)
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(raw_trimmed, &self.format)
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            });
        match parsed {
            Some(datetime) => Ok(Some(datetime.and_utc().timestamp_millis())),
            None => Err(unparsable(raw, self.name()).into()),
        }
    }

    fn format(&self, value: &i64) -> String {
        self.format_with(*value, &self.format).unwrap_or_else(|| {
            tracing::warn!(millis = *value, "timestamp outside the calendar range");
            value.to_string()
        })
    }

    fn compare(&self, a: &i64, b: &i64) -> Ordering {
        a.cmp(b)
    }

    fn to_scalar(&self, value: &i64) -> Option<f64> {
        Some(*value as f64)
    }

    fn from_scalar(&self, scalar: f64) -> Option<i64> {
        // NaN collapses to the epoch.
        Some(scalar.round() as i64)
    }
}

impl RatioScale for DateType {
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
