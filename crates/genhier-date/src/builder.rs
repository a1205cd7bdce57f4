use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::Datelike;
use genhier_aggregate::AggregateFunction;
use genhier_core::config::DateConfig;
use genhier_core::constants::{LOWER_BOUND_PREFIX, NULL_VALUE, UPPER_BOUND_PREFIX};
use genhier_core::errors::{ConfigurationError, DataError, HierarchyResult, ValidationError};
use genhier_core::{
    BuilderKind, BuilderState, DataType, DateType, Hierarchy, IHierarchyBuilder, IntegerType,
};
use genhier_interval::repeat_window;
use tracing::{debug, info};

use crate::granularity::Granularity;

/// One column per granularity. Dates before the bottom coding bound or at
/// or after the top coding bound get `<bound` / `>=bound` in every column.
#[derive(Debug, Clone)]
pub struct DateBasedBuilder {
    ty: DateType,
    granularities: Vec<Granularity>,
    formats: HashMap<Granularity, String>,
    bottom_coding: Option<i64>,
    top_coding: Option<i64>,
    state: BuilderState<Hierarchy>,
}

impl DateBasedBuilder {
    pub fn new(ty: DateType, granularities: impl IntoIterator<Item = Granularity>) -> Self {
        Self {
            ty,
            granularities: granularities.into_iter().collect(),
            formats: HashMap::new(),
            bottom_coding: None,
            top_coding: None,
            state: BuilderState::Unprepared,
        }
    }

    /// Apply the format overrides of `[date.formats]`.
    pub fn with_config(
        ty: DateType,
        granularities: impl IntoIterator<Item = Granularity>,
        config: &DateConfig,
    ) -> HierarchyResult<Self> {
        let mut builder = Self::new(ty, granularities);
        for (name, pattern) in &config.formats {
            let granularity = name.parse::<Granularity>()?;
            builder.formats.insert(granularity, pattern.clone());
        }
        Ok(builder)
    }

    pub fn data_type(&self) -> &DateType {
        &self.ty
    }

    pub fn granularities(&self) -> &[Granularity] {
        &self.granularities
    }

    pub fn set_granularities(&mut self, granularities: impl IntoIterator<Item = Granularity>) {
        self.granularities = granularities.into_iter().collect();
        self.state.reset();
    }

    pub fn format_for(&self, granularity: Granularity) -> &str {
        self.formats
            .get(&granularity)
            .map_or(granularity.default_format(), String::as_str)
    }

    pub fn set_format(&mut self, granularity: Granularity, pattern: impl Into<String>) {
        self.formats.insert(granularity, pattern.into());
        self.state.reset();
    }

    pub fn bottom_coding(&self) -> Option<i64> {
        self.bottom_coding
    }

    pub fn top_coding(&self) -> Option<i64> {
        self.top_coding
    }

    pub fn set_bottom_coding(&mut self, bound: Option<i64>) {
        self.bottom_coding = bound;
        self.state.reset();
    }

    pub fn set_top_coding(&mut self, bound: Option<i64>) {
        self.top_coding = bound;
        self.state.reset();
    }

    /// Set both coding bounds from text in the data type's format.
    pub fn set_coding_bounds_str(
        &mut self,
        bottom: Option<&str>,
        top: Option<&str>,
    ) -> HierarchyResult<()> {
        let bottom = bottom.map(|raw| self.parse_bound(raw)).transpose()?;
        let top = top.map(|raw| self.parse_bound(raw)).transpose()?;
        self.set_bottom_coding(bottom);
        self.set_top_coding(top);
        Ok(())
    }

    fn parse_bound(&self, raw: &str) -> HierarchyResult<i64> {
        self.ty.parse(raw).ok().flatten().ok_or_else(|| {
            ConfigurationError::UnparsableBound {
                value: raw.to_string(),
                type_name: self.ty.name().to_string(),
            }
            .into()
        })
    }

    pub fn is_valid(&self) -> HierarchyResult<()> {
        if let (Some(bottom), Some(top)) = (self.bottom_coding, self.top_coding) {
            if bottom >= top {
                return Err(ValidationError::BoundOrder {
                    bound: "coding".to_string(),
                    reason: format!(
                        "bottom {} is not below top {}",
                        self.ty.format(&bottom),
                        self.ty.format(&top)
                    ),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Label of one timestamp at one granularity.
    pub fn label(&self, millis: i64, granularity: Granularity) -> HierarchyResult<String> {
        if let Some(width) = granularity.bucket_width() {
            let year = self
                .ty
                .to_datetime(millis)
                .map(|dt| i64::from(dt.year()))
                .ok_or_else(|| self.unformattable(millis))?;
            let (lower, upper) = repeat_window(&IntegerType, &0, &width, &year);
            return AggregateFunction::interval(true, false)
                .aggregate(&IntegerType, &[lower.to_string(), upper.to_string()]);
        }
        self.ty
            .format_with(millis, self.format_for(granularity))
            .ok_or_else(|| self.unformattable(millis))
    }

    fn unformattable(&self, millis: i64) -> genhier_core::HierarchyError {
        DataError::Unparsable {
            value: millis.to_string(),
            type_name: self.ty.name().to_string(),
        }
        .into()
    }

    fn coded(&self, millis: i64) -> Option<String> {
        if let Some(bottom) = self.bottom_coding {
            if millis.cmp(&bottom) == Ordering::Less {
                return Some(format!("{LOWER_BOUND_PREFIX}{}", self.ty.format(&bottom)));
            }
        }
        if let Some(top) = self.top_coding {
            if millis.cmp(&top) != Ordering::Less {
                return Some(format!("{UPPER_BOUND_PREFIX}{}", self.ty.format(&top)));
            }
        }
        None
    }

    fn row(&self, raw: &str) -> HierarchyResult<Vec<String>> {
        let mut row = Vec::with_capacity(self.granularities.len() + 1);
        row.push(raw.to_string());
        let Some(millis) = self.ty.parse(raw)? else {
            row.extend(self.granularities.iter().map(|_| NULL_VALUE.to_string()));
            return Ok(row);
        };
        if let Some(coded) = self.coded(millis) {
            debug!(value = raw, label = %coded, "date coded");
            row.extend(self.granularities.iter().map(|_| coded.clone()));
            return Ok(row);
        }
        for &granularity in &self.granularities {
            row.push(self.label(millis, granularity)?);
        }
        Ok(row)
    }
}

impl IHierarchyBuilder for DateBasedBuilder {
    fn kind(&self) -> BuilderKind {
        BuilderKind::DateBased
    }

    fn is_prepared(&self) -> bool {
        self.state.is_prepared()
    }

    fn prepare(&mut self, data: &[String]) -> HierarchyResult<Vec<usize>> {
        self.state.reset();
        self.is_valid()?;
        let rows = data
            .iter()
            .map(|raw| self.row(raw))
            .collect::<HierarchyResult<Vec<_>>>()?;
        let hierarchy = Hierarchy::new(rows)?;
        let counts = hierarchy.distinct_per_level();
        info!(
            rows = data.len(),
            granularities = self.granularities.len(),
            "date-based hierarchy prepared"
        );
        self.state = BuilderState::Prepared(hierarchy);
        Ok(counts)
    }

    fn build(&mut self) -> HierarchyResult<Hierarchy> {
        let kind = self.kind();
        self.state.take(kind)
    }
}
