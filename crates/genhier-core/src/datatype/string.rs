use std::cmp::Ordering;
use std::collections::HashMap;

use super::{is_null, unparsable, DataType, ValueKind};
use crate::errors::HierarchyResult;

/// Free text ordered lexicographically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringType;

impl DataType for StringType {
    type Value = String;

    fn name(&self) -> &'static str {
        "String"
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Text
    }

    fn parse(&self, raw: &str) -> HierarchyResult<Option<String>> {
        if is_null(raw) {
            return Ok(None);
        }
        Ok(Some(raw.to_string()))
    }

    fn format(&self, value: &String) -> String {
        value.clone()
    }

    fn compare(&self, a: &String, b: &String) -> Ordering {
        a.cmp(b)
    }
}

/// Text with a caller-supplied total order, e.g. ordinal categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedStringType {
    order: Vec<String>,
    positions: HashMap<String, usize>,
}

impl OrderedStringType {
    pub fn new<I, S>(order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let order: Vec<String> = order.into_iter().map(Into::into).collect();
        let positions = order
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        Self { order, positions }
    }

    /// The declared order.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn position(&self, value: &str) -> Option<usize> {
        self.positions.get(value).copied()
    }
}

impl DataType for OrderedStringType {
    type Value = String;

    fn name(&self) -> &'static str {
        "OrderedString"
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Text
    }

    fn parse(&self, raw: &str) -> HierarchyResult<Option<String>> {
        if is_null(raw) {
            return Ok(None);
        }
        if self.positions.contains_key(raw) {
            Ok(Some(raw.to_string()))
        } else {
            Err(unparsable(raw, self.name()).into())
        }
    }

    fn format(&self, value: &String) -> String {
        value.clone()
    }

    fn compare(&self, a: &String, b: &String) -> Ordering {
        self.position(a).cmp(&self.position(b))
    }
}
