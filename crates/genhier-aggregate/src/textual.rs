use std::cmp::Ordering;

use genhier_core::constants::NULL_VALUE;
use genhier_core::datatype::DataType;
use genhier_core::errors::HierarchyResult;

/// Minimum and maximum of the non-null values under the type's order.
pub(crate) fn min_max<D, S>(ty: &D, values: &[S]) -> HierarchyResult<Option<(D::Value, D::Value)>>
where
    D: DataType,
    S: AsRef<str>,
{
    let mut bounds: Option<(D::Value, D::Value)> = None;
    for raw in values {
        let Some(value) = ty.parse(raw.as_ref())? else {
            continue;
        };
        bounds = Some(match bounds {
            None => (value.clone(), value),
            Some((min, max)) => {
                let min = if ty.compare(&value, &min) == Ordering::Less {
                    value.clone()
                } else {
                    min
                };
                let max = if ty.compare(&value, &max) == Ordering::Greater {
                    value
                } else {
                    max
                };
                (min, max)
            }
        });
    }
    Ok(bounds)
}

pub(crate) fn bounds<D, S>(
    ty: &D,
    values: &[S],
    lower_included: bool,
    upper_included: bool,
) -> HierarchyResult<String>
where
    D: DataType,
    S: AsRef<str>,
{
    let Some((min, max)) = min_max(ty, values)? else {
        return Ok(NULL_VALUE.to_string());
    };
    Ok(format!(
        "{}{}, {}{}",
        if lower_included { '[' } else { '(' },
        ty.format(&min),
        ty.format(&max),
        if upper_included { ']' } else { ')' },
    ))
}

pub(crate) fn common_prefix<S: AsRef<str>>(values: &[S], redaction: Option<char>) -> String {
    let Some(first) = values.first() else {
        return String::new();
    };
    let mut prefix: Vec<char> = first.as_ref().chars().collect();
    let mut longest = prefix.len();
    for value in &values[1..] {
        let value = value.as_ref();
        let shared = prefix
            .iter()
            .zip(value.chars())
            .take_while(|(a, b)| *a == b)
            .count();
        prefix.truncate(shared);
        longest = longest.max(value.chars().count());
    }
    let mut out: String = prefix.iter().collect();
    if let Some(c) = redaction {
        out.extend(std::iter::repeat(c).take(longest - prefix.len()));
    }
    out
}

pub(crate) fn set<S: AsRef<str>>(values: &[S]) -> String {
    let joined = values
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{joined}}}")
}

pub(crate) fn set_of_prefixes<S: AsRef<str>>(values: &[S], length: usize) -> String {
    values
        .iter()
        .map(|v| v.as_ref().chars().take(length).collect::<String>())
        .collect::<Vec<_>>()
        .join("-")
}
