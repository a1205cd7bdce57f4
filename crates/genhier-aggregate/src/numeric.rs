//! Arithmetic and geometric means. Nulls contribute to neither the sum nor
//! the count; an all-null group divides zero by zero and formats whatever
//! the type makes of NaN.

use genhier_core::datatype::DataType;
use genhier_core::errors::{ConfigurationError, HierarchyResult};

use crate::AggregateFunction;

pub(crate) fn arithmetic_mean<D, S>(
    function: &AggregateFunction,
    ty: &D,
    values: &[S],
) -> HierarchyResult<String>
where
    D: DataType,
    S: AsRef<str>,
{
    let scalars = scalars(function, ty, values)?;
    let mean = scalars.iter().sum::<f64>() / scalars.len() as f64;
    format_scalar(function, ty, mean)
}

pub(crate) fn geometric_mean<D, S>(
    function: &AggregateFunction,
    ty: &D,
    values: &[S],
) -> HierarchyResult<String>
where
    D: DataType,
    S: AsRef<str>,
{
    let scalars = scalars(function, ty, values)?;
    let log_mean = scalars.iter().map(|v| v.log10()).sum::<f64>() / scalars.len() as f64;
    format_scalar(function, ty, 10f64.powf(log_mean))
}

fn scalars<D, S>(function: &AggregateFunction, ty: &D, values: &[S]) -> HierarchyResult<Vec<f64>>
where
    D: DataType,
    S: AsRef<str>,
{
    let mut out = Vec::with_capacity(values.len());
    for raw in values {
        if let Some(value) = ty.parse(raw.as_ref())? {
            out.push(ty.to_scalar(&value).ok_or_else(|| unsupported(function, ty))?);
        }
    }
    Ok(out)
}

fn format_scalar<D: DataType>(
    function: &AggregateFunction,
    ty: &D,
    scalar: f64,
) -> HierarchyResult<String> {
    // Integral and temporal types round inside from_scalar.
    let value = ty
        .from_scalar(scalar)
        .ok_or_else(|| unsupported(function, ty))?;
    Ok(ty.format(&value))
}

fn unsupported<D: DataType>(function: &AggregateFunction, ty: &D) -> genhier_core::HierarchyError {
    ConfigurationError::UnsupportedFunction {
        function: function.name().to_string(),
        type_name: ty.name().to_string(),
    }
    .into()
}
