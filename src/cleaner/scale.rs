//! Numeric feature scaling.

use polars::prelude::*;
use tracing::debug;

use super::classify::is_numeric;
use super::types::ScaleMethod;
use crate::error::{DatamopError, Result};

/// Scales the named numeric columns in place of their originals, row
/// count preserved.
///
/// Zero-spread columns (constant value, or fewer than two values) have
/// no meaningful scale and are left unchanged.
///
/// # Errors
///
/// Fails if a named column does not exist or is not numeric.
pub fn scale_features(
    df: &DataFrame,
    columns: &[String],
    method: &ScaleMethod,
) -> Result<DataFrame> {
    let mut exprs = Vec::new();
    for name in columns {
        let column = df
            .column(name)
            .map_err(|_| DatamopError::ColumnNotFound(name.clone()))?;
        if !is_numeric(column.dtype()) {
            return Err(DatamopError::NotNumeric(name.clone()));
        }

        let series = column.as_materialized_series().cast(&DataType::Float64)?;
        let values = series.f64()?;
        let has_spread = match method {
            ScaleMethod::Standard => values.std(1).is_some_and(|s| s > 0.0),
            ScaleMethod::MinMax => match (values.min(), values.max()) {
                (Some(lo), Some(hi)) => hi > lo,
                _ => false,
            },
        };
        if !has_spread {
            debug!(column = name.as_str(), "zero spread; column left unscaled");
            continue;
        }

        let e = col(name.as_str());
        let expr = match method {
            ScaleMethod::Standard => (e.clone() - e.clone().mean()) / e.std(1),
            ScaleMethod::MinMax => (e.clone() - e.clone().min()) / (e.clone().max() - e.min()),
        };
        exprs.push(expr.alias(name.as_str()));
    }

    if exprs.is_empty() {
        return Ok(df.clone());
    }
    Ok(df.clone().lazy().with_columns(exprs).collect()?)
}
