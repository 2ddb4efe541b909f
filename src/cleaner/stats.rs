//! Descriptive statistics and report data consumed by the embedding UI.
//!
//! Nothing here transforms the dataset; each function reads it and
//! returns plain report values. Chart rendering stays with the caller.

use std::collections::HashMap;

use polars::prelude::*;

use super::classify::{classify_columns, column_kind, is_numeric};
use super::types::{ColumnInfo, CorrelationMatrix, MissingSummary, NumericProfile};
use crate::error::{DatamopError, Result};

/// Default bin count for [`histogram`].
pub const DEFAULT_HISTOGRAM_BINS: usize = 30;

/// Standard descriptive statistics for every numeric column.
///
/// All statistics are `None` on an empty column: "not available" is an
/// explicit state, not an exception.
///
/// # Errors
///
/// Returns an error if the underlying dataframe engine fails.
pub fn basic_stats(df: &DataFrame) -> Result<Vec<NumericProfile>> {
    let mut profiles = Vec::new();
    for name in classify_columns(df).numeric {
        let series = df
            .column(&name)?
            .as_materialized_series()
            .cast(&DataType::Float64)?;
        let values = series.f64()?;

        profiles.push(NumericProfile {
            count: values.len() - values.null_count(),
            mean: values.mean(),
            std: values.std(1),
            min: values.min(),
            q1: values.quantile(0.25, QuantileMethod::Linear).unwrap_or(None),
            median: values.median(),
            q3: values.quantile(0.75, QuantileMethod::Linear).unwrap_or(None),
            max: values.max(),
            column: name,
        });
    }
    Ok(profiles)
}

/// Missing-value counts and percentages, listing only columns that
/// actually have missing values.
pub fn missing_summary(df: &DataFrame) -> Vec<MissingSummary> {
    let rows = df.height();
    df.get_columns()
        .iter()
        .filter_map(|column| {
            let missing = column.null_count();
            if missing == 0 {
                return None;
            }
            let pct = (missing as f64 / rows as f64 * 100.0 * 100.0).round() / 100.0;
            Some(MissingSummary {
                column: column.name().to_string(),
                missing_count: missing,
                missing_pct: pct,
            })
        })
        .collect()
}

/// Kind, non-null count and distinct count for every column.
///
/// # Errors
///
/// Returns an error if the underlying dataframe engine fails.
pub fn column_info(df: &DataFrame) -> Result<Vec<ColumnInfo>> {
    let mut infos = Vec::new();
    for column in df.get_columns() {
        let series = column.as_materialized_series();
        let mut distinct = series.n_unique()?;
        // Nulls do not count as a distinct value.
        if column.null_count() > 0 {
            distinct -= 1;
        }
        infos.push(ColumnInfo {
            column: column.name().to_string(),
            kind: column_kind(column.dtype()),
            non_null: column.len() - column.null_count(),
            distinct,
        });
    }
    Ok(infos)
}

/// Pearson correlation over the numeric columns, or `None` when fewer
/// than two exist.
///
/// # Errors
///
/// Returns an error if the underlying dataframe engine fails.
pub fn correlation_matrix(df: &DataFrame) -> Result<Option<CorrelationMatrix>> {
    let numeric = classify_columns(df).numeric;
    if numeric.len() < 2 {
        return Ok(None);
    }

    let mut casted = Vec::with_capacity(numeric.len());
    for name in &numeric {
        casted.push(
            df.column(name)?
                .as_materialized_series()
                .cast(&DataType::Float64)?,
        );
    }

    let mut data = Vec::with_capacity(casted.len());
    for i in 0..casted.len() {
        let mut row = Vec::with_capacity(casted.len());
        for j in 0..casted.len() {
            if i == j {
                row.push(1.0);
                continue;
            }
            let corr = if let (Ok(a), Ok(b)) = (casted[i].f64(), casted[j].f64()) {
                polars::prelude::cov::pearson_corr(a, b)
            } else {
                None
            };
            row.push(corr.unwrap_or(0.0));
        }
        data.push(row);
    }

    Ok(Some(CorrelationMatrix {
        columns: numeric,
        data,
    }))
}

/// Equal-width histogram of a numeric column: `(bin lower edge, count)`
/// per bin. Null values are not binned; an empty column yields an empty
/// histogram.
///
/// # Errors
///
/// Fails if the column does not exist or is not numeric.
pub fn histogram(df: &DataFrame, column: &str, bins: usize) -> Result<Vec<(f64, usize)>> {
    let target = df
        .column(column)
        .map_err(|_| DatamopError::ColumnNotFound(column.to_owned()))?;
    if !is_numeric(target.dtype()) {
        return Err(DatamopError::NotNumeric(column.to_owned()));
    }

    let series = target.as_materialized_series().cast(&DataType::Float64)?;
    let values = series.f64()?;
    let non_null = values.len() - values.null_count();

    let (Some(min), Some(max)) = (values.min(), values.max()) else {
        return Ok(Vec::new());
    };
    if bins == 0 {
        return Ok(Vec::new());
    }
    if (max - min).abs() < f64::EPSILON {
        // Single-valued column: one bin holds everything.
        return Ok(vec![(min, non_null)]);
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for value in values.into_iter().flatten() {
        let idx = ((value - min) / width).floor() as usize;
        if idx < bins {
            counts[idx] += 1;
        } else if (value - max).abs() < f64::EPSILON {
            counts[bins - 1] += 1;
        }
    }

    Ok(counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| (min + i as f64 * width, count))
        .collect())
}

/// The `n` most frequent non-null values of a column, most frequent
/// first. Ties break to the value seen first in column order.
///
/// # Errors
///
/// Fails if the column does not exist.
pub fn top_values(df: &DataFrame, column: &str, n: usize) -> Result<Vec<(String, usize)>> {
    let target = df
        .column(column)
        .map_err(|_| DatamopError::ColumnNotFound(column.to_owned()))?;
    let series = target.as_materialized_series();

    // value -> (count, first row index)
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (idx, value) in series.iter().enumerate() {
        if matches!(value, AnyValue::Null) {
            continue;
        }
        let key = if let Some(s) = value.get_str() {
            s.to_owned()
        } else {
            value.to_string()
        };
        let entry = counts.entry(key).or_insert((0, idx));
        entry.0 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(value, (count, first))| (value, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(n);

    Ok(ranked
        .into_iter()
        .map(|(value, count, _)| (value, count))
        .collect())
}
