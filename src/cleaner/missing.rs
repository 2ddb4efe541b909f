//! Missing-value handling: row dropping and imputation strategies.

use std::collections::HashMap;
use std::collections::HashSet;

use polars::prelude::*;
use tracing::debug;

use super::classify::classify_columns;
use super::types::{FillValue, MissingStrategy};
use crate::error::Result;

/// Applies a missing-value strategy and returns the resulting dataset.
///
/// Row count is preserved by every strategy except
/// [`MissingStrategy::Drop`]; no strategy adds or removes columns.
///
/// # Errors
///
/// Returns an error if the underlying dataframe engine fails.
pub fn handle_missing(df: &DataFrame, strategy: &MissingStrategy) -> Result<DataFrame> {
    match strategy {
        MissingStrategy::Drop => drop_null_rows(df),
        MissingStrategy::FillMean => impute_numeric(df, |e| e.clone().fill_null(e.mean())),
        MissingStrategy::FillMedian => impute_numeric(df, |e| e.clone().fill_null(e.median())),
        MissingStrategy::FillMode => {
            let all: Vec<String> = df
                .get_column_names()
                .iter()
                .map(|name| name.to_string())
                .collect();
            impute_mode(df, &all)
        }
        MissingStrategy::FillWith(value) => fill_constant(df, value),
    }
}

/// Removes every row that has a null in any column.
fn drop_null_rows(df: &DataFrame) -> Result<DataFrame> {
    let mut keep = BooleanChunked::full("keep".into(), true, df.height());
    for column in df.get_columns() {
        keep = &keep & &column.as_materialized_series().is_not_null();
    }
    let result = df.filter(&keep)?;
    debug!(
        dropped = df.height() - result.height(),
        "dropped rows with missing values"
    );
    Ok(result)
}

/// Applies `fill` to every numeric column. A column that is entirely null
/// has no defined statistic and stays as-is (filling with a null
/// statistic is the identity).
fn impute_numeric(df: &DataFrame, fill: impl Fn(Expr) -> Expr) -> Result<DataFrame> {
    let numeric = classify_columns(df).numeric;
    if numeric.is_empty() {
        debug!("no numeric columns; imputation is a no-op");
        return Ok(df.clone());
    }
    let exprs: Vec<Expr> = numeric.iter().map(|name| fill(col(name.as_str()))).collect();
    Ok(df.clone().lazy().with_columns(exprs).collect()?)
}

/// Replaces nulls in the named columns with each column's most frequent
/// non-null value. Ties break to the value seen first in column order,
/// so the result does not depend on hash iteration order.
pub(crate) fn impute_mode(df: &DataFrame, columns: &[String]) -> Result<DataFrame> {
    let wanted: HashSet<&str> = columns.iter().map(String::as_str).collect();
    let mut out = Vec::with_capacity(df.width());

    for column in df.get_columns() {
        if !wanted.contains(column.name().as_str()) || column.null_count() == 0 {
            out.push(column.clone());
            continue;
        }
        let series = column.as_materialized_series();
        match first_mode_index(series) {
            Some(idx) => {
                let value = series.get(idx)?;
                let filled = fill_with_value(series, &value)?;
                out.push(Column::from(filled));
            }
            // Entirely null: no mode exists, leave the column alone.
            None => out.push(column.clone()),
        }
    }

    Ok(DataFrame::new(out)?)
}

/// Row index of the first occurrence of the most frequent non-null value.
fn first_mode_index(series: &Series) -> Option<usize> {
    // value repr -> (count, first row index)
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (idx, value) in series.iter().enumerate() {
        if matches!(value, AnyValue::Null) {
            continue;
        }
        let entry = counts.entry(value.to_string()).or_insert((0, idx));
        entry.0 += 1;
    }
    counts
        .into_values()
        .max_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)))
        .map(|(_, idx)| idx)
}

/// Replaces the nulls of `series` with `value`, keeping the dtype.
fn fill_with_value(series: &Series, value: &AnyValue<'_>) -> PolarsResult<Series> {
    let scalar = Series::from_any_values_and_dtype(
        series.name().clone(),
        core::slice::from_ref(value),
        series.dtype(),
        true,
    )?;
    let full = scalar.new_from_index(0, series.len());
    series.zip_with(&series.is_not_null(), &full)
}

/// Replaces nulls with a caller-supplied literal in every column whose
/// dtype can hold it; other columns are untouched.
fn fill_constant(df: &DataFrame, value: &FillValue) -> Result<DataFrame> {
    let mut exprs = Vec::new();
    for column in df.get_columns() {
        let name = column.name().as_str();
        let numeric = super::classify::is_numeric(column.dtype());
        let expr = match value {
            FillValue::Int(v) if numeric => Some(col(name).fill_null(lit(*v))),
            FillValue::Float(v) if numeric => Some(col(name).fill_null(lit(*v))),
            FillValue::Text(v) if matches!(column.dtype(), DataType::String) => {
                Some(col(name).fill_null(lit(v.as_str())))
            }
            _ => None,
        };
        if let Some(expr) = expr {
            exprs.push(expr);
        }
    }
    if exprs.is_empty() {
        debug!("no column is compatible with the fill literal; no-op");
        return Ok(df.clone());
    }
    Ok(df.clone().lazy().with_columns(exprs).collect()?)
}
