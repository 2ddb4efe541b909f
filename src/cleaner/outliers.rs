//! Outlier detection and removal on a single numeric column.

use polars::prelude::*;
use tracing::{debug, info};

use super::isolation::IsolationForest;
use super::types::OutlierMethod;
use crate::error::{DatamopError, Result};

/// IQR fence multiplier.
pub const IQR_MULTIPLIER: f64 = 1.5;

/// Below this many non-null values, quartiles are meaningless and IQR
/// detection reports no outliers.
pub const MIN_IQR_SAMPLES: usize = 4;

/// Removes the rows the chosen method flags as outliers in `column`,
/// returning the filtered dataset and the removed-row count.
///
/// Rows whose value in `column` is null are never outliers, so
/// `removed + result.height() == df.height()` always holds. Kept rows
/// preserve their original order. Degenerate inputs (too few values,
/// zero variance) yield the dataset unchanged with a removed count of 0.
///
/// # Errors
///
/// Fails if `column` does not exist or is not numeric; the caller keeps
/// its previous dataset in that case.
pub fn remove_outliers(
    df: &DataFrame,
    column: &str,
    method: &OutlierMethod,
) -> Result<(DataFrame, usize)> {
    let target = df
        .column(column)
        .map_err(|_| DatamopError::ColumnNotFound(column.to_owned()))?;
    if !super::classify::is_numeric(target.dtype()) {
        return Err(DatamopError::NotNumeric(column.to_owned()));
    }

    let series = target.as_materialized_series().cast(&DataType::Float64)?;
    let values = series.f64()?;

    let keep = match method {
        OutlierMethod::Iqr => iqr_keep_mask(values),
        OutlierMethod::IsolationForest {
            contamination,
            seed,
        } => forest_keep_mask(values, *contamination, *seed),
    };

    let Some(keep) = keep else {
        debug!(column, "no outliers detectable; dataset unchanged");
        return Ok((df.clone(), 0));
    };

    let result = df.filter(&keep)?;
    let removed = df.height() - result.height();
    info!(column, removed, "outlier removal finished");
    Ok((result, removed))
}

/// Mask of rows to keep under IQR fencing, or `None` when the column has
/// too few values to fence.
fn iqr_keep_mask(values: &Float64Chunked) -> Option<BooleanChunked> {
    let present = values.len() - values.null_count();
    if present < MIN_IQR_SAMPLES {
        return None;
    }

    let q1 = values.quantile(0.25, QuantileMethod::Linear).unwrap_or(None)?;
    let q3 = values.quantile(0.75, QuantileMethod::Linear).unwrap_or(None)?;
    let iqr = q3 - q1;
    let lower = q1 - IQR_MULTIPLIER * iqr;
    let upper = q3 + IQR_MULTIPLIER * iqr;
    debug!(lower, upper, "IQR fences computed");

    let mask: BooleanChunked = values
        .into_iter()
        .map(|value| Some(value.map_or(true, |x| x >= lower && x <= upper)))
        .collect();
    Some(mask)
}

/// Mask of rows to keep under isolation-forest scoring, or `None` when
/// the column is degenerate or the contamination rounds to zero rows.
fn forest_keep_mask(
    values: &Float64Chunked,
    contamination: f64,
    seed: u64,
) -> Option<BooleanChunked> {
    let mut rows = Vec::new();
    let mut sample = Vec::new();
    for (idx, value) in values.into_iter().enumerate() {
        if let Some(x) = value {
            rows.push(idx);
            sample.push(x);
        }
    }

    let n = sample.len();
    if n < 2 {
        return None;
    }
    let min = sample.iter().copied().fold(f64::INFINITY, f64::min);
    let max = sample.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if (max - min).abs() <= f64::EPSILON {
        // Zero variance: nothing is more isolated than anything else.
        return None;
    }
    let flagged = (contamination * n as f64).round() as usize;
    if flagged == 0 {
        return None;
    }

    let forest = IsolationForest::fit(&sample, seed);
    let scores: Vec<f64> = sample.iter().map(|&x| forest.anomaly_score(x)).collect();

    // Highest scores are removed; the sort is stable so equal scores
    // resolve by row order.
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut drop = vec![false; values.len()];
    for &i in order.iter().take(flagged) {
        drop[rows[i]] = true;
    }
    Some((0..values.len()).map(|i| Some(!drop[i])).collect())
}
