//! The one-click cleaning pipeline.

use polars::prelude::*;
use tracing::info;

use super::classify::classify_columns;
use super::dedup::remove_duplicates;
use super::missing::{handle_missing, impute_mode};
use super::types::MissingStrategy;
use crate::error::Result;

/// Runs the fixed default pipeline: remove exact duplicates, then
/// median-impute numeric columns, then mode-impute categorical columns.
///
/// Duplicates go first so imputed values cannot skew what counts as a
/// duplicate, and imputation statistics are computed on deduplicated
/// data. A dataset with no numeric (or no categorical) columns skips
/// that step.
///
/// # Errors
///
/// Returns an error if the underlying dataframe engine fails.
pub fn auto_clean(df: &DataFrame) -> Result<DataFrame> {
    let deduped = remove_duplicates(df)?;
    let imputed = handle_missing(&deduped, &MissingStrategy::FillMedian)?;
    let categorical = classify_columns(&imputed).categorical;
    let result = impute_mode(&imputed, &categorical)?;

    info!(
        rows_in = df.height(),
        rows_out = result.height(),
        "auto-clean finished"
    );
    Ok(result)
}
