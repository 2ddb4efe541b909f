//! Exact-duplicate row removal.

use polars::prelude::*;
use tracing::debug;

use crate::error::Result;

/// Removes rows that exactly match an earlier row in every column.
///
/// Nulls compare equal to nulls, the first occurrence is kept, and the
/// relative order of kept rows is preserved. The removed count is the
/// caller's `original.height() - result.height()`.
///
/// Float values compare by exact equality; values differing in the last
/// ulp are distinct rows.
///
/// # Errors
///
/// Returns an error if the underlying dataframe engine fails.
pub fn remove_duplicates(df: &DataFrame) -> Result<DataFrame> {
    let result = df.unique_stable(None, UniqueKeepStrategy::First, None)?;
    let removed = df.height() - result.height();
    if removed > 0 {
        debug!(removed, "dropped exact duplicate rows");
    }
    Ok(result)
}
