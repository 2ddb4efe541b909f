//! Column classification: numeric vs categorical, by runtime dtype.

use polars::prelude::*;

use super::types::{ColumnKind, ColumnPartition};

/// Splits a dataset's columns into numeric and categorical name sets.
///
/// Boolean and temporal columns belong to neither set; callers treat an
/// empty set as "operation not applicable" rather than an error.
pub fn classify_columns(df: &DataFrame) -> ColumnPartition {
    let mut partition = ColumnPartition::default();
    for column in df.get_columns() {
        match column_kind(column.dtype()) {
            ColumnKind::Numeric => partition.numeric.push(column.name().to_string()),
            ColumnKind::Categorical => partition.categorical.push(column.name().to_string()),
            ColumnKind::Boolean | ColumnKind::Temporal => {}
        }
    }
    partition
}

/// Maps a dtype to its [`ColumnKind`].
pub fn column_kind(dtype: &DataType) -> ColumnKind {
    if is_numeric(dtype) {
        ColumnKind::Numeric
    } else if matches!(dtype, DataType::Boolean) {
        ColumnKind::Boolean
    } else if dtype.is_temporal() {
        ColumnKind::Temporal
    } else {
        // String, Categorical and anything else text-like.
        ColumnKind::Categorical
    }
}

pub(crate) fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int32
            | DataType::Int64
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}
