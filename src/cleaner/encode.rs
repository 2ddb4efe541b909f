//! Categorical column encoding.

use std::collections::{BTreeSet, HashMap, HashSet};

use polars::prelude::*;

use super::types::EncodeMethod;
use crate::error::{DatamopError, Result};

/// Encodes the named categorical columns.
///
/// `Label` maps each column's sorted distinct values to integer codes
/// and keeps nulls null. `OneHot` replaces each column with indicator
/// columns named `{column}_{value}`, dropping the first level.
///
/// # Errors
///
/// Fails if a named column does not exist.
pub fn encode_categorical(
    df: &DataFrame,
    columns: &[String],
    method: &EncodeMethod,
) -> Result<DataFrame> {
    for name in columns {
        df.column(name)
            .map_err(|_| DatamopError::ColumnNotFound(name.clone()))?;
    }
    match method {
        EncodeMethod::Label => label_encode(df, columns),
        EncodeMethod::OneHot => {
            let names: Vec<&str> = columns.iter().map(String::as_str).collect();
            Ok(df.columns_to_dummies(names, None, true)?)
        }
    }
}

fn label_encode(df: &DataFrame, columns: &[String]) -> Result<DataFrame> {
    let wanted: HashSet<&str> = columns.iter().map(String::as_str).collect();
    let mut out = Vec::with_capacity(df.width());

    for column in df.get_columns() {
        if !wanted.contains(column.name().as_str()) {
            out.push(column.clone());
            continue;
        }

        let strings = column.as_materialized_series().cast(&DataType::String)?;
        let values = strings.str()?;

        let classes: BTreeSet<&str> = values.into_iter().flatten().collect();
        let codes: HashMap<&str, u32> = classes
            .iter()
            .enumerate()
            .map(|(code, value)| (*value, code as u32))
            .collect();

        let encoded: UInt32Chunked = values
            .into_iter()
            .map(|value| value.and_then(|s| codes.get(s).copied()))
            .collect();
        out.push(Column::from(
            encoded.with_name(column.name().clone()).into_series(),
        ));
    }

    Ok(DataFrame::new(out)?)
}
