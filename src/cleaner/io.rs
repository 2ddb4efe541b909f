//! CSV boundary for the embedding UI.
//!
//! The cleaning core itself does no I/O; these helpers are what a
//! frontend calls to turn an uploaded file into a dataframe and the
//! working dataframe back into downloadable bytes.

use anyhow::{Context as _, Result};
use polars::prelude::*;
use std::path::Path;

/// Reads a CSV file (UTF-8, comma-delimited, header row) into a
/// dataframe, inferring the schema from up to 10000 rows.
///
/// # Errors
///
/// Fails if the file cannot be read or parsed.
pub fn load_csv(path: &Path) -> Result<DataFrame> {
    LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10000))
        .with_has_header(true)
        .finish()?
        .collect()
        .context("Failed to read CSV")
}

/// Writes a dataframe as CSV with a header row and no index column.
///
/// # Errors
///
/// Fails if the file cannot be created or written.
pub fn save_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path).context("Failed to create CSV file")?;
    CsvWriter::new(file)
        .include_header(true)
        .finish(df)
        .context("Failed to write CSV file")
}

/// Serializes a dataframe to in-memory CSV bytes (UTF-8, header row, no
/// index column) for a download button.
///
/// # Errors
///
/// Fails if serialization fails.
pub fn csv_bytes(df: &DataFrame) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut df = df.clone();
    CsvWriter::new(&mut buf)
        .include_header(true)
        .finish(&mut df)
        .context("Failed to serialize CSV")?;
    Ok(buf)
}
