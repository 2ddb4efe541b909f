use crate::cleaner::*;
use crate::error::DatamopError;
use anyhow::Result;
use polars::prelude::*;

#[test]
fn test_label_encoding_uses_sorted_codes() -> Result<()> {
    let df = df!("c" => &["b", "a", "c", "a"])?;

    let result = encode_categorical(&df, &["c".to_owned()], &EncodeMethod::Label)?;

    let c = result.column("c")?.as_materialized_series().clone();
    let c = c.u32()?;
    assert_eq!(c.get(0), Some(1), "'b' is the second sorted class");
    assert_eq!(c.get(1), Some(0));
    assert_eq!(c.get(2), Some(2));
    assert_eq!(c.get(3), Some(0));
    Ok(())
}

#[test]
fn test_label_encoding_keeps_nulls_null() -> Result<()> {
    let df = df!("c" => &[Some("b"), None, Some("a")])?;

    let result = encode_categorical(&df, &["c".to_owned()], &EncodeMethod::Label)?;

    let c = result.column("c")?.as_materialized_series().clone();
    assert_eq!(c.null_count(), 1);
    assert_eq!(c.u32()?.get(0), Some(1));
    assert_eq!(c.u32()?.get(2), Some(0));
    Ok(())
}

#[test]
fn test_one_hot_drops_source_and_first_level() -> Result<()> {
    let df = df!(
        "cat" => &["A", "B", "A"],
        "keep" => &[1i64, 2, 3]
    )?;

    let result = encode_categorical(&df, &["cat".to_owned()], &EncodeMethod::OneHot)?;

    assert!(result.column("cat").is_err(), "source column is replaced");
    assert!(result.column("cat_B").is_ok(), "indicator for the B level");
    assert!(
        result.column("cat_A").is_err(),
        "first level is dropped to avoid redundancy"
    );
    assert!(result.column("keep").is_ok(), "other columns untouched");
    assert_eq!(result.height(), 3);
    Ok(())
}

#[test]
fn test_missing_column_rejected() -> Result<()> {
    let df = df!("c" => &["a"])?;

    let err = encode_categorical(&df, &["nope".to_owned()], &EncodeMethod::Label).unwrap_err();
    assert!(matches!(err, DatamopError::ColumnNotFound(_)));
    Ok(())
}
