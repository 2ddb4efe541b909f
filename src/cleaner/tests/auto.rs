use crate::cleaner::*;
use anyhow::Result;
use polars::prelude::*;

#[test]
fn test_auto_clean_dedupes_then_imputes() -> Result<()> {
    let df = df!(
        "a" => &[Some(1.0), Some(1.0), None, Some(100.0)],
        "b" => &[Some("x"), Some("x"), Some("y"), None]
    )?;

    let result = auto_clean(&df)?;

    assert_eq!(result.height(), 3, "the duplicate (1, x) row is removed");
    assert!(
        missing_summary(&result).is_empty(),
        "numeric and categorical nulls must all be imputed"
    );

    // Median of the deduplicated 1 and 100 is 50.5.
    let a = result.column("a")?.as_materialized_series().clone();
    let a = a.f64()?;
    assert_eq!(a.get(0), Some(1.0));
    assert_eq!(a.get(1), Some(50.5));
    assert_eq!(a.get(2), Some(100.0));

    // Mode of the deduplicated "x", "y" ties; first-seen "x" wins.
    let b = result.column("b")?.as_materialized_series().clone();
    assert_eq!(b.str()?.get(2), Some("x"));
    Ok(())
}

#[test]
fn test_auto_clean_leaves_no_duplicates() -> Result<()> {
    let df = df!(
        "a" => &[Some(2.0), Some(2.0), None, Some(8.0)],
        "b" => &["p", "p", "q", "q"]
    )?;

    let cleaned = auto_clean(&df)?;
    let rededuped = remove_duplicates(&cleaned)?;
    assert!(
        cleaned.equals_missing(&rededuped),
        "auto-clean output must already be duplicate-free"
    );
    Ok(())
}

#[test]
fn test_auto_clean_without_numeric_columns() -> Result<()> {
    let df = df!("b" => &[Some("x"), None, Some("x")])?;

    let result = auto_clean(&df)?;
    assert_eq!(result.column("b")?.null_count(), 0);
    Ok(())
}

#[test]
fn test_auto_clean_empty_dataset() -> Result<()> {
    let df = df!("a" => &[1.0], "b" => &["x"])?.slice(0, 0);

    let result = auto_clean(&df)?;
    assert_eq!(result.height(), 0);
    assert_eq!(result.width(), 2);
    Ok(())
}
