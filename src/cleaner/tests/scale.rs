use crate::cleaner::*;
use crate::error::DatamopError;
use anyhow::Result;
use polars::prelude::*;

#[test]
fn test_minmax_maps_to_unit_interval() -> Result<()> {
    let df = df!("v" => &[10.0, 20.0, 30.0])?;

    let result = scale_features(&df, &["v".to_owned()], &ScaleMethod::MinMax)?;

    let v = result.column("v")?.as_materialized_series().clone();
    let v = v.f64()?;
    assert_eq!(v.get(0), Some(0.0));
    assert_eq!(v.get(1), Some(0.5));
    assert_eq!(v.get(2), Some(1.0));
    Ok(())
}

#[test]
fn test_standard_centers_and_scales() -> Result<()> {
    let df = df!("v" => &[1.0, 2.0, 3.0])?;

    let result = scale_features(&df, &["v".to_owned()], &ScaleMethod::Standard)?;

    let v = result.column("v")?.as_materialized_series().clone();
    let v = v.f64()?;
    assert!((v.get(0).unwrap() + 1.0).abs() < 1e-9);
    assert!(v.get(1).unwrap().abs() < 1e-9);
    assert!((v.get(2).unwrap() - 1.0).abs() < 1e-9);
    Ok(())
}

#[test]
fn test_zero_spread_column_left_unchanged() -> Result<()> {
    let df = df!("v" => &[5.0, 5.0, 5.0])?;

    let result = scale_features(&df, &["v".to_owned()], &ScaleMethod::MinMax)?;
    assert!(
        result.equals_missing(&df),
        "a constant column has no scale to normalize by"
    );
    Ok(())
}

#[test]
fn test_unlisted_columns_untouched() -> Result<()> {
    let df = df!(
        "v" => &[10.0, 20.0],
        "w" => &[1.0, 2.0]
    )?;

    let result = scale_features(&df, &["v".to_owned()], &ScaleMethod::MinMax)?;
    let w = result.column("w")?.as_materialized_series().clone();
    assert_eq!(w.f64()?.get(1), Some(2.0));
    Ok(())
}

#[test]
fn test_non_numeric_rejected() -> Result<()> {
    let df = df!("c" => &["a", "b"])?;

    let err = scale_features(&df, &["c".to_owned()], &ScaleMethod::Standard).unwrap_err();
    assert!(matches!(err, DatamopError::NotNumeric(_)));
    Ok(())
}
