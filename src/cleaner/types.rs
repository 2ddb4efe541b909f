use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DatamopError;

/// Inferred column kind, by runtime dtype rather than content heuristics.
///
/// Only `Numeric` and `Categorical` columns participate in the cleaning
/// partition; boolean and temporal columns are reported but belong to
/// neither side.
#[derive(Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Debug)]
pub enum ColumnKind {
    Numeric,
    Categorical,
    Boolean,
    Temporal,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Numeric => "Numeric",
            Self::Categorical => "Categorical",
            Self::Boolean => "Boolean",
            Self::Temporal => "Temporal",
        }
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Column names split by kind, as produced by
/// [`classify_columns`](super::classify_columns).
///
/// An empty side means "operation not applicable", never an error.
#[derive(Clone, Default, Serialize, Deserialize, Debug)]
pub struct ColumnPartition {
    pub numeric: Vec<String>,
    pub categorical: Vec<String>,
}

/// A literal constant for [`MissingStrategy::FillWith`].
///
/// The constant only applies to columns whose dtype can hold it: numeric
/// literals fill numeric columns, text literals fill string columns.
/// Columns of other kinds are left untouched.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub enum FillValue {
    Int(i64),
    Float(f64),
    Text(String),
}

/// How [`handle_missing`](super::handle_missing) treats missing values.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub enum MissingStrategy {
    /// Remove every row containing at least one missing value.
    Drop,
    /// Per numeric column, replace nulls with the mean of its non-null
    /// values. Categorical columns are untouched.
    FillMean,
    /// Per numeric column, replace nulls with the median of its non-null
    /// values. Categorical columns are untouched.
    FillMedian,
    /// In every column, replace nulls with the most frequent non-null
    /// value. Ties break to the value seen first in column order.
    FillMode,
    /// In every type-compatible column, replace nulls with the supplied
    /// literal.
    FillWith(FillValue),
}

impl FromStr for MissingStrategy {
    type Err = DatamopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drop" => Ok(Self::Drop),
            "fill_mean" => Ok(Self::FillMean),
            "fill_median" => Ok(Self::FillMedian),
            "fill_mode" => Ok(Self::FillMode),
            // "fill_value" needs a literal and is constructed directly.
            other => Err(DatamopError::UnknownStrategy(other.to_owned())),
        }
    }
}

/// Default anomaly fraction for isolation-forest outlier removal.
pub const DEFAULT_CONTAMINATION: f64 = 0.1;

/// Default RNG seed for isolation-forest outlier removal.
pub const DEFAULT_SEED: u64 = 42;

/// Outlier detection strategy for
/// [`remove_outliers`](super::remove_outliers).
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub enum OutlierMethod {
    /// Interquartile-range fencing: values outside
    /// `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]` are outliers.
    Iqr,
    /// Isolation forest over the single target column. Seeded, so the
    /// same input yields the same rows.
    IsolationForest { contamination: f64, seed: u64 },
}

impl OutlierMethod {
    /// Isolation forest with the default contamination and seed.
    pub fn isolation_forest() -> Self {
        Self::IsolationForest {
            contamination: DEFAULT_CONTAMINATION,
            seed: DEFAULT_SEED,
        }
    }
}

impl FromStr for OutlierMethod {
    type Err = DatamopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IQR" | "iqr" => Ok(Self::Iqr),
            "isolation_forest" => Ok(Self::isolation_forest()),
            other => Err(DatamopError::UnknownStrategy(other.to_owned())),
        }
    }
}

/// Scaling method for [`scale_features`](super::scale_features).
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub enum ScaleMethod {
    /// Z-score: `(x - mean) / std`.
    Standard,
    /// Min-max: `(x - min) / (max - min)`.
    MinMax,
}

impl FromStr for ScaleMethod {
    type Err = DatamopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "minmax" => Ok(Self::MinMax),
            other => Err(DatamopError::UnknownStrategy(other.to_owned())),
        }
    }
}

/// Encoding method for [`encode_categorical`](super::encode_categorical).
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub enum EncodeMethod {
    /// Sorted distinct values mapped to integer codes; nulls stay null.
    Label,
    /// Indicator columns per value, first level dropped.
    OneHot,
}

impl FromStr for EncodeMethod {
    type Err = DatamopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "label" => Ok(Self::Label),
            "onehot" => Ok(Self::OneHot),
            other => Err(DatamopError::UnknownStrategy(other.to_owned())),
        }
    }
}

/// Descriptive statistics for one numeric column.
///
/// Statistics over an empty column are reported as `None` rather than a
/// number that never existed.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct NumericProfile {
    pub column: String,
    /// Non-null count.
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q1: Option<f64>,
    pub median: Option<f64>,
    pub q3: Option<f64>,
    pub max: Option<f64>,
}

/// One row of the missing-value report. Columns without missing values
/// never appear in the report.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct MissingSummary {
    pub column: String,
    pub missing_count: usize,
    /// `100 * missing_count / rows`, rounded to 2 decimals.
    pub missing_pct: f64,
}

/// Kind, non-null count and distinct count for one column.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct ColumnInfo {
    pub column: String,
    pub kind: ColumnKind,
    pub non_null: usize,
    /// Distinct non-null values.
    pub distinct: usize,
}

/// Pearson correlation over the numeric columns of a dataset.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub data: Vec<Vec<f64>>,
}
