//! Centralized error handling for datamop.
//!
//! Cleaning operations return [`Result`] with a closed error enum, so a
//! caller can match on what went wrong instead of parsing strings:
//!
//! ```
//! use datamop::error::DatamopError;
//!
//! fn describe(err: &DatamopError) -> &'static str {
//!     match err {
//!         DatamopError::UnknownStrategy(_) => "pick one of the listed strategies",
//!         DatamopError::NotNumeric(_) => "this operation needs a numeric column",
//!         _ => "see the error message",
//!     }
//! }
//! ```
//!
//! `From` conversions let the `?` operator lift engine and I/O failures
//! into [`DatamopError`] without boilerplate.

use std::fmt;

/// Main error type for datamop operations.
#[derive(Debug)]
pub enum DatamopError {
    /// I/O errors (file operations etc.)
    Io(std::io::Error),

    /// Dataframe engine failures (Polars)
    DataProcessing(String),

    /// A strategy or method name the caller supplied is not recognized
    UnknownStrategy(String),

    /// The named column does not exist in the dataset
    ColumnNotFound(String),

    /// The named column is not numeric but the operation requires it
    NotNumeric(String),

    /// Generic error with context
    Other(String),
}

impl fmt::Display for DatamopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::DataProcessing(msg) => write!(f, "Data processing error: {msg}"),
            Self::UnknownStrategy(name) => write!(f, "Unknown strategy: '{name}'"),
            Self::ColumnNotFound(name) => write!(f, "Column not found: '{name}'"),
            Self::NotNumeric(name) => write!(f, "Column '{name}' is not numeric"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for DatamopError {}

impl From<std::io::Error> for DatamopError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<polars::error::PolarsError> for DatamopError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::DataProcessing(err.to_string())
    }
}

impl From<anyhow::Error> for DatamopError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

// Frontends usually want a plain string.
impl From<DatamopError> for String {
    fn from(err: DatamopError) -> Self {
        err.to_string()
    }
}

/// Result type alias for datamop operations.
pub type Result<T> = std::result::Result<T, DatamopError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DatamopError::NotNumeric("city".to_owned());
        assert_eq!(err.to_string(), "Column 'city' is not numeric");

        let err = DatamopError::UnknownStrategy("fill_average".to_owned());
        assert_eq!(err.to_string(), "Unknown strategy: 'fill_average'");
    }

    #[test]
    fn test_error_conversion_to_string() {
        let err = DatamopError::ColumnNotFound("salary".to_owned());
        let s: String = err.into();
        assert_eq!(s, "Column not found: 'salary'");
    }

    #[test]
    fn test_polars_error_conversion() {
        let polars_err = polars::error::PolarsError::ComputeError("boom".into());
        let err: DatamopError = polars_err.into();
        assert!(matches!(err, DatamopError::DataProcessing(_)));
        assert!(err.to_string().contains("boom"));
    }
}
