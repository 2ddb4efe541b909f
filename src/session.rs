//! Session state for one interactive cleaning run.
//!
//! A frontend constructs a [`Session`] when a dataset is loaded and keeps
//! it for the lifetime of that dataset's tab or window. The original is
//! never modified; every cleaning operation produces a fresh dataframe
//! that replaces the working copy wholesale via [`Session::replace_working`].
//! One session serves one user and one dataset at a time; embedding
//! servers must give each open dataset its own session.

use polars::prelude::DataFrame;

/// The original/working dataset pair behind an interactive cleaning UI.
#[derive(Debug, Clone)]
pub struct Session {
    original: DataFrame,
    working: DataFrame,
}

impl Session {
    /// Starts a session from a freshly loaded dataset.
    pub fn new(df: DataFrame) -> Self {
        Self {
            working: df.clone(),
            original: df,
        }
    }

    /// The dataset as it was loaded. Never changes.
    pub fn original(&self) -> &DataFrame {
        &self.original
    }

    /// The current, possibly-transformed dataset.
    pub fn working(&self) -> &DataFrame {
        &self.working
    }

    /// Installs the output of a cleaning operation as the new working
    /// dataset.
    pub fn replace_working(&mut self, df: DataFrame) {
        self.working = df;
    }

    /// Discards all transformations and restores the original.
    pub fn reset(&mut self) {
        self.working = self.original.clone();
    }

    /// How many rows the transformations applied so far have removed.
    pub fn rows_removed(&self) -> usize {
        self.original.height().saturating_sub(self.working.height())
    }

    /// Total missing values across all columns of the working dataset.
    pub fn total_missing(&self) -> usize {
        self.working
            .get_columns()
            .iter()
            .map(|c| c.null_count())
            .sum()
    }
}
