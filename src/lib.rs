//! # Datamop - Tabular Data Cleaning Library
//!
//! Datamop is a Rust library for cleaning and exploring tabular datasets.
//! It covers the transformations an interactive cleaning tool needs:
//! missing-value imputation, duplicate removal, outlier detection and
//! removal, feature scaling, categorical encoding, and the descriptive
//! statistics that feed tables and charts.
//!
//! Every operation has value semantics: it takes a [`polars::frame::DataFrame`],
//! returns a new one, and never mutates its input. That makes composition
//! (like the [`cleaner::auto_clean`] pipeline) safe and keeps the caller in
//! control of which dataset version it holds on to.
//!
//! ## Quick Start
//!
//! ```
//! use datamop::cleaner::{auto_clean, missing_summary};
//! use polars::prelude::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let df = df!(
//!     "age" => &[Some(34i64), None, Some(29)],
//!     "city" => &[Some("Oslo"), Some("Oslo"), None],
//! )?;
//!
//! let cleaned = auto_clean(&df)?;
//! assert!(missing_summary(&cleaned).is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Modules
//!
//! - [`cleaner`]: the transformation pipeline and statistics reporters
//! - [`session`]: original/working dataset pair for an interactive run
//! - [`error`]: error types and handling utilities
//! - [`logging`]: tracing setup for embedding applications
//!
//! ## Ownership Model
//!
//! A UI embedding this crate holds one [`session::Session`] per open
//! dataset. The session keeps the untouched original plus the working
//! copy; each cleaning call replaces the working copy wholesale. The
//! library itself never touches session state - it is handed one dataset
//! per call and hands one back.

#![warn(clippy::all, rust_2018_idioms)]

pub mod cleaner;
pub mod error;
pub mod logging;
pub mod session;
