//! Error types for loading the launch table.

use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

/// Result type for dataset loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Startup-time failures while reading the launch table.
///
/// None of these are retried; the server refuses to start.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse launch table: {0}")]
    Parse(#[from] PolarsError),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("missing or non-coercible value in column '{column}' at row {row}")]
    MissingValue { column: &'static str, row: usize },

    #[error("invalid payload mass {value} at row {row}, expected a finite number")]
    InvalidPayload { value: f64, row: usize },

    #[error("invalid outcome class {value} at row {row}, expected 0 or 1")]
    InvalidOutcome { value: f64, row: usize },

    #[error("launch table has no rows")]
    Empty,
}
