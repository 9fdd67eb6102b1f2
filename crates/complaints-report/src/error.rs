//! Error types for report generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or writing report tables.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Requested column is not in the table.
    #[error("column '{column}' not found")]
    ColumnNotFound { column: String },

    /// Column was expected to hold dates.
    #[error("column '{column}' is {dtype}, expected a date column")]
    NotADateColumn { column: String, dtype: String },

    /// Failed to create an output location.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize a table row.
    #[error("failed to write table {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for ReportError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
