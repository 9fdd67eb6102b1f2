//! Error types for complaints data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, coercing, or persisting complaints data.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Argument Errors ===
    /// Window parameters or source locator were malformed. Raised before any I/O.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    // === File System Errors ===
    /// Source file could not be opened or read.
    #[error("source unavailable {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write an output file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Source has no header row.
    #[error("CSV file has no header row: {path}")]
    EmptySource { path: PathBuf },

    /// Malformed CSV record.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    // === Coercion Errors ===
    /// A date-named column holds a value the date parser rejects.
    #[error("column '{column}' row {row}: cannot parse '{value}' as a date")]
    DateParseFailure {
        column: String,
        row: usize,
        value: String,
    },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl IngestError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::DateParseFailure {
            column: "date_received".to_string(),
            row: 3,
            value: "not a date".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "column 'date_received' row 3: cannot parse 'not a date' as a date"
        );
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("test".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
