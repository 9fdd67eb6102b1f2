//! Consumer complaints data ingestion.
//!
//! This crate loads complaints CSV exports into Polars DataFrames with a
//! clean, typed schema.
//!
//! # Features
//!
//! - **Windowed Reading**: Load all rows, or `N` rows after skipping `S`, header always kept
//! - **Column Normalization**: `"Consumer disputed?"` becomes `consumer_disputed`
//! - **Type Coercion**: Ordered rules for inference, date columns, and zip codes
//! - **Persistence**: Write a loaded table back out so it reloads unchanged
//!
//! # Example
//!
//! ```ignore
//! use complaints_ingest::{Window, load_processed, load_raw, write_csv};
//!
//! let raw = load_raw("data/raw/complaints.csv", Window::all())?;
//! write_csv(&raw, "data/processed/preprocessed-complaints.csv".as_ref())?;
//!
//! let processed = load_processed(
//!     "data/processed/preprocessed-complaints.csv",
//!     Window::rows(200_000, 100_000),
//! )?;
//! ```

mod coerce;
mod columns;
mod csv_io;
mod error;
mod loader;
mod polars_utils;
mod window;

// === Error Types ===
pub use error::{IngestError, Result};

// === Windows ===
pub use window::{RowLimit, Window};

// === CSV Reading & Writing ===
pub use csv_io::{clean_header, read_csv_headers, read_window, write_csv};

// === Column Normalization ===
pub use columns::{ColumnRoles, normalize_column_name, normalize_columns};

// === Type Coercion ===
pub use coerce::{
    CoercionRule, DateTimeRule, InferTypeRule, TypeCoercer, ZipCodeRule, parse_datetime,
    parse_zip_code, smallest_int_type,
};

// === Loaders ===
pub use loader::{load_processed, load_raw};

// === Polars Helpers ===
pub use polars_utils::{
    DATETIME_OUTPUT_FORMAT, any_to_datetime, any_to_string, format_numeric, parse_f64, parse_i64,
};
