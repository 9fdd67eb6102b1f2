//! Exploratory summary tables for loaded complaints data.
//!
//! Computes the data behind the usual complaint-dataset charts:
//!
//! - **Column Summary**: valid and distinct value counts per column
//! - **Missing Values**: missing cells per column over the most recent rows
//! - **Monthly Counts**: complaints received per calendar month
//! - **Value Counts**: frequencies of a categorical column
//!
//! Tables are plain `serde::Serialize` rows and are persisted as CSV with
//! [`write_table`].

mod eda;
mod error;
mod missing;
mod summary;
mod timeline;
mod writer;

pub use eda::{
    COLUMN_SUMMARY_FILE, DISPUTED_COUNTS_FILE, EdaReport, MISSING_VALUES_FILE,
    MONTHLY_COMPLAINTS_FILE, ReportColumns,
};
pub use error::{ReportError, Result};
pub use missing::{DEFAULT_MISSING_TAIL, DateSpan, MissingCount, date_span, missing_matrix_counts};
pub use summary::{ColumnSummary, ValueCount, column_summary, value_counts};
pub use timeline::{MonthlyCount, monthly_counts};
pub use writer::write_table;
