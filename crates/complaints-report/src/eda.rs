//! The full exploratory report over a processed complaints table.

use std::path::{Path, PathBuf};

use polars::prelude::*;
use tracing::{info, info_span, warn};

use crate::error::Result;
use crate::missing::{DateSpan, MissingCount, date_span, missing_matrix_counts};
use crate::summary::{ColumnSummary, ValueCount, column_summary, value_counts};
use crate::timeline::{MonthlyCount, monthly_counts};
use crate::writer::write_table;

pub const COLUMN_SUMMARY_FILE: &str = "column_summary.csv";
pub const MISSING_VALUES_FILE: &str = "missing_values.csv";
pub const MONTHLY_COMPLAINTS_FILE: &str = "monthly_complaints.csv";
pub const DISPUTED_COUNTS_FILE: &str = "disputed_counts.csv";

/// Column names the report reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportColumns {
    pub date_received: String,
    pub disputed: String,
}

impl Default for ReportColumns {
    fn default() -> Self {
        Self {
            date_received: "date_received".to_string(),
            disputed: "consumer_disputed".to_string(),
        }
    }
}

/// Every table of the exploratory report.
///
/// Tables whose source column is absent are left empty.
#[derive(Debug, Clone, Default)]
pub struct EdaReport {
    pub columns: Vec<ColumnSummary>,
    pub missing: Vec<MissingCount>,
    pub missing_span: Option<DateSpan>,
    pub monthly: Vec<MonthlyCount>,
    pub disputed: Vec<ValueCount>,
}

impl EdaReport {
    /// Computes all tables; `tail` bounds the missing-value slice.
    pub fn build(df: &DataFrame, columns: &ReportColumns, tail: usize) -> Result<Self> {
        let span = info_span!("eda_report", rows = df.height(), tail);
        let _guard = span.enter();

        let has = |name: &str| df.get_column_names().iter().any(|c| c.as_str() == name);

        let (monthly, missing_span) = if has(&columns.date_received) {
            (
                monthly_counts(df, &columns.date_received)?,
                date_span(df, &columns.date_received, tail)?,
            )
        } else {
            warn!(column = %columns.date_received, "date column absent, skipping monthly counts");
            (Vec::new(), None)
        };

        let disputed = if has(&columns.disputed) {
            value_counts(df, &columns.disputed)?
        } else {
            warn!(column = %columns.disputed, "disputed column absent, skipping value counts");
            Vec::new()
        };

        Ok(Self {
            columns: column_summary(df)?,
            missing: missing_matrix_counts(df, tail),
            missing_span,
            monthly,
            disputed,
        })
    }

    /// Writes each table under `out_dir`, returning the written paths.
    pub fn write_to(&self, out_dir: &Path) -> Result<Vec<PathBuf>> {
        let targets = [
            out_dir.join(COLUMN_SUMMARY_FILE),
            out_dir.join(MISSING_VALUES_FILE),
            out_dir.join(MONTHLY_COMPLAINTS_FILE),
            out_dir.join(DISPUTED_COUNTS_FILE),
        ];
        write_table(&self.columns, &targets[0])?;
        write_table(&self.missing, &targets[1])?;
        write_table(&self.monthly, &targets[2])?;
        write_table(&self.disputed, &targets[3])?;

        info!(out_dir = %out_dir.display(), tables = targets.len(), "wrote report tables");
        Ok(targets.to_vec())
    }
}
