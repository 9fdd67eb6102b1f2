//! Missing-value profile over the most recent rows.

use chrono::NaiveDateTime;
use complaints_ingest::any_to_datetime;
use polars::prelude::*;
use serde::Serialize;

use crate::error::{ReportError, Result};
use crate::summary::lookup;

/// Default number of trailing rows inspected for missing values.
pub const DEFAULT_MISSING_TAIL: usize = 2000;

const SPAN_FORMAT: &str = "%m/%d/%Y";

/// Missing cells of one column within the inspected slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingCount {
    pub column: String,
    pub missing: usize,
}

/// First and last date found in a slice, rendered `MM/DD/YYYY`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSpan {
    pub first: String,
    pub last: String,
}

impl std::fmt::Display for DateSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.first, self.last)
    }
}

/// Counts missing cells per column over the last `tail` rows.
pub fn missing_matrix_counts(df: &DataFrame, tail: usize) -> Vec<MissingCount> {
    let slice = df.tail(Some(tail));
    slice
        .get_columns()
        .iter()
        .map(|col| MissingCount {
            column: col.name().to_string(),
            missing: col.null_count(),
        })
        .collect()
}

/// Earliest and latest dates of `column` over the last `tail` rows.
///
/// Returns `None` when the slice holds no dates.
pub fn date_span(df: &DataFrame, column: &str, tail: usize) -> Result<Option<DateSpan>> {
    let col = lookup(df, column)?;
    ensure_date_column(col)?;

    let slice = col.as_materialized_series().tail(Some(tail));
    let mut bounds: Option<(NaiveDateTime, NaiveDateTime)> = None;
    for idx in 0..slice.len() {
        let Some(value) = any_to_datetime(slice.get(idx)?) else {
            continue;
        };
        bounds = Some(match bounds {
            Some((lo, hi)) => (lo.min(value), hi.max(value)),
            None => (value, value),
        });
    }

    Ok(bounds.map(|(first, last)| DateSpan {
        first: first.format(SPAN_FORMAT).to_string(),
        last: last.format(SPAN_FORMAT).to_string(),
    }))
}

pub(crate) fn ensure_date_column(col: &Column) -> Result<()> {
    match col.dtype() {
        DataType::Date | DataType::Datetime(_, _) => Ok(()),
        other => Err(ReportError::NotADateColumn {
            column: col.name().to_string(),
            dtype: other.to_string(),
        }),
    }
}
