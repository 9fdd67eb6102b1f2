//! Per-column profiles and value frequencies.

use std::collections::{BTreeMap, BTreeSet};

use complaints_ingest::any_to_string;
use polars::prelude::*;
use serde::Serialize;

use crate::error::{ReportError, Result};

/// Non-missing and distinct value counts for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSummary {
    pub column: String,
    pub valid_count: usize,
    pub unique_count: usize,
}

/// How often one value occurs in a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Profiles every column, in table order.
pub fn column_summary(df: &DataFrame) -> Result<Vec<ColumnSummary>> {
    df.get_columns().iter().map(summarize_column).collect()
}

fn summarize_column(col: &Column) -> Result<ColumnSummary> {
    let mut unique_values: BTreeSet<String> = BTreeSet::new();
    let mut valid_count = 0usize;

    for idx in 0..col.len() {
        let value = col.get(idx)?;
        if value.is_null() {
            continue;
        }
        valid_count += 1;
        unique_values.insert(any_to_string(value));
    }

    Ok(ColumnSummary {
        column: col.name().to_string(),
        valid_count,
        unique_count: unique_values.len(),
    })
}

/// Frequencies of the present values of `column`.
///
/// Sorted by count descending, ties broken by value ascending.
pub fn value_counts(df: &DataFrame, column: &str) -> Result<Vec<ValueCount>> {
    let col = lookup(df, column)?;
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();

    for idx in 0..col.len() {
        let value = col.get(idx)?;
        if value.is_null() {
            continue;
        }
        *counts.entry(any_to_string(value)).or_default() += 1;
    }

    let mut rows: Vec<ValueCount> = counts
        .into_iter()
        .map(|(value, count)| ValueCount { value, count })
        .collect();
    // Stable sort keeps the BTreeMap's value order within equal counts.
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    Ok(rows)
}

pub(crate) fn lookup<'a>(df: &'a DataFrame, column: &str) -> Result<&'a Column> {
    df.column(column).map_err(|_| ReportError::ColumnNotFound {
        column: column.to_string(),
    })
}
