//! Complaint counts per calendar month.

use std::collections::BTreeMap;

use chrono::Datelike;
use complaints_ingest::any_to_datetime;
use polars::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::missing::ensure_date_column;
use crate::summary::lookup;

/// Rows dated within one month, rendered `YYYY-MM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    pub month: String,
    pub count: usize,
}

/// Counts rows per month of `date_column`.
///
/// Months run from the earliest to the latest date, with empty months in
/// between reported as zero. Missing dates are ignored.
pub fn monthly_counts(df: &DataFrame, date_column: &str) -> Result<Vec<MonthlyCount>> {
    let col = lookup(df, date_column)?;
    ensure_date_column(col)?;

    let mut buckets: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for idx in 0..col.len() {
        if let Some(dt) = any_to_datetime(col.get(idx)?) {
            *buckets.entry((dt.year(), dt.month())).or_default() += 1;
        }
    }

    let (Some(&first), Some(&last)) = (buckets.keys().next(), buckets.keys().next_back()) else {
        return Ok(Vec::new());
    };

    let mut rows = Vec::new();
    let mut cursor = first;
    while cursor <= last {
        rows.push(MonthlyCount {
            month: format!("{:04}-{:02}", cursor.0, cursor.1),
            count: buckets.get(&cursor).copied().unwrap_or(0),
        });
        cursor = next_month(cursor);
    }

    debug!(
        column = date_column,
        months = rows.len(),
        "computed monthly counts"
    );
    Ok(rows)
}

fn next_month((year, month): (i32, u32)) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;
    use chrono::NaiveDate;

    fn dates(values: &[Option<&str>]) -> DataFrame {
        let days: Vec<Option<i32>> = values
            .iter()
            .map(|v| {
                v.map(|s| {
                    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
                    date.num_days_from_ce() - 719_163
                })
            })
            .collect();
        let col = Series::new("date_received".into(), days)
            .cast(&DataType::Date)
            .unwrap();
        DataFrame::new(vec![col.into_column()]).unwrap()
    }

    #[test]
    fn test_monthly_counts_fill_gaps() {
        let df = dates(&[
            Some("2022-11-01"),
            Some("2022-11-30"),
            None,
            Some("2023-02-14"),
        ]);
        let rows = monthly_counts(&df, "date_received").unwrap();
        let flat: Vec<(&str, usize)> = rows.iter().map(|r| (r.month.as_str(), r.count)).collect();
        assert_eq!(
            flat,
            vec![("2022-11", 2), ("2022-12", 0), ("2023-01", 0), ("2023-02", 1)]
        );
    }

    #[test]
    fn test_monthly_counts_no_dates() {
        let df = dates(&[None]);
        assert!(monthly_counts(&df, "date_received").unwrap().is_empty());
    }

    #[test]
    fn test_monthly_counts_missing_column() {
        let df = dates(&[Some("2022-11-01")]);
        let err = monthly_counts(&df, "date_sent_to_company").unwrap_err();
        assert!(matches!(err, ReportError::ColumnNotFound { .. }));
    }
}
