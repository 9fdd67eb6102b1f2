//! Date/time coercion for date-named columns.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use polars::prelude::*;

use crate::error::{IngestError, Result};

use super::CoercionRule;

/// Storage type for every coerced date column.
pub const DATETIME_DTYPE: DataType = DataType::Datetime(TimeUnit::Milliseconds, None);

/// Forces every column whose identifier contains `date` to date/time.
///
/// Missing stays missing. A present value that does not parse is an error,
/// never a silent null. Values are stored at millisecond resolution; finer
/// digits are truncated.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeRule;

impl CoercionRule for DateTimeRule {
    fn name(&self) -> &'static str {
        "datetime"
    }

    fn applies_to(&self, column: &str) -> bool {
        column.contains("date")
    }

    fn coerce(&self, column: &Column) -> Result<Column> {
        match column.dtype() {
            DataType::Datetime(TimeUnit::Milliseconds, None) => return Ok(column.clone()),
            DataType::Datetime(_, _) | DataType::Date => {
                return Ok(column.cast(&DATETIME_DTYPE)?);
            }
            _ => {}
        }

        let text = column.cast(&DataType::String)?;
        let mut millis: Vec<Option<i64>> = Vec::with_capacity(text.len());
        for (row, value) in text.str()?.iter().enumerate() {
            let Some(raw) = value else {
                millis.push(None);
                continue;
            };
            let parsed = parse_datetime(raw).ok_or_else(|| IngestError::DateParseFailure {
                column: column.name().to_string(),
                row,
                value: raw.to_string(),
            })?;
            millis.push(Some(parsed.and_utc().timestamp_millis()));
        }

        let series = Series::new(column.name().clone(), millis).cast(&DATETIME_DTYPE)?;
        Ok(series.into_column())
    }
}

/// Parses a date or date/time string. Date-only values become midnight.
///
/// Accepts RFC 3339 (offset normalized to UTC), ISO 8601 with `T` or space,
/// slash-separated year-first and US month-first dates, and month-name forms.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }
    try_parse_datetime(trimmed)
        .or_else(|| try_parse_date(trimmed).map(|d| d.and_time(NaiveTime::MIN)))
}

fn try_parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let formats = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
        "%Y/%m/%d %H:%M",
        "%m/%d/%Y %H:%M:%S",
        "%m/%d/%Y %H:%M",
        "%d-%b-%Y %H:%M:%S",
    ];

    formats
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

fn try_parse_date(value: &str) -> Option<NaiveDate> {
    let formats = [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%m/%d/%Y", // US: 11/25/2022
        "%m/%d/%y",
        "%d-%b-%Y",  // 25-Nov-2022
        "%b %d, %Y", // Nov 25, 2022
        "%B %d, %Y", // November 25, 2022
        "%d %b %Y",
        "%d %B %Y",
        "%Y%m%d",
    ];

    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}
