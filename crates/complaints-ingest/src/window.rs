//! Row window selection for partial reads.

use std::fmt;
use std::str::FromStr;

use crate::error::{IngestError, Result};

/// How many data rows to read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowLimit {
    /// Every remaining data row.
    #[default]
    All,
    /// At most this many data rows.
    Rows(usize),
}

impl RowLimit {
    /// Number of rows to take, `None` meaning unbounded.
    pub fn as_option(self) -> Option<usize> {
        match self {
            RowLimit::All => None,
            RowLimit::Rows(n) => Some(n),
        }
    }
}

impl fmt::Display for RowLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowLimit::All => f.write_str("all"),
            RowLimit::Rows(n) => write!(f, "{n}"),
        }
    }
}

impl FromStr for RowLimit {
    type Err = IngestError;

    fn from_str(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(RowLimit::All);
        }
        trimmed.parse::<usize>().map(RowLimit::Rows).map_err(|_| {
            IngestError::invalid_argument(format!(
                "expected row limit as 'all' or a non-negative integer, got '{value}'"
            ))
        })
    }
}

/// A contiguous slice of data rows: skip `skip_count` rows after the header, then
/// read up to `row_limit` rows. The header row is never skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Window {
    pub row_limit: RowLimit,
    pub skip_count: usize,
}

impl Window {
    /// Window covering every data row.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(row_limit: RowLimit, skip_count: usize) -> Self {
        Self {
            row_limit,
            skip_count,
        }
    }

    /// Read `rows` data rows after skipping `skip_count`.
    pub fn rows(rows: usize, skip_count: usize) -> Self {
        Self::new(RowLimit::Rows(rows), skip_count)
    }

    /// Parses textual window parameters, validating both before reporting.
    pub fn parse(row_limit: &str, skip_count: &str) -> Result<Self> {
        let limit = row_limit.parse::<RowLimit>();
        let skip = skip_count.trim().parse::<usize>();
        match (limit, skip) {
            (Ok(row_limit), Ok(skip_count)) => Ok(Self::new(row_limit, skip_count)),
            _ => Err(IngestError::invalid_argument(format!(
                "expected row limit as 'all' or a non-negative integer and skip count as a \
                 non-negative integer, got '{row_limit}' and '{skip_count}'"
            ))),
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rows={} skip={}", self.row_limit, self.skip_count)
    }
}
