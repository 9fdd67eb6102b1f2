//! Best-effort type inference for text columns.

use std::collections::BTreeSet;

use polars::prelude::*;

use crate::error::Result;
use crate::polars_utils::{parse_f64, parse_i64};

use super::CoercionRule;

/// Narrows text columns to the tightest consistent type.
///
/// Tried in order over the non-null values: integer, float, boolean
/// (`true`/`false`, any case). Anything else stays text. Columns that are
/// already non-text, or that hold no values, are returned unchanged.
#[derive(Debug, Clone, Default)]
pub struct InferTypeRule {
    keep_text: BTreeSet<String>,
}

impl InferTypeRule {
    /// Infers every column except those named in `keep_text`.
    pub fn except<I, S>(keep_text: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keep_text: keep_text.into_iter().map(Into::into).collect(),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Some(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Parses every present value with `parse`; `None` if any present value fails.
fn parse_all<T>(
    values: &StringChunked,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<Vec<Option<T>>> {
    values
        .iter()
        .map(|value| match value {
            Some(text) => parse(text).map(Some),
            None => Some(None),
        })
        .collect()
}

impl CoercionRule for InferTypeRule {
    fn name(&self) -> &'static str {
        "infer"
    }

    fn applies_to(&self, column: &str) -> bool {
        !self.keep_text.contains(column)
    }

    fn coerce(&self, column: &Column) -> Result<Column> {
        if column.dtype() != &DataType::String || column.null_count() == column.len() {
            return Ok(column.clone());
        }
        let name = column.name().clone();
        let values = column.str()?;

        let series = if let Some(ints) = parse_all(values, parse_i64) {
            Series::new(name, ints)
        } else if let Some(floats) = parse_all(values, parse_f64) {
            Series::new(name, floats)
        } else if let Some(flags) = parse_all(values, parse_bool) {
            Series::new(name, flags)
        } else {
            return Ok(column.clone());
        };
        Ok(series.into_column())
    }
}
