//! Zip-code coercion: numeric or missing, never an error.

use polars::prelude::*;

use crate::error::Result;
use crate::polars_utils::{parse_f64, parse_i64};

use super::CoercionRule;

/// Reinterprets one named column as integers in the narrowest width that fits.
///
/// Values that are not numeric (letters, placeholder masks such as `902XX`,
/// empty) become missing.
#[derive(Debug, Clone)]
pub struct ZipCodeRule {
    column: String,
}

impl ZipCodeRule {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
        }
    }
}

impl CoercionRule for ZipCodeRule {
    fn name(&self) -> &'static str {
        "zip_code"
    }

    fn applies_to(&self, column: &str) -> bool {
        column == self.column
    }

    fn coerce(&self, column: &Column) -> Result<Column> {
        let mut values: Vec<Option<i64>> = Vec::with_capacity(column.len());
        for idx in 0..column.len() {
            values.push(parse_zip_code(column.get(idx)?));
        }
        let dtype = smallest_int_type(&values);
        let series = Series::new(column.name().clone(), values).cast(&dtype)?;
        Ok(series.into_column())
    }
}

/// Reads a single zip-code cell as an integer.
///
/// Integral floats (e.g. `90210.0`) are accepted; fractional values are not.
pub fn parse_zip_code(value: AnyValue<'_>) -> Option<i64> {
    match value {
        AnyValue::Int8(v) => Some(i64::from(v)),
        AnyValue::Int16(v) => Some(i64::from(v)),
        AnyValue::Int32(v) => Some(i64::from(v)),
        AnyValue::Int64(v) => Some(v),
        AnyValue::UInt8(v) => Some(i64::from(v)),
        AnyValue::UInt16(v) => Some(i64::from(v)),
        AnyValue::UInt32(v) => Some(i64::from(v)),
        AnyValue::UInt64(v) => i64::try_from(v).ok(),
        AnyValue::Float32(v) => integral_f64(f64::from(v)),
        AnyValue::Float64(v) => integral_f64(v),
        AnyValue::String(s) => parse_zip_text(s),
        AnyValue::StringOwned(s) => parse_zip_text(&s),
        _ => None,
    }
}

fn parse_zip_text(value: &str) -> Option<i64> {
    parse_i64(value).or_else(|| parse_f64(value).and_then(integral_f64))
}

fn integral_f64(value: f64) -> Option<i64> {
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.is_finite() && value.fract() == 0.0 && in_range).then_some(value as i64)
}

/// The narrowest signed integer type holding every present value.
///
/// A column with no present values maps to `Int8`.
pub fn smallest_int_type(values: &[Option<i64>]) -> DataType {
    let present = values.iter().flatten().copied();
    let (min, max) = present.fold((0i64, 0i64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let fits = |lo: i64, hi: i64| min >= lo && max <= hi;

    if fits(i64::from(i8::MIN), i64::from(i8::MAX)) {
        DataType::Int8
    } else if fits(i64::from(i16::MIN), i64::from(i16::MAX)) {
        DataType::Int16
    } else if fits(i64::from(i32::MIN), i64::from(i32::MAX)) {
        DataType::Int32
    } else {
        DataType::Int64
    }
}
