//! Column type coercion as an ordered list of rules.
//!
//! Each rule pairs a predicate on the column identifier with a conversion of
//! that column. Rules run in insertion order over every matching column, so a
//! later rule sees (and overrides) what an earlier rule produced. The default
//! pipeline infers plain types first, then forces date-named columns to
//! date/time and the zip-code column to integers.

mod datetime;
mod infer;
mod zip;

pub use datetime::{DateTimeRule, parse_datetime};
pub use infer::InferTypeRule;
pub use zip::{ZipCodeRule, parse_zip_code, smallest_int_type};

use polars::prelude::*;

use crate::columns::ColumnRoles;
use crate::error::Result;

/// A single coercion step.
pub trait CoercionRule: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Whether this rule rewrites the column called `column`.
    fn applies_to(&self, column: &str) -> bool;

    /// Produces the replacement column. The returned column keeps its name.
    fn coerce(&self, column: &Column) -> Result<Column>;
}

/// Ordered coercion pipeline applied to a whole table.
#[derive(Default)]
pub struct TypeCoercer {
    rules: Vec<Box<dyn CoercionRule>>,
}

impl TypeCoercer {
    /// An empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// The complaints pipeline: inference (skipping the text-only columns),
    /// then date columns, then the zip-code column.
    pub fn for_roles(roles: &ColumnRoles) -> Self {
        Self::new()
            .with_rule(InferTypeRule::except(roles.text_columns()))
            .with_rule(DateTimeRule)
            .with_rule(ZipCodeRule::new(&roles.zip_code))
    }

    /// Appends a rule to the end of the pipeline.
    #[must_use]
    pub fn with_rule(mut self, rule: impl CoercionRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Runs every rule over `df` in place. Column identifiers and order are unchanged.
    pub fn coerce(&self, df: &mut DataFrame) -> Result<()> {
        for rule in &self.rules {
            let targets: Vec<String> = df
                .get_column_names()
                .iter()
                .filter(|name| rule.applies_to(name.as_str()))
                .map(|name| name.to_string())
                .collect();
            for name in targets {
                let coerced = rule.coerce(df.column(&name)?)?;
                tracing::trace!(
                    rule = rule.name(),
                    column = %name,
                    dtype = %coerced.dtype(),
                    "coerced column"
                );
                df.with_column(coerced)?;
            }
        }
        tracing::debug!(
            rules = ?self.rule_names(),
            schema = ?df.dtypes(),
            "coerced table"
        );
        Ok(())
    }
}
