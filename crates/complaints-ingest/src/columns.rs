//! Column identifier normalization and designated column roles.

use polars::prelude::*;

use crate::error::Result;

/// Names of the columns that get special treatment during loading.
///
/// Both columns are read as opaque text so inference cannot mix their
/// int/string values; the zip-code column is later forced to integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRoles {
    pub zip_code: String,
    pub disputed: String,
}

impl ColumnRoles {
    /// Header names as they appear in the raw complaints export.
    pub fn raw() -> Self {
        Self {
            zip_code: "ZIP code".to_string(),
            disputed: "Consumer disputed?".to_string(),
        }
    }

    /// Header names after normalization.
    pub fn canonical() -> Self {
        Self {
            zip_code: "zip_code".to_string(),
            disputed: "consumer_disputed".to_string(),
        }
    }

    /// Columns the reader keeps as text.
    pub fn text_columns(&self) -> [&str; 2] {
        [self.zip_code.as_str(), self.disputed.as_str()]
    }

    /// The same roles after their names pass through [`normalize_column_name`].
    pub fn normalized(&self) -> Self {
        Self {
            zip_code: normalize_column_name(&self.zip_code),
            disputed: normalize_column_name(&self.disputed),
        }
    }
}

impl Default for ColumnRoles {
    fn default() -> Self {
        Self::canonical()
    }
}

/// Maps a raw header to its canonical identifier.
///
/// Lowercase, spaces to underscores, `?` removed, hyphens to underscores.
/// Other characters pass through unchanged.
pub fn normalize_column_name(raw: &str) -> String {
    raw.to_lowercase()
        .replace(' ', "_")
        .replace('?', "")
        .replace('-', "_")
}

/// Rewrites every column identifier of `df` in place. Cell values are untouched.
///
/// Fails if two headers collapse onto the same identifier.
pub fn normalize_columns(df: &mut DataFrame) -> Result<()> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| normalize_column_name(name))
        .collect();
    df.set_column_names(names.iter().map(String::as_str))?;
    tracing::debug!(columns = ?names, "normalized column names");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_complaints_headers() {
        assert_eq!(normalize_column_name("ZIP code"), "zip_code");
        assert_eq!(normalize_column_name("Consumer disputed?"), "consumer_disputed");
        assert_eq!(normalize_column_name("Date received"), "date_received");
        assert_eq!(normalize_column_name("Sub-product"), "sub_product");
        assert_eq!(
            normalize_column_name("Timely response?"),
            "timely_response"
        );
    }

    #[test]
    fn test_unmapped_characters_pass_through() {
        assert_eq!(normalize_column_name("Amount ($)"), "amount_($)");
        assert_eq!(normalize_column_name("already_ok"), "already_ok");
    }

    #[test]
    fn test_raw_roles_normalize_to_canonical() {
        assert_eq!(ColumnRoles::raw().normalized(), ColumnRoles::canonical());
    }

    #[test]
    fn test_normalize_columns_keeps_values() {
        let mut df = df! {
            "Date received" => &["2022-01-01"],
            "ZIP code" => &["90210"],
        }
        .unwrap();

        normalize_columns(&mut df).unwrap();

        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, vec!["date_received", "zip_code"]);
        assert_eq!(
            df.column("zip_code").unwrap().str().unwrap().get(0),
            Some("90210")
        );
    }

    #[test]
    fn test_normalize_columns_rejects_collisions() {
        let mut df = df! {
            "Sub product" => &["a"],
            "sub-product" => &["b"],
        }
        .unwrap();

        assert!(normalize_columns(&mut df).is_err());
    }
}
