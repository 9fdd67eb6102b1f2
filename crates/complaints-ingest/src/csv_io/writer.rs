//! CSV persistence for loaded tables.

use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};
use crate::polars_utils::any_to_string;

fn write_error(path: &Path, source: std::io::Error) -> IngestError {
    IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    }
}

/// Floats keep a fractional part (`2.0`, not `2`) so they reload as floats.
fn cell_text(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Float32(v) => format!("{v:?}"),
        AnyValue::Float64(v) => format!("{v:?}"),
        other => any_to_string(other),
    }
}

/// Writes `df` as a comma-delimited file with a header row.
///
/// Missing cells are written empty and date/time cells as ISO 8601, so the
/// output of the raw loader reads back through the processed loader unchanged.
/// Parent directories are created as needed.
pub fn write_csv(df: &DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| write_error(path, e))?;
    }

    let mut writer = csv::Writer::from_path(path).map_err(|e| write_error(path, e.into()))?;
    writer
        .write_record(df.get_column_names().iter().map(|name| name.as_str()))
        .map_err(|e| write_error(path, e.into()))?;

    let columns = df.get_columns();
    let mut record: Vec<String> = Vec::with_capacity(columns.len());
    for row in 0..df.height() {
        record.clear();
        for column in columns {
            record.push(cell_text(column.get(row)?));
        }
        writer
            .write_record(&record)
            .map_err(|e| write_error(path, e.into()))?;
    }
    writer.flush().map_err(|e| write_error(path, e))?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "wrote CSV"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_csv_formats_cells() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("out.csv");
        let df = df! {
            "product" => &[Some("Mortgage"), None],
            "zip_code" => &[Some(90210i32), None],
            "score" => &[1.5f64, 2.0],
        }
        .unwrap();

        write_csv(&df, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "product,zip_code,score\nMortgage,90210,1.5\n,,2.0\n");
    }

    #[test]
    fn test_write_csv_quotes_delimiters() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let df = df! { "company" => &["Acme, Inc"] }.unwrap();

        write_csv(&df, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "company\n\"Acme, Inc\"\n");
    }
}
