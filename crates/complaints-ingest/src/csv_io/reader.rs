//! Windowed CSV reading into text columns.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};
use crate::window::Window;

use super::header::take_headers;

fn open_csv(path: &Path) -> Result<csv::Reader<BufReader<File>>> {
    let file = File::open(path).map_err(|source| IngestError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file)))
}

/// Reads only the header row of a CSV file.
pub fn read_csv_headers(path: &Path) -> Result<Vec<String>> {
    let mut reader = open_csv(path)?;
    take_headers(&mut reader, path)
}

/// Reads a window of data rows into a DataFrame of string columns.
///
/// The header row always supplies the schema, so a window past the end of the
/// file (or a zero-row window) yields every column with no rows. Empty cells
/// become null. Rows shorter than the header are padded with nulls; longer rows
/// are rejected.
pub fn read_window(path: &Path, window: Window) -> Result<DataFrame> {
    let mut reader = open_csv(path)?;
    let headers = take_headers(&mut reader, path)?;
    let width = headers.len();

    let mut buffers: Vec<Vec<Option<String>>> = vec![Vec::new(); width];
    let limit = window.row_limit.as_option().unwrap_or(usize::MAX);

    for record in reader.records().skip(window.skip_count).take(limit) {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        if record.len() > width {
            let line = record.position().map_or(0, csv::Position::line);
            return Err(IngestError::CsvParse {
                path: path.to_path_buf(),
                message: format!(
                    "line {line}: expected {width} fields, found {}",
                    record.len()
                ),
            });
        }
        for (idx, buffer) in buffers.iter_mut().enumerate() {
            let value = record
                .get(idx)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(String::from);
            buffer.push(value);
        }
    }

    let columns: Vec<Column> = headers
        .iter()
        .zip(buffers)
        .map(|(name, values)| Series::new(name.as_str().into(), values).into_column())
        .collect();
    let df = DataFrame::new(columns)?;

    tracing::debug!(
        path = %path.display(),
        window = %window,
        rows = df.height(),
        columns = df.width(),
        "read CSV window"
    );
    Ok(df)
}
