//! CSV header cleanup.

use std::path::Path;

use crate::error::{IngestError, Result};

/// Cleans a raw header cell: strips a UTF-8 byte-order mark and surrounding whitespace.
pub fn clean_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}

/// Pulls the header record off `reader`, rejecting sources with no header row.
pub(crate) fn take_headers<R: std::io::Read>(
    reader: &mut csv::Reader<R>,
    path: &Path,
) -> Result<Vec<String>> {
    let record = reader.headers().map_err(|e| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let headers: Vec<String> = record.iter().map(clean_header).collect();
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptySource {
            path: path.to_path_buf(),
        });
    }
    Ok(headers)
}
