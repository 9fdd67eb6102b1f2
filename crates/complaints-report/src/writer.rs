//! CSV persistence for report tables.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::{ReportError, Result};

/// Writes `rows` to `path` as CSV, one header line from the row fields.
///
/// Parent directories are created as needed. An empty slice produces an
/// empty file.
pub fn write_table<T: Serialize>(rows: &[T], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ReportError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let csv_err = |source| ReportError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
    for row in rows {
        writer.serialize(row).map_err(csv_err)?;
    }
    writer.flush().map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), rows = rows.len(), "wrote report table");
    Ok(())
}
