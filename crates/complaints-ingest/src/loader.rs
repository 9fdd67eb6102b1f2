//! Loader entry points for raw and processed complaints files.

use std::path::Path;

use polars::prelude::*;
use tracing::{info, info_span};

use crate::coerce::TypeCoercer;
use crate::columns::{ColumnRoles, normalize_columns};
use crate::csv_io::read_window;
use crate::error::{IngestError, Result};
use crate::window::Window;

/// Loads a raw complaints export: read window, normalize headers, coerce types.
///
/// Normalization runs before coercion because the date and zip-code rules key
/// off canonical identifiers.
///
/// # Example
///
/// ```ignore
/// use complaints_ingest::{Window, load_raw};
///
/// let df = load_raw("data/raw/complaints.csv", Window::rows(200_000, 100_000))?;
/// ```
pub fn load_raw(path: impl AsRef<Path>, window: Window) -> Result<DataFrame> {
    let path = path.as_ref();
    let span = info_span!("load_raw", path = %path.display(), window = %window);
    let _guard = span.enter();

    let mut df = read_window(path, window)?;
    normalize_columns(&mut df)?;
    TypeCoercer::for_roles(&ColumnRoles::raw().normalized()).coerce(&mut df)?;

    info!(rows = df.height(), columns = df.width(), "loaded raw complaints");
    Ok(df)
}

/// Loads an already-preprocessed complaints file: read window, coerce types.
///
/// Headers are taken as canonical. The path must be valid UTF-8 text; this is
/// checked before any read.
pub fn load_processed(path: impl AsRef<Path>, window: Window) -> Result<DataFrame> {
    let path = path.as_ref();
    if path.to_str().is_none() {
        return Err(IngestError::invalid_argument(format!(
            "expected file path as UTF-8 text, got {}",
            path.display()
        )));
    }
    let span = info_span!("load_processed", path = %path.display(), window = %window);
    let _guard = span.enter();

    let mut df = read_window(path, window)?;
    TypeCoercer::for_roles(&ColumnRoles::canonical()).coerce(&mut df)?;

    info!(
        rows = df.height(),
        columns = df.width(),
        "loaded processed complaints"
    );
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_load_processed_rejects_non_utf8_path() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"complaints-\xff.csv"));
        let err = load_processed(path, Window::all()).unwrap_err();
        assert!(matches!(err, IngestError::InvalidArgument { .. }));
    }

    #[test]
    fn test_load_raw_missing_source() {
        let err = load_raw("/no/such/dir/complaints.csv", Window::all()).unwrap_err();
        assert!(matches!(err, IngestError::SourceUnavailable { .. }));
    }
}
