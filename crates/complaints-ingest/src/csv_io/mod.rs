//! CSV reading and writing for complaints tables.

mod header;
mod reader;
mod writer;

pub use header::clean_header;
pub use reader::{read_csv_headers, read_window};
pub use writer::write_csv;
