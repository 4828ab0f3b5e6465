//! Loading of whitespace-delimited numeric grids
//!
//! This crate reads tabular data from a file, a caller-owned text stream,
//! another [`Dataset`], or a sequence of already-converted rows, and exposes
//! the result as row-major and column-major views.

#![warn(missing_docs)]

pub mod config;
pub mod dataset;
pub mod error;
pub mod grid;
pub mod source;
pub mod text;

// Re-export key types for convenience
pub use config::TextReaderOptions;
pub use dataset::Dataset;
pub use error::{Error, ErrorKind, Result};
pub use grid::{transpose, LINE_SEPARATOR};
pub use source::DataSource;
pub use text::{format_line, parse_field, read_file, read_file_with_options, read_path, TextGridReader};

#[cfg(test)]
pub(crate) fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
