//! Error types for dataset loading

use std::io;
use thiserror::Error;

/// Result type for dataset loading
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for dataset loading
#[derive(Error, Debug)]
pub enum Error {
    /// IO error from opening or reading a source, passed through unchanged
    ///
    /// Undecodable text is reported as [`Error::InvalidUtf8`] instead.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The source value is not a path, stream, dataset, or row sequence
    #[error("Unknown type for data: {type_name}")]
    UnsupportedSource {
        /// Name of the rejected type
        type_name: &'static str,
    },

    /// A field could not be converted to the element type
    #[error("line {line}, field {column}: cannot convert {field:?}: {message}")]
    Conversion {
        /// 1-based line number
        line: usize,
        /// 1-based field position within the line
        column: usize,
        /// The raw field text
        field: String,
        /// Message from the conversion function
        message: String,
    },

    /// A line is not valid UTF-8
    #[error("line {line} is not valid UTF-8: {message}")]
    InvalidUtf8 {
        /// 1-based line number
        line: usize,
        /// Decoder message
        message: String,
    },

    /// A line is longer than `TextReaderOptions::max_line_length`
    #[error("line {line} exceeds maximum length: {length} > {max}")]
    LineTooLong {
        /// 1-based line number
        line: usize,
        /// Line length in bytes
        length: usize,
        /// Configured maximum
        max: usize,
    },
}

/// Broad family an [`Error`] belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Filesystem or stream failure
    Io,
    /// Unsupported source type
    Type,
    /// Bad field or line contents
    Value,
}

impl Error {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_) => ErrorKind::Io,
            Error::UnsupportedSource { .. } => ErrorKind::Type,
            Error::Conversion { .. } | Error::InvalidUtf8 { .. } | Error::LineTooLong { .. } => {
                ErrorKind::Value
            }
        }
    }
}
