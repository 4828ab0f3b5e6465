//! Whitespace-delimited text reading
//!
//! Each line of the input is one row. Fields are separated by runs of
//! whitespace and converted independently; there is no header, comment, or
//! escape syntax.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::config::TextReaderOptions;
use crate::error::{Error, Result};

/// Default field conversion: parse with [`FromStr`]
pub fn parse_field<T: FromStr>(field: &str) -> std::result::Result<T, T::Err> {
    field.parse()
}

/// Split a line on whitespace and convert every field
///
/// `line_number` is only used to locate a failing field in the error.
pub fn format_line<T, E, F>(line: &str, line_number: usize, convert: &mut F) -> Result<Vec<T>>
where
    F: FnMut(&str) -> std::result::Result<T, E>,
    E: fmt::Display,
{
    line.split_whitespace()
        .enumerate()
        .map(|(i, field)| {
            convert(field).map_err(|e| Error::Conversion {
                line: line_number,
                column: i + 1,
                field: field.to_owned(),
                message: e.to_string(),
            })
        })
        .collect()
}

/// Read every line of `reader` into converted rows
///
/// A blank line yields an empty row. The first failing field aborts the read
/// and nothing read so far is returned.
pub fn read_file<R, T, E, F>(reader: R, convert: F) -> Result<Vec<Vec<T>>>
where
    R: BufRead,
    F: FnMut(&str) -> std::result::Result<T, E>,
    E: fmt::Display,
{
    read_file_with_options(reader, convert, &TextReaderOptions::default())
}

/// [`read_file`] with explicit reader options
pub fn read_file_with_options<R, T, E, F>(
    reader: R,
    convert: F,
    options: &TextReaderOptions,
) -> Result<Vec<Vec<T>>>
where
    R: BufRead,
    F: FnMut(&str) -> std::result::Result<T, E>,
    E: fmt::Display,
{
    let mut reader = TextGridReader::new(reader, convert, options.clone());
    let rows = std::iter::from_fn(|| reader.next_row().transpose()).collect::<Result<Vec<_>>>()?;

    debug!(rows = rows.len(), lines = reader.current_line(), "read text grid");

    Ok(rows)
}

/// Open `path` and read it with [`read_file_with_options`]
///
/// The file is closed before this returns, on success and on error.
pub fn read_path<T, E, F>(path: &Path, convert: F, options: &TextReaderOptions) -> Result<Vec<Vec<T>>>
where
    F: FnMut(&str) -> std::result::Result<T, E>,
    E: fmt::Display,
{
    debug!(path = %path.display(), "opening text grid");
    let file = File::open(path)?;
    read_file_with_options(BufReader::new(file), convert, options)
}

/// A lazy reader producing one converted row per line
pub struct TextGridReader<R, F> {
    /// Line source
    reader: R,

    /// Field conversion function
    convert: F,

    /// Reader options
    options: TextReaderOptions,

    /// Reused line buffer
    buffer: Vec<u8>,

    /// Current line number
    current_line: usize,

    /// Whether the reader is exhausted
    exhausted: bool,
}

impl<R: BufRead, F> TextGridReader<R, F> {
    /// Create a new reader over `reader`
    pub fn new(reader: R, convert: F, options: TextReaderOptions) -> Self {
        Self {
            reader,
            convert,
            options,
            buffer: Vec::new(),
            current_line: 0,
            exhausted: false,
        }
    }

    /// Number of lines consumed so far
    pub fn current_line(&self) -> usize {
        self.current_line
    }

    /// Give back the underlying reader
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Read and convert the next row, or `None` at end of input
    pub fn next_row<T, E>(&mut self) -> Result<Option<Vec<T>>>
    where
        F: FnMut(&str) -> std::result::Result<T, E>,
        E: fmt::Display,
    {
        loop {
            if self.exhausted {
                return Ok(None);
            }

            self.buffer.clear();
            let bytes_read = read_line_any_ending(&mut self.reader, &mut self.buffer)?;

            if bytes_read == 0 {
                self.exhausted = true;
                return Ok(None);
            }

            self.current_line += 1;

            let mut line = std::str::from_utf8(&self.buffer).map_err(|e| Error::InvalidUtf8 {
                line: self.current_line,
                message: e.to_string(),
            })?;

            if self.options.strip_bom && self.current_line == 1 {
                line = line.strip_prefix('\u{FEFF}').unwrap_or(line);
            }

            let line = line.trim();

            if let Some(max) = self.options.max_line_length {
                if line.len() > max {
                    return Err(Error::LineTooLong {
                        line: self.current_line,
                        length: line.len(),
                        max,
                    });
                }
            }

            if self.options.skip_empty_lines && line.is_empty() {
                continue;
            }

            trace!(line = self.current_line, "reading row");

            return format_line(line, self.current_line, &mut self.convert).map(Some);
        }
    }
}

/// Append one line to `line`, ending at `\n`, `\r\n` or a lone `\r`
///
/// Returns the number of bytes consumed, 0 at end of input.
fn read_line_any_ending<R: BufRead + ?Sized>(reader: &mut R, line: &mut Vec<u8>) -> io::Result<usize> {
    let mut total = 0;

    loop {
        let (terminator, used) = {
            let available = match reader.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            if available.is_empty() {
                return Ok(total);
            }

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(i) => {
                    line.extend_from_slice(&available[..=i]);
                    (Some(available[i]), i + 1)
                }
                None => {
                    line.extend_from_slice(available);
                    (None, available.len())
                }
            }
        };

        reader.consume(used);
        total += used;

        match terminator {
            Some(b'\r') => {
                if reader.fill_buf()?.first() == Some(&b'\n') {
                    reader.consume(1);
                    line.push(b'\n');
                    total += 1;
                }
                return Ok(total);
            }
            Some(_) => return Ok(total),
            None => {}
        }
    }
}
