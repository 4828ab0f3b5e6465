//! The `Dataset` type: converted rows plus their column view

use std::any::Any;
use std::fmt;
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::config::TextReaderOptions;
use crate::error::Result;
use crate::grid::{render_rows, transpose};
use crate::source::DataSource;
use crate::text::{parse_field, read_file_with_options, read_path};

/// A grid of converted fields, held row-major with a column-major copy
///
/// `cols` is computed once, when the dataset is built. Mutating rows through
/// [`Dataset::rows_mut`] does not refresh it.
pub struct Dataset<T = f64> {
    /// Rows in source order
    rows: Vec<Vec<T>>,

    /// Transpose of `rows` at construction, truncated to the shortest row
    cols: Vec<Vec<T>>,
}

impl<T: Clone> Dataset<T> {
    /// Build a dataset, parsing text fields with [`FromStr`]
    ///
    /// ```
    /// use grid_data_core::Dataset;
    ///
    /// let dataset = Dataset::<f64>::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(dataset.cols(), &[vec![1.0, 3.0], vec![2.0, 4.0]]);
    /// ```
    pub fn new<'a, S>(source: S) -> Result<Self>
    where
        S: Into<DataSource<'a, T>>,
        T: FromStr + 'a,
        T::Err: fmt::Display,
    {
        Self::with_converter(source, parse_field::<T>)
    }

    /// Build a dataset, converting text fields with `convert`
    ///
    /// `convert` is only called for path and stream sources; other sources
    /// already hold values of type `T`.
    pub fn with_converter<'a, S, E, F>(source: S, convert: F) -> Result<Self>
    where
        S: Into<DataSource<'a, T>>,
        T: 'a,
        F: FnMut(&str) -> std::result::Result<T, E>,
        E: fmt::Display,
    {
        Self::load(source, convert, &TextReaderOptions::default())
    }

    /// Build a dataset with explicit text reader options
    pub fn load<'a, S, E, F>(source: S, convert: F, options: &TextReaderOptions) -> Result<Self>
    where
        S: Into<DataSource<'a, T>>,
        T: 'a,
        F: FnMut(&str) -> std::result::Result<T, E>,
        E: fmt::Display,
    {
        let source = source.into();
        let kind = source.kind();

        let rows = match source {
            DataSource::Path(path) => read_path(&path, convert, options)?,
            DataSource::Stream(reader) => read_file_with_options(reader, convert, options)?,
            DataSource::Dataset(other) => other.copy_rows(),
            DataSource::Rows(rows) => rows,
        };

        let dataset = Self::from_parts(rows);
        debug!(
            source = kind,
            rows = dataset.rows.len(),
            cols = dataset.cols.len(),
            "constructed dataset"
        );

        Ok(dataset)
    }

    /// Read a whitespace-delimited file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        Self::new(path.as_ref())
    }

    /// Read from a caller-owned stream, leaving it open
    pub fn from_reader<R: BufRead + ?Sized>(mut reader: &mut R) -> Result<Self>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        Self::new(&mut reader as &mut dyn BufRead)
    }

    /// Deep copy of another dataset
    ///
    /// The copy shares no storage with `other`. Its columns are recomputed
    /// from the copied rows.
    pub fn from_dataset(other: &Self) -> Self {
        Self::from_parts(other.copy_rows())
    }

    /// Take rows that are already in their final form
    pub fn from_rows<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        Self::from_parts(rows.into_iter().map(|row| row.into_iter().collect()).collect())
    }

    /// Build from a value of any type, see [`DataSource::from_value`]
    pub fn from_value<V: Any>(value: V) -> Result<Self>
    where
        T: FromStr + 'static,
        T::Err: fmt::Display,
    {
        Self::new(DataSource::from_value(value)?)
    }

    fn from_parts(rows: Vec<Vec<T>>) -> Self {
        let cols = transpose(&rows);
        Self { rows, cols }
    }

    fn copy_rows(&self) -> Vec<Vec<T>> {
        self.rows.iter().map(|row| row.to_vec()).collect()
    }
}

impl<T> Dataset<T> {
    /// Rows in source order
    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    /// Mutable access to the rows
    ///
    /// Columns are not recomputed; after a change here [`Dataset::cols`]
    /// still reflects the rows as they were at construction.
    pub fn rows_mut(&mut self) -> &mut Vec<Vec<T>> {
        &mut self.rows
    }

    /// Columns as computed at construction
    pub fn cols(&self) -> &[Vec<T>] {
        &self.cols
    }

    /// Consume the dataset, keeping its rows
    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows
    }
}

impl<T: Clone> Clone for Dataset<T> {
    fn clone(&self) -> Self {
        Self::from_dataset(self)
    }
}

impl<T: fmt::Display> fmt::Display for Dataset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_rows(&self.rows, f)
    }
}

impl<T: fmt::Display> fmt::Debug for Dataset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
