//! The inputs a [`Dataset`] can be built from

use std::any::{type_name, Any};
use std::collections::VecDeque;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::dataset::Dataset;
use crate::error::{Error, Result};

/// Source of a [`Dataset`], resolved in variant order
pub enum DataSource<'a, T> {
    /// Path of a text file, opened and closed during construction
    Path(PathBuf),

    /// Caller-owned text stream; read to the end but never closed
    Stream(&'a mut dyn BufRead),

    /// Another dataset, deep-copied without conversion
    Dataset(&'a Dataset<T>),

    /// Rows already in their final element form
    Rows(Vec<Vec<T>>),
}

impl<T: 'static> DataSource<'static, T> {
    /// Resolve an arbitrary value by checking which source form it has
    ///
    /// Strings and paths become [`DataSource::Path`], a [`Dataset`] is taken
    /// as-is, and `Vec`, `VecDeque` or boxed slices of rows become
    /// [`DataSource::Rows`]. Streams are borrowed, so they must be passed
    /// through [`DataSource::Stream`] directly.
    ///
    /// Anything else is rejected with [`Error::UnsupportedSource`].
    pub fn from_value<V: Any>(value: V) -> Result<Self> {
        let value: Box<dyn Any> = Box::new(value);

        let value = match take::<String>(value) {
            Ok(path) => return Ok(Self::Path(path.into())),
            Err(value) => value,
        };
        let value = match take::<&'static str>(value) {
            Ok(path) => return Ok(Self::Path(path.into())),
            Err(value) => value,
        };
        let value = match take::<PathBuf>(value) {
            Ok(path) => return Ok(Self::Path(path)),
            Err(value) => value,
        };
        let value = match take::<Dataset<T>>(value) {
            // Owned, so its rows can be moved rather than copied
            Ok(dataset) => return Ok(Self::Rows(dataset.into_rows())),
            Err(value) => value,
        };
        let value = match take::<Vec<Vec<T>>>(value) {
            Ok(rows) => return Ok(Self::Rows(rows)),
            Err(value) => value,
        };
        let value = match take::<VecDeque<Vec<T>>>(value) {
            Ok(rows) => return Ok(Self::Rows(rows.into())),
            Err(value) => value,
        };
        if let Ok(rows) = take::<Box<[Vec<T>]>>(value) {
            return Ok(Self::Rows(rows.into_vec()));
        }

        Err(Error::UnsupportedSource {
            type_name: type_name::<V>(),
        })
    }
}

impl<T> DataSource<'_, T> {
    /// Short name of the variant, for logging
    pub fn kind(&self) -> &'static str {
        match self {
            DataSource::Path(_) => "path",
            DataSource::Stream(_) => "stream",
            DataSource::Dataset(_) => "dataset",
            DataSource::Rows(_) => "rows",
        }
    }
}

fn take<U: Any>(value: Box<dyn Any>) -> std::result::Result<U, Box<dyn Any>> {
    value.downcast::<U>().map(|boxed| *boxed)
}

impl<T> From<&str> for DataSource<'_, T> {
    fn from(path: &str) -> Self {
        DataSource::Path(path.into())
    }
}

impl<T> From<String> for DataSource<'_, T> {
    fn from(path: String) -> Self {
        DataSource::Path(path.into())
    }
}

impl<T> From<&Path> for DataSource<'_, T> {
    fn from(path: &Path) -> Self {
        DataSource::Path(path.to_path_buf())
    }
}

impl<T> From<PathBuf> for DataSource<'_, T> {
    fn from(path: PathBuf) -> Self {
        DataSource::Path(path)
    }
}

impl<'a, T> From<&'a mut dyn BufRead> for DataSource<'a, T> {
    fn from(reader: &'a mut dyn BufRead) -> Self {
        DataSource::Stream(reader)
    }
}

impl<'a, T> From<&'a Dataset<T>> for DataSource<'a, T> {
    fn from(dataset: &'a Dataset<T>) -> Self {
        DataSource::Dataset(dataset)
    }
}

impl<T> From<Vec<Vec<T>>> for DataSource<'_, T> {
    fn from(rows: Vec<Vec<T>>) -> Self {
        DataSource::Rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use test_case::test_case;

    fn kind_of<V: Any>(value: V) -> &'static str {
        DataSource::<f64>::from_value(value).unwrap().kind()
    }

    #[test]
    fn test_paths() {
        assert_eq!(kind_of(String::from("data.txt")), "path");
        assert_eq!(kind_of("data.txt"), "path");
        assert_eq!(kind_of(PathBuf::from("data.txt")), "path");

        match DataSource::<f64>::from_value("data.txt").unwrap() {
            DataSource::Path(path) => assert_eq!(path, PathBuf::from("data.txt")),
            other => panic!("unexpected source: {}", other.kind()),
        }
    }

    #[test]
    fn test_row_sequences() {
        assert_eq!(kind_of(vec![vec![1.0, 2.0]]), "rows");
        assert_eq!(kind_of(VecDeque::from(vec![vec![1.0]])), "rows");
        assert_eq!(kind_of(vec![vec![1.0]].into_boxed_slice()), "rows");
    }

    #[test]
    fn test_owned_dataset() {
        let dataset = Dataset::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        match DataSource::<f64>::from_value(dataset).unwrap() {
            DataSource::Rows(rows) => assert_eq!(rows, vec![vec![1.0, 2.0], vec![3.0, 4.0]]),
            other => panic!("unexpected source: {}", other.kind()),
        }
    }

    #[test_case(DataSource::<f64>::from_value(42i32), "i32" ; "integer")]
    #[test_case(DataSource::<f64>::from_value(1.5f64), "f64" ; "float")]
    #[test_case(DataSource::<f64>::from_value(vec![1.0, 2.0]), "Vec<f64>" ; "flat vector")]
    #[test_case(DataSource::<f64>::from_value(vec![vec![1i64]]), "Vec<i64>>" ; "rows of other element type")]
    fn test_unsupported(result: Result<DataSource<'static, f64>>, expected: &str) {
        let err = match result {
            Ok(source) => panic!("accepted as {}", source.kind()),
            Err(err) => err,
        };
        assert_eq!(err.kind(), ErrorKind::Type);
        let message = err.to_string();
        assert!(message.starts_with("Unknown type for data: "), "{message}");
        assert!(message.ends_with(expected), "{message}");
    }

    #[test]
    fn test_explicit_tags() {
        let rows: Vec<Vec<f64>> = vec![vec![1.0]];
        let dataset = Dataset::from_rows(rows.clone());
        let mut cursor = std::io::Cursor::new("1\n");

        assert_eq!(DataSource::<f64>::from("data.txt").kind(), "path");
        assert_eq!(DataSource::<f64>::from(Path::new("data.txt")).kind(), "path");
        assert_eq!(DataSource::from(rows).kind(), "rows");
        assert_eq!(DataSource::from(&dataset).kind(), "dataset");
        assert_eq!(
            DataSource::<f64>::from(&mut cursor as &mut dyn BufRead).kind(),
            "stream"
        );
    }
}
