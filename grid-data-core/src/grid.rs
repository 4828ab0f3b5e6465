//! Row/column helpers shared by [`Dataset`](crate::Dataset)

use std::fmt;

/// Line separator of the host platform, used between rendered rows
pub const LINE_SEPARATOR: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Transpose rows into columns, truncating to the shortest row
///
/// Ragged input is neither padded nor rejected. An empty slice, or any empty
/// row, gives no columns.
pub fn transpose<T: Clone>(rows: &[Vec<T>]) -> Vec<Vec<T>> {
    let width = rows.iter().map(Vec::len).min().unwrap_or(0);

    (0..width)
        .map(|j| rows.iter().map(|row| row[j].clone()).collect())
        .collect()
}

/// Write rows one per line, fields separated by a single space
pub(crate) fn render_rows<T: fmt::Display>(
    rows: &[Vec<T>],
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            f.write_str(LINE_SEPARATOR)?;
        }
        for (j, field) in row.iter().enumerate() {
            if j > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{field}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct Rendered<'a>(&'a [Vec<i64>]);

    impl fmt::Display for Rendered<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            render_rows(self.0, f)
        }
    }

    #[test]
    fn test_transpose_square() {
        let rows = vec![vec![1, 2], vec![3, 4]];
        assert_eq!(transpose(&rows), vec![vec![1, 3], vec![2, 4]]);
    }

    #[test]
    fn test_transpose_truncates_to_shortest_row() {
        let rows = vec![vec![1, 2, 3], vec![4], vec![5, 6]];
        assert_eq!(transpose(&rows), vec![vec![1, 4, 5]]);
    }

    #[test]
    fn test_transpose_empty() {
        let rows: Vec<Vec<f64>> = Vec::new();
        assert!(transpose(&rows).is_empty());

        let rows = vec![vec![1.0, 2.0], vec![]];
        assert!(transpose(&rows).is_empty());
    }

    #[test]
    fn test_render_rows() {
        let rows = vec![vec![1, 2], vec![3, 4]];
        let expected = format!("1 2{LINE_SEPARATOR}3 4");
        assert_eq!(Rendered(&rows).to_string(), expected);
    }

    #[test]
    fn test_render_keeps_empty_rows() {
        let rows = vec![vec![1], vec![], vec![2, 3]];
        let expected = format!("1{LINE_SEPARATOR}{LINE_SEPARATOR}2 3");
        assert_eq!(Rendered(&rows).to_string(), expected);
        assert_eq!(Rendered(&[]).to_string(), "");
    }

    proptest! {
        #[test]
        fn prop_transpose_matches_rows(
            rows in prop::collection::vec(prop::collection::vec(any::<i32>(), 0..6), 0..8)
        ) {
            let cols = transpose(&rows);
            let width = rows.iter().map(Vec::len).min().unwrap_or(0);

            prop_assert_eq!(cols.len(), width);
            for (j, col) in cols.iter().enumerate() {
                prop_assert_eq!(col.len(), rows.len());
                for (i, value) in col.iter().enumerate() {
                    prop_assert_eq!(*value, rows[i][j]);
                }
            }
        }
    }
}
