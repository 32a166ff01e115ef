// src/numerics/types/matrix.rs
// Jagged matrix inputs and the validator shared by every matrix statistic.

use crate::error::MatrixError;

/// A single matrix row as seen by the validator.
///
/// `cells` returns `None` for an absent row. Implemented for the usual owned
/// and borrowed row shapes, and for `Option` of any of them so callers can
/// express missing rows explicitly.
pub trait MatrixRow<T> {
    fn cells(&self) -> Option<&[T]>;
}

impl<T> MatrixRow<T> for [T] {
    fn cells(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T, const N: usize> MatrixRow<T> for [T; N] {
    fn cells(&self) -> Option<&[T]> {
        Some(self.as_slice())
    }
}

impl<T> MatrixRow<T> for Vec<T> {
    fn cells(&self) -> Option<&[T]> {
        Some(self.as_slice())
    }
}

impl<T, R: MatrixRow<T> + ?Sized> MatrixRow<T> for &R {
    fn cells(&self) -> Option<&[T]> {
        (**self).cells()
    }
}

impl<T, R: MatrixRow<T>> MatrixRow<T> for Option<R> {
    fn cells(&self) -> Option<&[T]> {
        self.as_ref().and_then(|row| row.cells())
    }
}

/// Anything that can be read as a jagged matrix of `T`.
///
/// `row_cells` returns `None` when the matrix itself is absent, otherwise
/// one entry per row in order.
pub trait AsMatrix<T> {
    fn row_cells(&self) -> Option<Vec<Option<&[T]>>>;
}

impl<T, R: MatrixRow<T>> AsMatrix<T> for [R] {
    fn row_cells(&self) -> Option<Vec<Option<&[T]>>> {
        Some(self.iter().map(|row| MatrixRow::<T>::cells(row)).collect())
    }
}

impl<T, R: MatrixRow<T>, const N: usize> AsMatrix<T> for [R; N] {
    fn row_cells(&self) -> Option<Vec<Option<&[T]>>> {
        self.as_slice().row_cells()
    }
}

impl<T, R: MatrixRow<T>> AsMatrix<T> for Vec<R> {
    fn row_cells(&self) -> Option<Vec<Option<&[T]>>> {
        self.as_slice().row_cells()
    }
}

impl<T, M: AsMatrix<T> + ?Sized> AsMatrix<T> for &M {
    fn row_cells(&self) -> Option<Vec<Option<&[T]>>> {
        (**self).row_cells()
    }
}

impl<T, M: AsMatrix<T>> AsMatrix<T> for Option<M> {
    fn row_cells(&self) -> Option<Vec<Option<&[T]>>> {
        self.as_ref().and_then(|matrix| matrix.row_cells())
    }
}

/// A matrix that passed validation: at least one row, every row present and
/// non-empty. Rows may still differ in length.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixView<'a, T> {
    rows: Vec<&'a [T]>,
}

impl<'a, T> MatrixView<'a, T> {
    /// The validated rows in order.
    pub fn rows(&self) -> &[&'a [T]] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of elements across all rows.
    pub fn element_count(&self) -> usize {
        self.rows.iter().map(|row| row.len()).sum()
    }
}

impl<'a, T: Copy> MatrixView<'a, T> {
    /// All elements, row by row.
    pub fn elements(&self) -> impl Iterator<Item = T> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }

    /// All elements with their `(row, col)` position.
    pub fn indexed_elements(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.rows.iter().enumerate().flat_map(|(i, row)| {
            row.iter().enumerate().map(move |(j, &value)| (i, j, value))
        })
    }
}

/// Check the matrix invariant and return a typed view of the rows.
///
/// Errors are reported in this order: absent matrix, no rows, then the first
/// row that is absent or empty.
pub fn validate_matrix<T, M>(matrix: &M) -> Result<MatrixView<'_, T>, MatrixError>
where
    M: AsMatrix<T> + ?Sized,
{
    let result = check_rows(matrix.row_cells());
    if let Err(err) = &result {
        tracing::debug!(%err, "matrix rejected");
    }
    result
}

fn check_rows<T>(rows: Option<Vec<Option<&[T]>>>) -> Result<MatrixView<'_, T>, MatrixError> {
    let rows = rows.ok_or(MatrixError::Absent)?;
    if rows.is_empty() {
        return Err(MatrixError::Empty);
    }

    let mut checked = Vec::with_capacity(rows.len());
    for (row, cells) in rows.into_iter().enumerate() {
        match cells {
            None => return Err(MatrixError::AbsentRow { row }),
            Some([]) => return Err(MatrixError::EmptyRow { row }),
            Some(cells) => checked.push(cells),
        }
    }
    Ok(MatrixView { rows: checked })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_jagged_rows() {
        let m = vec![vec![1.0, 2.0, 3.0], vec![4.0]];
        let view = validate_matrix(&m).unwrap();

        assert_eq!(view.row_count(), 2);
        assert_eq!(view.element_count(), 4);
        assert_eq!(view.rows()[1], &[4.0][..]);
        assert_eq!(view.elements().collect::<Vec<f64>>(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_indexed_elements_report_positions() {
        let m = [[1.0f64, 2.0], [3.0, 4.0]];
        let view = validate_matrix(&m).unwrap();
        let positions: Vec<(usize, usize)> =
            view.indexed_elements().map(|(i, j, _)| (i, j)).collect();

        assert_eq!(positions, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_accepts_borrowed_shapes() {
        let first = [1.0f64, 2.0];
        let second = vec![3.0f64];
        let rows: Vec<&[f64]> = vec![&first[..], &second[..]];

        assert_eq!(validate_matrix(&rows).unwrap().element_count(), 3);
        assert_eq!(validate_matrix(rows.as_slice()).unwrap().row_count(), 2);
    }

    #[test]
    fn test_rejects_absent_matrix() {
        let m: Option<Vec<Vec<f64>>> = None;
        assert_eq!(validate_matrix(&m), Err(MatrixError::Absent));
    }

    #[test]
    fn test_rejects_empty_matrix() {
        let m: Vec<Vec<f64>> = Vec::new();
        assert_eq!(validate_matrix(&m), Err(MatrixError::Empty));
    }

    #[test]
    fn test_rejects_absent_row() {
        let m = vec![Some(vec![1.0f64]), None, Some(vec![])];
        assert_eq!(validate_matrix(&m), Err(MatrixError::AbsentRow { row: 1 }));
    }

    #[test]
    fn test_reports_first_empty_row() {
        let m = vec![vec![1.0f64], vec![2.0], vec![], vec![]];
        assert_eq!(validate_matrix(&m), Err(MatrixError::EmptyRow { row: 2 }));
    }

    #[test]
    fn test_present_optional_matrix_is_validated_normally() {
        let m = Some(vec![vec![1.0f64, 2.0]]);
        assert_eq!(validate_matrix(&m).unwrap().element_count(), 2);
    }

    #[test]
    fn test_view_of_non_copy_elements() {
        let m = vec![vec!["a".to_string(), "b".to_string()], vec!["c".to_string()]];
        let view = validate_matrix(&m).unwrap();
        assert_eq!(view.row_count(), 2);
        assert_eq!(view.element_count(), 3);
        assert_eq!(view.rows()[1], ["c".to_string()]);
    }
}
