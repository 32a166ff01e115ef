//! Statistics over jagged matrices.
//!
//! Every function validates its input with [`validate_matrix`] before
//! touching any element, so an absent matrix, a matrix without rows, or an
//! absent or empty row is always reported as
//! [`NumericsError::InvalidMatrix`].

use crate::error::NumericsError;
use crate::numerics::types::matrix::{validate_matrix, AsMatrix};
use crate::numerics::types::traits::FloatingPoint;

/// Mean of all elements.
///
/// # Examples
/// ```
/// use ferrum::numerics::arithmetic_mean;
///
/// let m = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
/// assert_eq!(arithmetic_mean(&m).unwrap(), 2.5);
/// ```
pub fn arithmetic_mean<T, M>(matrix: &M) -> Result<T, NumericsError>
where
    T: FloatingPoint,
    M: AsMatrix<T> + ?Sized,
{
    let view = validate_matrix(matrix)?;
    let sum = view.elements().fold(T::zero(), |acc, x| acc + x);
    Ok(sum / T::from_usize(view.element_count()))
}

/// n-th root of the product of all n elements.
///
/// # Returns
/// * `Err(NumericsError::NonPositiveElement)` - some element is `<= 0`;
///   the first one in row order is reported
pub fn geometric_mean<T, M>(matrix: &M) -> Result<T, NumericsError>
where
    T: FloatingPoint,
    M: AsMatrix<T> + ?Sized,
{
    let view = validate_matrix(matrix)?;

    let mut product = T::one();
    for (row, col, value) in view.indexed_elements() {
        if value <= T::zero() {
            tracing::debug!(row, col, ?value, "geometric mean of non-positive element");
            return Err(NumericsError::NonPositiveElement {
                row,
                col,
                value: value.to_f64(),
            });
        }
        product = product * value;
    }

    Ok(product.powf(T::one() / T::from_usize(view.element_count())))
}

/// Sum of the elements at even column indices (0, 2, 4, …) of every row.
///
/// Each row contributes its own even positions, so jagged rows are fine.
pub fn sum_even_columns<T, M>(matrix: &M) -> Result<T, NumericsError>
where
    T: FloatingPoint,
    M: AsMatrix<T> + ?Sized,
{
    let view = validate_matrix(matrix)?;
    let sum = view
        .rows()
        .iter()
        .flat_map(|row| row.iter().step_by(2).copied())
        .fold(T::zero(), |acc, x| acc + x);
    Ok(sum)
}

/// Product of every element in the odd-indexed rows (1, 3, 5, …).
///
/// A matrix with a single row has no odd-indexed row and yields 0, not the
/// empty product 1.
pub fn product_odd_rows<T, M>(matrix: &M) -> Result<T, NumericsError>
where
    T: FloatingPoint,
    M: AsMatrix<T> + ?Sized,
{
    let view = validate_matrix(matrix)?;
    if view.row_count() < 2 {
        return Ok(T::zero());
    }

    let product = view
        .rows()
        .iter()
        .skip(1)
        .step_by(2)
        .flat_map(|row| row.iter().copied())
        .fold(T::one(), |acc, x| acc * x);
    Ok(product)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_arithmetic_mean() {
        assert_eq!(arithmetic_mean(&[[1.0, 2.0], [3.0, 4.0]]).unwrap(), 2.5);
        assert_eq!(arithmetic_mean(&vec![vec![1.0, 2.0, 3.0], vec![6.0]]).unwrap(), 3.0);
    }

    #[test]
    fn test_geometric_mean() {
        assert_close(geometric_mean(&[[1.0, 4.0]]).unwrap(), 2.0);
        assert_close(geometric_mean(&vec![vec![2.0, 4.0], vec![8.0]]).unwrap(), 4.0);
    }

    #[test]
    fn test_geometric_mean_rejects_non_positive() {
        let err = geometric_mean(&[[1.0, -1.0]]).unwrap_err();
        assert_eq!(err, NumericsError::NonPositiveElement { row: 0, col: 1, value: -1.0 });
        assert!(err.is_invalid_argument());

        let err = geometric_mean(&vec![vec![1.0], vec![2.0, 0.0]]).unwrap_err();
        assert_eq!(err, NumericsError::NonPositiveElement { row: 1, col: 1, value: 0.0 });
    }

    #[test]
    fn test_sum_even_columns() {
        assert_eq!(sum_even_columns(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap(), 14.0);
    }

    #[test]
    fn test_sum_even_columns_jagged() {
        let m = vec![vec![1.0, 2.0, 3.0, 4.0, 5.0], vec![10.0], vec![7.0, 8.0]];
        assert_eq!(sum_even_columns(&m).unwrap(), 1.0 + 3.0 + 5.0 + 10.0 + 7.0);
    }

    #[test]
    fn test_product_odd_rows() {
        let m = [[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        assert_eq!(product_odd_rows(&m).unwrap(), 12.0);

        let m = vec![vec![1.0], vec![2.0, 3.0], vec![100.0], vec![0.5]];
        assert_eq!(product_odd_rows(&m).unwrap(), 3.0);
    }

    #[test]
    fn test_product_odd_rows_single_row_is_zero() {
        assert_eq!(product_odd_rows(&[[1.0, 2.0]]).unwrap(), 0.0);
    }

    #[test]
    fn test_invalid_matrices_rejected_by_every_operation() {
        let absent: Option<Vec<Vec<f64>>> = None;
        let empty: Vec<Vec<f64>> = Vec::new();
        let empty_row: Vec<Vec<f64>> = vec![vec![1.0], vec![]];

        let cases = [
            (arithmetic_mean(&absent), MatrixError::Absent),
            (geometric_mean(&absent), MatrixError::Absent),
            (sum_even_columns(&absent), MatrixError::Absent),
            (product_odd_rows(&absent), MatrixError::Absent),
            (arithmetic_mean(&empty), MatrixError::Empty),
            (geometric_mean(&empty), MatrixError::Empty),
            (sum_even_columns(&empty), MatrixError::Empty),
            (product_odd_rows(&empty), MatrixError::Empty),
            (arithmetic_mean(&empty_row), MatrixError::EmptyRow { row: 1 }),
            (geometric_mean(&empty_row), MatrixError::EmptyRow { row: 1 }),
            (sum_even_columns(&empty_row), MatrixError::EmptyRow { row: 1 }),
            (product_odd_rows(&empty_row), MatrixError::EmptyRow { row: 1 }),
        ];

        for (result, expected) in cases {
            assert_eq!(result, Err(NumericsError::InvalidMatrix(expected)));
        }
    }

    #[test]
    fn test_validation_precedes_element_checks() {
        // the empty row is reported even though an earlier element is negative
        let m = vec![vec![-1.0], vec![]];
        assert_eq!(
            geometric_mean(&m),
            Err(NumericsError::InvalidMatrix(MatrixError::EmptyRow { row: 1 }))
        );
    }

    #[test]
    fn test_single_precision_matrix() {
        let m = [[1.0f32, 2.0], [3.0, 4.0]];
        assert_eq!(arithmetic_mean(&m).unwrap(), 2.5f32);
        assert_eq!(product_odd_rows(&m).unwrap(), 12.0f32);
    }
}
