//! Error types shared across the crate.
//!
//! Numeric failures are all argument errors: the caller handed in a value
//! the operation is not defined for. "No result" outcomes (no real root,
//! degenerate linear equation) are not errors and are reported through
//! `Option`, empty vectors or [`LinearSolution`](crate::numerics::LinearSolution).

use crate::vehicles::Capability;

/// Reasons a matrix fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    #[error("matrix is absent")]
    Absent,

    #[error("matrix has no rows")]
    Empty,

    #[error("row {row} is absent")]
    AbsentRow { row: usize },

    #[error("row {row} has no elements")]
    EmptyRow { row: usize },
}

/// Errors raised by the numeric utilities.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NumericsError {
    #[error("factorial is defined only for non-negative integers, got {n}")]
    NegativeFactorial { n: i32 },

    #[error("factorial of {n} does not fit in a 64-bit integer")]
    FactorialOverflow { n: i32 },

    #[error("geometric mean requires positive elements, found {value} at ({row}, {col})")]
    NonPositiveElement { row: usize, col: usize, value: f64 },

    #[error("invalid matrix: {0}")]
    InvalidMatrix(#[from] MatrixError),
}

impl NumericsError {
    /// Every numeric error is an invalid-argument error.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            NumericsError::NegativeFactorial { .. }
            | NumericsError::FactorialOverflow { .. }
            | NumericsError::NonPositiveElement { .. }
            | NumericsError::InvalidMatrix(_) => true,
        }
    }
}

/// Errors raised by the vehicle model, factory and demo driver.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VehicleError {
    #[error("unknown vehicle type: {0}")]
    UnknownKind(String),

    #[error("{vehicle} has no {capability} capability")]
    MissingCapability { vehicle: String, capability: Capability },

    #[error("invalid garage configuration: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_error_converts_into_numerics_error() {
        let err: NumericsError = MatrixError::EmptyRow { row: 3 }.into();
        assert_eq!(err, NumericsError::InvalidMatrix(MatrixError::EmptyRow { row: 3 }));
        assert_eq!(err.to_string(), "invalid matrix: row 3 has no elements");
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_error_messages() {
        let err = NumericsError::NegativeFactorial { n: -1 };
        assert!(err.to_string().contains("non-negative"));

        let err = NumericsError::NonPositiveElement { row: 0, col: 1, value: -1.0 };
        assert_eq!(
            err.to_string(),
            "geometric mean requires positive elements, found -1 at (0, 1)"
        );

        let err = VehicleError::MissingCapability {
            vehicle: "Volvo 7900 Electric".to_string(),
            capability: Capability::Combustion,
        };
        assert_eq!(err.to_string(), "Volvo 7900 Electric has no combustion capability");
    }
}
