// src/numerics/mod.rs
// Pure numeric utilities. Exposes a `types` namespace with the scalar trait
// and the matrix input types, plus one submodule per family of operations.

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod matrix;
    pub mod traits;
}

pub mod config;
pub mod roots;
pub mod scalar;
pub mod stats;

pub use config::{NumericsConfig, OverflowPolicy};
pub use roots::{classify_linear, discriminant, solve_linear, solve_quadratic, LinearSolution};
pub use scalar::{factorial, factorial_with, is_prime, max3, min3, sign, sum_even_numbers, Sign};
pub use stats::{arithmetic_mean, geometric_mean, product_odd_rows, sum_even_columns};
pub use types::matrix::{validate_matrix, AsMatrix, MatrixRow, MatrixView};
pub use types::traits::FloatingPoint;
