//! Real roots of linear and quadratic equations.

use serde::{Deserialize, Serialize};

use crate::numerics::types::traits::FloatingPoint;

/// Outcome of solving `a·x + b = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LinearSolution<T> {
    /// `a == 0` and `b != 0`
    NoSolution,
    /// `a == 0` and `b == 0`: every `x` solves the equation
    Infinite,
    Unique(T),
}

impl<T> LinearSolution<T> {
    /// The single root, if there is exactly one.
    pub fn unique(self) -> Option<T> {
        match self {
            LinearSolution::Unique(x) => Some(x),
            LinearSolution::NoSolution | LinearSolution::Infinite => None,
        }
    }
}

/// Classify and solve `a·x + b = 0`, distinguishing "no solution" from
/// "infinitely many solutions".
pub fn classify_linear<T: FloatingPoint>(a: T, b: T) -> LinearSolution<T> {
    if a == T::zero() {
        if b == T::zero() {
            LinearSolution::Infinite
        } else {
            LinearSolution::NoSolution
        }
    } else {
        LinearSolution::Unique(-b / a)
    }
}

/// Solve `a·x + b = 0`.
///
/// Returns `None` when `a == 0`, whether the equation has no solution or
/// infinitely many. Use [`classify_linear`] to tell the two apart.
///
/// # Examples
/// ```
/// use ferrum::numerics::solve_linear;
///
/// assert_eq!(solve_linear(2.0, -4.0), Some(2.0));
/// assert_eq!(solve_linear(0.0, 5.0), None);
/// ```
pub fn solve_linear<T: FloatingPoint>(a: T, b: T) -> Option<T> {
    let solution = classify_linear(a, b);
    if solution.unique().is_none() {
        tracing::debug!(?a, ?b, ?solution, "degenerate linear equation");
    }
    solution.unique()
}

/// The discriminant `b² - 4ac`.
pub fn discriminant<T: FloatingPoint>(a: T, b: T, c: T) -> T {
    b * b - T::from_usize(4) * a * c
}

/// Real roots of `a·x² + b·x + c = 0`.
///
/// * `a == 0`: falls back to [`solve_linear`]`(b, c)`, yielding 0 or 1 root.
/// * `D > 0`: two roots, `(-b + √D) / 2a` first.
/// * `D == 0`: one root `-b / 2a`.
/// * `D < 0`: no real roots.
pub fn solve_quadratic<T: FloatingPoint>(a: T, b: T, c: T) -> Vec<T> {
    if a == T::zero() {
        return solve_linear(b, c).into_iter().collect();
    }

    let d = discriminant(a, b, c);
    let two_a = T::from_usize(2) * a;

    if d > T::zero() {
        let sqrt_d = d.sqrt();
        vec![(-b + sqrt_d) / two_a, (-b - sqrt_d) / two_a]
    } else if d == T::zero() {
        vec![-b / two_a]
    } else {
        tracing::debug!(?a, ?b, ?c, discriminant = ?d, "no real roots");
        Vec::new()
    }
}
