// src/numerics/types/traits.rs
// Scalar trait shared by the root finders and the matrix statistics.

use core::fmt::Debug;

/// FloatingPoint is the minimal set of operations the numerics module needs
/// from a real-number type.
///
/// Implemented for `f32` and `f64`. Integer conversions go through
/// `from_usize` so kernels can divide by element counts and build small
/// constants such as `4` in `b² - 4ac`. `to_f64` is used for error reports.
pub trait FloatingPoint:
Copy + PartialOrd + Debug
+ core::ops::Add<Output = Self>
+ core::ops::Sub<Output = Self>
+ core::ops::Mul<Output = Self>
+ core::ops::Div<Output = Self>
+ core::ops::Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
    fn from_usize(n: usize) -> Self;
    fn to_f64(self) -> f64;
    fn sqrt(self) -> Self;
    fn powf(self, exponent: Self) -> Self;
}

impl FloatingPoint for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn from_usize(n: usize) -> Self { n as f32 }
    fn to_f64(self) -> f64 { f64::from(self) }
    fn sqrt(self) -> Self { f32::sqrt(self) }
    fn powf(self, exponent: Self) -> Self { f32::powf(self, exponent) }
}

impl FloatingPoint for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn from_usize(n: usize) -> Self { n as f64 }
    fn to_f64(self) -> f64 { self }
    fn sqrt(self) -> Self { f64::sqrt(self) }
    fn powf(self, exponent: Self) -> Self { f64::powf(self, exponent) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn halve<T: FloatingPoint>(x: T) -> T {
        x / T::from_usize(2)
    }

    #[test]
    fn test_constants() {
        assert_eq!(<f64 as FloatingPoint>::zero(), 0.0);
        assert_eq!(<f32 as FloatingPoint>::one(), 1.0);
        assert_eq!(<f64 as FloatingPoint>::from_usize(4), 4.0);
    }

    #[test]
    fn test_generic_arithmetic_for_both_precisions() {
        assert_eq!(halve(5.0f32), 2.5);
        assert_eq!(halve(5.0f64), 2.5);
        assert_eq!(FloatingPoint::sqrt(16.0f64), 4.0);
        assert_eq!(FloatingPoint::powf(2.0f32, 3.0), 8.0);
    }
}
