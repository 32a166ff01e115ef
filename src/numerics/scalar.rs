//! Integer utilities: extrema, sign classification, sums, factorial and
//! primality.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::NumericsError;
use crate::numerics::config::{NumericsConfig, OverflowPolicy};

/// Maximum of three integers.
pub fn max3(a: i32, b: i32, c: i32) -> i32 {
    a.max(b).max(c)
}

/// Minimum of three integers.
pub fn min3(a: i32, b: i32, c: i32) -> i32 {
    a.min(b).min(c)
}

/// Sign of an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Positive,
    Negative,
    Zero,
}

impl Sign {
    pub fn as_str(self) -> &'static str {
        match self {
            Sign::Positive => "Positive",
            Sign::Negative => "Negative",
            Sign::Zero => "Zero",
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an integer as positive, negative or zero.
pub fn sign(n: i32) -> Sign {
    match n.signum() {
        1 => Sign::Positive,
        -1 => Sign::Negative,
        _ => Sign::Zero,
    }
}

/// Sum of the even integers `2, 4, …` up to and including `n`.
///
/// Returns 0 for `n < 2`. With `m = n / 2` terms the sum is `m * (m + 1)`,
/// which fits in `i64` for every `i32` input.
pub fn sum_even_numbers(n: i32) -> i64 {
    if n < 2 {
        return 0;
    }
    let m = i64::from(n / 2);
    m * (m + 1)
}

/// Factorial of `n` with 64-bit wraparound past `20!`.
///
/// # Examples
/// ```
/// use ferrum::numerics::factorial;
///
/// assert_eq!(factorial(5).unwrap(), 120);
/// assert!(factorial(-1).is_err());
/// ```
pub fn factorial(n: i32) -> Result<i64, NumericsError> {
    factorial_with(n, &NumericsConfig::default())
}

/// Factorial of `n` under the overflow policy of `config`.
///
/// # Returns
/// * `Err(NumericsError::NegativeFactorial)` - `n < 0`
/// * `Err(NumericsError::FactorialOverflow)` - the product left `i64` and
///   the policy is `Checked`
pub fn factorial_with(n: i32, config: &NumericsConfig) -> Result<i64, NumericsError> {
    if n < 0 {
        tracing::debug!(n, "factorial of negative number rejected");
        return Err(NumericsError::NegativeFactorial { n });
    }

    let mut result: i64 = 1;
    for i in 2..=i64::from(n) {
        result = match config.overflow {
            OverflowPolicy::Wrapping => result.wrapping_mul(i),
            OverflowPolicy::Checked => result
                .checked_mul(i)
                .ok_or(NumericsError::FactorialOverflow { n })?,
        };
        // from 66! on the wrapped product is 0 and stays there
        if result == 0 {
            break;
        }
    }
    Ok(result)
}

/// Primality by trial division over odd divisors up to `√n`.
pub fn is_prime(n: i32) -> bool {
    if n <= 1 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    // i64 so that i * i cannot overflow near i32::MAX
    let n = i64::from(n);
    let mut i: i64 = 3;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}
