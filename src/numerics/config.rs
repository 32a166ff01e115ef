//! Configuration for the numeric utilities.

use serde::{Deserialize, Serialize};

/// How integer kernels behave when a result leaves the 64-bit range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Fixed-width two's complement wraparound.
    #[default]
    Wrapping,
    /// Report overflow as an error.
    Checked,
}

/// Configuration for numeric operations that have more than one sensible
/// behaviour.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericsConfig {
    /// Overflow behaviour of `factorial_with`
    pub overflow: OverflowPolicy,
}

impl NumericsConfig {
    /// Configuration that turns silent overflow into errors
    pub fn strict() -> Self {
        Self {
            overflow: OverflowPolicy::Checked,
        }
    }

    /// Override the overflow policy
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }
}
