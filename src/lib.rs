//! # Ferrum - Numeric Utilities and a Vehicle Model
//!
//! Two independent toolkits:
//!
//! - **Numerics**: root finding for linear and quadratic equations, integer
//!   helpers (extrema, sign, even sums, factorial, primality) and statistics
//!   over jagged matrices. Everything is a pure function.
//! - **Vehicles**: a single capability-based vehicle type, a factory for the
//!   catalogue vehicles and a demo driver that exercises them.
//!
//! ## Quick Start
//!
//! ```rust
//! use ferrum::numerics::{arithmetic_mean, solve_quadratic};
//! use ferrum::vehicles::{create_vehicle, Capability};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! assert_eq!(solve_quadratic(1.0, -3.0, 2.0), vec![2.0, 1.0]);
//!
//! let m = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
//! assert_eq!(arithmetic_mean(&m)?, 2.5);
//!
//! let mut bus = create_vehicle("bus")?;
//! assert!(bus.has_capability(Capability::Electric));
//! assert_eq!(bus.recharge(50)?, 50);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod numerics;
pub mod vehicles;

// Re-export commonly used types for convenience
pub use error::{MatrixError, NumericsError, VehicleError};
pub use numerics::NumericsConfig;
pub use vehicles::{GarageConfig, Vehicle, VehicleKind};

/// Version information for the ferrum crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
