//! Vehicle model, factory and demo driver.
//!
//! Vehicles are plain data with capability payloads; see [`vehicle`] for the
//! model and [`factory`] for the catalogue.

pub mod factory;
pub mod garage;
pub mod vehicle;

pub use factory::{create_vehicle, VehicleKind};
pub use garage::{run_garage, GarageConfig, GarageEvent, GarageReport};
pub use vehicle::{
    Battery, Capability, Drive, DriveType, Environment, FuelTank, Purpose, Vehicle, WeaponSystem,
};
