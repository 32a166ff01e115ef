//! Demo driver: build a line-up through the factory and exercise each
//! vehicle according to its capabilities.
//!
//! The driver returns a [`GarageReport`] instead of printing, so the binary
//! decides how to render it and tests can inspect every step.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::VehicleError;
use crate::vehicles::factory::create_vehicle;
use crate::vehicles::vehicle::Vehicle;

/// What the demo builds and how it exercises the vehicles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GarageConfig {
    /// Vehicle kinds to request from the factory, in order. Unknown kinds
    /// are reported and skipped.
    pub lineup: Vec<String>,
    /// Fuel used for every combustion vehicle
    pub fuel: String,
    /// Energy offered to every electric vehicle
    pub recharge_kwh: u32,
    /// Ammunition loaded into every armed vehicle
    pub ammunition: String,
    /// Kind requested after the run to show how the factory rejects it
    pub probe: Option<String>,
}

impl Default for GarageConfig {
    fn default() -> Self {
        Self {
            lineup: ["car", "bus", "tank", "submarine", "drone", "hybrid"]
                .iter()
                .map(|kind| kind.to_string())
                .collect(),
            fuel: "Diesel".to_string(),
            recharge_kwh: 50,
            ammunition: "Standard ammunition".to_string(),
            probe: Some("spaceship".to_string()),
        }
    }
}

impl GarageConfig {
    /// Parse a TOML document. Missing keys keep their default values.
    pub fn from_toml_str(source: &str) -> Result<Self, VehicleError> {
        toml::from_str(source).map_err(|e| VehicleError::Config(e.to_string()))
    }
}

/// One step of a garage run.
#[derive(Debug, Clone, PartialEq)]
pub enum GarageEvent {
    CreationFailed { requested: String, error: VehicleError },
    Described { description: String },
    Refuelled { vehicle: String, fuel: String },
    Recharged { vehicle: String, requested_kwh: u32, accepted_kwh: u32 },
    WeaponsActivated { vehicle: String },
    AmmunitionLoaded { vehicle: String, ammunition: String },
    ProbeRejected { requested: String, error: VehicleError },
}

impl fmt::Display for GarageEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GarageEvent::CreationFailed { requested, error } => {
                write!(f, "Could not create '{}': {}", requested, error)
            }
            GarageEvent::Described { description } => f.write_str(description),
            GarageEvent::Refuelled { vehicle, fuel } => {
                write!(f, "Refuelling {} with {}", vehicle, fuel)
            }
            GarageEvent::Recharged { vehicle, requested_kwh, accepted_kwh } => write!(
                f,
                "Charging {} with {} kWh ({} kWh accepted)",
                vehicle, requested_kwh, accepted_kwh
            ),
            GarageEvent::WeaponsActivated { vehicle } => {
                write!(f, "Weapon system of {} activated", vehicle)
            }
            GarageEvent::AmmunitionLoaded { vehicle, ammunition } => {
                write!(f, "Loading {} into {}", ammunition, vehicle)
            }
            GarageEvent::ProbeRejected { requested, error } => {
                write!(f, "Error: requesting '{}' failed: {}", requested, error)
            }
        }
    }
}

/// Result of [`run_garage`].
#[derive(Debug, Clone, PartialEq)]
pub struct GarageReport {
    /// Vehicles in their final state
    pub vehicles: Vec<Vehicle>,
    pub events: Vec<GarageEvent>,
}

impl GarageReport {
    pub fn failures(&self) -> impl Iterator<Item = &GarageEvent> {
        self.events.iter().filter(|event| {
            matches!(
                event,
                GarageEvent::CreationFailed { .. } | GarageEvent::ProbeRejected { .. }
            )
        })
    }
}

/// Run the demo described by `config`.
///
/// Every vehicle is described, then refuelled, recharged and armed as far as
/// its capabilities allow. Operations a vehicle does not support are skipped,
/// so a run cannot fail; unknown kinds show up as events.
pub fn run_garage(config: &GarageConfig) -> GarageReport {
    let mut events = Vec::new();
    let mut vehicles = Vec::with_capacity(config.lineup.len());

    for requested in &config.lineup {
        match create_vehicle(requested) {
            Ok(vehicle) => vehicles.push(vehicle),
            Err(error) => events.push(GarageEvent::CreationFailed {
                requested: requested.clone(),
                error,
            }),
        }
    }

    for vehicle in &mut vehicles {
        exercise(vehicle, config, &mut events);
    }

    if let Some(probe) = &config.probe {
        if let Err(error) = create_vehicle(probe) {
            events.push(GarageEvent::ProbeRejected {
                requested: probe.clone(),
                error,
            });
        }
    }

    tracing::info!(
        vehicles = vehicles.len(),
        events = events.len(),
        "garage run finished"
    );
    GarageReport { vehicles, events }
}

// Each operation checks its own capability; a `MissingCapability` error just
// means the step does not apply to this vehicle.
fn exercise(vehicle: &mut Vehicle, config: &GarageConfig, events: &mut Vec<GarageEvent>) {
    let name = vehicle.name();
    events.push(GarageEvent::Described {
        description: vehicle.to_string(),
    });

    if vehicle.refuel(config.fuel.as_str()).is_ok() {
        events.push(GarageEvent::Refuelled {
            vehicle: name.clone(),
            fuel: config.fuel.clone(),
        });
    }

    if let Ok(accepted_kwh) = vehicle.recharge(config.recharge_kwh) {
        events.push(GarageEvent::Recharged {
            vehicle: name.clone(),
            requested_kwh: config.recharge_kwh,
            accepted_kwh,
        });
    }

    if vehicle.activate_weapons().is_ok() {
        events.push(GarageEvent::WeaponsActivated {
            vehicle: name.clone(),
        });
        if vehicle.load_ammunition(config.ammunition.as_str()).is_ok() {
            events.push(GarageEvent::AmmunitionLoaded {
                vehicle: name,
                ammunition: config.ammunition.clone(),
            });
        }
    }
}
