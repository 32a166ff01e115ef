//! The vehicle type.
//!
//! A single struct describes every vehicle. Where a class hierarchy would use
//! subclasses and marker interfaces, a `Vehicle` carries an [`Environment`]
//! tag, a [`Drive`] that owns the fuel and battery state, and an optional
//! [`WeaponSystem`]. Capabilities are read off those payloads, so a vehicle
//! can never claim a capability whose state it does not hold.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::VehicleError;

/// Behaviour a vehicle may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Refuelling (internal combustion engine)
    Combustion,
    /// Recharging (electric motor)
    Electric,
    /// Weapon activation and ammunition loading
    Weapons,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Capability::Combustion => "combustion",
            Capability::Electric => "electric",
            Capability::Weapons => "weapons",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Purpose {
    Civil,
    Military,
    Commercial,
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Purpose::Civil => "Civil",
            Purpose::Military => "Military",
            Purpose::Commercial => "Commercial",
        })
    }
}

/// Where the vehicle operates, with the data specific to that medium.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Ground { wheels: u32 },
    Water { displacement_tonnes: f64 },
}

impl Environment {
    pub fn name(&self) -> &'static str {
        match self {
            Environment::Ground { .. } => "Ground",
            Environment::Water { .. } => "Water",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuelTank {
    pub fuel_type: String,
}

impl FuelTank {
    pub fn new(fuel_type: impl Into<String>) -> Self {
        Self {
            fuel_type: fuel_type.into(),
        }
    }
}

/// Traction battery. `charge_kwh` never exceeds `capacity_kwh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BatteryState")]
pub struct Battery {
    capacity_kwh: u32,
    charge_kwh: u32,
}

/// Serialized form of a [`Battery`], checked before it becomes one.
#[derive(Deserialize)]
struct BatteryState {
    capacity_kwh: u32,
    charge_kwh: u32,
}

impl TryFrom<BatteryState> for Battery {
    type Error = String;

    fn try_from(state: BatteryState) -> Result<Self, Self::Error> {
        if state.charge_kwh > state.capacity_kwh {
            return Err(format!(
                "battery charge {} kWh exceeds its capacity of {} kWh",
                state.charge_kwh, state.capacity_kwh
            ));
        }
        Ok(Self {
            capacity_kwh: state.capacity_kwh,
            charge_kwh: state.charge_kwh,
        })
    }
}

impl Battery {
    /// A discharged battery of the given capacity.
    pub fn empty(capacity_kwh: u32) -> Self {
        Self {
            capacity_kwh,
            charge_kwh: 0,
        }
    }

    pub fn capacity_kwh(&self) -> u32 {
        self.capacity_kwh
    }

    pub fn charge_kwh(&self) -> u32 {
        self.charge_kwh
    }

    /// Add up to `kwh` of charge and return the amount actually stored.
    pub fn charge(&mut self, kwh: u32) -> u32 {
        let accepted = kwh.min(self.capacity_kwh.saturating_sub(self.charge_kwh));
        self.charge_kwh += accepted;
        accepted
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponSystem {
    pub main_armament: String,
    pub armed: bool,
    pub ammunition: Option<String>,
}

impl WeaponSystem {
    pub fn new(main_armament: impl Into<String>) -> Self {
        Self {
            main_armament: main_armament.into(),
            armed: false,
            ammunition: None,
        }
    }
}

/// Propulsion together with its energy state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Drive {
    Combustion(FuelTank),
    Electric(Battery),
    Hybrid { fuel: FuelTank, battery: Battery },
}

/// Payload-free tag of a [`Drive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DriveType {
    Combustion,
    Electric,
    Hybrid,
}

impl fmt::Display for DriveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DriveType::Combustion => "Combustion",
            DriveType::Electric => "Electric",
            DriveType::Hybrid => "Hybrid",
        })
    }
}

impl Drive {
    pub fn drive_type(&self) -> DriveType {
        match self {
            Drive::Combustion(_) => DriveType::Combustion,
            Drive::Electric(_) => DriveType::Electric,
            Drive::Hybrid { .. } => DriveType::Hybrid,
        }
    }

    fn fuel(&self) -> Option<&FuelTank> {
        match self {
            Drive::Combustion(fuel) | Drive::Hybrid { fuel, .. } => Some(fuel),
            Drive::Electric(_) => None,
        }
    }

    fn fuel_mut(&mut self) -> Option<&mut FuelTank> {
        match self {
            Drive::Combustion(fuel) | Drive::Hybrid { fuel, .. } => Some(fuel),
            Drive::Electric(_) => None,
        }
    }

    fn battery(&self) -> Option<&Battery> {
        match self {
            Drive::Electric(battery) | Drive::Hybrid { battery, .. } => Some(battery),
            Drive::Combustion(_) => None,
        }
    }

    fn battery_mut(&mut self) -> Option<&mut Battery> {
        match self {
            Drive::Electric(battery) | Drive::Hybrid { battery, .. } => Some(battery),
            Drive::Combustion(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    brand: String,
    model: String,
    year: u16,
    purpose: Purpose,
    environment: Environment,
    drive: Drive,
    weapons: Option<WeaponSystem>,
    passengers: Option<u32>,
    cargo_tonnes: Option<f64>,
}

impl Vehicle {
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: u16,
        purpose: Purpose,
        environment: Environment,
        drive: Drive,
    ) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            year,
            purpose,
            environment,
            drive,
            weapons: None,
            passengers: None,
            cargo_tonnes: None,
        }
    }

    pub fn with_weapons(mut self, weapons: WeaponSystem) -> Self {
        self.weapons = Some(weapons);
        self
    }

    pub fn with_passengers(mut self, passengers: u32) -> Self {
        self.passengers = Some(passengers);
        self
    }

    pub fn with_cargo_tonnes(mut self, cargo_tonnes: f64) -> Self {
        self.cargo_tonnes = Some(cargo_tonnes);
        self
    }

    /// "Brand Model"
    pub fn name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn purpose(&self) -> Purpose {
        self.purpose
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn drive(&self) -> &Drive {
        &self.drive
    }

    pub fn drive_type(&self) -> DriveType {
        self.drive.drive_type()
    }

    pub fn weapons(&self) -> Option<&WeaponSystem> {
        self.weapons.as_ref()
    }

    pub fn passengers(&self) -> Option<u32> {
        self.passengers
    }

    pub fn cargo_tonnes(&self) -> Option<f64> {
        self.cargo_tonnes
    }

    pub fn capabilities(&self) -> BTreeSet<Capability> {
        let mut capabilities = BTreeSet::new();
        if self.drive.fuel().is_some() {
            capabilities.insert(Capability::Combustion);
        }
        if self.drive.battery().is_some() {
            capabilities.insert(Capability::Electric);
        }
        if self.weapons.is_some() {
            capabilities.insert(Capability::Weapons);
        }
        capabilities
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    pub fn fuel_type(&self) -> Option<&str> {
        self.drive.fuel().map(|tank| tank.fuel_type.as_str())
    }

    pub fn battery(&self) -> Option<&Battery> {
        self.drive.battery()
    }

    pub fn battery_capacity_kwh(&self) -> Option<u32> {
        self.drive.battery().map(Battery::capacity_kwh)
    }

    /// Fill the tank with `fuel_type`, replacing whatever it held.
    pub fn refuel(&mut self, fuel_type: impl Into<String>) -> Result<(), VehicleError> {
        let name = self.name();
        let tank = self
            .drive
            .fuel_mut()
            .ok_or_else(|| missing(&name, Capability::Combustion))?;
        tank.fuel_type = fuel_type.into();
        tracing::info!(vehicle = %name, fuel = %tank.fuel_type, "refuelled");
        Ok(())
    }

    /// Charge the battery by up to `kwh` and return the energy accepted.
    pub fn recharge(&mut self, kwh: u32) -> Result<u32, VehicleError> {
        let name = self.name();
        let battery = self
            .drive
            .battery_mut()
            .ok_or_else(|| missing(&name, Capability::Electric))?;
        let accepted = battery.charge(kwh);
        tracing::info!(
            vehicle = %name,
            requested_kwh = kwh,
            accepted_kwh = accepted,
            charge_kwh = battery.charge_kwh(),
            "recharged"
        );
        Ok(accepted)
    }

    pub fn activate_weapons(&mut self) -> Result<(), VehicleError> {
        let name = self.name();
        let weapons = self
            .weapons
            .as_mut()
            .ok_or_else(|| missing(&name, Capability::Weapons))?;
        weapons.armed = true;
        tracing::info!(vehicle = %name, armament = %weapons.main_armament, "weapon system activated");
        Ok(())
    }

    pub fn load_ammunition(&mut self, ammunition: impl Into<String>) -> Result<(), VehicleError> {
        let name = self.name();
        let weapons = self
            .weapons
            .as_mut()
            .ok_or_else(|| missing(&name, Capability::Weapons))?;
        let ammunition = ammunition.into();
        tracing::info!(vehicle = %name, ammunition = %ammunition, "ammunition loaded");
        weapons.ammunition = Some(ammunition);
        Ok(())
    }
}

fn missing(vehicle: &str, capability: Capability) -> VehicleError {
    tracing::debug!(vehicle, %capability, "capability not available");
    VehicleError::MissingCapability {
        vehicle: vehicle.to_string(),
        capability,
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) - {}, environment: {}, drive: {}",
            self.brand,
            self.model,
            self.year,
            self.purpose,
            self.environment.name(),
            self.drive_type()
        )?;

        match self.environment {
            Environment::Ground { wheels } => write!(f, ", wheels: {}", wheels)?,
            Environment::Water { displacement_tonnes } => {
                write!(f, ", displacement: {}t", displacement_tonnes)?
            }
        }
        if let Some(passengers) = self.passengers {
            write!(f, ", passengers: {}", passengers)?;
        }
        if let Some(cargo) = self.cargo_tonnes {
            write!(f, ", cargo capacity: {}t", cargo)?;
        }
        if let Some(weapons) = &self.weapons {
            write!(f, ", main armament: {}", weapons.main_armament)?;
        }
        if let Some(fuel) = self.fuel_type() {
            write!(f, ", fuel: {}", fuel)?;
        }
        if let Some(battery) = self.battery() {
            write!(f, ", battery: {} kWh", battery.capacity_kwh())?;
        }
        Ok(())
    }
}
