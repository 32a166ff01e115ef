//! Factory for the catalogue vehicles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VehicleError;
use crate::vehicles::vehicle::{
    Battery, Drive, Environment, FuelTank, Purpose, Vehicle, WeaponSystem,
};

/// Kinds of vehicle the factory can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleKind {
    Car,
    Bus,
    Tank,
    Ship,
    Hybrid,
}

impl VehicleKind {
    pub fn all() -> Vec<Self> {
        vec![
            VehicleKind::Car,
            VehicleKind::Bus,
            VehicleKind::Tank,
            VehicleKind::Ship,
            VehicleKind::Hybrid,
        ]
    }

    /// Lower-case name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            VehicleKind::Car => "car",
            VehicleKind::Bus => "bus",
            VehicleKind::Tank => "tank",
            VehicleKind::Ship => "ship",
            VehicleKind::Hybrid => "hybrid",
        }
    }

    /// Build the catalogue vehicle of this kind.
    pub fn create(self) -> Vehicle {
        let vehicle = match self {
            VehicleKind::Car => Vehicle::new(
                "Toyota",
                "Camry",
                2023,
                Purpose::Civil,
                Environment::Ground { wheels: 4 },
                Drive::Combustion(FuelTank::new("Gasoline")),
            )
            .with_passengers(5),
            VehicleKind::Bus => Vehicle::new(
                "Volvo",
                "7900 Electric",
                2024,
                Purpose::Civil,
                Environment::Ground { wheels: 6 },
                Drive::Electric(Battery::empty(300)),
            )
            .with_passengers(80),
            VehicleKind::Tank => Vehicle::new(
                "Uralvagonzavod",
                "T-90",
                2022,
                Purpose::Military,
                Environment::Ground { wheels: 12 },
                Drive::Combustion(FuelTank::new("Diesel")),
            )
            .with_weapons(WeaponSystem::new("125 mm gun")),
            VehicleKind::Ship => Vehicle::new(
                "Hyundai",
                "Heavy210",
                2021,
                Purpose::Commercial,
                Environment::Water {
                    displacement_tonnes: 50000.0,
                },
                Drive::Combustion(FuelTank::new("Fuel oil")),
            )
            .with_cargo_tonnes(40000.0),
            VehicleKind::Hybrid => Vehicle::new(
                "Toyota",
                "Prius",
                2023,
                Purpose::Civil,
                Environment::Ground { wheels: 4 },
                Drive::Hybrid {
                    fuel: FuelTank::new("Gasoline"),
                    battery: Battery::empty(8),
                },
            )
            .with_passengers(5),
        };
        tracing::info!(kind = %self, vehicle = %vehicle.name(), "vehicle created");
        vehicle
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VehicleKind {
    type Err = VehicleError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        VehicleKind::all()
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| VehicleError::UnknownKind(s.to_string()))
    }
}

/// Create the catalogue vehicle named `kind`.
///
/// # Example
/// ```
/// use ferrum::vehicles::{create_vehicle, DriveType};
///
/// let car = create_vehicle("Car").unwrap();
/// assert_eq!(car.drive_type(), DriveType::Combustion);
/// assert!(create_vehicle("spaceship").is_err());
/// ```
pub fn create_vehicle(kind: &str) -> Result<Vehicle, VehicleError> {
    match kind.parse::<VehicleKind>() {
        Ok(kind) => Ok(kind.create()),
        Err(err) => {
            tracing::warn!(%err, "vehicle creation failed");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicles::vehicle::{Capability, DriveType};
    use std::collections::BTreeSet;

    #[test]
    fn test_names_round_trip() {
        for kind in VehicleKind::all() {
            assert_eq!(kind.name().parse::<VehicleKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn test_parsing_is_case_insensitive() {
        assert_eq!("CAR".parse::<VehicleKind>().unwrap(), VehicleKind::Car);
        assert_eq!(" Hybrid ".parse::<VehicleKind>().unwrap(), VehicleKind::Hybrid);
    }

    #[test]
    fn test_unknown_kind() {
        assert_eq!(
            create_vehicle("submarine"),
            Err(VehicleError::UnknownKind("submarine".to_string()))
        );
        assert_eq!(
            create_vehicle("spaceship").unwrap_err().to_string(),
            "unknown vehicle type: spaceship"
        );
    }

    #[test]
    fn test_catalogue_capabilities() {
        let expected = [
            (VehicleKind::Car, DriveType::Combustion, vec![Capability::Combustion]),
            (VehicleKind::Bus, DriveType::Electric, vec![Capability::Electric]),
            (
                VehicleKind::Tank,
                DriveType::Combustion,
                vec![Capability::Combustion, Capability::Weapons],
            ),
            (VehicleKind::Ship, DriveType::Combustion, vec![Capability::Combustion]),
            (
                VehicleKind::Hybrid,
                DriveType::Hybrid,
                vec![Capability::Combustion, Capability::Electric],
            ),
        ];

        for (kind, drive, capabilities) in expected {
            let vehicle = kind.create();
            assert_eq!(vehicle.drive_type(), drive, "{}", kind);
            assert_eq!(
                vehicle.capabilities(),
                capabilities.into_iter().collect::<BTreeSet<_>>(),
                "{}",
                kind
            );
        }
    }

    #[test]
    fn test_catalogue_details() {
        let ship = VehicleKind::Ship.create();
        assert_eq!(ship.name(), "Hyundai Heavy210");
        assert_eq!(ship.cargo_tonnes(), Some(40000.0));
        assert!(matches!(ship.environment(), Environment::Water { .. }));

        let bus = VehicleKind::Bus.create();
        assert_eq!(bus.battery_capacity_kwh(), Some(300));
        assert_eq!(bus.passengers(), Some(80));

        let tank = VehicleKind::Tank.create();
        assert_eq!(tank.purpose(), Purpose::Military);
        assert_eq!(tank.weapons().unwrap().main_armament, "125 mm gun");
    }
}
