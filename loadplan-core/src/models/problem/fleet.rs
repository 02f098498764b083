#[cfg(test)]
#[path = "../../../tests/unit/models/problem/fleet_test.rs"]
mod fleet_test;

use crate::models::common::*;
use crate::utils::Float;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A vehicle category, it determines a fixed vehicle specification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VehicleCategory {
    /// A light commercial van (Kangoo, Berlingo).
    SmallVan,
    /// A refrigerated light commercial van.
    SmallVanReefer,
    /// A panel van (Master, Sprinter).
    Van,
    /// A refrigerated panel van.
    VanReefer,
    /// A 7.5t rigid truck.
    RigidSmall,
    /// A 7.5t refrigerated rigid truck.
    RigidSmallReefer,
    /// A 12t rigid truck.
    RigidMedium,
    /// A 12t refrigerated rigid truck.
    RigidMediumReefer,
    /// A 19t rigid truck.
    RigidLarge,
    /// A 19t refrigerated rigid truck.
    RigidLargeReefer,
    /// A short semi-trailer.
    SemiShort,
    /// A standard semi-trailer.
    SemiStandard,
    /// A refrigerated semi-trailer.
    SemiReefer,
    /// A high volume semi-trailer.
    Mega,
}

/// A fixed specification of a vehicle category.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VehicleSpec {
    /// Internal cargo space size.
    pub internal: Size3D,
    /// Usable volume, can be lower than internal box volume due to insulation.
    pub usable_volume: Volume,
    /// Payload capacity.
    pub payload: Weight,
    /// Amount of EUR pallet slots.
    pub european_slots: usize,
    /// Amount of US pallet slots.
    pub american_slots: usize,
    /// Temperature range which refrigeration unit can keep, none if not refrigerated.
    pub refrigeration: Option<TemperatureBand>,
}

impl VehicleSpec {
    /// Returns amount of slots for the given pallet standard.
    pub fn slots(&self, standard: PalletStandard) -> usize {
        match standard {
            PalletStandard::European => self.european_slots,
            PalletStandard::American => self.american_slots,
        }
    }
}

const fn spec(
    (length, width, height): (Float, Float, Float),
    usable_volume: Volume,
    payload: Weight,
    (european_slots, american_slots): (usize, usize),
    refrigeration: Option<(Temperature, Temperature)>,
) -> VehicleSpec {
    VehicleSpec {
        internal: Size3D { length, width, height },
        usable_volume,
        payload,
        european_slots,
        american_slots,
        refrigeration: match refrigeration {
            Some((min, max)) => Some(TemperatureBand { min: Some(min), max: Some(max) }),
            None => None,
        },
    }
}

const REEFER_RANGE: Option<(Temperature, Temperature)> = Some((-25., 4.));

impl VehicleCategory {
    /// All known categories.
    pub const ALL: [VehicleCategory; 14] = [
        VehicleCategory::SmallVan,
        VehicleCategory::SmallVanReefer,
        VehicleCategory::Van,
        VehicleCategory::VanReefer,
        VehicleCategory::RigidSmall,
        VehicleCategory::RigidSmallReefer,
        VehicleCategory::RigidMedium,
        VehicleCategory::RigidMediumReefer,
        VehicleCategory::RigidLarge,
        VehicleCategory::RigidLargeReefer,
        VehicleCategory::SemiShort,
        VehicleCategory::SemiStandard,
        VehicleCategory::SemiReefer,
        VehicleCategory::Mega,
    ];

    /// Returns a fixed specification of the category.
    pub fn spec(&self) -> VehicleSpec {
        match self {
            VehicleCategory::SmallVan => spec((3., 1.7, 1.8), 4., 800., (2, 1), None),
            VehicleCategory::SmallVanReefer => spec((3., 1.7, 1.8), 3.5, 700., (2, 1), Some((-20., 4.))),
            VehicleCategory::Van => spec((6., 2.3, 2.6), 20., 3500., (12, 10), None),
            VehicleCategory::VanReefer => spec((6., 2.3, 2.6), 18., 3200., (12, 10), REEFER_RANGE),
            VehicleCategory::RigidSmall => spec((6.5, 2.45, 2.7), 35., 7500., (14, 12), None),
            VehicleCategory::RigidSmallReefer => spec((6.5, 2.45, 2.7), 32., 7000., (14, 12), REEFER_RANGE),
            VehicleCategory::RigidMedium => spec((7.2, 2.45, 2.7), 40., 12000., (16, 14), None),
            VehicleCategory::RigidMediumReefer => spec((7.2, 2.45, 2.7), 37., 11500., (16, 14), REEFER_RANGE),
            VehicleCategory::RigidLarge => spec((8., 2.45, 2.7), 45., 19000., (18, 16), None),
            VehicleCategory::RigidLargeReefer => spec((8., 2.45, 2.7), 42., 18000., (18, 16), REEFER_RANGE),
            VehicleCategory::SemiShort => spec((11., 2.45, 2.7), 65., 25000., (26, 24), None),
            VehicleCategory::SemiStandard => spec((13.6, 2.45, 2.7), 90., 25000., (33, 30), None),
            VehicleCategory::SemiReefer => spec((13.6, 2.45, 2.7), 85., 24000., (33, 30), REEFER_RANGE),
            VehicleCategory::Mega => spec((13.6, 2.45, 3.), 100., 25000., (33, 30), None),
        }
    }

    /// Returns a stable name of the category.
    pub fn name(&self) -> &'static str {
        match self {
            VehicleCategory::SmallVan => "small_van",
            VehicleCategory::SmallVanReefer => "small_van_reefer",
            VehicleCategory::Van => "van",
            VehicleCategory::VanReefer => "van_reefer",
            VehicleCategory::RigidSmall => "rigid_small",
            VehicleCategory::RigidSmallReefer => "rigid_small_reefer",
            VehicleCategory::RigidMedium => "rigid_medium",
            VehicleCategory::RigidMediumReefer => "rigid_medium_reefer",
            VehicleCategory::RigidLarge => "rigid_large",
            VehicleCategory::RigidLargeReefer => "rigid_large_reefer",
            VehicleCategory::SemiShort => "semi_short",
            VehicleCategory::SemiStandard => "semi_standard",
            VehicleCategory::SemiReefer => "semi_reefer",
            VehicleCategory::Mega => "mega",
        }
    }
}

impl Display for VehicleCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for VehicleCategory {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        VehicleCategory::ALL
            .iter()
            .find(|category| category.name() == value)
            .copied()
            .ok_or_else(|| format!("unknown vehicle category: '{value}'"))
    }
}

/// Represents a vehicle.
#[derive(Clone, Debug)]
pub struct Vehicle {
    /// Vehicle id.
    pub id: String,
    /// Vehicle category.
    pub category: VehicleCategory,
    /// Whether vehicle can be used in planning.
    pub available: bool,
    /// A per trip transport cost.
    pub transport_cost: Cost,
    /// A temperature setpoint of refrigerated vehicle.
    pub temperature: Option<Temperature>,
}

impl Vehicle {
    /// Returns a fixed specification of the vehicle.
    pub fn spec(&self) -> VehicleSpec {
        self.category.spec()
    }

    /// Returns true if vehicle has a refrigeration unit.
    pub fn is_refrigerated(&self) -> bool {
        self.spec().refrigeration.is_some()
    }

    /// Returns transport cost per payload capacity unit.
    pub fn cost_per_capacity(&self) -> Float {
        self.transport_cost / self.spec().payload
    }
}
