#[cfg(test)]
#[path = "../../../tests/unit/construction/assignment/requirements_test.rs"]
mod requirements_test;

use crate::models::common::*;
use crate::models::problem::{ConstraintCatalog, Order, VehicleSpec};
use crate::utils::Float;
use std::sync::Arc;

/// Aggregated requirements of a set of orders to a vehicle.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupRequirements {
    /// Total palette volume.
    pub volume: Volume,
    /// Total palette weight.
    pub weight: Weight,
    /// True if any product type declares a temperature bound.
    pub needs_refrigeration: bool,
    /// The tightest temperature band satisfying every product type.
    pub temperature: TemperatureBand,
    /// Amount of EUR palettes.
    pub european_count: usize,
    /// Amount of US palettes.
    pub american_count: usize,
}

impl GroupRequirements {
    /// Extracts requirements from given orders.
    pub fn new(orders: &[Arc<Order>], catalog: &ConstraintCatalog) -> Self {
        let palettes = || orders.iter().flat_map(|order| order.palettes.iter());

        let bands = palettes()
            .filter_map(|palette| catalog.get(&palette.product_type))
            .map(|constraint| constraint.temperature)
            .filter(|band| band.is_constrained())
            .collect::<Vec<_>>();

        let count_of = |standard| palettes().filter(|palette| palette.standard == standard).count();

        Self {
            volume: orders.iter().map(|order| order.total_volume()).sum(),
            weight: orders.iter().map(|order| order.total_weight()).sum(),
            needs_refrigeration: !bands.is_empty(),
            temperature: bands.iter().fold(TemperatureBand::default(), |acc, band| acc.intersect(band)),
            european_count: count_of(PalletStandard::European),
            american_count: count_of(PalletStandard::American),
        }
    }

    /// Returns amount of palettes of the given standard.
    pub fn pallet_count(&self, standard: PalletStandard) -> usize {
        match standard {
            PalletStandard::European => self.european_count,
            PalletStandard::American => self.american_count,
        }
    }

    /// Returns fractional pallet slot usage: a sum of `count / slots` over pallet standards.
    /// A standard without slots makes usage infinite when palettes of that standard are present.
    pub fn slot_usage(&self, spec: &VehicleSpec) -> Float {
        [PalletStandard::European, PalletStandard::American]
            .into_iter()
            .filter(|&standard| self.pallet_count(standard) > 0)
            .map(|standard| match spec.slots(standard) {
                0 => Float::INFINITY,
                slots => self.pallet_count(standard) as Float / slots as Float,
            })
            .sum()
    }
}
