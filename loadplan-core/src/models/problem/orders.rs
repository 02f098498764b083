#[cfg(test)]
#[path = "../../../tests/unit/models/problem/orders_test.rs"]
mod orders_test;

use crate::models::common::*;
use crate::models::problem::ConstraintCatalog;
use std::sync::Arc;
use time::Date;

/// A rigid rectangular unit load carrying one product type.
#[derive(Clone, Debug)]
pub struct Palette {
    /// Palette id.
    pub id: String,
    /// Product type tag, a key in the constraint catalog.
    pub product_type: String,
    /// Pallet standard.
    pub standard: PalletStandard,
    /// Physical size.
    pub size: Size3D,
    /// Total weight including the pallet itself.
    pub weight: Weight,
}

impl Palette {
    /// Returns palette volume.
    pub fn volume(&self) -> Volume {
        self.size.volume()
    }
}

/// A delivery order. Immutable once planning starts.
#[derive(Clone, Debug)]
pub struct Order {
    /// Order id.
    pub id: String,
    /// Calendar delivery date.
    pub delivery_date: Date,
    /// Delivery destination.
    pub destination: Destination,
    /// Earliest and latest delivery deadline.
    pub window: TimeWindow,
    /// Ordered palettes.
    pub palettes: Vec<Arc<Palette>>,
}

impl Order {
    /// Returns total weight of all palettes.
    pub fn total_weight(&self) -> Weight {
        self.palettes.iter().map(|palette| palette.weight).sum()
    }

    /// Returns total volume of all palettes.
    pub fn total_volume(&self) -> Volume {
        self.palettes.iter().map(|palette| palette.volume()).sum()
    }

    /// Returns distinct product types in palette order.
    pub fn product_types(&self) -> impl Iterator<Item = &str> + '_ {
        self.palettes
            .iter()
            .enumerate()
            .filter(|(idx, palette)| {
                !self.palettes[..*idx].iter().any(|other| other.product_type == palette.product_type)
            })
            .map(|(_, palette)| palette.product_type.as_str())
    }

    /// Checks that order can travel together with another one: every pair of their product types
    /// is compatible.
    pub fn is_compatible_with(&self, other: &Order, catalog: &ConstraintCatalog) -> bool {
        self.product_types().all(|first| other.product_types().all(|second| catalog.are_compatible(first, second)))
    }

    /// Validates physical properties of the order, returns a reason on failure.
    pub fn validate(&self, catalog: &ConstraintCatalog) -> Result<(), String> {
        if self.palettes.is_empty() {
            return Err("order has no palettes".to_string());
        }

        if !self.window.is_valid() {
            return Err("earliest deadline is after the latest one".to_string());
        }

        self.palettes.iter().try_for_each(|palette| {
            if !palette.size.is_positive() {
                return Err(format!("palette '{}' has non-positive dimension", palette.id));
            }

            if palette.weight <= 0. || !palette.weight.is_finite() {
                return Err(format!("palette '{}' has non-positive weight", palette.id));
            }

            match catalog.get(&palette.product_type) {
                None => Err(format!("palette '{}' has unknown product type '{}'", palette.id, palette.product_type)),
                Some(constraint) if !constraint.temperature.is_consistent() => Err(format!(
                    "product type '{}' of palette '{}' has inconsistent temperature bounds",
                    palette.product_type, palette.id
                )),
                Some(_) => Ok(()),
            }
        })
    }
}
