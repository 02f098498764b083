#[cfg(test)]
#[path = "../../../tests/unit/models/problem/catalog_test.rs"]
mod catalog_test;

use crate::models::common::{TemperatureBand, Weight};
use crate::utils::{GenericError, GenericResult};
use rustc_hash::{FxHashMap, FxHashSet};

/// Default loading priority used when it is not specified.
pub const DEFAULT_LOADING_PRIORITY: u8 = 3;

/// Physical and thermal constraints of one product type.
#[derive(Clone, Debug)]
pub struct ProductTypeConstraint {
    /// Product type tag.
    pub product_type: String,
    /// Nothing should be put on top of fragile goods.
    pub fragile: bool,
    /// Whether length and width can be swapped during loading.
    pub rotatable: bool,
    /// Product types which cannot travel together with this one.
    pub incompatible_types: FxHashSet<String>,
    /// Allowed transport temperature.
    pub temperature: TemperatureBand,
    /// Max weight which can rest on a palette of this type.
    pub max_stack_weight: Option<Weight>,
    /// Goods must keep their orientation.
    pub requires_vertical: bool,
    /// Loading priority: 1 is the highest, 5 is the lowest.
    pub loading_priority: u8,
}

impl ProductTypeConstraint {
    /// Creates a constraint with default (least restrictive) values.
    pub fn new(product_type: &str) -> Self {
        Self {
            product_type: product_type.to_string(),
            fragile: false,
            rotatable: true,
            incompatible_types: FxHashSet::default(),
            temperature: TemperatureBand::default(),
            max_stack_weight: None,
            requires_vertical: false,
            loading_priority: DEFAULT_LOADING_PRIORITY,
        }
    }

    /// Returns true if the 90° swapped orientation can be used.
    pub fn allows_rotation(&self) -> bool {
        self.rotatable && !self.requires_vertical
    }

    /// Returns true if product needs temperature controlled transport.
    pub fn needs_refrigeration(&self) -> bool {
        self.temperature.is_constrained()
    }
}

/// A static lookup of product type constraints. Immutable during a planning run.
#[derive(Clone, Debug, Default)]
pub struct ConstraintCatalog {
    index: FxHashMap<String, ProductTypeConstraint>,
}

impl ConstraintCatalog {
    /// Creates a new catalog. Duplicated product types are rejected.
    pub fn new(constraints: Vec<ProductTypeConstraint>) -> GenericResult<Self> {
        let mut index = FxHashMap::default();

        for constraint in constraints {
            let product_type = constraint.product_type.clone();
            if index.insert(product_type.clone(), constraint).is_some() {
                return Err(GenericError::from(format!("duplicated product type in catalog: '{product_type}'")));
            }
        }

        Ok(Self { index })
    }

    /// Gets constraint of the given product type.
    pub fn get(&self, product_type: &str) -> Option<&ProductTypeConstraint> {
        self.index.get(product_type)
    }

    /// Returns amount of product types.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if catalog has no product types.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Checks declared incompatibility, the relation is symmetric even if only one side lists it.
    /// Unknown types are not considered incompatible.
    pub fn are_incompatible(&self, first: &str, second: &str) -> bool {
        let lists = |a: &str, b: &str| self.get(a).is_some_and(|constraint| constraint.incompatible_types.contains(b));

        lists(first, second) || lists(second, first)
    }

    /// Checks whether two product types may travel together: no declared incompatibility and
    /// overlapping temperature bands.
    pub fn are_compatible(&self, first: &str, second: &str) -> bool {
        if self.are_incompatible(first, second) {
            return false;
        }

        match (self.get(first), self.get(second)) {
            (Some(first), Some(second)) => first.temperature.overlaps(&second.temperature),
            _ => true,
        }
    }
}
