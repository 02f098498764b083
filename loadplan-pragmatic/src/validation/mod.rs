//! This module provides functionality to validate problem definition for logical correctness.

use crate::format::problem::*;
use crate::format::{FormatError, MultiFormatError};

mod common;
use self::common::*;

mod catalog;
use self::catalog::validate_catalog;

mod orders;
use self::orders::validate_orders;

mod vehicles;
use self::vehicles::validate_vehicles;

/// Validates problem on set of rules.
pub struct ValidationContext<'a> {
    /// An original problem.
    pub problem: &'a Problem,
}

impl<'a> ValidationContext<'a> {
    /// Creates an instance of `ValidationContext`.
    pub fn new(problem: &'a Problem) -> Self {
        Self { problem }
    }

    /// Validates problem on set of rules.
    pub fn validate(&self) -> Result<(), MultiFormatError> {
        let errors = validate_catalog(self)
            .err()
            .into_iter()
            .chain(validate_orders(self).err())
            .chain(validate_vehicles(self).err())
            .flatten()
            .collect::<Vec<_>>();

        if errors.is_empty() { Ok(()) } else { Err(errors.into()) }
    }

    /// Get list of orders from the problem.
    fn orders(&self) -> impl Iterator<Item = &Order> {
        self.problem.orders.iter()
    }

    /// Get list of vehicles from the problem.
    fn vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.problem.vehicles.iter()
    }

    /// Get list of product types from the catalog.
    fn product_types(&self) -> impl Iterator<Item = &ProductType> {
        self.problem.catalog.product_types.iter()
    }
}
