//! This module provides functionality to automatically check that given solution is feasible
//! which means that there is no constraint violations.

#[cfg(test)]
#[path = "../../tests/unit/checker/checker_test.rs"]
mod checker_test;

use crate::format::problem::*;
use crate::format::solution::*;
use loadplan_core::construction::packing::{Cuboid, PlacedItem};
use loadplan_core::models::common::{Rotation, Size3D};
use loadplan_core::models::problem::{ConstraintCatalog, ProductTypeConstraint};
use loadplan_core::models::problem::{Order as CoreOrder, Palette as CorePalette, Vehicle as CoreVehicle};
use loadplan_core::solver::PackingConfig;
use loadplan_core::utils::{Float, is_close};
use std::collections::{HashMap, HashSet};
use std::io::{BufReader, Read};
use std::sync::Arc;

mod assignment;
use self::assignment::check_assignment;

mod capacity;
use self::capacity::check_vehicle_capacity;

mod compatibility;
use self::compatibility::check_compatibility;

mod placement;
use self::placement::check_placement;

mod stacking;
use self::stacking::check_stacking;

/// Stores problem and solution together and provides some helper methods.
pub struct CheckerContext {
    /// An original problem definition.
    pub problem: Problem,
    /// Solution to be checked.
    pub solution: Solution,
    /// Minimum fraction of base area which should be supported when not on the floor.
    pub min_support_ratio: Float,

    catalog: Arc<ConstraintCatalog>,
    orders: HashMap<String, Arc<CoreOrder>>,
    palettes: HashMap<String, (String, Arc<CorePalette>)>,
    vehicles: HashMap<String, CoreVehicle>,
}

/// A loaded palette resolved against problem definition.
struct CheckedPalette<'a> {
    loaded: &'a LoadedPalette,
    palette: &'a CorePalette,
    constraint: &'a ProductTypeConstraint,
    cuboid: Cuboid,
}

impl CheckerContext {
    /// Creates an instance of `CheckerContext`.
    pub fn new(problem: Problem, solution: Solution) -> Result<Self, Vec<String>> {
        let core_problem =
            map_to_problem(&problem).map_err(|errors| errors.into_iter().map(|err| err.to_string()).collect::<Vec<_>>())?;

        let orders = core_problem
            .orders
            .into_iter()
            .map(|order| (order.id.clone(), Arc::new(order)))
            .collect::<HashMap<_, _>>();
        let palettes = orders
            .values()
            .flat_map(|order| order.palettes.iter().map(|palette| (palette.id.clone(), (order.id.clone(), palette.clone()))))
            .collect();
        let vehicles = core_problem.vehicles.into_iter().map(|vehicle| (vehicle.id.clone(), vehicle)).collect();

        Ok(Self {
            problem,
            solution,
            min_support_ratio: PackingConfig::default().min_support_ratio,
            catalog: core_problem.catalog,
            orders,
            palettes,
            vehicles,
        })
    }

    /// Sets minimum support ratio used by the packer.
    pub fn with_min_support_ratio(mut self, min_support_ratio: Float) -> Self {
        self.min_support_ratio = min_support_ratio;
        self
    }

    /// Performs solution check.
    pub fn check(&self) -> Result<(), Vec<String>> {
        // avoid duplicates keeping original order
        let (_, errors) = check_assignment(self)
            .err()
            .into_iter()
            .chain(check_placement(self).err())
            .chain(check_vehicle_capacity(self).err())
            .chain(check_compatibility(self).err())
            .chain(check_stacking(self).err())
            .flatten()
            .fold((HashSet::new(), Vec::default()), |(mut used, mut errors), error| {
                if !used.contains(&error) {
                    errors.push(error.clone());
                    used.insert(error);
                }

                (used, errors)
            });

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Gets vehicle by its id.
    fn get_vehicle(&self, vehicle_id: &str) -> Result<&CoreVehicle, String> {
        self.vehicles.get(vehicle_id).ok_or_else(|| format!("cannot find vehicle with id '{vehicle_id}'"))
    }

    /// Gets order by its id.
    fn get_order(&self, order_id: &str) -> Result<&Arc<CoreOrder>, String> {
        self.orders.get(order_id).ok_or_else(|| format!("cannot find order with id '{order_id}'"))
    }

    /// Gets palette and id of its order.
    fn get_palette(&self, palette_id: &str) -> Result<(&str, &CorePalette), String> {
        self.palettes
            .get(palette_id)
            .map(|(order_id, palette)| (order_id.as_str(), palette.as_ref()))
            .ok_or_else(|| format!("cannot find palette with id '{palette_id}'"))
    }

    /// Gets product type constraint.
    fn get_constraint(&self, product_type: &str) -> Result<&ProductTypeConstraint, String> {
        self.catalog.get(product_type).ok_or_else(|| format!("cannot find product type '{product_type}'"))
    }

    /// Resolves plan palettes keeping their loading order.
    fn get_checked_palettes<'a>(&'a self, plan: &'a Plan) -> Result<Vec<CheckedPalette<'a>>, String> {
        plan.palettes
            .iter()
            .map(|loaded| {
                let (_, palette) = self.get_palette(loaded.id.as_str())?;
                let constraint = self.get_constraint(palette.product_type.as_str())?;
                let cuboid = Cuboid::new(loaded.x, loaded.y, loaded.z, Size3D::new(loaded.length, loaded.width, loaded.height));

                Ok(CheckedPalette { loaded, palette, constraint, cuboid })
            })
            .collect()
    }
}

impl CheckedPalette<'_> {
    /// Returns rotation reported in the solution.
    fn rotation(&self) -> Option<Rotation> {
        match self.loaded.rotation {
            0 => Some(Rotation::Deg0),
            90 => Some(Rotation::Deg90),
            _ => None,
        }
    }

    /// Returns true if the reported size is the palette size under the reported rotation.
    fn has_consistent_size(&self) -> bool {
        self.rotation().is_some_and(|rotation| {
            let expected = rotation.apply(&self.palette.size);
            let actual = self.cuboid.size;

            is_close(expected.length, actual.length)
                && is_close(expected.width, actual.width)
                && is_close(expected.height, actual.height)
        })
    }

    fn as_placed_item(&self) -> PlacedItem<'_> {
        PlacedItem { cuboid: self.cuboid, weight: self.palette.weight, constraint: self.constraint, load: 0. }
    }
}

/// Checks pragmatic solution against pragmatic problem.
pub fn check_pragmatic_solution<R: Read>(
    problem_reader: BufReader<R>,
    solution_reader: BufReader<R>,
) -> Result<(), Vec<String>> {
    let problem = deserialize_problem(problem_reader).map_err(|errors| vec![errors.to_string()])?;
    let solution = deserialize_solution(solution_reader).map_err(|errors| vec![errors.to_string()])?;

    CheckerContext::new(problem, solution)?.check()
}
