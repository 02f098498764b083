//! Provides functionality to match groups with vehicles.
//!
//! Groups are processed in descending total volume order, each gets the best scoring unused
//! vehicle. A group which fits no single vehicle is split at order granularity across several
//! smaller ones when their combined capacity allows it.

#[cfg(test)]
#[path = "../../../tests/unit/construction/assignment/assignment_test.rs"]
mod assignment_test;

mod requirements;
pub use self::requirements::*;

mod scoring;
pub use self::scoring::*;

mod splitting;
pub use self::splitting::*;

use crate::models::problem::{ConstraintCatalog, Order, Vehicle};
use crate::models::solution::{Assignment, Group, PlanningError};
use crate::solver::PlanningContext;
use crate::utils::{Float, compare_floats};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Assigns groups to vehicles. Groups which cannot be assigned are reported as failures in the context.
pub fn assign_groups(groups: Vec<Group>, vehicles: &[Arc<Vehicle>], context: &PlanningContext) -> Vec<Assignment> {
    let catalog = context.catalog.as_ref();
    let mut used = vec![false; vehicles.len()];
    let mut assignments = Vec::with_capacity(groups.len());

    let mut groups = groups;
    groups.sort_by(|a, b| compare_floats(b.total_volume(), a.total_volume()));

    for group in groups {
        match find_best_vehicle(group.orders.as_slice(), vehicles, &used, catalog) {
            Ok((idx, score)) => {
                used[idx] = true;
                assignments.push(Assignment { vehicle: vehicles[idx].clone(), group, score });
            }
            Err(rejections) => match split_orders(group.orders.as_slice(), vehicles, &used, catalog) {
                Some(split) => assign_split(group, split, vehicles, &mut used, &mut assignments, context),
                None => context.report(no_suitable_vehicle(&group, &rejections)),
            },
        }
    }

    assignments
}

/// Finds the highest scoring unused vehicle with a positive score. Ties are resolved by lower
/// transport cost, then by vehicle input order. On failure returns distinct rejection reasons.
pub fn find_best_vehicle(
    orders: &[Arc<Order>],
    vehicles: &[Arc<Vehicle>],
    used: &[bool],
    catalog: &ConstraintCatalog,
) -> Result<(usize, Float), BTreeSet<Rejection>> {
    let requirements = GroupRequirements::new(orders, catalog);
    let mut rejections = BTreeSet::new();
    let mut best: Option<(usize, Float)> = None;

    for (idx, vehicle) in vehicles.iter().enumerate().filter(|(idx, _)| !used[*idx]) {
        match score_vehicle(&requirements, vehicle) {
            Ok(score) => {
                let is_better = best.is_none_or(|(best_idx, best_score)| {
                    match compare_floats(score, best_score) {
                        Ordering::Greater => true,
                        Ordering::Less => false,
                        Ordering::Equal => vehicle.transport_cost < vehicles[best_idx].transport_cost,
                    }
                });

                if is_better {
                    best = Some((idx, score));
                }
            }
            Err(rejection) => {
                rejections.insert(rejection);
            }
        }
    }

    best.ok_or(rejections)
}

fn assign_split(
    group: Group,
    split: Split,
    vehicles: &[Arc<Vehicle>],
    used: &mut [bool],
    assignments: &mut Vec<Assignment>,
    context: &PlanningContext,
) {
    let catalog = context.catalog.as_ref();
    let mut part_idx = 0;
    let mut next_id = || {
        part_idx += 1;
        format!("{}.{}", group.id, part_idx)
    };

    for part in split.parts {
        let sub_group = Group::new(next_id(), part.orders);
        let vehicle = vehicles[part.vehicle_idx].clone();

        match score_vehicle(&GroupRequirements::new(sub_group.orders.as_slice(), catalog), vehicle.as_ref()) {
            Ok(score) => {
                used[part.vehicle_idx] = true;
                assignments.push(Assignment { vehicle, group: sub_group, score });
            }
            Err(rejection) => context.report(no_suitable_vehicle(&sub_group, &BTreeSet::from([rejection]))),
        }
    }

    if !split.leftovers.is_empty() {
        let sub_group = Group::new(next_id(), split.leftovers);
        context.report(PlanningError::NoSuitableVehicle {
            group_id: sub_group.id.clone(),
            order_ids: sub_group.order_ids(),
            reason: "orders fit no remaining vehicle after splitting".to_string(),
        });
    }
}

fn no_suitable_vehicle(group: &Group, rejections: &BTreeSet<Rejection>) -> PlanningError {
    let reason = if rejections.is_empty() {
        "no unused vehicle left".to_string()
    } else {
        rejections.iter().map(|rejection| rejection.to_string()).collect::<Vec<_>>().join(", ")
    };

    PlanningError::NoSuitableVehicle { group_id: group.id.clone(), order_ids: group.order_ids(), reason }
}
