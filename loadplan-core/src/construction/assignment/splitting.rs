#[cfg(test)]
#[path = "../../../tests/unit/construction/assignment/splitting_test.rs"]
mod splitting_test;

use super::*;
use crate::models::problem::{ConstraintCatalog, Order, Vehicle};
use crate::utils::{compare_floats, is_not_greater};
use std::cmp::Ordering;
use std::sync::Arc;

/// A sub-group of orders together with the vehicle it was sized for.
#[derive(Debug)]
pub struct SplitPart {
    /// Index of the vehicle in the fleet.
    pub vehicle_idx: usize,
    /// Orders which fit the vehicle.
    pub orders: Vec<Arc<Order>>,
}

/// A result of group splitting.
#[derive(Debug, Default)]
pub struct Split {
    /// Sub-groups of orders, each sized for its own distinct vehicle.
    pub parts: Vec<SplitPart>,
    /// Orders which fit no remaining vehicle.
    pub leftovers: Vec<Arc<Order>>,
}

/// Splits orders of a group which fits no single vehicle into sub-groups at order granularity.
/// Returns `None` when splitting cannot help: a group has only one order, or eligible unused
/// vehicles cannot cover its volume and weight even combined.
pub fn split_orders(
    orders: &[Arc<Order>],
    vehicles: &[Arc<Vehicle>],
    used: &[bool],
    catalog: &ConstraintCatalog,
) -> Option<Split> {
    if orders.len() < 2 {
        return None;
    }

    let requirements = GroupRequirements::new(orders, catalog);

    let mut pool = vehicles
        .iter()
        .enumerate()
        .filter(|(idx, vehicle)| !used[*idx] && vehicle.available)
        .filter(|(_, vehicle)| check_temperature(&requirements, vehicle).is_ok())
        .collect::<Vec<_>>();
    pool.sort_by(|(_, a), (_, b)| compare_floats(a.cost_per_capacity(), b.cost_per_capacity()));

    let (total_volume, total_payload) = pool.iter().fold((0., 0.), |(volume, payload), (_, vehicle)| {
        let spec = vehicle.spec();
        (volume + spec.usable_volume, payload + spec.payload)
    });

    if !is_not_greater(requirements.volume, total_volume) || !is_not_greater(requirements.weight, total_payload) {
        return None;
    }

    let fits = |orders: &[Arc<Order>], vehicle: &Vehicle| {
        check_vehicle(&GroupRequirements::new(orders, catalog), vehicle).is_ok()
    };

    let mut remaining = orders.iter().cloned().enumerate().collect::<Vec<_>>();
    let mut split = Split::default();

    while !remaining.is_empty() && !pool.is_empty() {
        let remaining_orders = remaining.iter().map(|(_, order)| order.clone()).collect::<Vec<_>>();

        if let Some(idx) = pool.iter().position(|&(_, vehicle)| fits(remaining_orders.as_slice(), vehicle.as_ref())) {
            let (vehicle_idx, _) = pool.remove(idx);
            split.parts.push(SplitPart { vehicle_idx, orders: remaining_orders });
            remaining.clear();
            break;
        }

        let largest_idx = pool
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, &Arc<Vehicle>)>, (idx, &(_, vehicle))| match best {
                Some((_, best_vehicle))
                    if compare_floats(vehicle.spec().payload, best_vehicle.spec().payload) != Ordering::Greater =>
                {
                    best
                }
                _ => Some((idx, vehicle)),
            })
            .map(|(idx, _)| idx)?;
        let (vehicle_idx, vehicle) = pool.remove(largest_idx);

        let mut by_volume = remaining.clone();
        by_volume.sort_by(|(_, a), (_, b)| compare_floats(b.total_volume(), a.total_volume()));

        let mut selected: Vec<(usize, Arc<Order>)> = Vec::new();
        for candidate in by_volume {
            let mut orders = selected.iter().map(|(_, order)| order.clone()).collect::<Vec<_>>();
            orders.push(candidate.1.clone());

            if fits(orders.as_slice(), vehicle.as_ref()) {
                selected.push(candidate);
            }
        }

        if selected.is_empty() {
            continue;
        }

        selected.sort_by_key(|(idx, _)| *idx);
        remaining.retain(|(idx, _)| selected.iter().all(|(selected_idx, _)| selected_idx != idx));
        split.parts.push(SplitPart { vehicle_idx, orders: selected.into_iter().map(|(_, order)| order).collect() });
    }

    split.leftovers = remaining.into_iter().map(|(_, order)| order).collect();

    Some(split)
}
