#[cfg(test)]
#[path = "../../tests/unit/checker/capacity_test.rs"]
mod capacity_test;

use super::*;
use crate::utils::combine_error_results;
use loadplan_core::models::common::PalletStandard;
use loadplan_core::utils::is_not_greater;

/// Checks that vehicle capacity is not violated: payload, usable volume and pallet slots.
pub fn check_vehicle_capacity(context: &CheckerContext) -> Result<(), Vec<String>> {
    combine_error_results(&[check_weight_and_volume(context), check_pallet_slots(context)])
}

fn check_weight_and_volume(context: &CheckerContext) -> Result<(), String> {
    context.solution.plans.iter().try_for_each(|plan| {
        let spec = context.get_vehicle(plan.vehicle_id.as_str())?.spec();
        let palettes = context.get_checked_palettes(plan)?;

        let weight = palettes.iter().map(|checked| checked.palette.weight).sum::<Float>();
        let volume = palettes.iter().map(|checked| checked.palette.volume()).sum::<Float>();

        if !is_not_greater(weight, spec.payload) {
            return Err(format!("payload of vehicle '{}' is exceeded: {weight} > {}", plan.vehicle_id, spec.payload));
        }

        if !is_not_greater(volume, spec.usable_volume) {
            return Err(format!(
                "usable volume of vehicle '{}' is exceeded: {volume} > {}",
                plan.vehicle_id, spec.usable_volume
            ));
        }

        Ok(())
    })
}

fn check_pallet_slots(context: &CheckerContext) -> Result<(), String> {
    context.solution.plans.iter().try_for_each(|plan| {
        let spec = context.get_vehicle(plan.vehicle_id.as_str())?.spec();
        let palettes = context.get_checked_palettes(plan)?;

        let usage = [PalletStandard::European, PalletStandard::American]
            .into_iter()
            .map(|standard| {
                let count = palettes.iter().filter(|checked| checked.palette.standard == standard).count();
                match (count, spec.slots(standard)) {
                    (0, _) => 0.,
                    (_, 0) => Float::INFINITY,
                    (count, slots) => count as Float / slots as Float,
                }
            })
            .sum::<Float>();

        if is_not_greater(usage, 1.) {
            Ok(())
        } else {
            Err(format!("pallet slots of vehicle '{}' are exceeded: usage is {usage:.2}", plan.vehicle_id))
        }
    })
}
