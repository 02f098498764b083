#[cfg(test)]
#[path = "../../tests/unit/checker/compatibility_test.rs"]
mod compatibility_test;

use super::*;
use crate::utils::combine_error_results;
use loadplan_core::construction::assignment::{GroupRequirements, check_temperature};

/// Checks that goods in one vehicle can travel together and the vehicle keeps required temperature.
pub fn check_compatibility(context: &CheckerContext) -> Result<(), Vec<String>> {
    combine_error_results(&[check_product_types(context), check_refrigeration(context)])
}

fn check_product_types(context: &CheckerContext) -> Result<(), String> {
    context.solution.plans.iter().try_for_each(|plan| {
        let palettes = context.get_checked_palettes(plan)?;

        palettes.iter().enumerate().try_for_each(|(idx, first)| {
            palettes.iter().skip(idx + 1).try_for_each(|second| {
                let (first_type, second_type) = (first.palette.product_type.as_str(), second.palette.product_type.as_str());

                if context.catalog.are_compatible(first_type, second_type) {
                    Ok(())
                } else {
                    Err(format!(
                        "incompatible product types '{first_type}' and '{second_type}' are loaded on vehicle '{}'",
                        plan.vehicle_id
                    ))
                }
            })
        })
    })
}

fn check_refrigeration(context: &CheckerContext) -> Result<(), String> {
    context.solution.plans.iter().try_for_each(|plan| {
        let vehicle = context.get_vehicle(plan.vehicle_id.as_str())?;
        let orders = plan
            .orders
            .iter()
            .map(|order_id| context.get_order(order_id).cloned())
            .collect::<Result<Vec<_>, _>>()?;

        let requirements = GroupRequirements::new(orders.as_slice(), context.catalog.as_ref());

        check_temperature(&requirements, vehicle)
            .map_err(|rejection| format!("vehicle '{}' cannot keep plan goods: {rejection}", plan.vehicle_id))
    })
}
