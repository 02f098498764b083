#[cfg(test)]
#[path = "../../tests/unit/checker/assignment_test.rs"]
mod assignment_test;

use super::*;
use crate::utils::combine_error_results;

/// Checks assignment of orders and vehicles:
/// * plan vehicle is known and available, used at most once and its category is reported correctly
/// * every palette is loaded at most once by its own order's plan
/// * every order is either loaded completely or covered by a failure, but not both
pub fn check_assignment(context: &CheckerContext) -> Result<(), Vec<String>> {
    combine_error_results(&[check_vehicles(context), check_palettes(context), check_orders(context)])
}

fn check_vehicles(context: &CheckerContext) -> Result<(), String> {
    let mut used = HashSet::new();

    context.solution.plans.iter().try_for_each(|plan| {
        let vehicle = context.get_vehicle(plan.vehicle_id.as_str())?;

        if !vehicle.available {
            return Err(format!("vehicle '{}' is not available, but used", vehicle.id));
        }

        if vehicle.category.name() != plan.category {
            return Err(format!("vehicle '{}' has category '{}', not '{}'", vehicle.id, vehicle.category, plan.category));
        }

        if !used.insert(vehicle.id.as_str()) {
            return Err(format!("vehicle '{}' is used in multiple plans", vehicle.id));
        }

        Ok(())
    })
}

fn check_palettes(context: &CheckerContext) -> Result<(), String> {
    let mut loaded = HashSet::new();

    context.solution.plans.iter().flat_map(|plan| plan.palettes.iter().map(move |palette| (plan, palette))).try_for_each(
        |(plan, palette)| {
            let (order_id, _) = context.get_palette(palette.id.as_str())?;

            if order_id != palette.order_id {
                return Err(format!("palette '{}' belongs to order '{order_id}', not '{}'", palette.id, palette.order_id));
            }

            if !plan.orders.iter().any(|id| id == order_id) {
                return Err(format!("palette '{}' is loaded on vehicle '{}' without its order", palette.id, plan.vehicle_id));
            }

            if !loaded.insert(palette.id.as_str()) {
                return Err(format!("palette '{}' is loaded multiple times", palette.id));
            }

            Ok(())
        },
    )
}

fn check_orders(context: &CheckerContext) -> Result<(), String> {
    let planned = context
        .solution
        .plans
        .iter()
        .flat_map(|plan| plan.orders.iter().map(move |order_id| (order_id.as_str(), plan)))
        .collect::<Vec<_>>();
    let failed = context
        .solution
        .failures
        .iter()
        .flat_map(|failure| failure.orders.iter().map(|order_id| order_id.as_str()))
        .collect::<HashSet<_>>();

    context.problem.orders.iter().try_for_each(|api_order| {
        let order = context.get_order(api_order.id.as_str())?;
        let plans = planned.iter().filter(|(order_id, _)| *order_id == order.id).map(|(_, plan)| *plan).collect::<Vec<_>>();

        match (plans.as_slice(), failed.contains(order.id.as_str())) {
            ([], false) => Err(format!("order '{}' is neither planned nor reported as failure", order.id)),
            ([], true) => Ok(()),
            ([_, ..], true) => Err(format!("order '{}' is planned and reported as failure", order.id)),
            ([plan], false) => {
                let loaded = plan.palettes.iter().filter(|palette| palette.order_id == order.id).count();
                if loaded == order.palettes.len() {
                    Ok(())
                } else {
                    Err(format!(
                        "order '{}' is loaded partially: {loaded} of {} palettes",
                        order.id,
                        order.palettes.len()
                    ))
                }
            }
            (_, false) => Err(format!("order '{}' is planned on multiple vehicles", order.id)),
        }
    })
}
