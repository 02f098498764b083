#[cfg(test)]
#[path = "../../tests/unit/validation/vehicles_test.rs"]
mod vehicles_test;

use super::*;
use crate::utils::combine_error_results;
use loadplan_core::models::problem::VehicleCategory;

/// Checks that fleet has no vehicles with duplicate ids.
fn check_e1100_no_vehicles_with_duplicate_ids(ctx: &ValidationContext) -> Result<(), FormatError> {
    get_duplicates(ctx.vehicles().map(|vehicle| &vehicle.id)).map_or(Ok(()), |ids| {
        Err(FormatError::new(
            "E1100".to_string(),
            "duplicated vehicle ids".to_string(),
            format!("remove duplicated vehicle ids: {}", ids.join(", ")),
        ))
    })
}

/// Checks that every vehicle category is known.
fn check_e1101_vehicle_category_is_known(ctx: &ValidationContext) -> Result<(), FormatError> {
    let ids = ctx
        .vehicles()
        .filter(|vehicle| vehicle.category.parse::<VehicleCategory>().is_err())
        .map(|vehicle| vehicle.id.clone())
        .collect::<Vec<_>>();

    if ids.is_empty() {
        Ok(())
    } else {
        let known = VehicleCategory::ALL.iter().map(|category| category.name()).collect::<Vec<_>>();

        Err(FormatError::new_with_details(
            "E1101".to_string(),
            "unknown vehicle category".to_string(),
            format!("use one of known vehicle categories, vehicle ids: '{}'", ids.join(", ")),
            format!("known categories: {}", known.join(", ")),
        ))
    }
}

/// Checks that transport cost is a non negative number.
fn check_e1102_transport_cost_is_not_negative(ctx: &ValidationContext) -> Result<(), FormatError> {
    let ids = ctx
        .vehicles()
        .filter(|vehicle| !vehicle.transport_cost.is_finite() || vehicle.transport_cost < 0.)
        .map(|vehicle| vehicle.id.clone())
        .collect::<Vec<_>>();

    if ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1102".to_string(),
            "negative transport cost".to_string(),
            format!("use non negative transport cost, vehicle ids: '{}'", ids.join(", ")),
        ))
    }
}

/// Checks that refrigerated vehicle setpoint is within the range of its refrigeration unit.
fn check_e1203_setpoint_within_refrigeration_range(ctx: &ValidationContext) -> Result<(), FormatError> {
    let ids = ctx
        .vehicles()
        .filter_map(|vehicle| {
            let range = vehicle.category.parse::<VehicleCategory>().ok()?.spec().refrigeration?;
            let setpoint = vehicle.temperature?;

            (!range.contains(setpoint)).then(|| vehicle.id.clone())
        })
        .collect::<Vec<_>>();

    if ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1203".to_string(),
            "refrigerated vehicle setpoint is outside of its category range".to_string(),
            format!("change temperature to be within refrigeration unit range, vehicle ids: '{}'", ids.join(", ")),
        ))
    }
}

/// Validates vehicles from the fleet.
pub fn validate_vehicles(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[
        check_e1100_no_vehicles_with_duplicate_ids(ctx),
        check_e1101_vehicle_category_is_known(ctx),
        check_e1102_transport_cost_is_not_negative(ctx),
        check_e1203_setpoint_within_refrigeration_range(ctx),
    ])
}
