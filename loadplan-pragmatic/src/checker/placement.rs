#[cfg(test)]
#[path = "../../tests/unit/checker/placement_test.rs"]
mod placement_test;

use super::*;
use crate::utils::combine_error_results;

/// Checks that palettes are placed physically correctly:
/// * reported size matches palette size under reported rotation
/// * rotation is used only when product type allows it
/// * every palette is within cargo space bounds
/// * palettes do not overlap
pub fn check_placement(context: &CheckerContext) -> Result<(), Vec<String>> {
    combine_error_results(&[check_orientation(context), check_bounds(context), check_overlaps(context)])
}

fn check_orientation(context: &CheckerContext) -> Result<(), String> {
    context.solution.plans.iter().try_for_each(|plan| {
        context.get_checked_palettes(plan)?.iter().try_for_each(|checked| {
            if !checked.has_consistent_size() {
                return Err(format!(
                    "palette '{}' has size or rotation which does not match its definition",
                    checked.palette.id
                ));
            }

            if checked.rotation() == Some(Rotation::Deg90) && !checked.constraint.allows_rotation() {
                return Err(format!("palette '{}' is rotated, but its product type forbids rotation", checked.palette.id));
            }

            Ok(())
        })
    })
}

fn check_bounds(context: &CheckerContext) -> Result<(), String> {
    context.solution.plans.iter().try_for_each(|plan| {
        let bounds = context.get_vehicle(plan.vehicle_id.as_str())?.spec().internal;

        context.get_checked_palettes(plan)?.iter().try_for_each(|checked| {
            if checked.cuboid.is_within(&bounds) {
                Ok(())
            } else {
                Err(format!("palette '{}' is outside of vehicle '{}' cargo space", checked.palette.id, plan.vehicle_id))
            }
        })
    })
}

fn check_overlaps(context: &CheckerContext) -> Result<(), String> {
    context.solution.plans.iter().try_for_each(|plan| {
        let palettes = context.get_checked_palettes(plan)?;

        palettes.iter().enumerate().try_for_each(|(idx, first)| {
            palettes.iter().skip(idx + 1).try_for_each(|second| {
                if first.cuboid.overlaps(&second.cuboid) {
                    Err(format!(
                        "palettes '{}' and '{}' overlap in vehicle '{}'",
                        first.palette.id, second.palette.id, plan.vehicle_id
                    ))
                } else {
                    Ok(())
                }
            })
        })
    })
}
