#[cfg(test)]
#[path = "../../tests/unit/checker/stacking_test.rs"]
mod stacking_test;

use super::*;
use crate::utils::combine_error_results;
use loadplan_core::construction::packing::{get_support, is_below};
use loadplan_core::utils::{GEOMETRY_EPSILON, is_not_greater};

/// Checks stacking rules:
/// * a palette above the floor is supported with at least minimum support ratio
/// * nothing is put above fragile goods
/// * a palette does not rest on a lighter one
/// * max stack weight of a palette is not exceeded by all palettes above it
/// * no palette is slid under an already loaded one
pub fn check_stacking(context: &CheckerContext) -> Result<(), Vec<String>> {
    combine_error_results(&[check_support(context), check_stacked_goods(context), check_loading_order(context)])
}

fn check_support(context: &CheckerContext) -> Result<(), String> {
    context.solution.plans.iter().try_for_each(|plan| {
        let palettes = context.get_checked_palettes(plan)?;
        let items = palettes.iter().map(|checked| checked.as_placed_item()).collect::<Vec<_>>();

        palettes.iter().try_for_each(|checked| match get_support(items.as_slice(), &checked.cuboid) {
            Some(support) if support.fraction >= context.min_support_ratio - GEOMETRY_EPSILON => Ok(()),
            Some(support) => Err(format!(
                "palette '{}' is not supported enough: {:.2} < {:.2}",
                checked.palette.id, support.fraction, context.min_support_ratio
            )),
            None => Err(format!("palette '{}' has no support", checked.palette.id)),
        })
    })
}

fn check_stacked_goods(context: &CheckerContext) -> Result<(), String> {
    context.solution.plans.iter().try_for_each(|plan| {
        let palettes = context.get_checked_palettes(plan)?;

        palettes.iter().try_for_each(|lower| {
            let uppers = palettes
                .iter()
                .filter(|upper| !std::ptr::eq(*upper, lower) && is_below(&lower.cuboid, &upper.cuboid))
                .collect::<Vec<_>>();

            if uppers.is_empty() {
                return Ok(());
            }

            if lower.constraint.fragile {
                return Err(format!("palette '{}' has fragile goods, but something is put on top", lower.palette.id));
            }

            if let Some(upper) = uppers
                .iter()
                .find(|upper| upper.cuboid.rests_on(&lower.cuboid) && lower.palette.weight < upper.palette.weight - GEOMETRY_EPSILON)
            {
                return Err(format!("palette '{}' rests on lighter palette '{}'", upper.palette.id, lower.palette.id));
            }

            let load = uppers.iter().map(|upper| upper.palette.weight).sum::<Float>();
            match lower.constraint.max_stack_weight {
                Some(max) if !is_not_greater(load, max) => {
                    Err(format!("max stack weight of palette '{}' is exceeded: {load} > {max}", lower.palette.id))
                }
                _ => Ok(()),
            }
        })
    })
}

fn check_loading_order(context: &CheckerContext) -> Result<(), String> {
    context.solution.plans.iter().try_for_each(|plan| {
        let palettes = context.get_checked_palettes(plan)?;

        palettes.iter().enumerate().try_for_each(|(idx, later)| {
            palettes.iter().take(idx).try_for_each(|earlier| {
                if is_below(&later.cuboid, &earlier.cuboid) {
                    Err(format!("palette '{}' is slid under already loaded palette '{}'", later.palette.id, earlier.palette.id))
                } else {
                    Ok(())
                }
            })
        })
    })
}
