#[cfg(test)]
#[path = "../../../tests/unit/construction/packing/rules_test.rs"]
mod rules_test;

use super::*;
use crate::models::problem::ConstraintCatalog;
use crate::utils::{Float, GEOMETRY_EPSILON, is_not_greater};

/// Describes how a valid candidate is supported.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Support {
    /// Fraction of base area resting on the floor or on palettes.
    pub fraction: Float,
    /// True if every footprint corner is supported.
    pub all_corners: bool,
}

/// Checks physical validity of the candidate against the current loading space. Returns support
/// information for a valid candidate.
pub fn check_placement(
    space: &LoadingSpace,
    item: &PackingItem,
    cuboid: &Cuboid,
    catalog: &ConstraintCatalog,
    min_support_ratio: Float,
) -> Option<Support> {
    if !cuboid.is_within(space.bounds()) {
        return None;
    }

    let items = space.items();
    let product_type = item.palette.product_type.as_str();

    let is_blocked = items.iter().any(|placed| {
        placed.cuboid.overlaps(cuboid)
            || catalog.are_incompatible(product_type, placed.constraint.product_type.as_str())
            || (placed.cuboid.footprints_intersect(cuboid) && placed.cuboid.z > cuboid.z_max() - GEOMETRY_EPSILON)
    });

    if is_blocked {
        return None;
    }

    let support = get_support(items, cuboid)?;
    if support.fraction < min_support_ratio - GEOMETRY_EPSILON {
        return None;
    }

    let weight = item.palette.weight;
    let is_stack_valid = items.iter().filter(|placed| is_below(&placed.cuboid, cuboid)).all(|placed| {
        let is_resting_on = cuboid.rests_on(&placed.cuboid);

        !placed.constraint.fragile
            && !(is_resting_on && placed.weight < weight - GEOMETRY_EPSILON)
            && placed.constraint.max_stack_weight.is_none_or(|max| is_not_greater(placed.load + weight, max))
    });

    is_stack_valid.then_some(support)
}

/// Returns support of the cuboid, `None` if it is floating above the floor without any support.
pub fn get_support(items: &[PlacedItem], cuboid: &Cuboid) -> Option<Support> {
    if cuboid.z < GEOMETRY_EPSILON {
        return Some(Support { fraction: 1., all_corners: true });
    }

    let supports = items.iter().filter(|placed| cuboid.rests_on(&placed.cuboid)).map(|placed| &placed.cuboid).collect::<Vec<_>>();
    if supports.is_empty() {
        return None;
    }

    let area = supports.iter().map(|support| support.footprint_overlap(cuboid)).sum::<Float>();
    let fraction = (area / cuboid.size.base_area()).min(1.);
    let all_corners = cuboid.corners_xy().iter().all(|&corner| supports.iter().any(|support| support.covers_xy(corner)));

    Some(Support { fraction, all_corners })
}
