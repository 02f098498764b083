//! Provides functionality to compute a 3D loading arrangement of group palettes inside a vehicle.
//!
//! Palettes are packed one by one in priority order. For each palette, candidate positions are
//! generated for every allowed orientation, physically invalid ones are discarded and the
//! remaining ones are scored by balance, wall proximity, stability and loading sequence. The
//! best candidate is committed before the next palette is considered.

#[cfg(test)]
#[path = "../../../tests/unit/construction/packing/packing_test.rs"]
mod packing_test;

mod candidates;
pub use self::candidates::*;

mod geometry;
pub use self::geometry::*;

mod occupancy;
pub use self::occupancy::*;

mod ordering;
pub use self::ordering::*;

mod rules;
pub use self::rules::*;

mod scoring;
pub use self::scoring::*;

mod space;
pub use self::space::*;

use crate::models::common::Position3D;
use crate::models::problem::Vehicle;
use crate::models::solution::{Group, LoadedPalette, LoadingPlan, PlanningError};
use crate::solver::{PlanningContext, evaluate_plan};
use crate::utils::{Float, compare_floats, is_not_greater};
use std::cmp::Ordering;
use std::sync::Arc;

/// Packs all palettes of the group into the vehicle. Either every palette gets a position or
/// packing fails for the whole group.
pub fn pack_group(group: &Group, vehicle: &Arc<Vehicle>, context: &PlanningContext) -> Result<LoadingPlan, PlanningError> {
    let spec = vehicle.spec();
    let settings = &context.config.packing;
    let catalog = context.catalog.as_ref();

    let infeasible = |palette_id: Option<String>, reason: String| PlanningError::PackingInfeasible {
        group_id: group.id.clone(),
        vehicle_id: vehicle.id.clone(),
        order_ids: group.order_ids(),
        palette_id,
        reason,
    };

    let (weight, volume) = (group.total_weight(), group.total_volume());
    if !is_not_greater(weight, spec.payload) || !is_not_greater(volume, spec.usable_volume) {
        return Err(infeasible(
            None,
            format!(
                "group weight {weight:.1}kg and volume {volume:.2}m3 exceed payload {}kg or usable volume {}m3",
                spec.payload, spec.usable_volume
            ),
        ));
    }

    let items = create_packing_items(group, catalog)
        .map_err(|palette_id| infeasible(Some(palette_id), "palette has unknown product type".to_string()))?;

    let mut space = LoadingSpace::new(spec.internal, settings.resolution);
    let mut palettes = Vec::with_capacity(items.len());

    for item in items.iter() {
        let candidates =
            generate_candidates(&space, &item.palette.size, item.constraint.allows_rotation(), settings.strategy);

        let scores = context.environment.parallelism.inner_map(candidates.as_slice(), |candidate| {
            check_placement(&space, item, &candidate.cuboid, catalog, settings.min_support_ratio)
                .map(|support| score_placement(&space, item, &candidate.cuboid, &support, settings.loading_sequence))
        });

        let best = candidates
            .iter()
            .zip(scores)
            .filter_map(|(candidate, score)| score.map(|score| (candidate, score)))
            .fold(None, |best: Option<(&Candidate, Float)>, (candidate, score)| match best {
                Some(current) if !is_better_candidate((candidate, score), current) => best,
                _ => Some((candidate, score)),
            });

        let Some((candidate, _)) = best else {
            return Err(infeasible(
                Some(item.palette.id.clone()),
                format!("palette '{}' has no valid position under any orientation", item.palette.id),
            ));
        };

        let cuboid = candidate.cuboid;
        space.commit(cuboid, item.palette.weight, item.constraint);

        palettes.push(LoadedPalette {
            palette: item.palette.clone(),
            order_id: item.order_id.clone(),
            destination: item.destination.clone(),
            position: Position3D { x: cuboid.x, y: cuboid.y, z: cuboid.z, rotation: candidate.rotation },
            size: cuboid.size,
        });
    }

    let metrics = evaluate_plan(palettes.as_slice(), vehicle.as_ref());

    Ok(LoadingPlan {
        vehicle: vehicle.clone(),
        group: group.clone(),
        palettes,
        metrics,
        estimated_cost: vehicle.transport_cost,
    })
}

/// Compares candidates: higher score wins, ties are resolved by the lexicographically smallest
/// `(x, y, z, rotation)`.
fn is_better_candidate((candidate, score): (&Candidate, Float), (best, best_score): (&Candidate, Float)) -> bool {
    let by_position = || {
        compare_floats(candidate.cuboid.x, best.cuboid.x)
            .then_with(|| compare_floats(candidate.cuboid.y, best.cuboid.y))
            .then_with(|| compare_floats(candidate.cuboid.z, best.cuboid.z))
            .then_with(|| candidate.rotation.cmp(&best.rotation))
    };

    match compare_floats(score, best_score) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => by_position() == Ordering::Less,
    }
}
