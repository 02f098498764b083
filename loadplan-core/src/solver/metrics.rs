#[cfg(test)]
#[path = "../../tests/unit/solver/metrics_test.rs"]
mod metrics_test;

use crate::models::problem::Vehicle;
use crate::models::solution::{LoadedPalette, PlanMetrics};
use crate::utils::Float;

/// Evaluates a completed placement: weight distribution balance and space utilization.
pub fn evaluate_plan(palettes: &[LoadedPalette], vehicle: &Vehicle) -> PlanMetrics {
    let spec = vehicle.spec();

    PlanMetrics {
        weight_distribution_score: get_weight_distribution_score(palettes, spec.internal.length, spec.internal.width),
        space_utilization: palettes.iter().map(|loaded| loaded.size.volume()).sum::<Float>() / spec.usable_volume,
    }
}

/// Returns `1 - deviation / max_deviation` where deviation is a horizontal distance between
/// weighted centroid of palette footprint centers and vehicle center.
fn get_weight_distribution_score(palettes: &[LoadedPalette], length: Float, width: Float) -> Float {
    let total = palettes.iter().map(|loaded| loaded.palette.weight).sum::<Float>();
    if total <= 0. {
        return 1.;
    }

    let (mx, my) = palettes.iter().fold((0., 0.), |(mx, my), loaded| {
        let (cx, cy) = loaded.center();
        (mx + loaded.palette.weight * cx, my + loaded.palette.weight * cy)
    });

    let (center_x, center_y) = (length / 2., width / 2.);
    let deviation = ((mx / total - center_x).powi(2) + (my / total - center_y).powi(2)).sqrt();
    let max_deviation = (center_x.powi(2) + center_y.powi(2)).sqrt();

    1. - deviation / max_deviation
}
