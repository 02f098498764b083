#[cfg(test)]
#[path = "../../../tests/unit/construction/packing/scoring_test.rs"]
mod scoring_test;

use super::*;
use crate::solver::LoadingSequence;
use crate::utils::{Float, GEOMETRY_EPSILON, is_close};

const BALANCE_WEIGHT: Float = 0.3;
const WALL_WEIGHT: Float = 0.2;
const STABILITY_WEIGHT: Float = 0.2;
const SEQUENCE_WEIGHT: Float = 0.3;

/// Scores a valid candidate placement, higher is better.
pub fn score_placement(
    space: &LoadingSpace,
    item: &PackingItem,
    cuboid: &Cuboid,
    support: &Support,
    sequence: LoadingSequence,
) -> Float {
    let balance = BALANCE_WEIGHT * get_balance_score(space, cuboid, item.palette.weight);
    let wall = WALL_WEIGHT * get_wall_score(space, cuboid);
    let stability = STABILITY_WEIGHT * get_stability_score(support);

    match sequence {
        LoadingSequence::DeliveryOrder => {
            balance + wall + stability + SEQUENCE_WEIGHT * get_sequence_score(space, cuboid, item.target_depth)
        }
        LoadingSequence::Disabled => (balance + wall + stability) / (1. - SEQUENCE_WEIGHT),
    }
}

/// Returns `1 - deviation / max_deviation` of payload center of gravity after placement.
pub fn get_balance_score(space: &LoadingSpace, cuboid: &Cuboid, weight: Float) -> Float {
    let bounds = space.bounds();
    let (total, (mx, my)) = space.weight_moment();
    let (cx, cy) = cuboid.center_xy();

    let total = total + weight;
    let (gx, gy) = ((mx + weight * cx) / total, (my + weight * cy) / total);

    let (center_x, center_y) = (bounds.length / 2., bounds.width / 2.);
    let deviation = ((gx - center_x).powi(2) + (gy - center_y).powi(2)).sqrt();
    let max_deviation = (center_x.powi(2) + center_y.powi(2)).sqrt();

    (1. - deviation / max_deviation).clamp(0., 1.)
}

/// Returns wall and floor proximity: `0.7 * gap + 0.3 * contact`.
pub fn get_wall_score(space: &LoadingSpace, cuboid: &Cuboid) -> Float {
    let bounds = space.bounds();

    let gap_x = cuboid.x.min(bounds.length - cuboid.x_max()).max(0.);
    let gap_y = cuboid.y.min(bounds.width - cuboid.y_max()).max(0.);
    let gap = 1. - (gap_x + gap_y + cuboid.z) / (bounds.length + bounds.width + bounds.height);

    0.7 * gap.clamp(0., 1.) + 0.3 * get_contact_fraction(space, cuboid)
}

/// Returns a fraction of five faces (four sides and bottom) touching a wall, the floor or a palette.
pub fn get_contact_fraction(space: &LoadingSpace, cuboid: &Cuboid) -> Float {
    let bounds = space.bounds();
    let items = space.items();

    let touches = |is_wall: bool, is_touching: &dyn Fn(&Cuboid) -> bool| {
        is_wall || items.iter().any(|placed| is_touching(&placed.cuboid))
    };

    let shares_yz = |other: &Cuboid| {
        overlap_length(cuboid.y, cuboid.y_max(), other.y, other.y_max()) > GEOMETRY_EPSILON
            && overlap_length(cuboid.z, cuboid.z_max(), other.z, other.z_max()) > GEOMETRY_EPSILON
    };
    let shares_xz = |other: &Cuboid| {
        overlap_length(cuboid.x, cuboid.x_max(), other.x, other.x_max()) > GEOMETRY_EPSILON
            && overlap_length(cuboid.z, cuboid.z_max(), other.z, other.z_max()) > GEOMETRY_EPSILON
    };

    let faces = [
        touches(is_close(cuboid.x, 0.), &|other| is_close(other.x_max(), cuboid.x) && shares_yz(other)),
        touches(is_close(cuboid.x_max(), bounds.length), &|other| is_close(other.x, cuboid.x_max()) && shares_yz(other)),
        touches(is_close(cuboid.y, 0.), &|other| is_close(other.y_max(), cuboid.y) && shares_xz(other)),
        touches(is_close(cuboid.y_max(), bounds.width), &|other| is_close(other.y, cuboid.y_max()) && shares_xz(other)),
        touches(is_close(cuboid.z, 0.), &|other| cuboid.rests_on(other)),
    ];

    faces.iter().filter(|touching| **touching).count() as Float / faces.len() as Float
}

/// Returns `0.8 * supported fraction + 0.2 * [all corners supported]`.
pub fn get_stability_score(support: &Support) -> Float {
    0.8 * support.fraction + if support.all_corners { 0.2 } else { 0. }
}

/// Returns `1 - |xc / L - t|` where `xc` is a footprint center and `t` is a target depth.
pub fn get_sequence_score(space: &LoadingSpace, cuboid: &Cuboid, target_depth: Float) -> Float {
    let (cx, _) = cuboid.center_xy();

    (1. - (cx / space.bounds().length - target_depth).abs()).clamp(0., 1.)
}
