#[cfg(test)]
#[path = "../../../tests/unit/construction/packing/candidates_test.rs"]
mod candidates_test;

use super::{Cuboid, LoadingSpace};
use crate::models::common::{Rotation, Size3D};
use crate::solver::CandidateStrategy;
use crate::utils::{Float, GEOMETRY_EPSILON};

/// A candidate placement of a palette.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    /// Occupied box.
    pub cuboid: Cuboid,
    /// Applied rotation.
    pub rotation: Rotation,
}

/// Generates candidate placements of the palette for each allowed orientation. Candidates which
/// leave vehicle bounds or start inside an occupied grid cell are not generated.
pub fn generate_candidates(
    space: &LoadingSpace,
    size: &Size3D,
    allows_rotation: bool,
    strategy: CandidateStrategy,
) -> Vec<Candidate> {
    let rotations: &[Rotation] = if allows_rotation { &[Rotation::Deg0, Rotation::Deg90] } else { &[Rotation::Deg0] };

    rotations
        .iter()
        .flat_map(|&rotation| {
            let size = rotation.apply(size);
            let origins = match strategy {
                CandidateStrategy::Grid => grid_origins(space, &size),
                CandidateStrategy::ExtremePoints => extreme_point_origins(space),
            };

            origins.into_iter().map(move |(x, y, z)| Candidate { cuboid: Cuboid::new(x, y, z, size), rotation })
        })
        .filter(|candidate| candidate.cuboid.is_within(space.bounds()) && !space.grid().is_blocked(&candidate.cuboid))
        .collect()
}

/// Returns grid aligned lower corners at every support level. Above the floor only corners which
/// let the footprint intersect a palette with top at that level are returned.
fn grid_origins(space: &LoadingSpace, size: &Size3D) -> Vec<(Float, Float, Float)> {
    let resolution = space.grid().resolution();
    let bounds = space.bounds();

    let steps = |room: Float| if room < -GEOMETRY_EPSILON { None } else { Some((room / resolution + GEOMETRY_EPSILON).floor() as usize) };
    let (Some(max_i), Some(max_j)) = (steps(bounds.length - size.length), steps(bounds.width - size.width)) else {
        return vec![];
    };

    space
        .support_levels()
        .into_iter()
        .flat_map(|z| {
            let supports = space
                .items()
                .iter()
                .filter(|item| (item.cuboid.z_max() - z).abs() < GEOMETRY_EPSILON)
                .map(|item| item.cuboid)
                .collect::<Vec<_>>();

            (0..=max_i).flat_map(move |i| (0..=max_j).map(move |j| (i, j))).filter_map(move |(i, j)| {
                let (x, y) = (i as Float * resolution, j as Float * resolution);
                let footprint = Cuboid::new(x, y, z, *size);
                let is_supported = z < GEOMETRY_EPSILON || supports.iter().any(|support| footprint.footprints_intersect(support));

                is_supported.then_some((x, y, z))
            })
        })
        .collect()
}

/// Returns the origin together with three projections of the far corners of every placed palette.
fn extreme_point_origins(space: &LoadingSpace) -> Vec<(Float, Float, Float)> {
    let mut points = vec![(0., 0., 0.)];

    space.items().iter().for_each(|item| {
        let cuboid = &item.cuboid;
        points.push((cuboid.x_max(), cuboid.y, cuboid.z));
        points.push((cuboid.x, cuboid.y_max(), cuboid.z));
        points.push((cuboid.x, cuboid.y, cuboid.z_max()));
    });

    let mut unique: Vec<(Float, Float, Float)> = Vec::with_capacity(points.len());
    points.into_iter().for_each(|point| {
        let is_known = unique.iter().any(|known| {
            (known.0 - point.0).abs() < GEOMETRY_EPSILON
                && (known.1 - point.1).abs() < GEOMETRY_EPSILON
                && (known.2 - point.2).abs() < GEOMETRY_EPSILON
        });

        if !is_known {
            unique.push(point);
        }
    });

    unique
}
