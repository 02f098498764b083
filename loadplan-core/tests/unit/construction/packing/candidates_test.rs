use super::*;
use crate::helpers::models::problem::test_catalog;
use crate::models::problem::ConstraintCatalog;

fn create_space<'a>(catalog: &'a ConstraintCatalog, placed: &[Cuboid]) -> LoadingSpace<'a> {
    let constraint = catalog.get("dry").expect("dry product type");
    let mut space = LoadingSpace::new(Size3D::new(3., 1.7, 1.8), 0.1);
    placed.iter().for_each(|cuboid| space.commit(*cuboid, 200., constraint));

    space
}

fn get_origins(candidates: &[Candidate], rotation: Rotation) -> Vec<(Float, Float, Float)> {
    candidates
        .iter()
        .filter(|candidate| candidate.rotation == rotation)
        .map(|candidate| (candidate.cuboid.x, candidate.cuboid.y, candidate.cuboid.z))
        .collect()
}

#[test]
fn can_generate_grid_candidates_on_empty_floor() {
    let catalog = test_catalog();
    let space = create_space(&catalog, &[]);

    let candidates = generate_candidates(&space, &Size3D::new(1., 1., 1.), false, CandidateStrategy::Grid);

    assert_eq!(candidates.len(), 21 * 8);
    assert!(candidates.iter().all(|candidate| candidate.cuboid.z == 0. && candidate.rotation == Rotation::Deg0));
    assert_eq!(candidates[0].cuboid, Cuboid::new(0., 0., 0., Size3D::new(1., 1., 1.)));
}

#[test]
fn can_generate_rotated_grid_candidates() {
    let catalog = test_catalog();
    let space = create_space(&catalog, &[]);
    let size = Size3D::new(1.2, 0.8, 1.);

    let candidates = generate_candidates(&space, &size, true, CandidateStrategy::Grid);

    let rotated = candidates.iter().filter(|candidate| candidate.rotation == Rotation::Deg90).collect::<Vec<_>>();
    assert!(!rotated.is_empty());
    assert!(rotated.len() < candidates.len());
    assert!(rotated.iter().all(|candidate| candidate.cuboid.size == Size3D::new(0.8, 1.2, 1.)));
    assert!(candidates.iter().all(|candidate| candidate.cuboid.is_within(space.bounds())));
}

#[test]
fn can_skip_palette_larger_than_space() {
    let catalog = test_catalog();
    let space = create_space(&catalog, &[]);

    let candidates = generate_candidates(&space, &Size3D::new(3.5, 0.8, 1.), true, CandidateStrategy::Grid);

    assert!(candidates.is_empty());
}

#[test]
fn can_generate_grid_candidates_on_top_of_placed_palette() {
    let catalog = test_catalog();
    let base = Cuboid::new(0., 0., 0., Size3D::new(1.2, 0.8, 1.));
    let space = create_space(&catalog, &[base]);

    let candidates = generate_candidates(&space, &Size3D::new(1.2, 0.8, 0.5), false, CandidateStrategy::Grid);

    let (floor, top): (Vec<&Candidate>, Vec<&Candidate>) = candidates.iter().partition(|candidate| candidate.cuboid.z == 0.);
    assert!(!top.is_empty());
    assert!(top.iter().all(|candidate| (candidate.cuboid.z - 1.).abs() < 1e-6 && candidate.cuboid.footprints_intersect(&base)));
    assert!(floor.iter().all(|candidate| !(candidate.cuboid.x < 0.05 && candidate.cuboid.y < 0.05)));
}

#[test]
fn can_generate_origin_as_single_extreme_point_of_empty_space() {
    let catalog = test_catalog();
    let space = create_space(&catalog, &[]);

    let candidates = generate_candidates(&space, &Size3D::new(1.2, 0.8, 1.), true, CandidateStrategy::ExtremePoints);

    assert_eq!(get_origins(candidates.as_slice(), Rotation::Deg0), vec![(0., 0., 0.)]);
    assert_eq!(get_origins(candidates.as_slice(), Rotation::Deg90), vec![(0., 0., 0.)]);
}

#[test]
fn can_generate_extreme_points_around_placed_palette() {
    let catalog = test_catalog();
    let space = create_space(&catalog, &[Cuboid::new(0., 0., 0., Size3D::new(1.2, 0.8, 1.))]);

    let candidates = generate_candidates(&space, &Size3D::new(1.2, 0.8, 0.5), true, CandidateStrategy::ExtremePoints);

    assert_eq!(get_origins(candidates.as_slice(), Rotation::Deg0), vec![(1.2, 0., 0.), (0., 0.8, 0.), (0., 0., 1.)]);
    assert_eq!(get_origins(candidates.as_slice(), Rotation::Deg90), vec![(1.2, 0., 0.), (0., 0., 1.)]);
}
