use super::*;
use crate::helpers::models::problem::*;
use crate::models::common::{Destination, Size3D};
use crate::models::problem::ConstraintCatalog;
use std::sync::Arc;

fn create_space<'a>(catalog: &'a ConstraintCatalog, placed: &[(Cuboid, Float)]) -> LoadingSpace<'a> {
    let constraint = catalog.get("dry").expect("dry product type");
    let mut space = LoadingSpace::new(Size3D::new(6., 2.3, 2.6), 0.1);
    placed.iter().for_each(|(cuboid, weight)| space.commit(*cuboid, *weight, constraint));

    space
}

fn create_item(catalog: &ConstraintCatalog, target_depth: Float) -> PackingItem<'_> {
    PackingItem {
        palette: Arc::new(PaletteBuilder::default().build()),
        order_id: "o1".to_string(),
        destination: Destination::Coordinate(DEFAULT_DESTINATION),
        constraint: catalog.get("dry").expect("dry product type"),
        target_depth,
        priority: 0.,
    }
}

fn palette_at(x: Float, y: Float, z: Float) -> Cuboid {
    Cuboid::new(x, y, z, Size3D::new(1.2, 0.8, 1.))
}

#[test]
fn can_prefer_balanced_placement() {
    let catalog = test_catalog();
    let space = create_space(&catalog, &[]);

    let centered = get_balance_score(&space, &palette_at(2.4, 0.75, 0.), 200.);
    let corner = get_balance_score(&space, &palette_at(0., 0., 0.), 200.);

    assert_float_eq!(centered, 1.);
    assert!(corner < centered);
}

#[test]
fn can_take_placed_weight_into_account_for_balance() {
    let catalog = test_catalog();
    let space = create_space(&catalog, &[(palette_at(0., 0.75, 0.), 200.)]);

    let opposite = get_balance_score(&space, &palette_at(4.8, 0.75, 0.), 200.);
    let nearby = get_balance_score(&space, &palette_at(1.2, 0.75, 0.), 200.);

    assert_float_eq!(opposite, 1.);
    assert!(nearby < opposite);
}

#[test]
fn can_calculate_wall_score_in_corner() {
    let catalog = test_catalog();
    let space = create_space(&catalog, &[]);

    let score = get_wall_score(&space, &palette_at(0., 0., 0.));

    assert_float_eq!(score, 0.7 + 0.3 * 0.6);
}

parameterized_test! {can_calculate_contact_fraction, (placed, candidate, expected), {
    can_calculate_contact_fraction_impl(placed, candidate, expected);
}}

can_calculate_contact_fraction! {
    case01_corner: (vec![], palette_at(0., 0., 0.), 3. / 5.),
    case02_middle_of_floor: (vec![], palette_at(2., 0.5, 0.), 1. / 5.),
    case03_next_to_palette: (vec![palette_at(0., 0., 0.)], palette_at(1.2, 0., 0.), 3. / 5.),
    case04_on_top: (vec![palette_at(0., 0., 0.)], palette_at(0., 0., 1.), 3. / 5.),
    case05_full_width: (vec![], Cuboid::new(0., 0., 0., Size3D::new(6., 2.3, 1.)), 1.),
}

fn can_calculate_contact_fraction_impl(placed: Vec<Cuboid>, candidate: Cuboid, expected: Float) {
    let catalog = test_catalog();
    let placed = placed.into_iter().map(|cuboid| (cuboid, 300.)).collect::<Vec<_>>();
    let space = create_space(&catalog, placed.as_slice());

    assert_float_eq!(get_contact_fraction(&space, &candidate), expected);
}

parameterized_test! {can_calculate_stability_score, (fraction, all_corners, expected), {
    assert_float_eq!(get_stability_score(&Support { fraction, all_corners }), expected);
}}

can_calculate_stability_score! {
    case01_full: (1., true, 1.),
    case02_partial: (0.5, false, 0.4),
    case03_partial_with_corners: (0.75, true, 0.8),
}

parameterized_test! {can_calculate_sequence_score, (x, target_depth, expected), {
    can_calculate_sequence_score_impl(x, target_depth, expected);
}}

can_calculate_sequence_score! {
    case01_cab_wall_for_rear_target: (0., 1., 0.1),
    case02_cab_wall_for_cab_target: (0., 0., 0.9),
    case03_rear_door_for_rear_target: (4.8, 1., 0.9),
    case04_middle: (2.4, 0.5, 1.),
}

fn can_calculate_sequence_score_impl(x: Float, target_depth: Float, expected: Float) {
    let catalog = test_catalog();
    let space = create_space(&catalog, &[]);

    assert_float_eq!(get_sequence_score(&space, &palette_at(x, 0., 0.), target_depth), expected);
}

#[test]
fn can_rescale_score_without_loading_sequence() {
    let catalog = test_catalog();
    let space = create_space(&catalog, &[]);
    let item = create_item(&catalog, 1.);
    let cuboid = palette_at(0., 0., 0.);
    let support = Support { fraction: 1., all_corners: true };

    let with_sequence = score_placement(&space, &item, &cuboid, &support, LoadingSequence::DeliveryOrder);
    let without_sequence = score_placement(&space, &item, &cuboid, &support, LoadingSequence::Disabled);

    let balance = 0.3 * get_balance_score(&space, &cuboid, 200.);
    let wall = 0.2 * get_wall_score(&space, &cuboid);
    let stability = 0.2;
    assert_float_eq!(with_sequence, balance + wall + stability + 0.3 * 0.1);
    assert_float_eq!(without_sequence, (balance + wall + stability) / 0.7);
}
