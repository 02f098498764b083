use super::*;
use crate::helpers::models::problem::*;
use crate::models::problem::{Order, VehicleCategory};
use std::sync::Arc;

fn get_requirements(orders: Vec<Order>) -> GroupRequirements {
    let orders = orders.into_iter().map(Arc::new).collect::<Vec<_>>();
    GroupRequirements::new(orders.as_slice(), &test_catalog())
}

parameterized_test! {can_score_utilization, (ratio, expected), {
    assert_float_eq!(utilization_score(ratio), expected);
}}

can_score_utilization! {
    case_01_empty: (0., 0.),
    case_02_half_of_target: (0.375, 0.5),
    case_03_lower_target: (0.75, 1.),
    case_04_inside_target: (0.8, 1.),
    case_05_upper_target: (0.9, 1.),
    case_06_almost_full: (0.95, 0.5),
    case_07_full: (1., 0.),
    case_08_overfilled: (1.1, 0.),
}

parameterized_test! {can_apply_hard_filters, (order, vehicle, expected), {
    let requirements = get_requirements(vec![order]);

    assert_eq!(check_vehicle(&requirements, &vehicle), expected);
}}

can_apply_hard_filters! {
    case_01_ok: (order_with_type("o1", "dry"), test_vehicle("v1", VehicleCategory::Van), Ok(())),
    case_02_unavailable: (
        order_with_type("o1", "dry"),
        Vehicle { available: false, ..test_vehicle("v1", VehicleCategory::Van) },
        Err(Rejection::Unavailable)
    ),
    case_03_volume: (
        OrderBuilder::default().palettes(5, "dry", 10.).build(),
        test_vehicle("v1", VehicleCategory::SmallVan),
        Err(Rejection::Volume)
    ),
    case_04_payload: (
        OrderBuilder::default().palettes(1, "dry", 900.).build(),
        test_vehicle("v1", VehicleCategory::SmallVan),
        Err(Rejection::Payload)
    ),
    case_05_refrigeration: (order_with_type("o1", "chilled"), test_vehicle("v1", VehicleCategory::Van), Err(Rejection::Refrigeration)),
    case_06_temperature: (
        order_with_type("o1", "chilled"),
        test_reefer("v1", VehicleCategory::VanReefer, -20.),
        Err(Rejection::Temperature)
    ),
    case_07_reefer_ok: (order_with_type("o1", "chilled"), test_reefer("v1", VehicleCategory::VanReefer, 2.), Ok(())),
    case_08_reefer_without_setpoint: (
        order_with_type("o1", "chilled"),
        test_vehicle("v1", VehicleCategory::VanReefer),
        Err(Rejection::Temperature)
    ),
    case_09_slots: (
        OrderBuilder::default().palettes(3, "dry", 100.).build(),
        test_vehicle("v1", VehicleCategory::SmallVan),
        Err(Rejection::PalletSlots)
    ),
}

#[test]
fn can_score_vehicle_as_mean_of_utilizations() {
    let requirements = get_requirements(vec![OrderBuilder::default().palettes(10, "dry", 300.).build()]);

    let van = score_vehicle(&requirements, &test_vehicle("v1", VehicleCategory::Van)).expect("van should fit");
    let rigid = score_vehicle(&requirements, &test_vehicle("v2", VehicleCategory::RigidSmall)).expect("rigid should fit");

    assert_float_eq!(van, (9.6 / 20. / 0.75 + 1. + 1.) / 3.);
    assert!(van > rigid);
}

#[test]
fn can_allow_dry_goods_in_refrigerated_vehicle() {
    let requirements = get_requirements(vec![order_with_type("o1", "dry")]);

    assert_eq!(check_vehicle(&requirements, &test_reefer("v1", VehicleCategory::VanReefer, -20.)), Ok(()));
}
