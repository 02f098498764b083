use super::*;
use crate::helpers::models::problem::*;
use crate::helpers::models::solution::test_group;
use crate::helpers::solver::create_test_context;
use crate::models::problem::VehicleCategory;

fn get_assigned(assignments: &[Assignment]) -> Vec<(String, String)> {
    assignments.iter().map(|assignment| (assignment.group.id.clone(), assignment.vehicle.id.clone())).collect()
}

fn pair(group_id: &str, vehicle_id: &str) -> (String, String) {
    (group_id.to_string(), vehicle_id.to_string())
}

#[test]
fn can_assign_best_scoring_vehicle() {
    let context = create_test_context();
    let groups = vec![test_group("g1", vec![OrderBuilder::default().palettes(10, "dry", 300.).build()])];
    let vehicles = shared_vehicles(vec![
        test_vehicle("small", VehicleCategory::SmallVan),
        test_vehicle("rigid", VehicleCategory::RigidSmall),
        test_vehicle("van", VehicleCategory::Van),
    ]);

    let assignments = assign_groups(groups, vehicles.as_slice(), &context);

    assert_eq!(get_assigned(&assignments), vec![pair("g1", "van")]);
    assert!(context.take_failures().is_empty());
}

#[test]
fn can_process_groups_in_descending_volume_order() {
    let context = create_test_context();
    let groups = vec![
        test_group("small", vec![OrderBuilder::default().id("o1").palettes(1, "dry", 100.).build()]),
        test_group("big", vec![OrderBuilder::default().id("o2").palettes(10, "dry", 300.).build()]),
    ];
    let vehicles = shared_vehicles(vec![test_vehicle("van", VehicleCategory::Van)]);

    let assignments = assign_groups(groups, vehicles.as_slice(), &context);

    assert_eq!(get_assigned(&assignments), vec![pair("big", "van")]);
    let failures = context.take_failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].origin_id(), "small");
    assert_eq!(failures[0].reason(), "no unused vehicle left");
}

#[test]
fn can_report_refrigerated_group_without_refrigerated_vehicle() {
    let context = create_test_context();
    let groups = vec![test_group("g1", vec![order_with_type("o1", "chilled")])];
    let vehicles = shared_vehicles(vec![test_vehicle("van", VehicleCategory::Van)]);

    let assignments = assign_groups(groups, vehicles.as_slice(), &context);

    assert!(assignments.is_empty());
    let failures = context.take_failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].code(), "NO_SUITABLE_VEHICLE");
    assert_eq!(failures[0].order_ids(), vec!["o1".to_string()]);
    assert!(failures[0].reason().contains("refrigeration is required"));
}

parameterized_test! {can_break_ties, (costs, expected), {
    let context = create_test_context();
    let groups = vec![test_group("g1", vec![OrderBuilder::default().palettes(10, "dry", 300.).build()])];
    let vehicles = shared_vehicles(vec![
        Vehicle { transport_cost: costs.0, ..test_vehicle("v1", VehicleCategory::Van) },
        Vehicle { transport_cost: costs.1, ..test_vehicle("v2", VehicleCategory::Van) },
    ]);

    let assignments = assign_groups(groups, vehicles.as_slice(), &context);

    assert_eq!(get_assigned(&assignments), vec![pair("g1", expected)]);
}}

can_break_ties! {
    case_01_cheaper_second: ((200., 100.), "v2"),
    case_02_cheaper_first: ((100., 200.), "v1"),
    case_03_same_cost: ((100., 100.), "v1"),
}

#[test]
fn can_split_group_across_smaller_vehicles() {
    let context = create_test_context();
    let orders = (1..=3)
        .map(|idx| OrderBuilder::default().id(&format!("o{idx}")).palettes(4, "dry", 375.).build())
        .collect::<Vec<_>>();
    let vehicles = shared_vehicles(vec![test_vehicle("v1", VehicleCategory::Van), test_vehicle("v2", VehicleCategory::Van)]);

    let assignments = assign_groups(vec![test_group("g1", orders)], vehicles.as_slice(), &context);

    assert_eq!(get_assigned(&assignments), vec![pair("g1.1", "v1"), pair("g1.2", "v2")]);
    assert_eq!(assignments[0].group.order_ids(), vec!["o1".to_string(), "o2".to_string()]);
    assert_eq!(assignments[1].group.order_ids(), vec!["o3".to_string()]);
    assert!(context.take_failures().is_empty());
}

#[test]
fn can_assign_split_parts_to_vehicles_they_were_sized_for() {
    let context = create_test_context();
    let orders = vec![
        OrderBuilder::default().id("o1").palettes(14, "dry", 100.).build(),
        OrderBuilder::default().id("o2").palettes(14, "dry", 100.).build(),
        OrderBuilder::default().id("o3").palettes(24, "dry", 100.).build(),
    ];
    let vehicles = shared_vehicles(vec![
        Vehicle { transport_cost: 50., ..test_vehicle("short", VehicleCategory::SemiShort) },
        test_vehicle("mega", VehicleCategory::Mega),
    ]);

    let assignments = assign_groups(vec![test_group("g1", orders)], vehicles.as_slice(), &context);

    assert_eq!(get_assigned(&assignments), vec![pair("g1.1", "short"), pair("g1.2", "mega")]);
    assert_eq!(assignments[0].group.order_ids(), vec!["o3".to_string()]);
    assert_eq!(assignments[1].group.order_ids(), vec!["o1".to_string(), "o2".to_string()]);
    assert!(context.take_failures().is_empty());
}
