use crate::format::problem::{Destination, Location, Order, Problem};
use crate::helpers::*;

fn create_address_order(id: &str, address: &str) -> Order {
    Order { destination: Destination::Address(address.to_string()), ..create_test_order(id, create_test_palettes(id, 1, "dry")) }
}

#[test]
fn can_resolve_address_from_locations() {
    let problem = Problem {
        locations: Some(vec![Location { address: "Depot A".to_string(), lat: 52.52, lng: 13.405 }]),
        ..create_test_problem(vec![create_address_order("o1", "Depot A"), create_test_order("o2", create_test_palettes("o2", 1, "dry"))], vec![
            create_test_vehicle("v1", "van"),
        ])
    };

    let solution = solve_and_check(problem);

    assert_eq!(get_plan_orders(&solution), vec![("v1", vec!["o1", "o2"])]);
}

#[test]
fn can_resolve_coordinate_notation() {
    let problem = create_test_problem(vec![create_address_order("o1", "52.52,13.405")], vec![create_test_vehicle("v1", "van")]);

    let solution = solve_and_check(problem);

    assert_eq!(get_plan_orders(&solution), vec![("v1", vec!["o1"])]);
}

#[test]
fn can_report_unresolvable_address() {
    let problem = create_test_problem(
        vec![create_address_order("o1", "Nowhere"), create_test_order("o2", create_test_palettes("o2", 1, "dry"))],
        vec![create_test_vehicle("v1", "van")],
    );

    let solution = solve_and_check(problem);

    assert_eq!(get_plan_orders(&solution), vec![("v1", vec!["o2"])]);
    assert_eq!(get_failure_codes(&solution), vec![("UNRESOLVABLE_LOCATION", "o1")]);
    assert_eq!(solution.failures[0].kind, crate::format::solution::FailureKind::Order);
}
