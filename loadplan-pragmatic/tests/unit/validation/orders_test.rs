use super::*;
use crate::helpers::*;

#[test]
fn can_detect_duplicated_orders() {
    let problem = create_test_problem(
        vec![create_test_order("o1", vec![]), create_test_order("o2", vec![]), create_test_order("o1", vec![])],
        vec![],
    );

    let error = check_e1000_no_orders_with_duplicate_ids(&ValidationContext::new(&problem)).expect_err("no error");

    assert_eq!(error.code, "E1000");
    assert_eq!(error.action, "remove duplicated order ids: o1");
}

#[test]
fn can_detect_duplicated_palettes_across_orders() {
    let problem = create_test_problem(
        vec![
            create_test_order("o1", vec![create_test_palette("p1", "dry")]),
            create_test_order("o2", vec![create_test_palette("p1", "dry"), create_test_palette("p2", "dry")]),
        ],
        vec![],
    );

    let error = check_e1001_no_palettes_with_duplicate_ids(&ValidationContext::new(&problem)).expect_err("no error");

    assert_eq!(error.code, "E1001");
    assert_eq!(error.action, "remove duplicated palette ids: p1");
}

parameterized_test! {can_check_delivery_window, (earliest, latest, is_valid), {
    let order = Order {
        earliest: earliest.map(|value: &str| value.to_string()),
        latest: latest.map(|value: &str| value.to_string()),
        ..create_test_order("o1", vec![])
    };
    let problem = create_test_problem(vec![order], vec![]);

    let result = check_e1002_delivery_window_is_correct(&ValidationContext::new(&problem));

    assert_eq!(result.is_ok(), is_valid);
}}

can_check_delivery_window! {
    case01_no_window: (None, None, true),
    case02_only_latest: (None, Some("2024-05-01T18:00:00Z"), true),
    case03_proper_window: (Some("2024-05-01T08:00:00Z"), Some("2024-05-01T18:00:00Z"), true),
    case04_same_time: (Some("2024-05-01T08:00:00Z"), Some("2024-05-01T08:00:00Z"), true),
    case05_inverted: (Some("2024-05-01T18:00:00Z"), Some("2024-05-01T08:00:00Z"), false),
    case06_unparseable: (Some("08:00"), None, false),
}

#[test]
fn can_combine_order_errors() {
    let order = Order { earliest: Some("not a time".to_string()), ..create_test_order("o1", vec![]) };
    let problem = create_test_problem(vec![order.clone(), order], vec![]);

    let errors = validate_orders(&ValidationContext::new(&problem)).expect_err("no errors");

    assert_eq!(errors.iter().map(|error| error.code.as_str()).collect::<Vec<_>>(), vec!["E1000", "E1002"]);
}
