use super::*;

parameterized_test! {can_parse_coordinate, (value, expected), {
    assert_eq!(parse_coordinate(value), expected);
}}

can_parse_coordinate! {
    case_01_valid: ("52.52,13.405", Some(Coordinate::new(52.52, 13.405))),
    case_02_with_spaces: (" 48.85 , 2.35 ", Some(Coordinate::new(48.85, 2.35))),
    case_03_negative: ("-33.86,151.2", Some(Coordinate::new(-33.86, 151.2))),
    case_04_out_of_range: ("91.0,13.4", None),
    case_05_not_a_number: ("Berlin, Germany", None),
    case_06_no_separator: ("52.52", None),
}

#[test]
fn can_compute_haversine_distance() {
    let berlin = Coordinate::new(52.52, 13.405);
    let paris = Coordinate::new(48.8566, 2.3522);

    let distance = haversine_distance(berlin, paris);

    assert!((distance - 878.).abs() < 5., "unexpected distance: {distance}");
    assert_eq!(haversine_distance(berlin, berlin), 0.);
    assert!((haversine_distance(paris, berlin) - distance).abs() < 1e-9);
}

#[test]
fn can_resolve_with_great_circle_oracle() {
    let oracle = GreatCircleOracle::new(vec![("depot".to_string(), Coordinate::new(1., 2.))]);

    assert_eq!(oracle.resolve("depot"), Ok(Coordinate::new(1., 2.)));
    assert_eq!(oracle.resolve("3,4"), Ok(Coordinate::new(3., 4.)));
    assert_eq!(oracle.resolve("nowhere"), Err(OracleError::NotFound));
    assert!(oracle.distance(Coordinate::new(0., 0.), Coordinate::new(0., 1.)).is_ok_and(|d| (d - 111.19).abs() < 0.1));
}
