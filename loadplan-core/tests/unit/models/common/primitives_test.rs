use super::*;

#[test]
fn can_compute_size_properties() {
    let size = Size3D::new(1.2, 0.8, 1.5);

    assert_float_eq!(size.volume(), 1.44);
    assert_float_eq!(size.base_area(), 0.96);
    assert_eq!(size.rotated(), Size3D::new(0.8, 1.2, 1.5));
    assert!(size.is_positive());
    assert!(!Size3D::new(1., 0., 1.).is_positive());
}

parameterized_test! {can_check_temperature_overlap, (first, second, expected), {
    let first = TemperatureBand::new(first.0, first.1);
    let second = TemperatureBand::new(second.0, second.1);

    assert_eq!(first.overlaps(&second), expected);
    assert_eq!(second.overlaps(&first), expected);
}}

can_check_temperature_overlap! {
    case_01_unconstrained: ((None, None), (None, None), true),
    case_02_one_unconstrained: ((Some(0.), Some(4.)), (None, None), true),
    case_03_overlap: ((Some(0.), Some(4.)), (Some(2.), Some(8.)), true),
    case_04_touching: ((Some(0.), Some(4.)), (Some(4.), Some(8.)), true),
    case_05_disjoint: ((Some(0.), Some(4.)), (Some(-25.), Some(-18.)), false),
    case_06_min_only: ((Some(5.), None), (None, Some(4.)), false),
    case_07_min_only_overlap: ((Some(2.), None), (None, Some(4.)), true),
}

#[test]
fn can_intersect_temperature_bands() {
    let band = TemperatureBand::new(Some(0.), Some(8.)).intersect(&TemperatureBand::new(Some(2.), None));

    assert_eq!(band, TemperatureBand::new(Some(2.), Some(8.)));
    assert!(band.contains(2.));
    assert!(band.contains(8.));
    assert!(!band.contains(1.9));
    assert!(!band.contains(8.1));
}

parameterized_test! {can_check_temperature_consistency, (min, max, expected), {
    assert_eq!(TemperatureBand::new(min, max).is_consistent(), expected);
}}

can_check_temperature_consistency! {
    case_01: (Some(0.), Some(4.), true),
    case_02: (Some(4.), Some(0.), false),
    case_03: (Some(4.), None, true),
    case_04: (None, None, true),
}

#[test]
fn can_check_time_window() {
    assert!(TimeWindow::new(0., 10.).is_valid());
    assert!(TimeWindow::new(10., 10.).is_valid());
    assert!(!TimeWindow::new(10., 0.).is_valid());
}
