use super::*;

parameterized_test! {can_compare_floats, (left, right, expected), {
    assert_eq!(compare_floats(left, right), expected);
}}

can_compare_floats! {
    case_01_less: (1., 2., Ordering::Less),
    case_02_greater: (2., 1., Ordering::Greater),
    case_03_equal: (1., 1., Ordering::Equal),
    case_04_nan_is_greatest: (Float::NAN, 1., Ordering::Greater),
    case_05_nan_is_greatest: (1., Float::NAN, Ordering::Less),
    case_06_nans_are_equal: (Float::NAN, Float::NAN, Ordering::Equal),
}

#[test]
fn can_sort_with_nans() {
    let mut values = vec![3., Float::NAN, 1., 2.];

    values.sort_by(compare_floats_refs);

    assert_eq!(values[..3], [1., 2., 3.]);
    assert!(values[3].is_nan());
}

parameterized_test! {can_check_geometry_tolerance, (a, b, close, not_greater), {
    assert_eq!(is_close(a, b), close);
    assert_eq!(is_not_greater(a, b), not_greater);
}}

can_check_geometry_tolerance! {
    case_01: (1., 1., true, true),
    case_02: (1. + 1e-9, 1., true, true),
    case_03: (1.1, 1., false, false),
    case_04: (0.9, 1., false, true),
    case_05: (0.1 + 0.2, 0.3, true, true),
}
