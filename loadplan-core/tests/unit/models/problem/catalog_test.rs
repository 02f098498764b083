use super::*;
use crate::helpers::models::problem::test_catalog;

#[test]
fn can_use_default_values() {
    let constraint = ProductTypeConstraint::new("dry");

    assert!(!constraint.fragile);
    assert!(constraint.rotatable);
    assert!(constraint.allows_rotation());
    assert!(constraint.incompatible_types.is_empty());
    assert!(!constraint.needs_refrigeration());
    assert_eq!(constraint.max_stack_weight, None);
    assert_eq!(constraint.loading_priority, DEFAULT_LOADING_PRIORITY);
}

#[test]
fn can_reject_duplicated_product_types() {
    let result = ConstraintCatalog::new(vec![ProductTypeConstraint::new("dry"), ProductTypeConstraint::new("dry")]);

    assert_eq!(result.err(), Some(GenericError::from("duplicated product type in catalog: 'dry'")));
}

#[test]
fn can_disallow_rotation_when_vertical_is_required() {
    let catalog = test_catalog();

    assert!(!catalog.get("upright").unwrap().allows_rotation());
    assert!(!catalog.get("fixed").unwrap().allows_rotation());
    assert!(catalog.get("dry").unwrap().allows_rotation());
}

parameterized_test! {can_check_compatibility, (first, second, expected), {
    let catalog = test_catalog();

    assert_eq!(catalog.are_compatible(first, second), expected);
    assert_eq!(catalog.are_compatible(second, first), expected);
}}

can_check_compatibility! {
    case_01_same_type: ("dry", "dry", true),
    case_02_different_types: ("dry", "fragile", true),
    case_03_one_sided_incompatibility: ("food", "chemical", false),
    case_04_temperature_overlap: ("chilled", "dry", true),
    case_05_temperature_disjoint: ("chilled", "frozen", false),
    case_06_unknown_type: ("unknown", "dry", true),
}

#[test]
fn can_treat_incompatibility_as_symmetric() {
    let catalog = test_catalog();

    assert!(catalog.are_incompatible("food", "chemical"));
    assert!(catalog.are_incompatible("chemical", "food"));
    assert!(!catalog.are_incompatible("food", "dry"));
}
