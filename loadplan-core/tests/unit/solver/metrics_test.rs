use super::*;
use crate::helpers::models::problem::*;
use crate::helpers::models::solution::test_loaded_palette;
use crate::models::problem::VehicleCategory;

#[test]
fn can_evaluate_empty_plan() {
    let metrics = evaluate_plan(&[], &test_vehicle("v1", VehicleCategory::Van));

    assert_eq!(metrics, PlanMetrics { weight_distribution_score: 1., space_utilization: 0. });
}

#[test]
fn can_evaluate_centered_palette() {
    let palettes = vec![test_loaded_palette(test_palette("p1"), 2.4, 0.75, 0.)];

    let metrics = evaluate_plan(palettes.as_slice(), &test_vehicle("v1", VehicleCategory::Van));

    assert_float_eq!(metrics.weight_distribution_score, 1.);
    assert_float_eq!(metrics.space_utilization, 0.96 / 20.);
}

#[test]
fn can_evaluate_palette_in_corner() {
    let palettes = vec![test_loaded_palette(test_palette("p1"), 0., 0., 0.)];

    let metrics = evaluate_plan(palettes.as_slice(), &test_vehicle("v1", VehicleCategory::Van));

    let max_deviation = (3_f64.powi(2) + 1.15_f64.powi(2)).sqrt();
    let deviation = (2.4_f64.powi(2) + 0.75_f64.powi(2)).sqrt();
    assert_float_eq!(metrics.weight_distribution_score, 1. - deviation / max_deviation);
}

#[test]
fn can_weight_palette_positions() {
    let heavy = PaletteBuilder::default().id("heavy").weight(300.).build();
    let light = PaletteBuilder::default().id("light").weight(100.).build();
    let palettes = vec![test_loaded_palette(heavy, 0., 0.75, 0.), test_loaded_palette(light, 4.8, 0.75, 0.)];

    let metrics = evaluate_plan(palettes.as_slice(), &test_vehicle("v1", VehicleCategory::Van));

    // weighted center is at 0.6 * 0.75 + 5.4 * 0.25 = 1.8
    let max_deviation = (3_f64.powi(2) + 1.15_f64.powi(2)).sqrt();
    assert_float_eq!(metrics.weight_distribution_score, 1. - 1.2 / max_deviation);
    assert_float_eq!(metrics.space_utilization, 2. * 0.96 / 20.);
}

#[test]
fn can_use_usable_volume_of_refrigerated_vehicle() {
    let palettes = vec![test_loaded_palette(test_palette("p1"), 0., 0., 0.)];

    let metrics = evaluate_plan(palettes.as_slice(), &test_reefer("v1", VehicleCategory::VanReefer, 2.));

    assert_float_eq!(metrics.space_utilization, 0.96 / 18.);
}
