use super::*;
use crate::helpers::models::problem::*;
use crate::helpers::models::solution::test_group;
use crate::models::problem::VehicleCategory;
use crate::models::solution::PlanMetrics;
use std::sync::Arc;

fn create_plan(vehicle_id: &str, deadline: Float) -> LoadingPlan {
    LoadingPlan {
        vehicle: Arc::new(test_vehicle(vehicle_id, VehicleCategory::Van)),
        group: test_group("g1", vec![OrderBuilder::default().window(0., deadline).build()]),
        palettes: vec![],
        metrics: PlanMetrics { weight_distribution_score: 1., space_utilization: 0. },
        estimated_cost: 0.,
    }
}

fn create_config(dock_count: usize) -> ScheduleConfig {
    ScheduleConfig { planning_start: Some(1000.), dock_count, loading_duration: 600. }
}

fn get_slots(slots: &[DockSlot]) -> Vec<(&str, usize, usize, Float, bool)> {
    slots.iter().map(|slot| (slot.vehicle_id.as_str(), slot.dock, slot.batch, slot.start, slot.deadline_at_risk)).collect()
}

#[test]
fn can_skip_schedule_without_planning_start() {
    let plans = vec![create_plan("v1", 5000.)];

    assert_eq!(create_schedule(plans.as_slice(), &ScheduleConfig::default()), None);
}

#[test]
fn can_create_empty_schedule() {
    assert_eq!(create_schedule(&[], &create_config(2)), Some(vec![]));
}

#[test]
fn can_schedule_plans_by_earliest_deadline() {
    let plans = vec![create_plan("v1", 5000.), create_plan("v2", 2000.), create_plan("v3", 3000.)];

    let slots = create_schedule(plans.as_slice(), &create_config(2)).expect("schedule");

    assert_eq!(
        get_slots(slots.as_slice()),
        vec![("v2", 0, 0, 1000., false), ("v3", 1, 0, 1000., false), ("v1", 0, 1, 1600., false)]
    );
    assert_eq!(slots[2].end, 2200.);
}

#[test]
fn can_mark_deadline_at_risk() {
    let plans = vec![create_plan("v1", 1500.), create_plan("v2", 1500.)];

    let slots = create_schedule(plans.as_slice(), &create_config(1)).expect("schedule");

    assert_eq!(get_slots(slots.as_slice()), vec![("v1", 0, 0, 1000., true), ("v2", 0, 1, 1600., true)]);
}

#[test]
fn can_break_deadline_ties_by_vehicle_id() {
    let plans = vec![create_plan("v2", 9000.), create_plan("v1", 9000.)];

    let slots = create_schedule(plans.as_slice(), &create_config(1)).expect("schedule");

    assert_eq!(get_slots(slots.as_slice()), vec![("v1", 0, 0, 1000., false), ("v2", 0, 1, 1600., false)]);
}

#[test]
fn can_use_single_dock_when_zero_docks_configured() {
    let plans = vec![create_plan("v1", 9000.), create_plan("v2", 9000.)];

    let slots = create_schedule(plans.as_slice(), &create_config(0)).expect("schedule");

    assert!(slots.iter().all(|slot| slot.dock == 0));
    assert_eq!(slots[1].batch, 1);
}
