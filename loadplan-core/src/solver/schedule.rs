#[cfg(test)]
#[path = "../../tests/unit/solver/schedule_test.rs"]
mod schedule_test;

use crate::models::solution::{DockSlot, LoadingPlan};
use crate::solver::ScheduleConfig;
use crate::utils::{Float, compare_floats};

/// Dispatches plans through loading docks in batches: plans with earlier deadlines are loaded
/// first. Returns `None` when planning start time is not configured.
pub fn create_schedule(plans: &[LoadingPlan], config: &ScheduleConfig) -> Option<Vec<DockSlot>> {
    let planning_start = config.planning_start?;
    let dock_count = config.dock_count.max(1);

    let mut ordered = plans.iter().collect::<Vec<_>>();
    ordered.sort_by(|a, b| {
        let deadline = |plan: &LoadingPlan| plan.group.earliest_deadline().unwrap_or(Float::MAX);

        compare_floats(deadline(a), deadline(b)).then_with(|| a.vehicle_id().cmp(b.vehicle_id()))
    });

    let slots = ordered
        .into_iter()
        .enumerate()
        .map(|(idx, plan)| {
            let batch = idx / dock_count;
            let start = planning_start + batch as Float * config.loading_duration;
            let end = start + config.loading_duration;

            DockSlot {
                vehicle_id: plan.vehicle_id().to_string(),
                dock: idx % dock_count,
                batch,
                start,
                end,
                deadline_at_risk: plan.group.earliest_deadline().is_some_and(|deadline| end > deadline),
            }
        })
        .collect();

    Some(slots)
}
