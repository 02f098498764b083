#[cfg(test)]
#[path = "../../../tests/unit/format/solution/writer_test.rs"]
mod writer_test;

use super::*;
use crate::format_time;
use loadplan_core::models::solution::{DockSlot as CoreDockSlot, LoadingPlan, PlanningError};
use loadplan_core::solver::PlanningResult;
use std::collections::HashSet;
use std::time::Duration;

/// Creates solution from planning result.
pub fn create_solution(result: &PlanningResult, duration: Duration) -> Solution {
    let plans = result.plans.iter().map(create_plan).collect::<Vec<_>>();
    let failures = result.failures.iter().map(create_failure).collect::<Vec<_>>();
    let schedule = result.schedule.as_ref().map(|slots| slots.iter().map(create_dock_slot).collect());

    let statistic = Statistic {
        plans: plans.len(),
        failures: failures.len(),
        vehicles: plans.iter().map(|plan| plan.vehicle_id.as_str()).collect::<HashSet<_>>().len(),
        palettes: plans.iter().map(|plan| plan.palettes.len()).sum(),
        cost: result.plans.iter().map(|plan| plan.estimated_cost).sum(),
        duration_ms: duration.as_millis() as u64,
    };

    Solution { statistic, plans, failures, schedule }
}

fn create_plan(plan: &LoadingPlan) -> Plan {
    Plan {
        vehicle_id: plan.vehicle_id().to_string(),
        category: plan.vehicle.category.to_string(),
        group_id: plan.group.id.clone(),
        orders: plan.group.order_ids(),
        palettes: plan
            .palettes
            .iter()
            .map(|loaded| LoadedPalette {
                id: loaded.palette.id.clone(),
                order_id: loaded.order_id.clone(),
                x: loaded.position.x,
                y: loaded.position.y,
                z: loaded.position.z,
                rotation: loaded.position.rotation.degrees(),
                length: loaded.size.length,
                width: loaded.size.width,
                height: loaded.size.height,
            })
            .collect(),
        metrics: Metrics {
            weight_distribution: plan.metrics.weight_distribution_score,
            space_utilization: plan.metrics.space_utilization,
            total_weight: plan.total_weight(),
            total_volume: plan.total_volume(),
        },
        estimated_cost: plan.estimated_cost,
    }
}

fn create_failure(failure: &PlanningError) -> Failure {
    let (kind, vehicle_id, palette_id) = match failure {
        PlanningError::Validation { .. } | PlanningError::UnresolvableLocation { .. } => {
            (FailureKind::Order, None, None)
        }
        PlanningError::NoSuitableVehicle { .. } => (FailureKind::Group, None, None),
        PlanningError::PackingInfeasible { vehicle_id, palette_id, .. } => {
            (FailureKind::Group, Some(vehicle_id.clone()), palette_id.clone())
        }
    };

    Failure {
        code: failure.code().to_string(),
        kind,
        id: failure.origin_id().to_string(),
        orders: failure.order_ids(),
        reason: failure.reason().to_string(),
        vehicle_id,
        palette_id,
    }
}

fn create_dock_slot(slot: &CoreDockSlot) -> DockSlot {
    DockSlot {
        vehicle_id: slot.vehicle_id.clone(),
        dock: slot.dock,
        batch: slot.batch,
        start: format_time(slot.start),
        end: format_time(slot.end),
        deadline_at_risk: slot.deadline_at_risk,
    }
}
