//! This module contains the planner which runs all planning phases: validation, grouping,
//! vehicle assignment, packing, plan metrics and loading dock schedule.
//!
//! Non fatal failures are accumulated in the planning context and returned together with
//! successful plans. Only a configuration level problem or a persistent location service failure
//! aborts the run.

#[cfg(test)]
#[path = "../../tests/unit/solver/planner_test.rs"]
mod planner_test;

mod config;
pub use self::config::*;

mod context;
pub use self::context::*;

mod metrics;
pub use self::metrics::*;

mod oracle;
pub use self::oracle::*;

mod schedule;
pub use self::schedule::*;

use crate::construction::assignment::assign_groups;
use crate::construction::grouping::group_orders;
use crate::construction::packing::pack_group;
use crate::models::problem::{Order, Vehicle};
use crate::models::solution::{Assignment, DockSlot, Group, LoadingPlan, PlanningError};
use crate::utils::{GenericResult, Timer};
use std::sync::Arc;

/// A result of a planning run.
#[derive(Clone, Debug, Default)]
pub struct PlanningResult {
    /// Groups created by the grouper.
    pub groups: Vec<Group>,
    /// Group to vehicle assignments, including sub-groups of split groups.
    pub assignments: Vec<Assignment>,
    /// Successfully packed plans in vehicle input order.
    pub plans: Vec<LoadingPlan>,
    /// Typed failures in detection order.
    pub failures: Vec<PlanningError>,
    /// Loading dock schedule, present when planning start is configured.
    pub schedule: Option<Vec<DockSlot>>,
}

/// Runs planning phases over a planning context.
pub struct Planner {
    context: PlanningContext,
}

impl Planner {
    /// Creates a new instance of `Planner`.
    pub fn new(context: PlanningContext) -> Self {
        Self { context }
    }

    /// Returns planning context.
    pub fn context(&self) -> &PlanningContext {
        &self.context
    }

    /// Runs planning for given orders and vehicles.
    pub fn run(&self, orders: Vec<Order>, vehicles: Vec<Vehicle>) -> GenericResult<PlanningResult> {
        let context = &self.context;
        let timer = Timer::start();

        let vehicles = vehicles.into_iter().map(Arc::new).collect::<Vec<_>>();
        let orders = self.validate_orders(orders);
        context.log(&format!("validation: {} valid order(s), {} vehicle(s)", orders.len(), vehicles.len()));

        let (groups, duration) = Timer::measure_duration(|| group_orders(orders.as_slice(), context));
        let groups = groups?;
        context.log(&format!("grouping: {} group(s) in {}ms", groups.len(), duration.as_millis()));

        let (assignments, duration) = Timer::measure_duration(|| assign_groups(groups.clone(), vehicles.as_slice(), context));
        context.log(&format!("assignment: {} assignment(s) in {}ms", assignments.len(), duration.as_millis()));

        let (packed, duration) = Timer::measure_duration(|| {
            context.environment.parallelism.outer_map(assignments.clone(), |assignment| {
                pack_group(&assignment.group, &assignment.vehicle, context)
            })
        });

        let mut plans = Vec::with_capacity(packed.len());
        packed.into_iter().for_each(|result| match result {
            Ok(plan) => plans.push(plan),
            Err(failure) => context.report(failure),
        });
        context.log(&format!("packing: {} plan(s) in {}ms", plans.len(), duration.as_millis()));

        plans.sort_by_key(|plan| vehicles.iter().position(|vehicle| Arc::ptr_eq(vehicle, &plan.vehicle)));

        let schedule = create_schedule(plans.as_slice(), &context.config.schedule);
        let failures = context.take_failures();

        context.log(&format!(
            "planning is done in {}ms: {} plan(s), {} failure(s)",
            timer.elapsed_millis(),
            plans.len(),
            failures.len()
        ));

        Ok(PlanningResult { groups, assignments, plans, failures, schedule })
    }

    fn validate_orders(&self, orders: Vec<Order>) -> Vec<Arc<Order>> {
        let catalog = self.context.catalog.as_ref();

        orders
            .into_iter()
            .filter_map(|order| match order.validate(catalog) {
                Ok(_) => Some(Arc::new(order)),
                Err(reason) => {
                    self.context.report(PlanningError::Validation { order_id: order.id.clone(), reason });
                    None
                }
            })
            .collect()
    }
}
