//! Provides functionality to partition orders into groups which may legally travel together.
//!
//! Three partitioning passes are applied one after another: by delivery date, by product
//! compatibility and by geographic proximity. Every pass keeps the input order of orders, so
//! repeated runs on identical input produce identical groups.

#[cfg(test)]
#[path = "../../../tests/unit/construction/grouping/grouping_test.rs"]
mod grouping_test;

mod partitions;
pub use self::partitions::*;

use crate::models::common::Destination;
use crate::models::problem::{OracleError, Order};
use crate::models::solution::{Group, PlanningError};
use crate::solver::PlanningContext;
use crate::utils::{GenericError, GenericResult};
use std::sync::Arc;

/// Partitions orders into groups. Orders with unresolvable destination, or whose distance to a
/// group reference point cannot be computed, are excluded and reported as failures in the context.
/// Returns an error when every address resolution or every distance lookup of the run failed due
/// to location service failures.
pub fn group_orders(orders: &[Arc<Order>], context: &PlanningContext) -> GenericResult<Vec<Group>> {
    let located = locate_orders(orders, context)?;
    let threshold = context.config.proximity_threshold;
    let mut distance_lookups = OracleLookups::default();
    let mut partitions = Vec::new();

    let compatible = partition_by_date(located)
        .into_iter()
        .flat_map(|partition| partition_by_compatibility(partition, context.catalog.as_ref()));

    for partition in compatible {
        let (grouped, excluded) = partition_by_proximity(partition, threshold, |from, to| {
            let result = context.oracle.distance(from, to);
            distance_lookups.record(&result);
            result
        });

        excluded.into_iter().for_each(|(located, err)| {
            context.report(PlanningError::UnresolvableLocation {
                order_id: located.order.id.clone(),
                reason: format!("cannot compute distance to '{}': {err}", located.order.destination),
            })
        });

        partitions.extend(grouped);
    }

    distance_lookups.ensure_available("distance lookup")?;

    let groups = partitions
        .into_iter()
        .enumerate()
        .map(|(idx, partition)| {
            Group::new(format!("group-{}", idx + 1), partition.into_iter().map(|located| located.order).collect())
        })
        .collect();

    Ok(groups)
}

fn locate_orders(orders: &[Arc<Order>], context: &PlanningContext) -> GenericResult<Vec<LocatedOrder>> {
    let mut located = Vec::with_capacity(orders.len());
    let mut address_lookups = OracleLookups::default();

    for order in orders {
        let result = context.oracle.resolve(&order.destination);

        if matches!(order.destination, Destination::Address(_)) {
            address_lookups.record(&result);
        }

        match result {
            Ok(coordinate) => located.push(LocatedOrder { order: order.clone(), coordinate }),
            Err(err) => context.report(PlanningError::UnresolvableLocation {
                order_id: order.id.clone(),
                reason: format!("cannot resolve '{}': {err}", order.destination),
            }),
        }
    }

    address_lookups.ensure_available("address lookup")?;

    Ok(located)
}

/// Counts oracle lookups of one kind and how many of them ended with a service failure.
#[derive(Default)]
struct OracleLookups {
    total: usize,
    service_failures: usize,
}

impl OracleLookups {
    fn record<T>(&mut self, result: &Result<T, OracleError>) {
        self.total += 1;
        if matches!(result, Err(OracleError::Service(_))) {
            self.service_failures += 1;
        }
    }

    fn ensure_available(&self, kind: &str) -> GenericResult<()> {
        if self.total > 0 && self.service_failures == self.total {
            Err(GenericError::from(format!(
                "location service failed for all {} {kind}(s), planning run is aborted",
                self.total
            )))
        } else {
            Ok(())
        }
    }
}
