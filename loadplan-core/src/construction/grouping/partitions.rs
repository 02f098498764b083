#[cfg(test)]
#[path = "../../../tests/unit/construction/grouping/partitions_test.rs"]
mod partitions_test;

use crate::models::common::{Coordinate, Distance};
use crate::models::problem::{ConstraintCatalog, OracleError, Order};
use std::collections::{BTreeMap, VecDeque};
use std::convert::Infallible;
use std::sync::Arc;

/// An order together with its resolved destination.
#[derive(Clone, Debug)]
pub struct LocatedOrder {
    /// Order.
    pub order: Arc<Order>,
    /// Resolved destination coordinate.
    pub coordinate: Coordinate,
}

impl AsRef<Order> for LocatedOrder {
    fn as_ref(&self) -> &Order {
        self.order.as_ref()
    }
}

/// Partitions items greedily using a worklist of remaining items: the first remaining item seeds a
/// new partition, every other remaining item which can join the forming partition is moved into it
/// in its original order. Items never leave a partition once they join it.
pub fn partition_greedily<T, F>(items: Vec<T>, can_join: F) -> Vec<Vec<T>>
where
    F: Fn(&[T], &T) -> bool,
{
    let (partitions, _) = try_partition_greedily::<_, Infallible, _>(items, |partition, candidate| {
        Ok(can_join(partition, candidate))
    });

    partitions
}

/// Same as `partition_greedily`, but the join check may fail. A candidate whose check fails is
/// removed from the worklist and returned together with its error, keeping the input order.
pub fn try_partition_greedily<T, E, F>(items: Vec<T>, mut can_join: F) -> (Vec<Vec<T>>, Vec<(T, E)>)
where
    F: FnMut(&[T], &T) -> Result<bool, E>,
{
    let mut remaining = VecDeque::from(items);
    let mut partitions = Vec::new();
    let mut excluded = Vec::new();

    while let Some(seed) = remaining.pop_front() {
        let mut partition = vec![seed];
        let mut rejected = VecDeque::with_capacity(remaining.len());

        for candidate in remaining.drain(..) {
            match can_join(partition.as_slice(), &candidate) {
                Ok(true) => partition.push(candidate),
                Ok(false) => rejected.push_back(candidate),
                Err(err) => excluded.push((candidate, err)),
            }
        }

        remaining = rejected;
        partitions.push(partition);
    }

    (partitions, excluded)
}

/// Partitions orders by their calendar delivery date. Partitions follow date order, orders keep
/// their input order inside a partition.
pub fn partition_by_date<T: AsRef<Order>>(orders: Vec<T>) -> Vec<Vec<T>> {
    orders
        .into_iter()
        .fold(BTreeMap::<_, Vec<T>>::new(), |mut acc, order| {
            acc.entry(order.as_ref().delivery_date).or_default().push(order);
            acc
        })
        .into_values()
        .collect()
}

/// Partitions orders into groups where every pair of orders has compatible product types.
pub fn partition_by_compatibility<T: AsRef<Order>>(orders: Vec<T>, catalog: &ConstraintCatalog) -> Vec<Vec<T>> {
    partition_greedily(orders, |partition, candidate| {
        partition.iter().all(|member| member.as_ref().is_compatible_with(candidate.as_ref(), catalog))
    })
}

/// Partitions located orders by proximity to the partition reference point which is the
/// destination of its first order. An order whose distance to a reference point cannot be
/// determined is excluded from all partitions and returned with the oracle error.
pub fn partition_by_proximity<D>(
    orders: Vec<LocatedOrder>,
    threshold: Distance,
    mut distance: D,
) -> (Vec<Vec<LocatedOrder>>, Vec<(LocatedOrder, OracleError)>)
where
    D: FnMut(Coordinate, Coordinate) -> Result<Distance, OracleError>,
{
    try_partition_greedily(orders, |partition, candidate| match partition.first() {
        Some(reference) => distance(reference.coordinate, candidate.coordinate).map(|value| value <= threshold),
        None => Ok(false),
    })
}
