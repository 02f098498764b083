use super::*;
use crate::helpers::models::problem::*;
use crate::models::problem::haversine_distance;
use time::macros::date;

fn get_ids<T: AsRef<Order>>(partitions: &[Vec<T>]) -> Vec<Vec<String>> {
    partitions.iter().map(|partition| partition.iter().map(|order| order.as_ref().id.clone()).collect()).collect()
}

fn located(id: &str, lat: f64, lng: f64) -> LocatedOrder {
    LocatedOrder { order: OrderBuilder::default().id(id).coordinate(lat, lng).build_shared(), coordinate: Coordinate::new(lat, lng) }
}

#[test]
fn can_partition_greedily_using_worklist() {
    let partitions = partition_greedily(vec![1, 2, 3, 4, 5, 6, 7], |partition, candidate| {
        partition.iter().all(|member| member % 2 == candidate % 2) && partition.len() < 3
    });

    assert_eq!(partitions, vec![vec![1, 3, 5], vec![2, 4, 6], vec![7]]);
}

#[test]
fn can_partition_empty_input() {
    assert!(partition_greedily(Vec::<usize>::new(), |_, _| true).is_empty());
}

#[test]
fn can_partition_by_date_keeping_input_order() {
    let orders = vec![
        OrderBuilder::default().id("o1").date(date!(2024 - 05 - 02)).build_shared(),
        OrderBuilder::default().id("o2").date(date!(2024 - 05 - 01)).build_shared(),
        OrderBuilder::default().id("o3").date(date!(2024 - 05 - 02)).build_shared(),
        OrderBuilder::default().id("o4").date(date!(2024 - 05 - 01)).build_shared(),
    ];

    let partitions = partition_by_date(orders);

    assert_eq!(get_ids(&partitions), vec![vec!["o2", "o4"], vec!["o1", "o3"]]);
}

#[test]
fn can_partition_by_compatibility_with_every_member() {
    let catalog = test_catalog();
    let orders = vec![
        Arc::new(order_with_type("o1", "food")),
        Arc::new(order_with_type("o2", "dry")),
        Arc::new(order_with_type("o3", "chemical")),
        Arc::new(order_with_type("o4", "frozen")),
        Arc::new(order_with_type("o5", "chilled")),
    ];

    let partitions = partition_by_compatibility(orders, &catalog);

    assert_eq!(get_ids(&partitions), vec![vec!["o1", "o2", "o4"], vec!["o3", "o5"]]);
}

#[test]
fn can_partition_by_proximity_to_reference_point() {
    let orders = vec![
        located("berlin", 52.52, 13.405),
        located("hamburg", 53.55, 10.),
        located("potsdam", 52.39, 13.06),
        located("hamburg-north", 53.63, 10.),
    ];

    let (partitions, excluded) = partition_by_proximity(orders, 50., |from, to| Ok(haversine_distance(from, to)));

    assert!(excluded.is_empty());
    assert_eq!(get_ids(&partitions), vec![vec!["berlin", "potsdam"], vec!["hamburg", "hamburg-north"]]);
}

#[test]
fn can_exclude_candidate_when_distance_is_unavailable() {
    let orders = vec![located("o1", 52.52, 13.405), located("o2", 52.52, 13.405), located("o3", 52.39, 13.06)];

    let (partitions, excluded) = partition_by_proximity(orders, 50., |_, to| {
        if to.lat > 52.5 { Err(OracleError::Unavailable) } else { Ok(10.) }
    });

    assert_eq!(get_ids(&partitions), vec![vec!["o1", "o3"]]);
    assert_eq!(excluded.len(), 1);
    assert_eq!(excluded[0].0.order.id, "o2");
    assert_eq!(excluded[0].1, OracleError::Unavailable);
}

#[test]
fn can_try_partition_greedily_keeping_failed_items_aside() {
    let (partitions, excluded) = try_partition_greedily(vec![1, 2, 3, 4, 5], |partition, candidate| {
        if *candidate == 3 { Err("broken") } else { Ok(partition[0] % 2 == candidate % 2) }
    });

    assert_eq!(partitions, vec![vec![1, 5], vec![2, 4]]);
    assert_eq!(excluded, vec![(3, "broken")]);
}
