#[cfg(test)]
#[path = "../../../tests/unit/construction/packing/ordering_test.rs"]
mod ordering_test;

use crate::models::common::Destination;
use crate::models::problem::{ConstraintCatalog, Order, Palette, ProductTypeConstraint};
use crate::models::solution::Group;
use crate::utils::{Float, compare_floats};
use std::sync::Arc;

/// A palette prepared for packing.
#[derive(Clone, Debug)]
pub struct PackingItem<'a> {
    /// Palette to pack.
    pub palette: Arc<Palette>,
    /// Owning order id.
    pub order_id: String,
    /// Owning order destination.
    pub destination: Destination,
    /// Product type constraint.
    pub constraint: &'a ProductTypeConstraint,
    /// Preferred relative depth of the footprint center: `1` is the rear door, `0` is the cab.
    pub target_depth: Float,
    /// Composite priority score, higher is packed earlier.
    pub priority: Float,
}

/// Creates packing items sorted by their priority. Returns an id of a palette with unknown product
/// type as error.
pub fn create_packing_items<'a>(group: &Group, catalog: &'a ConstraintCatalog) -> Result<Vec<PackingItem<'a>>, String> {
    let depths = get_target_depths(group.orders.as_slice());
    let max_weight = group.palettes().map(|(_, palette)| palette.weight).fold(0., Float::max);
    let max_volume = group.palettes().map(|(_, palette)| palette.volume()).fold(0., Float::max);

    let mut items = group
        .orders
        .iter()
        .zip(depths)
        .flat_map(|(order, depth)| order.palettes.iter().map(move |palette| (order, palette, depth)))
        .map(|(order, palette, target_depth)| -> Result<PackingItem<'a>, String> {
            let constraint = catalog.get(&palette.product_type).ok_or_else(|| palette.id.clone())?;

            Ok(PackingItem {
                palette: palette.clone(),
                order_id: order.id.clone(),
                destination: order.destination.clone(),
                constraint,
                target_depth,
                priority: get_priority(palette, constraint, max_weight, max_volume),
            })
        })
        .collect::<Result<Vec<_>, String>>()?;

    // NOTE stable sort keeps input order for full ties
    items.sort_by(|a, b| {
        compare_floats(b.priority, a.priority)
            .then_with(|| a.constraint.loading_priority.cmp(&b.constraint.loading_priority))
    });

    Ok(items)
}

/// Returns composite priority: heavier first (0.4), non fragile first (0.3), non rotatable first
/// (0.2) and larger first (0.1). Weight and volume are normalized by group maximum.
pub fn get_priority(palette: &Palette, constraint: &ProductTypeConstraint, max_weight: Float, max_volume: Float) -> Float {
    let normalize = |value: Float, max: Float| if max > 0. { value / max } else { 0. };
    let flag = |value: bool| if value { 1. } else { 0. };

    0.4 * normalize(palette.weight, max_weight)
        + 0.3 * flag(!constraint.fragile)
        + 0.2 * flag(!constraint.allows_rotation())
        + 0.1 * normalize(palette.volume(), max_volume)
}

/// Returns target depth for each order: orders are ranked by latest deadline (then input order),
/// the first delivered order is targeted at the rear door and the last one at the cab wall.
pub fn get_target_depths(orders: &[Arc<Order>]) -> Vec<Float> {
    let mut ranked = (0..orders.len()).collect::<Vec<_>>();
    ranked.sort_by(|&a, &b| compare_floats(orders[a].window.end, orders[b].window.end));

    let mut depths = vec![1.; orders.len()];
    if orders.len() > 1 {
        let last_rank = (orders.len() - 1) as Float;
        ranked.into_iter().enumerate().for_each(|(rank, idx)| depths[idx] = 1. - rank as Float / last_rank);
    }

    depths
}
