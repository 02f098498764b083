use crate::models::common::*;
use crate::models::problem::{Order, Palette};
use crate::utils::Float;
use std::sync::Arc;

/// An ordered set of orders judged mutually compatible.
#[derive(Clone, Debug)]
pub struct Group {
    /// Group id.
    pub id: String,
    /// Group orders in a stable order.
    pub orders: Vec<Arc<Order>>,
}

impl Group {
    /// Creates a new instance of `Group`.
    pub fn new(id: String, orders: Vec<Arc<Order>>) -> Self {
        Self { id, orders }
    }

    /// Returns the earliest of orders latest deadlines.
    pub fn earliest_deadline(&self) -> Option<Timestamp> {
        self.orders.iter().map(|order| order.window.end).reduce(Float::min)
    }

    /// Returns all palettes with their owning order.
    pub fn palettes(&self) -> impl Iterator<Item = (&Arc<Order>, &Arc<Palette>)> + '_ {
        self.orders.iter().flat_map(|order| order.palettes.iter().map(move |palette| (order, palette)))
    }

    /// Returns total volume of all palettes.
    pub fn total_volume(&self) -> Volume {
        self.orders.iter().map(|order| order.total_volume()).sum()
    }

    /// Returns total weight of all palettes.
    pub fn total_weight(&self) -> Weight {
        self.orders.iter().map(|order| order.total_weight()).sum()
    }

    /// Returns order ids.
    pub fn order_ids(&self) -> Vec<String> {
        self.orders.iter().map(|order| order.id.clone()).collect()
    }
}
