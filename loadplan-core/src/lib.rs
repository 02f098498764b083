//! Core crate contains the building blocks of a ***loading optimization engine***: orders are
//! partitioned into compatible groups, groups are assigned to vehicles and palettes of every
//! assigned group are packed into vehicle cargo space.
//!
//! # Examples
//!
//! A minimal planning run with one order and one vehicle:
//!
//! ```
//! use loadplan_core::prelude::*;
//! use std::sync::Arc;
//!
//! let catalog = ConstraintCatalog::new(vec![ProductTypeConstraint::new("dry")]).unwrap();
//! let palette = Palette {
//!     id: "p1".to_string(),
//!     product_type: "dry".to_string(),
//!     standard: PalletStandard::European,
//!     size: Size3D::new(1.2, 0.8, 1.),
//!     weight: 300.,
//! };
//! let order = Order {
//!     id: "o1".to_string(),
//!     delivery_date: time::macros::date!(2024 - 05 - 01),
//!     destination: Destination::Coordinate(Coordinate::new(52.52, 13.40)),
//!     window: TimeWindow::max(),
//!     palettes: vec![Arc::new(palette)],
//! };
//! let vehicle = Vehicle {
//!     id: "v1".to_string(),
//!     category: VehicleCategory::SmallVan,
//!     available: true,
//!     transport_cost: 100.,
//!     temperature: None,
//! };
//!
//! let context = PlanningContext::new(
//!     Arc::new(catalog),
//!     Arc::new(GreatCircleOracle::default()),
//!     PlannerConfig::default(),
//!     Arc::new(Environment::quiet_sequential()),
//! );
//! let result = Planner::new(context).run(vec![order], vec![vehicle]).unwrap();
//!
//! assert_eq!(result.plans.len(), 1);
//! assert!(result.failures.is_empty());
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod construction;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
