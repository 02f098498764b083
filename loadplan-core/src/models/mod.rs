//! A collection of models to represent orders, fleet, catalog and loading plans.

pub mod common;
pub mod problem;
pub mod solution;
