//! Contains functionality to configure the planner.

pub mod config;
