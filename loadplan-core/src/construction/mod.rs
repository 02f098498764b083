//! This module contains the building blocks of a planning run.
//!
//! # Pipeline
//!
//! Orders are partitioned into compatible groups by the grouper, every group gets the best
//! scoring vehicle from the assigner (or is split across several ones), and the packer computes a
//! physically valid position of every palette inside the assigned vehicle.
//!

pub mod assignment;
pub mod grouping;
pub mod packing;
