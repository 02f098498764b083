//! This module reimports commonly used types.

pub use crate::models::common::*;
pub use crate::models::problem::*;
pub use crate::models::solution::*;

pub use crate::solver::{
    CachedOracle, CandidateStrategy, LoadingSequence, Planner, PlannerConfig, PlanningContext, PlanningResult,
};

pub use crate::utils::{Environment, GenericError, GenericResult, InfoLogger, Parallelism, compare_floats};
