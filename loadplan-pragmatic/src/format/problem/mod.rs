//! Specifies logic to read a loading planning problem from json input.

#[cfg(test)]
#[path = "../../../tests/unit/format/problem/reader_test.rs"]
mod reader_test;

use crate::format::MultiFormatError;
use loadplan_core::models::common::Timestamp;
use loadplan_core::models::problem::{ConstraintCatalog, GreatCircleOracle};
use loadplan_core::models::problem::{Order as CoreOrder, Vehicle as CoreVehicle};
use loadplan_core::solver::{PlannerConfig, PlanningContext};
use loadplan_core::utils::Environment;
use std::io::{BufReader, Read};
use std::sync::Arc;

pub(crate) type ApiProblem = Problem;

mod model;
pub use self::model::*;

mod reader;
pub(crate) use self::reader::map_to_problem;

/// A planning problem expressed in core models.
pub struct PlanningProblem {
    /// Product type constraints.
    pub catalog: Arc<ConstraintCatalog>,
    /// Orders in input order.
    pub orders: Vec<CoreOrder>,
    /// Vehicles in input order.
    pub vehicles: Vec<CoreVehicle>,
    /// An offline location oracle which knows problem locations.
    pub oracle: Arc<GreatCircleOracle>,
    /// Loading start time.
    pub planning_start: Option<Timestamp>,
}

impl PlanningProblem {
    /// Creates a planning context for the problem. Planning start time of the problem is used
    /// when config does not specify it.
    pub fn create_context(&self, config: PlannerConfig, environment: Environment) -> PlanningContext {
        let mut config = config;
        config.schedule.planning_start = config.schedule.planning_start.or(self.planning_start);

        PlanningContext::new(self.catalog.clone(), self.oracle.clone(), config, Arc::new(environment))
    }
}

/// Reads specific problem definition from various sources.
pub trait PragmaticProblem {
    /// Reads problem defined in pragmatic format.
    fn read_pragmatic(self) -> Result<PlanningProblem, MultiFormatError>;
}

impl<R: Read> PragmaticProblem for BufReader<R> {
    fn read_pragmatic(self) -> Result<PlanningProblem, MultiFormatError> {
        let problem = deserialize_problem(self)?;

        map_to_problem(&problem)
    }
}

impl PragmaticProblem for String {
    fn read_pragmatic(self) -> Result<PlanningProblem, MultiFormatError> {
        let problem = deserialize_problem(BufReader::new(self.as_bytes()))?;

        map_to_problem(&problem)
    }
}

impl PragmaticProblem for Problem {
    fn read_pragmatic(self) -> Result<PlanningProblem, MultiFormatError> {
        map_to_problem(&self)
    }
}
