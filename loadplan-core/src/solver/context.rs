#[cfg(test)]
#[path = "../../tests/unit/solver/context_test.rs"]
mod context_test;

use crate::models::problem::ConstraintCatalog;
use crate::models::solution::PlanningError;
use crate::solver::{CachedOracle, PlannerConfig, SharedOracle};
use crate::utils::Environment;
use std::sync::{Arc, Mutex, PoisonError};

/// Keeps everything a single planning run needs: read-only catalog, oracle caches, settings and
/// an accumulator of non fatal failures. It is passed by reference through all planning phases.
pub struct PlanningContext {
    /// Product type constraints, shared read-only.
    pub catalog: Arc<ConstraintCatalog>,
    /// Location oracle with a per run cache.
    pub oracle: CachedOracle,
    /// Planner settings.
    pub config: PlannerConfig,
    /// Environment with logger and parallelism settings.
    pub environment: Arc<Environment>,
    failures: Mutex<Vec<PlanningError>>,
}

impl PlanningContext {
    /// Creates a new instance of `PlanningContext`.
    pub fn new(
        catalog: Arc<ConstraintCatalog>,
        oracle: SharedOracle,
        config: PlannerConfig,
        environment: Arc<Environment>,
    ) -> Self {
        let oracle = CachedOracle::new(oracle, config.oracle.clone());

        Self { catalog, oracle, config, environment, failures: Mutex::default() }
    }

    /// Reports a non fatal failure.
    pub fn report(&self, failure: PlanningError) {
        self.failures.lock().unwrap_or_else(PoisonError::into_inner).push(failure);
    }

    /// Takes all failures reported so far.
    pub fn take_failures(&self) -> Vec<PlanningError> {
        std::mem::take(&mut *self.failures.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Logs a message using environment logger.
    pub fn log(&self, message: &str) {
        (self.environment.logger)(message)
    }
}
