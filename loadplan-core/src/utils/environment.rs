#[cfg(test)]
#[path = "../../tests/unit/utils/environment_test.rs"]
mod environment_test;

use crate::utils::{ThreadPool, parallel_collect, parallel_into_collect};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the planner.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Returns amount of CPUs.
pub fn get_cpus() -> usize {
    num_cpus::get()
}

/// Specifies degree of parallelism for one kind of work.
#[derive(Clone, Debug, PartialEq)]
pub enum ParallelismDegree {
    /// Work is done on the calling thread.
    Sequential,
    /// Work is spread over a dedicated pool with a limited amount of threads.
    Limited {
        /// Max amount of threads.
        max: usize,
    },
    /// Work is spread over the global pool.
    Full,
}

/// Holds parallelism settings for the two levels of work: packing of independent assignments
/// (outer) and candidate scoring inside a single packing attempt (inner).
#[derive(Clone)]
pub struct Parallelism {
    /// Amount of available CPUs.
    pub available_cpus: usize,
    outer: ParallelScope,
    inner: ParallelScope,
}

#[derive(Clone)]
struct ParallelScope {
    degree: ParallelismDegree,
    pool: Option<Arc<ThreadPool>>,
}

impl ParallelScope {
    fn new(degree: ParallelismDegree) -> Self {
        let pool = match &degree {
            // NOTE falls back to the calling thread when the pool cannot be built
            ParallelismDegree::Limited { max } if *max > 1 => ThreadPool::new(*max).ok().map(Arc::new),
            _ => None,
        };

        Self { degree, pool }
    }

    fn map_collect<T, F, R>(&self, source: &[T], map_op: F) -> Vec<R>
    where
        T: Send + Sync,
        F: Fn(&T) -> R + Sync + Send,
        R: Send,
    {
        match (&self.degree, self.pool.as_ref()) {
            (ParallelismDegree::Full, _) => parallel_collect(source, map_op),
            (ParallelismDegree::Limited { .. }, Some(pool)) => pool.execute(|| parallel_collect(source, map_op)),
            _ => source.iter().map(map_op).collect(),
        }
    }

    fn map_into_collect<T, F, R>(&self, source: Vec<T>, map_op: F) -> Vec<R>
    where
        T: Send + Sync,
        F: Fn(T) -> R + Sync + Send,
        R: Send,
    {
        match (&self.degree, self.pool.as_ref()) {
            (ParallelismDegree::Full, _) => parallel_into_collect(source, map_op),
            (ParallelismDegree::Limited { .. }, Some(pool)) => pool.execute(|| parallel_into_collect(source, map_op)),
            _ => source.into_iter().map(map_op).collect(),
        }
    }
}

impl Parallelism {
    /// Creates a new instance of `Parallelism`.
    pub fn new(outer: ParallelismDegree, inner: ParallelismDegree) -> Self {
        Self { available_cpus: get_cpus(), outer: ParallelScope::new(outer), inner: ParallelScope::new(inner) }
    }

    /// Creates a parallelism which does all the work on the calling thread.
    pub fn sequential() -> Self {
        Self::new(ParallelismDegree::Sequential, ParallelismDegree::Sequential)
    }

    /// Returns outer degree.
    pub fn outer_degree(&self) -> &ParallelismDegree {
        &self.outer.degree
    }

    /// Returns inner degree.
    pub fn inner_degree(&self) -> &ParallelismDegree {
        &self.inner.degree
    }

    /// Maps independent units of work (e.g. assignments) preserving source order.
    pub fn outer_map<T, F, R>(&self, source: Vec<T>, map_op: F) -> Vec<R>
    where
        T: Send + Sync,
        F: Fn(T) -> R + Sync + Send,
        R: Send,
    {
        self.outer.map_into_collect(source, map_op)
    }

    /// Maps read-only evaluations (e.g. placement candidates) preserving source order.
    pub fn inner_map<T, F, R>(&self, source: &[T], map_op: F) -> Vec<R>
    where
        T: Send + Sync,
        F: Fn(&T) -> R + Sync + Send,
        R: Send,
    {
        self.inner.map_collect(source, map_op)
    }
}

impl Default for Parallelism {
    fn default() -> Self {
        Self::new(ParallelismDegree::Full, ParallelismDegree::Full)
    }
}

/// Keeps track of environment specific information which influences planner behavior.
#[derive(Clone)]
pub struct Environment {
    /// Keeps data parallelism settings.
    pub parallelism: Parallelism,
    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(parallelism: Parallelism, logger: InfoLogger) -> Self {
        Self { parallelism, logger }
    }

    /// Creates an environment which logs nothing and does all the work on the calling thread.
    pub fn quiet_sequential() -> Self {
        Self::new(Parallelism::sequential(), Arc::new(|_| {}))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Parallelism::default(), Arc::new(|msg: &str| println!("{msg}")))
    }
}
