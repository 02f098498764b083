#[cfg(test)]
#[path = "../../tests/unit/utils/parallel_test.rs"]
mod parallel_test;

use crate::utils::{GenericError, GenericResult};
use rayon::prelude::*;
use rayon::{ThreadPool as RayonThreadPool, ThreadPoolBuilder};

/// A dedicated pool used when parallelism is limited to a fixed amount of threads.
pub struct ThreadPool {
    inner: RayonThreadPool,
}

impl ThreadPool {
    /// Creates a pool with given amount of worker threads.
    pub fn new(num_threads: usize) -> GenericResult<Self> {
        ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|idx| format!("loadplan-worker-{idx}"))
            .build()
            .map(|inner| Self { inner })
            .map_err(|err| GenericError::from(format!("cannot build a pool of {num_threads} threads: {err}")))
    }

    /// Runs the operation inside the pool, so nested parallel iterators use its threads.
    pub fn execute<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.inner.install(op)
    }
}

/// Maps a slice in parallel keeping source order of results.
pub fn parallel_collect<T, F, R>(source: &[T], map_op: F) -> Vec<R>
where
    T: Send + Sync,
    F: Fn(&T) -> R + Sync + Send,
    R: Send,
{
    source.par_iter().map(map_op).collect()
}

/// Maps an owned collection in parallel keeping source order of results.
pub fn parallel_into_collect<T, F, R>(source: Vec<T>, map_op: F) -> Vec<R>
where
    T: Send + Sync,
    F: Fn(T) -> R + Sync + Send,
    R: Send,
{
    source.into_par_iter().map(map_op).collect()
}
