use crate::utils::{Environment, Parallelism, ParallelismDegree};
use std::sync::Arc;

pub fn create_test_environment() -> Arc<Environment> {
    Arc::new(Environment::new(
        Parallelism::new(ParallelismDegree::Limited { max: 4 }, ParallelismDegree::Limited { max: 4 }),
        Arc::new(|_| {}),
    ))
}

pub fn create_sequential_environment() -> Arc<Environment> {
    Arc::new(Environment::quiet_sequential())
}
