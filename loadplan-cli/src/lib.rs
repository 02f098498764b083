//! A crate to run the loading planner on problems in ***pragmatic*** json format and to check
//! produced solutions.
//!
//! Most of the functionality is exposed via `loadplan` binary, but `solve_pragmatic` can be used
//! directly from other crates:
//!
//! ```
//! use loadplan_cli::solve_pragmatic;
//! use loadplan_core::prelude::*;
//! use std::io::BufReader;
//!
//! let problem = r#"
//! {
//!   "catalog": { "productTypes": [{ "id": "dry" }] },
//!   "orders": [{
//!     "id": "o1",
//!     "deliveryDate": "2024-05-01",
//!     "destination": { "lat": 52.52, "lng": 13.40 },
//!     "palettes": [{
//!       "id": "p1", "productType": "dry", "standard": "european",
//!       "length": 1.2, "width": 0.8, "height": 1.0, "weight": 300
//!     }]
//!   }],
//!   "vehicles": [{ "id": "v1", "category": "van", "transportCost": 100 }]
//! }"#;
//!
//! let solution = solve_pragmatic(
//!     BufReader::new(problem.as_bytes()),
//!     PlannerConfig::default(),
//!     Environment::quiet_sequential(),
//! )
//! .unwrap();
//!
//! assert_eq!(solution.plans.len(), 1);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/unit/lib_test.rs"]
mod lib_test;

pub mod extensions;

pub use loadplan_core;
pub use loadplan_pragmatic;

use loadplan_core::prelude::*;
use loadplan_core::utils::Timer;
use loadplan_pragmatic::format::MultiFormatError;
use loadplan_pragmatic::format::problem::PragmaticProblem;
use loadplan_pragmatic::format::solution::{Solution, create_solution, serialize_solution};
use std::io::{BufReader, BufWriter, Read, Write};

/// Reads a problem in pragmatic format, runs the planner and returns pragmatic solution.
pub fn solve_pragmatic<R: Read>(
    problem_reader: BufReader<R>,
    config: PlannerConfig,
    environment: Environment,
) -> Result<Solution, String> {
    let timer = Timer::start();

    let problem = problem_reader.read_pragmatic().map_err(|errors| get_errors_serialized(&errors))?;
    let planner = Planner::new(problem.create_context(config, environment));
    let result = planner.run(problem.orders, problem.vehicles).map_err(|err| format!("cannot run planner: '{err}'"))?;

    Ok(create_solution(&result, timer.elapsed()))
}

/// Writes solution in pragmatic json format.
pub fn write_solution<W: Write>(solution: &Solution, writer: BufWriter<W>) -> Result<(), String> {
    let mut writer = writer;

    serialize_solution(solution, &mut writer)
        .and_then(|_| writer.flush())
        .map_err(|err| format!("cannot write solution: '{err}'"))
}

/// Serializes format errors into json string.
pub fn get_errors_serialized(errors: &MultiFormatError) -> String {
    errors.to_json()
}
