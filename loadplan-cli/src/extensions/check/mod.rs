//! A helper module which contains functionality to run feasibility checks on solution.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/check/check_test.rs"]
mod check_test;

use loadplan_core::solver::PackingConfig;
use loadplan_pragmatic::checker::CheckerContext;
use loadplan_pragmatic::format::problem::deserialize_problem;
use loadplan_pragmatic::format::solution::deserialize_solution;
use std::io::{BufReader, Read};

/// Checks pragmatic solution feasibility using the packer's minimum support ratio.
pub fn check_pragmatic_solution<F: Read>(
    problem_reader: BufReader<F>,
    solution_reader: BufReader<F>,
    packing: Option<&PackingConfig>,
) -> Result<(), Vec<String>> {
    let problem = deserialize_problem(problem_reader).map_err(|errors| vec![format!("cannot read problem: '{errors}'")])?;
    let solution =
        deserialize_solution(solution_reader).map_err(|errors| vec![format!("cannot read solution: '{errors}'")])?;

    let min_support_ratio = packing.map_or_else(|| PackingConfig::default().min_support_ratio, |p| p.min_support_ratio);

    CheckerContext::new(problem, solution)?.with_min_support_ratio(min_support_ratio).check()
}
