use crate::checker::CheckerContext;
use crate::format::problem::{PragmaticProblem, Problem};
use crate::format::solution::{Solution, create_solution};
use loadplan_core::prelude::*;
use std::time::Duration;

pub fn solve_with_config(problem: Problem, config: PlannerConfig) -> Solution {
    let problem = problem.read_pragmatic().expect("cannot read problem");
    let context = problem.create_context(config, Environment::quiet_sequential());
    let result = Planner::new(context).run(problem.orders, problem.vehicles).expect("cannot run planner");

    create_solution(&result, Duration::default())
}

/// Solves the problem and checks that solution has no constraint violations.
pub fn solve_and_check(problem: Problem) -> Solution {
    solve_and_check_with_config(problem, PlannerConfig::default())
}

pub fn solve_and_check_with_config(problem: Problem, config: PlannerConfig) -> Solution {
    let min_support_ratio = config.packing.min_support_ratio;
    let solution = solve_with_config(problem.clone(), config);

    let result = CheckerContext::new(problem, solution.clone())
        .and_then(|context| context.with_min_support_ratio(min_support_ratio).check());

    if let Err(errors) = result {
        panic!("check failed: {}", errors.join("\n"));
    }

    solution
}

pub fn get_failure_codes(solution: &Solution) -> Vec<(&str, &str)> {
    solution.failures.iter().map(|failure| (failure.code.as_str(), failure.id.as_str())).collect()
}

pub fn get_plan_orders(solution: &Solution) -> Vec<(&str, Vec<&str>)> {
    solution
        .plans
        .iter()
        .map(|plan| (plan.vehicle_id.as_str(), plan.orders.iter().map(|id| id.as_str()).collect()))
        .collect()
}

pub fn create_checker_context(problem: Problem, solution: Solution) -> CheckerContext {
    CheckerContext::new(problem, solution).expect("cannot create checker context")
}
