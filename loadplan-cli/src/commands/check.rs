#[cfg(test)]
#[path = "../../tests/unit/commands/check_test.rs"]
mod check_test;

use super::*;
use clap::{Arg, ArgMatches, Command};
use loadplan_cli::extensions::check::check_pragmatic_solution;
use loadplan_cli::extensions::solve::config::{create_config, read_config};
use std::io::BufReader;

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const SOLUTION_ARG_NAME: &str = "SOLUTION";
const CONFIG_ARG_NAME: &str = "config";

pub fn get_check_app() -> Command {
    Command::new("check")
        .about("Provides the way to check solution feasibility")
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(1))
        .arg(Arg::new(SOLUTION_ARG_NAME).help("Sets the solution file to check").required(true).index(2))
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to planner configuration file used to produce the solution")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
}

pub fn run_check(matches: &ArgMatches) -> Result<(), String> {
    let problem_file = matches
        .get_one::<String>(PROBLEM_ARG_NAME)
        .map(|path| BufReader::new(open_file(path, "problem")))
        .ok_or("problem path is not specified")?;
    let solution_file = matches
        .get_one::<String>(SOLUTION_ARG_NAME)
        .map(|path| BufReader::new(open_file(path, "solution")))
        .ok_or("solution path is not specified")?;

    let planner_config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| read_config(BufReader::new(open_file(path, "config"))).and_then(|config| create_config(&config)))
        .transpose()
        .map_err(|err| format!("cannot read config: '{err}'"))?;

    check_pragmatic_solution(problem_file, solution_file, planner_config.as_ref().map(|config| &config.packing))
        .map_err(format_check_errors)?;

    println!("solution feasibility check is completed successfully");

    Ok(())
}
