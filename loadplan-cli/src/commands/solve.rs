#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use clap::{Arg, ArgAction, ArgMatches, Command};
use loadplan_cli::extensions::check::check_pragmatic_solution;
use loadplan_cli::extensions::solve::config::{Config, create_config, create_environment, read_config};
use loadplan_cli::{solve_pragmatic, write_solution};
use loadplan_core::solver::PlannerConfig;
use loadplan_core::utils::Environment;
use std::io::{BufReader, BufWriter, Read};

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const CONFIG_ARG_NAME: &str = "config";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const LOG_ARG_NAME: &str = "log";
const CHECK_ARG_NAME: &str = "check";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Creates loading plans for orders of a problem defined in pragmatic format")
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(1))
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to planner configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(CHECK_ARG_NAME)
                .help("Specifies whether final solution should be checked for feasibility")
                .long(CHECK_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

/// Runs planner command.
pub fn run_solve<F>(matches: &ArgMatches, out_writer_func: F) -> Result<(), String>
where
    F: Fn(Option<&String>) -> BufWriter<Box<dyn Write>>,
{
    // required
    let problem_path = matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or("problem path is not specified")?;
    let mut problem = String::new();
    open_file(problem_path, "problem")
        .read_to_string(&mut problem)
        .map_err(|err| format!("cannot read problem file '{problem_path}': '{err}'"))?;

    // optional
    let config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| read_config(BufReader::new(open_file(path, "config"))))
        .transpose()?
        .unwrap_or_default();
    let is_logging = matches.get_flag(LOG_ARG_NAME);
    let is_check_requested = matches.get_flag(CHECK_ARG_NAME);

    let (planner_config, environment) = get_planner_settings(&config, is_logging)?;
    let packing = planner_config.packing.clone();

    let solution = solve_pragmatic(BufReader::new(problem.as_bytes()), planner_config, environment)
        .map_err(|err| format!("cannot solve problem from '{problem_path}': {err}"))?;

    write_solution(&solution, out_writer_func(matches.get_one::<String>(OUT_RESULT_ARG_NAME)))?;

    if is_check_requested {
        let mut buffer = Vec::new();
        write_solution(&solution, BufWriter::new(&mut buffer))?;

        check_pragmatic_solution(BufReader::new(problem.as_bytes()), BufReader::new(buffer.as_slice()), Some(&packing))
            .map_err(format_check_errors)?;

        println!("solution feasibility check is completed successfully");
    }

    Ok(())
}

fn get_planner_settings(config: &Config, is_logging: bool) -> Result<(PlannerConfig, Environment), String> {
    let planner_config = create_config(config).map_err(|err| format!("cannot read config: '{err}'"))?;
    let environment = create_environment(config.environment.as_ref(), is_logging)
        .map_err(|err| format!("cannot read config: '{err}'"))?;

    Ok((planner_config, environment))
}
