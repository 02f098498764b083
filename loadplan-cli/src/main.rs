//! A command line interface to the *loading planner*.
//!

mod commands;

use std::process;

fn main() {
    let matches = cli::get_app().get_matches();

    cli::run_subcommand(matches);
}

mod cli {
    use super::*;
    use crate::commands::check::{get_check_app, run_check};
    use crate::commands::solve::{get_solve_app, run_solve};
    use crate::commands::{create_file, create_write_buffer};
    use clap::{ArgMatches, Command};

    pub fn get_app() -> Command {
        Command::new("Loading Planner")
            .version(env!("CARGO_PKG_VERSION"))
            .about("A command line interface to the loading planner")
            .subcommand(get_solve_app())
            .subcommand(get_check_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        if let Err(err) = match arg_matches.subcommand() {
            Some(("solve", solve_matches)) => run_solve(solve_matches, |path| {
                create_write_buffer(path.map(|path| create_file(path.as_str(), "out solution")))
            }),
            Some(("check", check_matches)) => run_check(check_matches),
            _ => {
                eprintln!("No subcommand was used. Use -h to print help information.");
                process::exit(1);
            }
        } {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
