mod cli;
mod runner;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use colored::Colorize;

use kbpadd::{logging, print_error};

use crate::cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::setup(cli.verbose, cli.no_color);

    let result = match cli.command {
        Command::Run {
            profile,
            interval_ms,
        } => runner::run(profile.as_deref(), Duration::from_millis(interval_ms.max(1))),
        Command::Caps { slot } => runner::caps(slot),
        Command::Check { profile } => runner::check(profile.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error!("{e}");
            ExitCode::FAILURE
        }
    }
}
