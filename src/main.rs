use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::{env, io, process};

use tv::{cli::Cli, printer::StdoutPrinter};

fn main() -> Result<()> {
    let default_env_filter = env_logger::DEFAULT_FILTER_ENV;
    env_logger::init_from_env(env_logger::Env::default().filter_or(default_env_filter, "off"));

    // Without any argument, print the help to stderr and fail.
    if env::args_os().len() == 1 {
        Cli::command().write_help(&mut io::stderr())?;
        process::exit(1);
    }

    let mut printer = StdoutPrinter::default();
    Cli::parse().execute(&mut printer)
}
