//! List-view token inspector CLI.

mod cli;
mod commands;
mod logging;

use clap::Parser;

use crate::cli::{Cli, Command};
use crate::commands::{run_decode, run_encode, run_explain};
use crate::logging::{LogConfig, init_logging};

fn main() {
    let cli = Cli::parse();
    let log_config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
    };
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match cli.command {
        Command::Decode(args) => run_decode(&args),
        Command::Encode(args) => run_encode(&args),
        Command::Explain(args) => run_explain(&args),
    };
    if let Err(error) = result {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}
