//! colscope CLI - column profiling for tabular datasets.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};
use logging::LoggingConfig;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(&LoggingConfig::from_flags(cli.verbose, cli.log_json)) {
        eprintln!("Error: failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Profile(args) => commands::profile::run(args),
        Commands::Correlate(args) => commands::correlate::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
