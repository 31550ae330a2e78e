//! allstar CLI
//!
//! # Usage
//!
//! ```bash
//! # Write the baseline config
//! allstar init --output experiment.yaml
//!
//! # Validate a config
//! allstar validate experiment.yaml --detailed
//!
//! # Show the randomized-search candidates
//! allstar plan experiment.yaml --format json
//!
//! # Print classifier keyword arguments
//! allstar params experiment.yaml random-forest --seed 7
//! ```

use allstar::cli::{init_tracing, run_command, Cli, LogLevel};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(LogLevel::from_flags(cli.quiet, cli.verbose));

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
