//! CLI command implementations

mod info;
mod init;
mod params;
mod plan;
mod validate;


use crate::cli::LogLevel;
use crate::config::{load_config, Cli, Command, ExperimentConfig};
use std::path::Path;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);

    match cli.command {
        Command::Validate(args) => validate::run_validate(args, log_level),
        Command::Info(args) => info::run_info(args, log_level),
        Command::Init(args) => init::run_init(args, log_level),
        Command::Plan(args) => plan::run_plan(args, log_level),
        Command::Params(args) => params::run_params(args, log_level),
    }
}

/// Load a config and apply an optional seed override
fn load_with_seed(path: &Path, seed: Option<u32>) -> Result<ExperimentConfig, String> {
    let config = load_config(path).map_err(|e| format!("Config error: {e}"))?;
    Ok(match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    })
}
