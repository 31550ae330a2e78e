//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::{OutputFormat, ParamGroup};
use crate::config::loader::ConfigFormat;

/// allstar: experiment configuration for the nba-all-star classifiers
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "allstar")]
#[command(version)]
#[command(
    about = "Validate, inspect and expand the experiment configuration for the random-forest and logistic-regression classifiers"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Validate a configuration file
    Validate(ValidateArgs),

    /// Display a configuration
    Info(InfoArgs),

    /// Write the baseline configuration
    Init(InitArgs),

    /// Show the randomized-search plan for the random forest
    Plan(PlanArgs),

    /// Print estimator keyword arguments for one parameter group
    Params(ParamsArgs),
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML or JSON configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Show detailed validation report
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to YAML or JSON configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Propagate this seed to every group
    #[arg(long)]
    pub seed: Option<u32>,
}

/// Arguments for the init command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InitArgs {
    /// Output path (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format; inferred from the output extension when omitted
    #[arg(short, long)]
    pub format: Option<ConfigFormat>,

    /// Seed to write into every group
    #[arg(long)]
    pub seed: Option<u32>,

    /// Overwrite an existing output file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the plan command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct PlanArgs {
    /// Path to YAML or JSON configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Propagate this seed to every group
    #[arg(long)]
    pub seed: Option<u32>,
}

/// Arguments for the params command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ParamsArgs {
    /// Path to YAML or JSON configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Parameter group (random-forest, random-forest-search, logistic-regression)
    #[arg(value_name = "GROUP")]
    pub group: ParamGroup,

    /// Propagate this seed to every group
    #[arg(long)]
    pub seed: Option<u32>,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
