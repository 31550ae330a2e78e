//! Command-line argument definitions

mod core;
mod types;


pub use self::core::{
    parse_args, Cli, Command, InfoArgs, InitArgs, ParamsArgs, PlanArgs, ValidateArgs,
};
pub use types::{OutputFormat, ParamGroup};
