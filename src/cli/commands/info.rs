//! Info command implementation

use super::load_with_seed;
use super::validate::print_detailed_summary;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{InfoArgs, OutputFormat};

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let config = load_with_seed(&args.config, args.seed)?;

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Configuration Info:");
            print_detailed_summary(&config, level);
        }
        OutputFormat::Json => {
            let json = config
                .to_json_string()
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = config
                .to_yaml_string()
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }

    Ok(())
}
