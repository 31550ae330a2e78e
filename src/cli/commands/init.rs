//! Init command implementation
//!
//! Writes the baseline experiment configuration so it can be edited and
//! loaded back.

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{ConfigFormat, ExperimentConfig, InitArgs};

/// Render the baseline configuration for `args`
pub fn render_baseline(args: &InitArgs) -> Result<String, String> {
    let config = match args.seed {
        Some(seed) => ExperimentConfig::default().with_seed(seed),
        None => ExperimentConfig::default(),
    };
    let format = args.format.unwrap_or_else(|| {
        args.output.as_deref().map(ConfigFormat::from_path).unwrap_or_default()
    });
    config.to_string_as(format).map_err(|e| e.to_string())
}

pub fn run_init(args: InitArgs, level: LogLevel) -> Result<(), String> {
    let content = render_baseline(&args)?;

    match &args.output {
        Some(path) => {
            if path.exists() && !args.force {
                return Err(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                ));
            }
            std::fs::write(path, &content)
                .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
            log(
                level,
                LogLevel::Normal,
                &format!("Wrote baseline config to {}", path.display()),
            );
        }
        None => print!("{content}"),
    }

    Ok(())
}
