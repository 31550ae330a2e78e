//! Params command implementation

use serde_json::{json, Value};

use super::load_with_seed;
use crate::cli::LogLevel;
use crate::config::{ExperimentConfig, ParamGroup, ParamsArgs};

/// Keyword arguments for one parameter group
pub fn group_kwargs(config: &ExperimentConfig, group: ParamGroup) -> Value {
    match group {
        ParamGroup::RandomForest => Value::Object(config.random_forest.to_kwargs()),
        ParamGroup::RandomForestSearch => json!({
            "param_distributions": config.random_forest_search.param_dist.to_kwargs(),
            "search_cv": config.random_forest_search.search_cv.to_kwargs(),
        }),
        ParamGroup::LogisticRegression => Value::Object(config.logistic_regression.to_kwargs()),
    }
}

pub fn run_params(args: ParamsArgs, _level: LogLevel) -> Result<(), String> {
    let config = load_with_seed(&args.config, args.seed)?;
    let json = serde_json::to_string_pretty(&group_kwargs(&config, args.group))
        .map_err(|e| format!("JSON serialization error: {e}"))?;
    println!("{json}");
    Ok(())
}
