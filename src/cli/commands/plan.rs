//! Plan command implementation

use serde_json::{json, Value};

use super::load_with_seed;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{OutputFormat, PlanArgs};
use crate::search::SearchPlan;

/// JSON view of a search plan
pub fn plan_to_json(plan: &SearchPlan) -> Value {
    let candidates: Vec<Value> = plan
        .candidates()
        .iter()
        .map(|c| Value::Object(c.to_kwargs()))
        .collect();
    json!({
        "grid_size": plan.grid_size(),
        "n_candidates": plan.n_candidates(),
        "n_folds": plan.n_folds(),
        "total_fits": plan.total_fits(),
        "scoring": plan.scoring(),
        "candidates": candidates,
    })
}

/// Text view of a search plan: a summary line, then one line per candidate
pub fn plan_text_lines(plan: &SearchPlan) -> Vec<String> {
    let summary = format!(
        "Search plan: {} of {} combinations x {} folds = {} fits, scored by {}",
        plan.n_candidates(),
        plan.grid_size(),
        plan.n_folds(),
        plan.total_fits(),
        plan.scoring()
    );
    let candidates = plan.candidates().into_iter().enumerate().map(|(i, c)| {
        let depth = c.max_depth.map_or_else(|| "None".to_string(), |d| d.to_string());
        let weight = c.class_weight.map_or_else(|| "None".to_string(), |w| w.to_string());
        format!(
            "  #{:<3} n_estimators={:<4} max_depth={:<4} min_samples_split={:<3} min_samples_leaf={:<3} max_features={:<4} class_weight={weight}",
            i + 1,
            c.n_estimators,
            depth,
            c.min_samples_split,
            c.min_samples_leaf,
            c.max_features.to_string(),
        )
    });
    std::iter::once(summary).chain(candidates).collect()
}

pub fn run_plan(args: PlanArgs, level: LogLevel) -> Result<(), String> {
    let config = load_with_seed(&args.config, args.seed)?;
    let plan = config.random_forest_plan();

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&plan_to_json(&plan))
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&plan_to_json(&plan))
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
        OutputFormat::Text => {
            for line in plan_text_lines(&plan) {
                log(level, LogLevel::Normal, &line);
            }
        }
    }

    Ok(())
}
