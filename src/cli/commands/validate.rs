//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, ExperimentConfig, ValidateArgs};

fn optional<T: std::fmt::Display>(value: Option<T>, absent: &str) -> String {
    value.map_or_else(|| absent.to_string(), |v| v.to_string())
}

fn list<T: std::fmt::Display>(values: &[Option<T>], absent: &str) -> String {
    let items: Vec<String> = values.iter().map(|v| optional(v.as_ref(), absent)).collect();
    format!("[{}]", items.join(", "))
}

fn join<T: std::fmt::Display>(values: &[T]) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Format global split settings as a string
pub fn format_global_info(config: &ExperimentConfig) -> String {
    let global = &config.global;
    format!(
        "  Seed: {}\n  Test size: {}\n  Stratify: {}",
        global.random_state, global.test_size, global.stratify
    )
}

/// Format tracking settings as a string
pub fn format_tracking_info(config: &ExperimentConfig) -> String {
    let tracking = &config.tracking;
    if !tracking.is_active() {
        return format!("  Tracking: disabled (project {})", tracking.project);
    }
    format!("  Tracking: {}", tracking.run_path())
}

/// Format fixed random-forest parameters as a string
pub fn format_forest_info(config: &ExperimentConfig) -> String {
    let rf = &config.random_forest;
    [
        "  Random forest:".to_string(),
        format!("    Trees: {}", rf.n_estimators),
        format!("    Max depth: {}", optional(rf.max_depth, "unbounded")),
        format!("    Min samples split: {}", rf.min_samples_split),
        format!("    Min samples leaf: {}", rf.min_samples_leaf),
        format!("    Max features: {}", rf.max_features),
        format!("    Class weight: {}", optional(rf.class_weight, "none")),
    ]
    .join("\n")
}

/// Format the random-forest search section as a string
pub fn format_search_info(config: &ExperimentConfig) -> String {
    let dist = &config.random_forest_search.param_dist;
    let cv = &config.random_forest_search.search_cv;
    let mut lines = vec![
        "  Random forest search:".to_string(),
        format!("    n_estimators: {}", join(&dist.n_estimators)),
        format!("    max_depth: {}", list(&dist.max_depth, "unbounded")),
        format!("    min_samples_split: {}", join(&dist.min_samples_split)),
        format!("    min_samples_leaf: {}", join(&dist.min_samples_leaf)),
        format!("    max_features: {}", join(&dist.max_features)),
        format!("    class_weight: {}", list(&dist.class_weight, "none")),
        format!("    Iterations: {} x {} folds, scored by {}", cv.n_iter, cv.cv, cv.scoring),
    ];
    if cv.uses_all_units() {
        lines.push("    Parallelism: all execution units".to_string());
    } else {
        lines.push(format!("    Parallelism: {}", cv.parallelism));
    }
    lines.join("\n")
}

/// Format fixed logistic-regression parameters as a string
pub fn format_logreg_info(config: &ExperimentConfig) -> String {
    let lr = &config.logistic_regression;
    format!(
        "  Logistic regression:\n    Solver: {}\n    Max iterations: {}\n    Class weight: {}",
        lr.solver,
        lr.max_iter,
        optional(lr.class_weight, "none")
    )
}

/// Lines of the detailed configuration summary
pub fn detailed_summary(config: &ExperimentConfig) -> Vec<String> {
    vec![
        String::new(),
        "Configuration Summary:".to_string(),
        format_global_info(config),
        format_tracking_info(config),
        String::new(),
        format_forest_info(config),
        String::new(),
        format_search_info(config),
        String::new(),
        format_logreg_info(config),
    ]
}

/// Print the detailed configuration summary at the given level
pub fn print_detailed_summary(config: &ExperimentConfig, level: LogLevel) {
    for block in detailed_summary(config) {
        log(level, LogLevel::Normal, &block);
    }
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let config = load_config(&args.config).map_err(|e| format!("Validation failed: {e}"))?;

    log(level, LogLevel::Normal, "Configuration is valid");

    for (group, seed) in config.seed_overrides() {
        log(
            level,
            LogLevel::Verbose,
            &format!(
                "  note: {group}.random_state = {seed} overrides global seed {}",
                config.global.random_state
            ),
        );
    }

    if args.detailed {
        print_detailed_summary(&config, level);
    }

    Ok(())
}
