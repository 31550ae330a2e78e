//! Configuration validation logic

use super::error::ValidationError;
use crate::config::schema::{
    ExperimentConfig, LogisticRegressionParams, RandomForestParamDist, RandomForestParams,
    SearchCvParams, TrackingSettings,
};

/// Scorer names accepted for `search_cv.scoring`
pub const KNOWN_SCORERS: &[&str] = &[
    "accuracy",
    "balanced_accuracy",
    "average_precision",
    "f1",
    "f1_macro",
    "f1_micro",
    "f1_weighted",
    "jaccard",
    "neg_brier_score",
    "neg_log_loss",
    "precision",
    "precision_macro",
    "precision_weighted",
    "recall",
    "recall_macro",
    "recall_weighted",
    "roc_auc",
    "roc_auc_ovr",
    "roc_auc_ovo",
];

/// Validate an experiment configuration
///
/// Checks:
/// - `test_size` lies strictly between 0 and 1
/// - integer hyperparameters respect their lower bounds, both as fixed
///   values and as search candidates
/// - every candidate list is non-empty
/// - the scorer name is known and parallelism is non-zero
///
/// Seeds that differ between groups are allowed; see
/// [`ExperimentConfig::seed_overrides`].
pub fn validate_config(config: &ExperimentConfig) -> Result<(), ValidationError> {
    let test_size = config.global.test_size;
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(ValidationError::InvalidTestSize(test_size));
    }

    validate_tracking(&config.tracking)?;
    validate_forest(&config.random_forest)?;
    validate_param_dist(&config.random_forest_search.param_dist)?;
    validate_search_cv(&config.random_forest_search.search_cv)?;
    validate_logistic_regression(&config.logistic_regression)?;

    Ok(())
}

fn validate_tracking(tracking: &TrackingSettings) -> Result<(), ValidationError> {
    if tracking.project.trim().is_empty() {
        return Err(ValidationError::EmptyProject);
    }
    if let Some(entity) = &tracking.entity {
        if entity.trim().is_empty() {
            return Err(ValidationError::BlankEntity);
        }
    }
    Ok(())
}

fn check_estimators(field: &'static str, value: u32) -> Result<(), ValidationError> {
    if value == 0 {
        return Err(ValidationError::InvalidEstimators { field, value });
    }
    Ok(())
}

fn check_max_depth(field: &'static str, value: Option<u32>) -> Result<(), ValidationError> {
    match value {
        Some(0) => Err(ValidationError::InvalidMaxDepth { field, value: 0 }),
        _ => Ok(()),
    }
}

fn check_min_samples_split(field: &'static str, value: u32) -> Result<(), ValidationError> {
    if value < 2 {
        return Err(ValidationError::InvalidMinSamplesSplit { field, value });
    }
    Ok(())
}

fn check_min_samples_leaf(field: &'static str, value: u32) -> Result<(), ValidationError> {
    if value == 0 {
        return Err(ValidationError::InvalidMinSamplesLeaf { field, value });
    }
    Ok(())
}

fn validate_forest(rf: &RandomForestParams) -> Result<(), ValidationError> {
    const FIELD: &str = "random_forest";
    check_estimators(FIELD, rf.n_estimators)?;
    check_max_depth(FIELD, rf.max_depth)?;
    check_min_samples_split(FIELD, rf.min_samples_split)?;
    check_min_samples_leaf(FIELD, rf.min_samples_leaf)
}

fn non_empty<T>(name: &'static str, values: &[T]) -> Result<(), ValidationError> {
    if values.is_empty() {
        return Err(ValidationError::EmptyCandidates(name));
    }
    Ok(())
}

fn validate_param_dist(dist: &RandomForestParamDist) -> Result<(), ValidationError> {
    const FIELD: &str = "random_forest_search.param_dist";

    non_empty("n_estimators", &dist.n_estimators)?;
    non_empty("max_depth", &dist.max_depth)?;
    non_empty("min_samples_split", &dist.min_samples_split)?;
    non_empty("min_samples_leaf", &dist.min_samples_leaf)?;
    non_empty("max_features", &dist.max_features)?;
    non_empty("class_weight", &dist.class_weight)?;

    for &n in &dist.n_estimators {
        check_estimators(FIELD, n)?;
    }
    for &depth in &dist.max_depth {
        check_max_depth(FIELD, depth)?;
    }
    for &split in &dist.min_samples_split {
        check_min_samples_split(FIELD, split)?;
    }
    for &leaf in &dist.min_samples_leaf {
        check_min_samples_leaf(FIELD, leaf)?;
    }

    Ok(())
}

fn validate_search_cv(search: &SearchCvParams) -> Result<(), ValidationError> {
    if search.n_iter == 0 {
        return Err(ValidationError::InvalidIterations(search.n_iter));
    }
    if search.cv < 2 {
        return Err(ValidationError::InvalidFolds(search.cv));
    }
    if !KNOWN_SCORERS.contains(&search.scoring.as_str()) {
        return Err(ValidationError::UnknownScoring(search.scoring.clone()));
    }
    if search.parallelism == 0 {
        return Err(ValidationError::InvalidParallelism(search.parallelism));
    }
    Ok(())
}

fn validate_logistic_regression(lr: &LogisticRegressionParams) -> Result<(), ValidationError> {
    if lr.max_iter == 0 {
        return Err(ValidationError::InvalidMaxIter(lr.max_iter));
    }
    Ok(())
}
