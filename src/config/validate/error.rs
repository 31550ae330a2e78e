//! Validation error types
//!
//! One variant per way a configuration value can fall outside its domain.

/// Validation error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid test_size: {0} (must be > 0.0 and < 1.0)")]
    InvalidTestSize(f64),

    #[error("Tracking project cannot be empty")]
    EmptyProject,

    #[error("Tracking entity cannot be blank (omit it or set it to null instead)")]
    BlankEntity,

    #[error("Invalid {field}.n_estimators: {value} (must be > 0)")]
    InvalidEstimators { field: &'static str, value: u32 },

    #[error("Invalid {field}.max_depth: {value} (must be > 0, or null for unbounded)")]
    InvalidMaxDepth { field: &'static str, value: u32 },

    #[error("Invalid {field}.min_samples_split: {value} (must be >= 2)")]
    InvalidMinSamplesSplit { field: &'static str, value: u32 },

    #[error("Invalid {field}.min_samples_leaf: {value} (must be >= 1)")]
    InvalidMinSamplesLeaf { field: &'static str, value: u32 },

    #[error("Search space for '{0}' has no candidates")]
    EmptyCandidates(&'static str),

    #[error("Invalid n_iter: {0} (must be > 0)")]
    InvalidIterations(u32),

    #[error("Invalid cv: {0} (k-fold cross-validation needs at least 2 folds)")]
    InvalidFolds(u32),

    #[error("Unknown scoring: {0} (must be one of: {known})", known = super::validator::KNOWN_SCORERS.join(", "))]
    UnknownScoring(String),

    #[error("Invalid parallelism: {0} (must be non-zero; -1 uses all execution units)")]
    InvalidParallelism(i32),

    #[error("Invalid logistic_regression.max_iter: {0} (must be > 0)")]
    InvalidMaxIter(u32),
}
