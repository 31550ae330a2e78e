//! Typed schema for the experiment configuration
//!
//! One [`ExperimentConfig`] holds the five groups of the experiment: global
//! split settings, experiment tracking, fixed random-forest parameters, the
//! random-forest search (space + cross-validated search settings) and fixed
//! logistic-regression parameters. Values are immutable once built; consumers
//! receive the config by reference.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Seed shared by every group that needs reproducibility
pub const DEFAULT_RANDOM_STATE: u32 = 66;

/// Fraction of samples held out for testing
pub const DEFAULT_TEST_SIZE: f64 = 0.2;

/// Experiment-tracking project name
pub const DEFAULT_PROJECT: &str = "nba-all-star";

/// Deserialize a bool from either a YAML boolean (`true`) or a quoted string (`"true"`).
fn deserialize_bool_lenient<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        Str(String),
    }

    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(b) => Ok(b),
        BoolOrString::Str(s) => match s.to_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected 'true' or 'false', got '{other}'"
            ))),
        },
    }
}

fn default_random_state() -> u32 {
    DEFAULT_RANDOM_STATE
}

/// Number of features considered when looking for the best split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaxFeatures {
    /// Legacy alias of `sqrt` for classifiers
    #[default]
    Auto,
    /// `sqrt(n_features)`
    Sqrt,
    /// `log2(n_features)`
    Log2,
}

impl MaxFeatures {
    /// Number of features examined per split for a dataset with `n_features` columns
    ///
    /// Never returns less than one feature (unless the dataset has none).
    pub fn features_per_split(self, n_features: usize) -> usize {
        if n_features == 0 {
            return 0;
        }
        let n = n_features as f64;
        let k = match self {
            MaxFeatures::Auto | MaxFeatures::Sqrt => n.sqrt().floor(),
            MaxFeatures::Log2 => n.log2().floor(),
        };
        (k as usize).max(1)
    }

    /// All accepted values, in canonical order
    pub const ALL: [MaxFeatures; 3] = [MaxFeatures::Auto, MaxFeatures::Sqrt, MaxFeatures::Log2];
}

impl fmt::Display for MaxFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxFeatures::Auto => write!(f, "auto"),
            MaxFeatures::Sqrt => write!(f, "sqrt"),
            MaxFeatures::Log2 => write!(f, "log2"),
        }
    }
}

/// Class reweighting strategy; `None` at the use site means no reweighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassWeight {
    /// Weights inversely proportional to class frequency
    Balanced,
}

impl fmt::Display for ClassWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassWeight::Balanced => write!(f, "balanced"),
        }
    }
}

/// Optimization algorithm for logistic regression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Solver {
    #[default]
    Lbfgs,
    Liblinear,
    NewtonCg,
    NewtonCholesky,
    Sag,
    Saga,
}

impl fmt::Display for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Solver::Lbfgs => "lbfgs",
            Solver::Liblinear => "liblinear",
            Solver::NewtonCg => "newton-cg",
            Solver::NewtonCholesky => "newton-cholesky",
            Solver::Sag => "sag",
            Solver::Saga => "saga",
        };
        f.write_str(name)
    }
}

/// Complete experiment configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExperimentConfig {
    /// Train/test split settings
    pub global: GlobalSettings,

    /// Experiment-tracking settings
    pub tracking: TrackingSettings,

    /// Fixed random-forest hyperparameters
    pub random_forest: RandomForestParams,

    /// Random-forest search space and search-procedure settings
    pub random_forest_search: RandomForestSearch,

    /// Fixed logistic-regression hyperparameters
    pub logistic_regression: LogisticRegressionParams,
}

/// Global split settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlobalSettings {
    /// Seed for the train/test split
    #[serde(default = "default_random_state")]
    pub random_state: u32,

    /// Held-out fraction, strictly between 0 and 1
    pub test_size: f64,

    /// Preserve class proportions across the split
    #[serde(deserialize_with = "deserialize_bool_lenient")]
    pub stratify: bool,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            random_state: DEFAULT_RANDOM_STATE,
            test_size: DEFAULT_TEST_SIZE,
            stratify: true,
        }
    }
}

/// Experiment-tracking settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackingSettings {
    /// Tracking project identifier
    pub project: String,

    /// Owning user or organization; `None` uses the tracker's default
    #[serde(default)]
    pub entity: Option<String>,

    /// Whether metrics are sent to the tracker at all
    #[serde(deserialize_with = "deserialize_bool_lenient")]
    pub enabled: bool,
}

impl Default for TrackingSettings {
    fn default() -> Self {
        Self {
            project: DEFAULT_PROJECT.to_string(),
            entity: None,
            enabled: true,
        }
    }
}

/// Fixed random-forest classifier hyperparameters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RandomForestParams {
    /// Number of trees
    pub n_estimators: u32,

    /// Maximum tree depth; `None` grows trees until leaves are pure
    #[serde(default)]
    pub max_depth: Option<u32>,

    /// Minimum samples required to split an internal node (>= 2)
    pub min_samples_split: u32,

    /// Minimum samples required at a leaf (>= 1)
    pub min_samples_leaf: u32,

    /// Features considered per split
    pub max_features: MaxFeatures,

    /// Class reweighting; `None` leaves all classes at weight one
    #[serde(default)]
    pub class_weight: Option<ClassWeight>,

    #[serde(default = "default_random_state")]
    pub random_state: u32,
}

impl Default for RandomForestParams {
    fn default() -> Self {
        Self {
            n_estimators: 100,
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
            max_features: MaxFeatures::Auto,
            class_weight: None,
            random_state: DEFAULT_RANDOM_STATE,
        }
    }
}

/// Candidate values for each tunable random-forest hyperparameter
///
/// List order is preserved exactly; candidates are indexed by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RandomForestParamDist {
    pub n_estimators: Vec<u32>,
    pub max_depth: Vec<Option<u32>>,
    pub min_samples_split: Vec<u32>,
    pub min_samples_leaf: Vec<u32>,
    pub max_features: Vec<MaxFeatures>,
    pub class_weight: Vec<Option<ClassWeight>>,
}

impl Default for RandomForestParamDist {
    fn default() -> Self {
        Self {
            n_estimators: vec![100, 200, 300],
            max_depth: vec![None, Some(10), Some(20), Some(30)],
            min_samples_split: vec![2, 5, 10],
            min_samples_leaf: vec![1, 2, 4],
            max_features: MaxFeatures::ALL.to_vec(),
            class_weight: vec![None, Some(ClassWeight::Balanced)],
        }
    }
}

/// Randomized search with cross-validation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchCvParams {
    /// Number of parameter combinations sampled from the space
    pub n_iter: u32,

    /// Number of cross-validation folds
    pub cv: u32,

    /// Scorer name used to rank candidates
    pub scoring: String,

    /// Search log verbosity
    #[serde(alias = "verbose")]
    pub verbosity: u32,

    /// Parallel jobs; -1 uses every available execution unit
    #[serde(alias = "n_jobs")]
    pub parallelism: i32,

    #[serde(default = "default_random_state")]
    pub random_state: u32,
}

impl SearchCvParams {
    /// Whether the search should fan out over every available execution unit
    pub fn uses_all_units(&self) -> bool {
        self.parallelism == -1
    }
}

impl Default for SearchCvParams {
    fn default() -> Self {
        Self {
            n_iter: 20,
            cv: 5,
            scoring: "f1".to_string(),
            verbosity: 1,
            parallelism: -1,
            random_state: DEFAULT_RANDOM_STATE,
        }
    }
}

/// Random-forest tuning: what to sample and how to evaluate it
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RandomForestSearch {
    pub param_dist: RandomForestParamDist,
    pub search_cv: SearchCvParams,
}

/// Fixed logistic-regression classifier hyperparameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogisticRegressionParams {
    pub solver: Solver,

    /// Iteration cap for the solver
    pub max_iter: u32,

    #[serde(default)]
    pub class_weight: Option<ClassWeight>,

    #[serde(default = "default_random_state")]
    pub random_state: u32,
}

impl Default for LogisticRegressionParams {
    fn default() -> Self {
        Self {
            solver: Solver::Lbfgs,
            max_iter: 1000,
            class_weight: None,
            random_state: DEFAULT_RANDOM_STATE,
        }
    }
}

impl ExperimentConfig {
    /// Copy of this config with `seed` propagated to every group
    pub fn with_seed(&self, seed: u32) -> Self {
        let mut config = self.clone();
        config.global.random_state = seed;
        config.random_forest.random_state = seed;
        config.random_forest_search.search_cv.random_state = seed;
        config.logistic_regression.random_state = seed;
        config
    }

    /// Groups whose seed differs from `global.random_state`
    pub fn seed_overrides(&self) -> Vec<(&'static str, u32)> {
        let global = self.global.random_state;
        [
            ("random_forest", self.random_forest.random_state),
            ("random_forest_search", self.random_forest_search.search_cv.random_state),
            ("logistic_regression", self.logistic_regression.random_state),
        ]
        .into_iter()
        .filter(|(_, seed)| *seed != global)
        .collect()
    }
}
