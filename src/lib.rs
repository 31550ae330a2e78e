//! allstar: typed experiment configuration for the nba-all-star classifiers
//!
//! The crate holds the configuration of a small classification study: the
//! train/test split, experiment tracking, a random-forest classifier with its
//! hyperparameter search space, and a logistic-regression classifier. The
//! configuration is an immutable [`ExperimentConfig`](config::ExperimentConfig)
//! built once, either from compiled-in baseline values or from a YAML/JSON
//! file, and passed by reference to whatever trains the models.
//!
//! # Example
//!
//! ```
//! use allstar::config::{ExperimentConfig, MaxFeatures};
//!
//! let config = ExperimentConfig::default();
//! assert_eq!(config.global.random_state, 66);
//! assert_eq!(config.random_forest.max_features, MaxFeatures::Auto);
//!
//! let plan = config.random_forest_plan();
//! assert_eq!(plan.total_fits(), 20 * 5);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod search;
pub mod tracking;

pub use config::{load_config, validate_config, ExperimentConfig};
pub use error::{Error, Result};
pub use search::SearchPlan;
pub use tracking::TrackingTarget;
