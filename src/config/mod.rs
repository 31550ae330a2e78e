//! Experiment configuration
//!
//! Schema, validation, loading and estimator-argument building for the
//! experiment's five configuration groups.

pub mod builder;
pub mod cli;
pub mod loader;
pub mod schema;
pub mod validate;

pub use builder::Kwargs;
pub use cli::{
    parse_args, Cli, Command, InfoArgs, InitArgs, OutputFormat, ParamGroup, ParamsArgs, PlanArgs,
    ValidateArgs,
};
pub use loader::{load_config, save_config, ConfigFormat};
pub use schema::{
    ClassWeight, ExperimentConfig, GlobalSettings, LogisticRegressionParams, MaxFeatures,
    RandomForestParamDist, RandomForestParams, RandomForestSearch, SearchCvParams, Solver,
    TrackingSettings, DEFAULT_PROJECT, DEFAULT_RANDOM_STATE, DEFAULT_TEST_SIZE,
};
pub use validate::{validate_config, ValidationError, KNOWN_SCORERS};
