//! Estimator keyword arguments built from configuration
//!
//! Consumers that construct classifiers or drive a randomized search take
//! their arguments as an ordered JSON object keyed by the modeling library's
//! parameter names. Absent optional values become `null`.

use serde_json::{json, Map, Value};

use super::schema::{
    LogisticRegressionParams, RandomForestParamDist, RandomForestParams, SearchCvParams,
};

// Library-side parameter names that differ from the config field names
const KWARG_VERBOSE: &str = "verbose";
const KWARG_N_JOBS: &str = "n_jobs";

/// Ordered keyword arguments for an estimator or search routine
pub type Kwargs = Map<String, Value>;

fn into_kwargs(value: Value) -> Kwargs {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

impl RandomForestParams {
    /// Constructor arguments for a random-forest classifier
    pub fn to_kwargs(&self) -> Kwargs {
        into_kwargs(json!({
            "n_estimators": self.n_estimators,
            "max_depth": self.max_depth,
            "min_samples_split": self.min_samples_split,
            "min_samples_leaf": self.min_samples_leaf,
            "max_features": self.max_features,
            "class_weight": self.class_weight,
            "random_state": self.random_state,
        }))
    }
}

impl RandomForestParamDist {
    /// Parameter distributions for a randomized search, one candidate list per parameter
    pub fn to_kwargs(&self) -> Kwargs {
        into_kwargs(json!({
            "n_estimators": self.n_estimators,
            "max_depth": self.max_depth,
            "min_samples_split": self.min_samples_split,
            "min_samples_leaf": self.min_samples_leaf,
            "max_features": self.max_features,
            "class_weight": self.class_weight,
        }))
    }
}

impl SearchCvParams {
    /// Arguments for the randomized search itself
    ///
    /// `parallelism` is passed through unchanged as `n_jobs`.
    pub fn to_kwargs(&self) -> Kwargs {
        let mut kwargs = Map::new();
        kwargs.insert("n_iter".to_string(), json!(self.n_iter));
        kwargs.insert("cv".to_string(), json!(self.cv));
        kwargs.insert("scoring".to_string(), json!(self.scoring));
        kwargs.insert(KWARG_VERBOSE.to_string(), json!(self.verbosity));
        kwargs.insert(KWARG_N_JOBS.to_string(), json!(self.parallelism));
        kwargs.insert("random_state".to_string(), json!(self.random_state));
        kwargs
    }
}

impl LogisticRegressionParams {
    /// Constructor arguments for a logistic-regression classifier
    pub fn to_kwargs(&self) -> Kwargs {
        into_kwargs(json!({
            "solver": self.solver,
            "max_iter": self.max_iter,
            "class_weight": self.class_weight,
            "random_state": self.random_state,
        }))
    }
}
