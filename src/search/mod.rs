//! Hyperparameter search planning
//!
//! Turns the random-forest search section of an experiment config into the
//! list of candidate configurations a randomized, cross-validated search
//! would evaluate. Scoring and fitting happen elsewhere.

mod plan;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;

pub use plan::SearchPlan;

use crate::config::ExperimentConfig;

impl ExperimentConfig {
    /// Search plan for tuning the random forest
    pub fn random_forest_plan(&self) -> SearchPlan {
        SearchPlan::new(&self.random_forest_search, &self.random_forest)
    }
}
