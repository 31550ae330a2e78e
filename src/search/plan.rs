//! Randomized-search plan for the random-forest space
//!
//! Expands the candidate lists into the concrete parameter combinations a
//! cross-validated randomized search evaluates. Every list in the space is
//! finite, so combinations are drawn without replacement from the full grid.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::warn;

use crate::config::schema::{
    RandomForestParamDist, RandomForestParams, RandomForestSearch, SearchCvParams,
};

/// Candidate combinations plus the fold and scoring settings used to rank them
#[derive(Debug, Clone)]
pub struct SearchPlan {
    base: RandomForestParams,
    space: RandomForestParamDist,
    settings: SearchCvParams,
}

/// Take the value selected by the lowest mixed-radix digit of `rem`.
fn pick<T: Clone>(values: &[T], rem: &mut usize) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    let value = values[*rem % values.len()].clone();
    *rem /= values.len();
    Some(value)
}

impl SearchPlan {
    /// Build a plan that overlays sampled values onto `base`
    ///
    /// Fields not present in the space (the seed) keep the fixed value.
    pub fn new(search: &RandomForestSearch, base: &RandomForestParams) -> Self {
        Self {
            base: base.clone(),
            space: search.param_dist.clone(),
            settings: search.search_cv.clone(),
        }
    }

    /// Number of distinct combinations in the space
    pub fn grid_size(&self) -> usize {
        let s = &self.space;
        [
            s.n_estimators.len(),
            s.max_depth.len(),
            s.min_samples_split.len(),
            s.min_samples_leaf.len(),
            s.max_features.len(),
            s.class_weight.len(),
        ]
        .into_iter()
        .fold(1usize, usize::saturating_mul)
    }

    /// Number of combinations the search will evaluate
    pub fn n_candidates(&self) -> usize {
        (self.settings.n_iter as usize).min(self.grid_size())
    }

    /// Cross-validation folds per candidate
    pub fn n_folds(&self) -> usize {
        self.settings.cv as usize
    }

    /// Model fits performed by the whole search
    pub fn total_fits(&self) -> usize {
        self.n_candidates().saturating_mul(self.n_folds())
    }

    /// Metric used to rank candidates
    pub fn scoring(&self) -> &str {
        &self.settings.scoring
    }

    /// The combination at position `index` of the grid
    ///
    /// Grid order follows declaration order, with `class_weight` varying
    /// fastest. Returns `None` when `index` is past the end of the grid.
    pub fn candidate(&self, index: usize) -> Option<RandomForestParams> {
        if index >= self.grid_size() {
            return None;
        }
        let s = &self.space;
        let mut rem = index;
        let class_weight = pick(&s.class_weight, &mut rem)?;
        let max_features = pick(&s.max_features, &mut rem)?;
        let min_samples_leaf = pick(&s.min_samples_leaf, &mut rem)?;
        let min_samples_split = pick(&s.min_samples_split, &mut rem)?;
        let max_depth = pick(&s.max_depth, &mut rem)?;
        let n_estimators = pick(&s.n_estimators, &mut rem)?;

        Some(RandomForestParams {
            n_estimators,
            max_depth,
            min_samples_split,
            min_samples_leaf,
            max_features,
            class_weight,
            ..self.base.clone()
        })
    }

    /// Grid positions drawn for this search, in draw order
    pub fn sampled_indices(&self) -> Vec<usize> {
        let grid = self.grid_size();
        let n_iter = self.settings.n_iter as usize;
        if n_iter > grid {
            warn!(
                n_iter,
                grid_size = grid,
                "n_iter exceeds the number of combinations; evaluating the full grid"
            );
        }
        let mut rng = StdRng::seed_from_u64(u64::from(self.settings.random_state));
        rand::seq::index::sample(&mut rng, grid, n_iter.min(grid)).into_vec()
    }

    /// The sampled candidate combinations, deterministic for a given seed
    pub fn candidates(&self) -> Vec<RandomForestParams> {
        self.sampled_indices()
            .into_iter()
            .filter_map(|index| self.candidate(index))
            .collect()
    }
}
