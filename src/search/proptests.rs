//! Property-based tests for search planning

use crate::config::schema::*;
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_candidate_count_is_capped_by_grid(n_iter in 1u32..1000, seed in any::<u32>()) {
        let mut config = ExperimentConfig::default().with_seed(seed);
        config.random_forest_search.search_cv.n_iter = n_iter;
        let plan = config.random_forest_plan();

        let candidates = plan.candidates();
        prop_assert_eq!(candidates.len(), (n_iter as usize).min(648));
        prop_assert_eq!(candidates.len(), plan.n_candidates());

        let unique: HashSet<_> = candidates.into_iter().collect();
        prop_assert_eq!(unique.len(), plan.n_candidates());
    }

    #[test]
    fn prop_every_grid_index_decodes(index in 0usize..648) {
        let plan = ExperimentConfig::default().random_forest_plan();
        prop_assert!(plan.candidate(index).is_some());
    }

    #[test]
    fn prop_total_fits(n_iter in 1u32..100, cv in 2u32..20) {
        let mut config = ExperimentConfig::default();
        config.random_forest_search.search_cv.n_iter = n_iter;
        config.random_forest_search.search_cv.cv = cv;
        let plan = config.random_forest_plan();
        prop_assert_eq!(plan.total_fits(), plan.n_candidates() * cv as usize);
    }
}
