//! Unit tests for search planning

use super::SearchPlan;
use crate::config::schema::*;
use std::collections::HashSet;

fn baseline_plan() -> SearchPlan {
    ExperimentConfig::default().random_forest_plan()
}

#[test]
fn test_baseline_grid_size() {
    // 3 * 4 * 3 * 3 * 3 * 2
    assert_eq!(baseline_plan().grid_size(), 648);
}

#[test]
fn test_baseline_search_shape() {
    let plan = baseline_plan();
    assert_eq!(plan.n_candidates(), 20);
    assert_eq!(plan.n_folds(), 5);
    assert_eq!(plan.total_fits(), 100);
    assert_eq!(plan.scoring(), "f1");
    assert_eq!(plan.candidates().len(), 20);
}

#[test]
fn test_candidate_index_order() {
    let plan = baseline_plan();

    let first = plan.candidate(0).expect("index 0 exists");
    assert_eq!(first.n_estimators, 100);
    assert_eq!(first.max_depth, None);
    assert_eq!(first.min_samples_split, 2);
    assert_eq!(first.min_samples_leaf, 1);
    assert_eq!(first.max_features, MaxFeatures::Auto);
    assert_eq!(first.class_weight, None);

    let second = plan.candidate(1).expect("index 1 exists");
    assert_eq!(second.class_weight, Some(ClassWeight::Balanced));
    assert_eq!(second.max_features, MaxFeatures::Auto);

    let third = plan.candidate(2).expect("index 2 exists");
    assert_eq!(third.class_weight, None);
    assert_eq!(third.max_features, MaxFeatures::Sqrt);

    let last = plan.candidate(647).expect("last index exists");
    assert_eq!(last.n_estimators, 300);
    assert_eq!(last.max_depth, Some(30));
    assert_eq!(last.min_samples_split, 10);
    assert_eq!(last.min_samples_leaf, 4);
    assert_eq!(last.max_features, MaxFeatures::Log2);
    assert_eq!(last.class_weight, Some(ClassWeight::Balanced));

    assert!(plan.candidate(648).is_none());
}

#[test]
fn test_candidates_keep_fixed_seed() {
    let config = ExperimentConfig::default().with_seed(9);
    for candidate in config.random_forest_plan().candidates() {
        assert_eq!(candidate.random_state, 9);
    }
}

#[test]
fn test_candidates_are_distinct_and_in_space() {
    let plan = baseline_plan();
    let dist = RandomForestParamDist::default();
    let candidates = plan.candidates();

    let unique: HashSet<_> = candidates.iter().cloned().collect();
    assert_eq!(unique.len(), candidates.len());

    for c in &candidates {
        assert!(dist.n_estimators.contains(&c.n_estimators));
        assert!(dist.max_depth.contains(&c.max_depth));
        assert!(dist.min_samples_split.contains(&c.min_samples_split));
        assert!(dist.min_samples_leaf.contains(&c.min_samples_leaf));
        assert!(dist.max_features.contains(&c.max_features));
        assert!(dist.class_weight.contains(&c.class_weight));
    }
}

#[test]
fn test_sampling_is_deterministic_per_seed() {
    let a = baseline_plan().sampled_indices();
    let b = baseline_plan().sampled_indices();
    assert_eq!(a, b);

    let other = ExperimentConfig::default().with_seed(67).random_forest_plan().sampled_indices();
    assert_ne!(a, other);
}

#[test]
fn test_n_iter_larger_than_grid_exhausts_grid() {
    let mut config = ExperimentConfig::default();
    config.random_forest_search.param_dist = RandomForestParamDist {
        n_estimators: vec![50, 100],
        max_depth: vec![None],
        min_samples_split: vec![2],
        min_samples_leaf: vec![1],
        max_features: vec![MaxFeatures::Sqrt],
        class_weight: vec![None, Some(ClassWeight::Balanced)],
    };
    config.random_forest_search.search_cv.n_iter = 10;

    let plan = config.random_forest_plan();
    assert_eq!(plan.grid_size(), 4);
    assert_eq!(plan.n_candidates(), 4);
    assert_eq!(plan.total_fits(), 20);

    let mut indices = plan.sampled_indices();
    indices.sort_unstable();
    assert_eq!(indices, vec![0, 1, 2, 3]);
}

#[test]
fn test_empty_space_yields_no_candidates() {
    let mut config = ExperimentConfig::default();
    config.random_forest_search.param_dist.n_estimators.clear();
    let plan = config.random_forest_plan();
    assert_eq!(plan.grid_size(), 0);
    assert!(plan.candidates().is_empty());
    assert!(plan.candidate(0).is_none());
}
