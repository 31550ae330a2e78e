//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::{validate_config, KNOWN_SCORERS};
use crate::config::loader::ConfigFormat;
use crate::config::schema::*;
use proptest::prelude::*;

fn arb_max_features() -> impl Strategy<Value = MaxFeatures> {
    prop::sample::select(MaxFeatures::ALL.to_vec())
}

fn arb_class_weight() -> impl Strategy<Value = Option<ClassWeight>> {
    proptest::option::of(Just(ClassWeight::Balanced))
}

fn arb_valid_config() -> impl Strategy<Value = ExperimentConfig> {
    (
        0.01f64..0.99,                           // test_size
        any::<u32>(),                            // seed
        1u32..1000,                              // n_estimators
        proptest::option::of(1u32..64),          // max_depth
        2u32..50,                                // min_samples_split
        1u32..50,                                // min_samples_leaf
        arb_max_features(),
        arb_class_weight(),
        (1u32..200, 2u32..20),                   // n_iter, cv
        prop::sample::select(KNOWN_SCORERS.to_vec()),
    )
        .prop_map(
            |(
                test_size,
                seed,
                n_estimators,
                max_depth,
                min_samples_split,
                min_samples_leaf,
                max_features,
                class_weight,
                (n_iter, cv),
                scoring,
            )| {
                let mut config = ExperimentConfig::default().with_seed(seed);
                config.global.test_size = test_size;
                config.random_forest = RandomForestParams {
                    n_estimators,
                    max_depth,
                    min_samples_split,
                    min_samples_leaf,
                    max_features,
                    class_weight,
                    random_state: seed,
                };
                let search_cv = &mut config.random_forest_search.search_cv;
                search_cv.n_iter = n_iter;
                search_cv.cv = cv;
                search_cv.scoring = scoring.to_string();
                config
            },
        )
}

/// Identifiers that a YAML or JSON reader could mistake for another scalar
fn arb_identifier() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "null", "~", "123", "true", "yes", "off", "1e3", ".inf", "0x1F", "- x", "a: b", "#tag",
            "nba-all-star",
        ])
        .prop_map(str::to_string),
        "[a-z][a-z0-9_-]{0,15}",
    ]
}

fn arb_test_size() -> impl Strategy<Value = f64> {
    prop_oneof![
        0.0001f64..0.9999,
        Just(0.9999999999999999),
        Just(1.0000900000000001e-5),
        Just(f64::EPSILON),
    ]
}

/// Valid configs that also vary tracking identifiers, flags and group seeds
fn arb_document_config() -> impl Strategy<Value = ExperimentConfig> {
    (
        arb_valid_config(),
        arb_test_size(),
        arb_identifier(),
        proptest::option::of(arb_identifier()),
        any::<(bool, bool)>(),
        proptest::option::of(any::<u32>()),
    )
        .prop_map(|(mut config, test_size, project, entity, (stratify, enabled), lr_seed)| {
            config.global.test_size = test_size;
            config.global.stratify = stratify;
            config.tracking = TrackingSettings { project, entity, enabled };
            if let Some(seed) = lr_seed {
                config.logistic_regression.random_state = seed;
            }
            config
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_saved_config_reloads_identically(config in arb_document_config()) {
        for format in [ConfigFormat::Yaml, ConfigFormat::Json] {
            let text = config.to_string_as(format).expect("serialize");
            let reloaded = ExperimentConfig::from_str_as(&text, format).expect("reload");
            prop_assert_eq!(&reloaded, &config);
            prop_assert_eq!(reloaded.to_string_as(format).expect("serialize"), text);
        }
    }

    #[test]
    fn prop_valid_config_passes(config in arb_valid_config()) {
        prop_assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn prop_test_size_out_of_range_fails(config in arb_valid_config(), t in 1.0f64..100.0) {
        let mut config = config;
        config.global.test_size = t;
        prop_assert!(matches!(
            validate_config(&config),
            Err(ValidationError::InvalidTestSize(_))
        ));
        config.global.test_size = -t;
        prop_assert!(matches!(
            validate_config(&config),
            Err(ValidationError::InvalidTestSize(_))
        ));
    }

    #[test]
    fn prop_small_split_fails(config in arb_valid_config(), split in 0u32..2) {
        let mut config = config;
        config.random_forest.min_samples_split = split;
        let is_split_error = matches!(
            validate_config(&config),
            Err(ValidationError::InvalidMinSamplesSplit { .. })
        );
        prop_assert!(is_split_error);
    }

    #[test]
    fn prop_zero_n_iter_fails(config in arb_valid_config()) {
        let mut config = config;
        config.random_forest_search.search_cv.n_iter = 0;
        prop_assert_eq!(validate_config(&config), Err(ValidationError::InvalidIterations(0)));
    }

    #[test]
    fn prop_with_seed_never_reports_overrides(config in arb_valid_config(), seed in any::<u32>()) {
        prop_assert!(config.with_seed(seed).seed_overrides().is_empty());
    }
}
