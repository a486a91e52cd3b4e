//! Property tests for metadata coercion and config validation.

use std::collections::BTreeMap;

use hybrank_core::config::HybrankConfig;
use hybrank_core::errors::ConfigError;
use hybrank_core::models::DocumentSource;
use proptest::prelude::*;

fn doc_with(field: &str, value: serde_json::Value) -> DocumentSource {
    DocumentSource::new("t", "d", "c").with_metadata(field, value)
}

proptest! {
    #[test]
    fn prop_numbers_are_read_back(v in -1e9f64..1e9, default in -10.0f64..10.0) {
        let doc = doc_with("popularity", serde_json::json!(v));
        prop_assert_eq!(doc.numeric_field("popularity", default), v);
        prop_assert_eq!(doc.numeric_field_quiet("popularity", default), v);
    }

    #[test]
    fn prop_numeric_strings_are_parsed(v in -1e6f64..1e6) {
        let doc = doc_with("ctr", serde_json::json!(format!(" {v} ")));
        prop_assert_eq!(doc.numeric_field("ctr", 0.05), v);
    }

    #[test]
    fn prop_non_numeric_strings_fall_back(text in "[a-zA-Z ]{1,12}", default in 0.0f64..5.0) {
        prop_assume!(text.trim().parse::<f64>().is_err());
        let doc = doc_with("quality", serde_json::json!(text));
        prop_assert_eq!(doc.numeric_field("quality", default), default);
        prop_assert_eq!(doc.numeric_field_quiet("quality", default), default);
    }

    #[test]
    fn prop_finite_weights_survive_toml(
        weights in prop::collection::btree_map("[a-z_]{1,16}", -100.0f64..100.0, 0..12),
    ) {
        let mut config = HybrankConfig::default();
        config.ranking.weights = weights.clone();
        let text = toml::to_string(&config).unwrap();
        let parsed = HybrankConfig::from_toml(&text).unwrap();
        prop_assert_eq!(parsed.ranking.weights, weights);
    }

    #[test]
    fn prop_any_non_finite_weight_is_rejected(
        weights in prop::collection::btree_map("[a-z_]{1,16}", -100.0f64..100.0, 0..8),
        bad in prop::sample::select(vec![f64::NAN, f64::INFINITY, f64::NEG_INFINITY]),
    ) {
        let mut weights: BTreeMap<String, f64> = weights;
        weights.insert("broken_feature".to_string(), bad);
        let mut config = HybrankConfig::default();
        config.ranking.weights = weights;
        let rejected = matches!(
            config.validate(),
            Err(ConfigError::NonFiniteWeight { ref feature, .. }) if feature == "broken_feature"
        );
        prop_assert!(rejected);
    }

    #[test]
    fn prop_lexical_share_bounds(share in -2.0f64..3.0) {
        let mut config = HybrankConfig::default();
        config.retrieval.lexical_share = share;
        prop_assert_eq!(config.validate().is_ok(), (0.0..=1.0).contains(&share));
    }
}
