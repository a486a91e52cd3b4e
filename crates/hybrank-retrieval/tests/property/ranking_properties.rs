//! Property tests for normalization and the ranking model.

use std::collections::BTreeMap;

use hybrank_core::models::{Candidate, DocumentSource, FeatureVector};
use hybrank_retrieval::features::names;
use hybrank_retrieval::features::stats::{min_max, Range};
use hybrank_retrieval::{FeatureExtractor, RankingModel, WeightTable};
use proptest::prelude::*;

fn weights() -> impl Strategy<Value = BTreeMap<String, f64>> {
    prop::collection::btree_map(
        prop::sample::select(names::ALL.to_vec()).prop_map(str::to_string),
        -20.0f64..20.0,
        0..18,
    )
}

fn features() -> impl Strategy<Value = FeatureVector> {
    prop::collection::vec(
        (prop::sample::select(names::ALL.to_vec()), -1e3f64..1e3),
        0..18,
    )
    .prop_map(|pairs| pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
}

proptest! {
    #[test]
    fn prop_predict_is_bounded(w in weights(), f in features()) {
        let model = RankingModel::new(WeightTable::new(w).unwrap());
        let score = model.predict(&f);
        prop_assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn prop_predict_monotone_in_positive_weight(
        w in weights(),
        f in features(),
        feature in prop::sample::select(names::ALL.to_vec()),
        weight in 0.01f64..20.0,
        delta in 0.0f64..100.0,
    ) {
        let mut w = w;
        w.insert(feature.to_string(), weight);
        let model = RankingModel::new(WeightTable::new(w).unwrap());

        let base = f.get(feature);
        let lower: FeatureVector = f
            .iter()
            .map(|(k, v)| (k.to_string(), v))
            .chain(std::iter::once((feature.to_string(), base)))
            .collect();
        let higher: FeatureVector = f
            .iter()
            .map(|(k, v)| (k.to_string(), v))
            .chain(std::iter::once((feature.to_string(), base + delta)))
            .collect();
        prop_assert!(model.predict(&higher) >= model.predict(&lower));
    }

    #[test]
    fn prop_degenerate_normalization_is_half(v in -1e6f64..1e6, spread in 0.0f64..0.000999) {
        let range = Some(Range { min: v, max: v + spread });
        prop_assert_eq!(min_max(v, range, 0.0), 0.5);
        prop_assert_eq!(min_max(v + spread, range, 0.0), 0.5);
    }

    #[test]
    fn prop_identical_scores_normalize_to_half(score in 0.0f64..100.0, n in 1usize..12) {
        let set: Vec<Candidate> = (0..n)
            .map(|i| {
                let source = DocumentSource::new("t", "d", "c");
                Candidate::new(format!("d{i}"), source, score, score)
            })
            .collect();
        for fv in FeatureExtractor::default().extract_all(&set, "query") {
            prop_assert_eq!(fv.get(names::BM25_SCORE), 0.5);
            prop_assert_eq!(fv.get(names::KNN_SCORE), 0.5);
            prop_assert_eq!(fv.get(names::POPULARITY), 0.5);
            prop_assert_eq!(fv.get(names::CTR), 0.5);
        }
    }

    #[test]
    fn prop_feature_values_are_finite(
        scores in prop::collection::vec((0.0f64..1e4, 0.0f64..1.0), 1..20),
        query in "[a-z0-9 ]{1,30}",
    ) {
        let set: Vec<Candidate> = scores
            .iter()
            .enumerate()
            .map(|(i, (l, v))| {
                let source = DocumentSource::new("Title 1", "desc", "cat");
                Candidate::new(format!("d{i}"), source, *l, *v)
            })
            .collect();
        for fv in FeatureExtractor::default().extract_all(&set, &query) {
            prop_assert_eq!(fv.len(), names::ALL.len());
            for (_, value) in fv.iter() {
                prop_assert!(value.is_finite());
            }
        }
    }
}
