//! RankingModel: linear scoring over named features with a logistic squash.
//!
//! `score = 100 / (1 + e^(-x / 10))` where `x` is the dot product of the
//! feature vector with the weight table. The temperature of 10 keeps typical
//! linear scores (roughly -20..40) away from saturation.

pub mod weights;

use std::cmp::Ordering;

use hybrank_core::config::RankingConfig;
use hybrank_core::constants::{EXPLANATION_TOP_N, MAX_RANKING_SCORE, SIGMOID_TEMPERATURE};
use hybrank_core::errors::ConfigError;
use hybrank_core::models::{
    FeatureContribution, FeatureVector, ModelExplanation, PredictionExplanation, WeightEntry,
    WeightImportance,
};
use tracing::warn;

pub use weights::WeightTable;

#[derive(Debug, Clone, Default)]
pub struct RankingModel {
    weights: WeightTable,
}

impl RankingModel {
    pub fn new(weights: WeightTable) -> Self {
        Self { weights }
    }

    /// Empty configured weights select the built-in table.
    pub fn from_config(config: &RankingConfig) -> Result<Self, ConfigError> {
        if config.weights.is_empty() {
            return Ok(Self::default());
        }
        Ok(Self::new(WeightTable::new(config.weights.clone())?))
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// Linear score before activation. Sums only over features present in
    /// the vector.
    pub fn linear_score(&self, features: &FeatureVector) -> f64 {
        features
            .iter()
            .map(|(name, value)| value * self.weights.get(name))
            .sum()
    }

    /// Final score in `[0, 100]`.
    pub fn predict(&self, features: &FeatureVector) -> f64 {
        let x = self.linear_score(features);
        if x.is_nan() {
            warn!("linear score is NaN; using neutral score");
            return MAX_RANKING_SCORE / 2.0;
        }
        MAX_RANKING_SCORE / (1.0 + (-x / SIGMOID_TEMPERATURE).exp())
    }

    pub fn predict_batch(&self, features: &[FeatureVector]) -> Vec<f64> {
        features.iter().map(|f| self.predict(f)).collect()
    }

    /// Top contributors to a prediction, largest absolute contribution first.
    pub fn explain(&self, features: &FeatureVector, final_score: f64) -> PredictionExplanation {
        let mut contributions: Vec<FeatureContribution> = features
            .iter()
            .map(|(name, value)| {
                let weight = self.weights.get(name);
                FeatureContribution {
                    feature: name.to_string(),
                    value,
                    weight,
                    contribution: value * weight,
                }
            })
            .collect();
        contributions.sort_by(|a, b| {
            b.contribution
                .abs()
                .partial_cmp(&a.contribution.abs())
                .unwrap_or(Ordering::Equal)
        });
        contributions.truncate(EXPLANATION_TOP_N);
        PredictionExplanation {
            final_score,
            contributions,
        }
    }

    /// All configured weights, heaviest first.
    pub fn explain_model(&self) -> ModelExplanation {
        let mut weights: Vec<WeightEntry> = self
            .weights
            .iter()
            .map(|(feature, weight)| WeightEntry {
                feature: feature.to_string(),
                weight,
                importance: WeightImportance::from_weight(weight),
            })
            .collect();
        weights.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(Ordering::Equal));
        ModelExplanation { weights }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn fv(pairs: &[(&str, f64)]) -> FeatureVector {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn model(pairs: &[(&str, f64)]) -> RankingModel {
        let w: BTreeMap<String, f64> = pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        RankingModel::new(WeightTable::new(w).unwrap())
    }

    #[test]
    fn zero_linear_score_is_fifty() {
        assert_eq!(RankingModel::default().predict(&FeatureVector::default()), 50.0);
    }

    #[test]
    fn activation_constant() {
        let m = model(&[("a", 1.0)]);
        let expected = 100.0 / (1.0 + (-1.0f64).exp());
        assert!((m.predict(&fv(&[("a", 10.0)])) - expected).abs() < 1e-9);
    }

    #[test]
    fn missing_weight_is_ignored() {
        let m = model(&[("a", 2.0)]);
        assert_eq!(
            m.predict(&fv(&[("a", 1.0), ("unweighted", 1000.0)])),
            m.predict(&fv(&[("a", 1.0)]))
        );
    }

    #[test]
    fn saturates_within_bounds() {
        let m = model(&[("a", 1.0)]);
        assert_eq!(m.predict(&fv(&[("a", 1e6)])), 100.0);
        assert_eq!(m.predict(&fv(&[("a", -1e6)])), 0.0);
    }

    #[test]
    fn nan_linear_score_is_neutral() {
        let m = model(&[("a", f64::MAX), ("b", f64::MAX)]);
        // +inf + -inf
        let s = m.predict(&fv(&[("a", 10.0), ("b", -10.0)]));
        assert_eq!(s, 50.0);
    }

    #[test]
    fn from_config_empty_uses_defaults() {
        let m = RankingModel::from_config(&RankingConfig::default()).unwrap();
        assert_eq!(m.weights(), &WeightTable::default());
    }

    #[test]
    fn from_config_rejects_nan() {
        let mut config = RankingConfig::default();
        config.weights.insert("ctr".into(), f64::NAN);
        assert!(RankingModel::from_config(&config).is_err());
    }

    #[test]
    fn explain_orders_by_magnitude_and_truncates() {
        let m = RankingModel::default();
        let features: FeatureVector = crate::features::names::ALL
            .iter()
            .map(|n| (n.to_string(), 1.0))
            .collect();
        let report = m.explain(&features, 99.0);
        assert_eq!(report.contributions.len(), EXPLANATION_TOP_N);
        assert_eq!(report.contributions[0].feature, "exact_match_title");
        for pair in report.contributions.windows(2) {
            assert!(pair[0].contribution.abs() >= pair[1].contribution.abs());
        }
    }

    #[test]
    fn explain_ranks_negative_contributions_by_magnitude() {
        let m = model(&[("a", 1.0), ("b", -5.0)]);
        let report = m.explain(&fv(&[("a", 1.0), ("b", 1.0)]), 0.0);
        assert_eq!(report.contributions[0].feature, "b");
    }

    #[test]
    fn explain_model_sorted_descending() {
        let report = RankingModel::default().explain_model();
        assert_eq!(report.weights.len(), 18);
        assert_eq!(report.weights[0].feature, "exact_match_title");
        assert_eq!(report.weights[0].importance, WeightImportance::Critical);
        for pair in report.weights.windows(2) {
            assert!(pair[0].weight >= pair[1].weight);
        }
    }
}
