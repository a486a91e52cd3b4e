//! Weight table for the linear ranking model.

use std::collections::BTreeMap;

use hybrank_core::errors::ConfigError;

use crate::features::names;

/// Hand-tuned defaults. Exact title matches dominate, followed by term
/// coverage, semantic similarity and first-word matches.
const DEFAULT_WEIGHTS: [(&str, f64); 18] = [
    (names::BM25_SCORE, 4.0),
    (names::KNN_SCORE, 5.0),
    (names::HYBRID_SCORE, 3.0),
    (names::EXACT_MATCH_TITLE, 8.0),
    (names::EXACT_MATCH_DESCRIPTION, 2.0),
    (names::EXACT_MATCH_CATEGORY, 1.5),
    (names::TERM_COVERAGE, 6.0),
    (names::QUERY_LENGTH, 0.5),
    (names::TITLE_LENGTH, 0.01),
    (names::DESCRIPTION_LENGTH, 0.005),
    (names::QUERY_TITLE_RATIO, 1.0),
    (names::FIRST_WORD_MATCH, 4.0),
    (names::QUERY_HAS_NUMBERS, 1.0),
    (names::TITLE_HAS_NUMBERS, 0.5),
    (names::HAS_KNOWN_BRAND, 3.0),
    (names::POPULARITY, 2.0),
    (names::QUALITY, 1.5),
    (names::CTR, 2.5),
];

/// Immutable feature name → weight mapping with only finite weights.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable {
    weights: BTreeMap<String, f64>,
}

impl Default for WeightTable {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS
                .iter()
                .map(|(name, w)| (name.to_string(), *w))
                .collect(),
        }
    }
}

impl WeightTable {
    /// Validate a caller-supplied table.
    pub fn new(weights: BTreeMap<String, f64>) -> Result<Self, ConfigError> {
        if let Some((feature, value)) = weights.iter().find(|(_, w)| !w.is_finite()) {
            return Err(ConfigError::NonFiniteWeight {
                feature: feature.clone(),
                value: *value,
            });
        }
        Ok(Self { weights })
    }

    /// Weight of a feature, 0 when unconfigured.
    pub fn get(&self, feature: &str) -> f64 {
        self.weights.get(feature).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
