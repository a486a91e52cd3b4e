//! Named numeric features describing one candidate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Immutable feature name → value mapping.
///
/// Built once through [`FeatureVectorBuilder`]. Every stored value is finite;
/// boolean features are exactly 0.0 or 1.0. Ordered by name so iteration, and
/// therefore any sum over the vector, is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector {
    features: BTreeMap<String, f64>,
}

impl FeatureVector {
    pub fn builder() -> FeatureVectorBuilder {
        FeatureVectorBuilder::default()
    }

    /// Value of a feature, 0.0 when absent.
    pub fn get(&self, name: &str) -> f64 {
        self.features.get(name).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.features.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.features.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl std::fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FeatureVector{{")?;
        for (i, (name, value)) in self.features.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}={value:.3}")?;
        }
        write!(f, "}}")
    }
}

/// Accumulates features before freezing them into a [`FeatureVector`].
#[derive(Debug, Default)]
pub struct FeatureVectorBuilder {
    features: BTreeMap<String, f64>,
}

impl FeatureVectorBuilder {
    /// Add a real-valued feature. Non-finite values are stored as 0.0.
    pub fn add(mut self, name: impl Into<String>, value: f64) -> Self {
        let value = if value.is_finite() { value } else { 0.0 };
        self.features.insert(name.into(), value);
        self
    }

    /// Add a boolean feature as 1.0 / 0.0.
    pub fn add_flag(self, name: impl Into<String>, value: bool) -> Self {
        self.add(name, if value { 1.0 } else { 0.0 })
    }

    /// Add a count feature.
    pub fn add_count(self, name: impl Into<String>, value: usize) -> Self {
        self.add(name, value as f64)
    }

    pub fn build(self) -> FeatureVector {
        FeatureVector {
            features: self.features,
        }
    }
}

impl FromIterator<(String, f64)> for FeatureVector {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(FeatureVector::builder(), |b, (name, value)| b.add(name, value))
            .build()
    }
}
