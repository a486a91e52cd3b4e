use serde::{Deserialize, Serialize};

use super::defaults;

/// Feature extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesConfig {
    /// Brand names that flag a query as brand-specific.
    pub known_brands: Vec<String>,
    /// Popularity assumed when a document carries none.
    pub default_popularity: f64,
    /// Rating assumed when a document carries none.
    pub default_quality: f64,
    /// Click-through rate assumed when a document carries none.
    pub default_ctr: f64,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            known_brands: defaults::DEFAULT_KNOWN_BRANDS
                .iter()
                .map(|b| b.to_string())
                .collect(),
            default_popularity: defaults::DEFAULT_POPULARITY,
            default_quality: defaults::DEFAULT_QUALITY,
            default_ctr: defaults::DEFAULT_CTR,
        }
    }
}
