use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Ranking model configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Feature name → weight. Empty means the built-in default table.
    pub weights: BTreeMap<String, f64>,
}
