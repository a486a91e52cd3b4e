//! Top-level configuration aggregating all sub-configs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    EmbeddingConfig, FeaturesConfig, ObservabilityConfig, RankingConfig, RetrievalConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration. Missing sections and keys take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HybrankConfig {
    pub embedding: EmbeddingConfig,
    pub retrieval: RetrievalConfig,
    pub features: FeaturesConfig,
    pub ranking: RankingConfig,
    pub observability: ObservabilityConfig,
}

impl HybrankConfig {
    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.embedding.cache_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "embedding.cache_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.embedding.dimensions == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "embedding.dimensions".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.retrieval.retrieval_width == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "retrieval.retrieval_width".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.retrieval.lexical_share) {
            return Err(ConfigError::ValidationFailed {
                field: "retrieval.lexical_share".to_string(),
                message: "must be between 0.0 and 1.0".to_string(),
            });
        }
        for (field, boost) in [
            ("retrieval.title_boost", self.retrieval.title_boost),
            ("retrieval.description_boost", self.retrieval.description_boost),
            ("retrieval.category_boost", self.retrieval.category_boost),
            ("retrieval.tie_breaker", self.retrieval.tie_breaker),
        ] {
            if !boost.is_finite() || boost < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be a finite, non-negative number".to_string(),
                });
            }
        }
        crate::tracing_setup::parse_filter(&self.observability.log_level)?;
        for (feature, value) in &self.ranking.weights {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteWeight {
                    feature: feature.clone(),
                    value: *value,
                });
            }
        }
        Ok(())
    }
}
