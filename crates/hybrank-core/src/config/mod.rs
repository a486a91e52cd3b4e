//! Configuration system for hybrank.
//! TOML-based; every section falls back to compiled defaults.

pub mod defaults;
pub mod embedding_config;
pub mod features_config;
pub mod hybrank_config;
pub mod observability_config;
pub mod ranking_config;
pub mod retrieval_config;

pub use embedding_config::EmbeddingConfig;
pub use features_config::FeaturesConfig;
pub use hybrank_config::HybrankConfig;
pub use observability_config::ObservabilityConfig;
pub use ranking_config::RankingConfig;
pub use retrieval_config::{RetrievalConfig, ScoreAttributionKind};
