pub mod cache_stats;
pub mod candidate;
pub mod document;
pub mod explanation;
pub mod feature_vector;
pub mod query;

pub use cache_stats::CacheStats;
pub use candidate::Candidate;
pub use document::DocumentSource;
pub use explanation::{
    FeatureContribution, ModelExplanation, PredictionExplanation, WeightEntry, WeightImportance,
};
pub use feature_vector::{FeatureVector, FeatureVectorBuilder};
pub use query::{FieldBoost, IndexHit, LexicalQuery, SearchField, VectorQuery};
