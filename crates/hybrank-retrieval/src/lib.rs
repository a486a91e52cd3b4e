//! # hybrank-retrieval
//!
//! Hybrid retrieval and re-ranking.
//!
//! ```text
//! SearchPipeline
//! ├── RetrievalFusion
//! │   ├── EmbeddingCache ── dyn IEmbeddingProvider
//! │   ├── dyn ISearchIndex (lexical + vector branches, run in parallel)
//! │   └── dyn ScoreAttribution
//! ├── FeatureExtractor (set statistics once, candidates in parallel)
//! └── RankingModel (weights · features → logistic → [0, 100])
//! ```

pub mod features;
pub mod pipeline;
pub mod ranking;
pub mod search;

pub use features::{FeatureExtractor, FeatureGroup};
pub use pipeline::{SearchPipeline, SearchReport, StageTimings};
pub use ranking::{RankingModel, WeightTable};
pub use search::{MemoryIndex, RetrievalFusion, ScoreAttribution};
