//! Contracts for the external collaborators the ranking core consumes.

pub mod embedding;
pub mod search_index;

pub use embedding::IEmbeddingProvider;
pub use search_index::ISearchIndex;
