use crate::errors::RetrievalError;
use crate::models::{IndexHit, LexicalQuery, VectorQuery};

/// A document index able to answer lexical and nearest-neighbor queries.
///
/// Both calls return hits ranked best-first. An index with no matching
/// documents returns an empty list, never an error.
pub trait ISearchIndex: Send + Sync {
    /// BM25-style relevance search over boosted text fields.
    fn lexical_search(&self, query: &LexicalQuery) -> Result<Vec<IndexHit>, RetrievalError>;

    /// Top-k documents nearest to the query vector under cosine similarity.
    fn vector_search(&self, query: &VectorQuery) -> Result<Vec<IndexHit>, RetrievalError>;
}
