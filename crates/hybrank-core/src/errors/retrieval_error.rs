/// Retrieval subsystem errors.
///
/// Either branch failing fails the whole retrieval; the pipeline never
/// degrades to single-engine results.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("lexical search failed: {reason}")]
    LexicalSearchFailed { reason: String },

    #[error("vector search failed: {reason}")]
    VectorSearchFailed { reason: String },
}
