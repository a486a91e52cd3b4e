use super::{ConfigError, EmbeddingError, RetrievalError};

/// Top-level error for the ranking pipeline.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum HybrankError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl HybrankError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Whether this error was caused by the caller's arguments rather than a
    /// collaborator or configuration failure.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

pub type HybrankResult<T> = Result<T, HybrankError>;
