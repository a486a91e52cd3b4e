//! Error handling for hybrank.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod embedding_error;
pub mod hybrank_error;
pub mod retrieval_error;

pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use hybrank_error::{HybrankError, HybrankResult};
pub use retrieval_error::RetrievalError;
