//! # hybrank-embeddings
//!
//! Query embedding cache for the ranking pipeline.
//!
//! ```text
//! EmbeddingCache (IEmbeddingProvider)
//! ├── LruIndex (access-ordered, bounded)
//! └── dyn IEmbeddingProvider
//!     └── HashingEmbedder (offline fallback)
//! ```

pub mod cache;
pub mod providers;

pub use cache::{EmbeddingCache, LruIndex};
pub use providers::HashingEmbedder;
