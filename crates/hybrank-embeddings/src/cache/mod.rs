//! Query embedding cache.
//!
//! Keys are blake3 hashes of the normalized text (trimmed, lowercased), so
//! "Notebook " and "notebook" share one entry. Values are embedding vectors.
//! On a miss the provider is called outside the lock; concurrent misses for
//! the same text may both compute, and the last write wins.

pub mod lru;

pub use lru::LruIndex;

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use hybrank_core::config::EmbeddingConfig;
use hybrank_core::errors::{ConfigError, EmbeddingError, HybrankError, HybrankResult};
use hybrank_core::models::CacheStats;
use hybrank_core::traits::IEmbeddingProvider;
use tracing::debug;

/// Bounded LRU cache in front of an embedding provider.
pub struct EmbeddingCache {
    provider: Arc<dyn IEmbeddingProvider>,
    entries: Mutex<LruIndex<String, Vec<f32>>>,
    dimensions: usize,
}

impl EmbeddingCache {
    /// Create a cache holding at most `max_size` embeddings of `dimensions` floats.
    pub fn new(
        provider: Arc<dyn IEmbeddingProvider>,
        max_size: usize,
        dimensions: usize,
    ) -> HybrankResult<Self> {
        let capacity = NonZeroUsize::new(max_size).ok_or_else(|| ConfigError::ValidationFailed {
            field: "embedding.cache_size".to_string(),
            message: "must be greater than 0".to_string(),
        })?;

        debug!(
            provider = provider.name(),
            max_size, dimensions, "embedding cache initialized"
        );

        Ok(Self {
            provider,
            entries: Mutex::new(LruIndex::new(capacity)),
            dimensions,
        })
    }

    pub fn from_config(
        provider: Arc<dyn IEmbeddingProvider>,
        config: &EmbeddingConfig,
    ) -> HybrankResult<Self> {
        Self::new(provider, config.cache_size, config.dimensions)
    }

    /// Return the embedding for `text`, computing and caching it on a miss.
    ///
    /// The provider receives the normalized text. Fails with
    /// `InvalidInput` when the text is blank.
    pub fn get_or_compute(&self, text: &str) -> HybrankResult<Vec<f32>> {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return Err(HybrankError::invalid_input(
                "text to embed is empty after trimming",
            ));
        }
        let key = cache_key(&normalized);

        if let Some(vec) = self.entries().get(&key) {
            debug!(key = %&key[..12], "embedding cache hit");
            return Ok(vec.clone());
        }

        let embedding = self.provider.embed(&normalized)?;
        if embedding.len() != self.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: embedding.len(),
            }
            .into());
        }

        if let Some((evicted, _)) = self.entries().insert(key, embedding.clone()) {
            debug!(evicted = %&evicted[..12], "embedding cache evicted entry");
        }

        Ok(embedding)
    }

    /// Embed several texts, one vector per input in order.
    ///
    /// Runs sequential `get_or_compute` calls and stops at the first failure.
    pub fn embed_batch(&self, texts: &[String]) -> HybrankResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.get_or_compute(t)).collect()
    }

    /// Drop every cached embedding.
    pub fn clear(&self) {
        self.entries().clear();
        debug!("embedding cache cleared");
    }

    pub fn stats(&self) -> CacheStats {
        let entries = self.entries();
        CacheStats {
            current_size: entries.len(),
            max_size: entries.capacity(),
        }
    }

    /// Whether `text` currently has a cached embedding. Does not touch recency.
    pub fn contains(&self, text: &str) -> bool {
        let normalized = normalize(text);
        !normalized.is_empty() && self.entries().contains(&cache_key(&normalized))
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    // The index is never left half-updated, so a poisoned lock is still usable.
    fn entries(&self) -> MutexGuard<'_, LruIndex<String, Vec<f32>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Use the cache anywhere a provider is expected.
impl IEmbeddingProvider for EmbeddingCache {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.get_or_compute(text).map_err(|e| match e {
            HybrankError::Embedding(inner) => inner,
            other => EmbeddingError::InferenceFailed {
                reason: other.to_string(),
            },
        })
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "cached-embedding-provider"
    }

    fn is_available(&self) -> bool {
        self.provider.is_available()
    }
}

/// Trim and lowercase.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

fn cache_key(normalized: &str) -> String {
    blake3::hash(normalized.as_bytes()).to_hex().to_string()
}
