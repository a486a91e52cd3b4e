//! Shared fixtures and collaborator doubles for hybrank tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use hybrank_core::errors::{EmbeddingError, RetrievalError};
use hybrank_core::models::{DocumentSource, IndexHit, LexicalQuery, VectorQuery};
use hybrank_core::traits::{IEmbeddingProvider, ISearchIndex};
use serde::Deserialize;

const CATALOG_JSON: &str = include_str!("../fixtures/catalog.json");

#[derive(Deserialize)]
struct CatalogEntry {
    id: String,
    #[serde(flatten)]
    source: DocumentSource,
}

/// Ten-product catalog. Exactly one title contains "notebook".
pub fn load_catalog() -> Vec<(String, DocumentSource)> {
    let entries: Vec<CatalogEntry> =
        serde_json::from_str(CATALOG_JSON).expect("catalog fixture must be valid JSON");
    entries.into_iter().map(|e| (e.id, e.source)).collect()
}

/// Shorthand for an index hit over a bare document.
pub fn hit(id: &str, title: &str, score: f64) -> IndexHit {
    IndexHit {
        id: id.to_string(),
        source: DocumentSource::new(title, "", ""),
        score: Some(score),
    }
}

// ---------------------------------------------------------------------------
// Embedding providers
// ---------------------------------------------------------------------------

/// Deterministic embedder that counts how often it is called.
pub struct CountingEmbedder {
    dimensions: usize,
    calls: AtomicUsize,
    seen: Mutex<Vec<String>>,
}

impl CountingEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Texts passed to `embed`, in call order.
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl IEmbeddingProvider for CountingEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(text.to_string());
        let mut v = vec![0.0f32; self.dimensions];
        for (i, b) in text.bytes().enumerate() {
            v[(i + b as usize) % self.dimensions] += 1.0;
        }
        Ok(v)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "counting-embedder"
    }
}

/// Embedder whose every call fails.
pub struct FailingEmbedder;

impl IEmbeddingProvider for FailingEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Err(EmbeddingError::InferenceFailed {
            reason: "model offline".to_string(),
        })
    }

    fn dimensions(&self) -> usize {
        8
    }

    fn name(&self) -> &str {
        "failing-embedder"
    }

    fn is_available(&self) -> bool {
        false
    }
}

// ---------------------------------------------------------------------------
// Search indexes
// ---------------------------------------------------------------------------

/// Index returning canned hits per branch, honoring size and category filter.
#[derive(Default)]
pub struct StaticIndex {
    pub lexical: Vec<IndexHit>,
    pub vector: Vec<IndexHit>,
    lexical_calls: AtomicUsize,
    vector_calls: AtomicUsize,
}

impl StaticIndex {
    pub fn new(lexical: Vec<IndexHit>, vector: Vec<IndexHit>) -> Self {
        Self {
            lexical,
            vector,
            ..Default::default()
        }
    }

    pub fn lexical_calls(&self) -> usize {
        self.lexical_calls.load(Ordering::SeqCst)
    }

    pub fn vector_calls(&self) -> usize {
        self.vector_calls.load(Ordering::SeqCst)
    }

    fn select(hits: &[IndexHit], size: usize, category: Option<&str>) -> Vec<IndexHit> {
        hits.iter()
            .filter(|h| category.map_or(true, |c| h.source.category == c))
            .take(size)
            .cloned()
            .collect()
    }
}

impl ISearchIndex for StaticIndex {
    fn lexical_search(&self, query: &LexicalQuery) -> Result<Vec<IndexHit>, RetrievalError> {
        self.lexical_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Self::select(
            &self.lexical,
            query.size,
            query.category_filter.as_deref(),
        ))
    }

    fn vector_search(&self, query: &VectorQuery) -> Result<Vec<IndexHit>, RetrievalError> {
        self.vector_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Self::select(
            &self.vector,
            query.k,
            query.category_filter.as_deref(),
        ))
    }
}

/// Which branch of a [`FailingIndex`] fails.
#[derive(Debug, Clone, Copy)]
pub enum FailingBranch {
    Lexical,
    Vector,
}

/// Index with one failing branch; the other returns a single hit.
pub struct FailingIndex {
    pub branch: FailingBranch,
}

impl ISearchIndex for FailingIndex {
    fn lexical_search(&self, _query: &LexicalQuery) -> Result<Vec<IndexHit>, RetrievalError> {
        match self.branch {
            FailingBranch::Lexical => Err(RetrievalError::LexicalSearchFailed {
                reason: "connection refused".to_string(),
            }),
            FailingBranch::Vector => Ok(vec![hit("doc_1", "Notebook", 1.0)]),
        }
    }

    fn vector_search(&self, _query: &VectorQuery) -> Result<Vec<IndexHit>, RetrievalError> {
        match self.branch {
            FailingBranch::Vector => Err(RetrievalError::VectorSearchFailed {
                reason: "knn plugin timeout".to_string(),
            }),
            FailingBranch::Lexical => Ok(vec![hit("doc_1", "Notebook", 1.0)]),
        }
    }
}
