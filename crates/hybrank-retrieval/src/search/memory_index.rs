//! In-process search index: field-weighted BM25 plus brute-force cosine kNN.
//!
//! Serves as the reference `ISearchIndex` for tests, benches and small
//! catalogs. Scores follow the conventions of a typical search engine:
//! best-fields BM25 for text, `(1 + cos) / 2` for vectors.

use std::collections::HashMap;

use hybrank_core::errors::{HybrankResult, RetrievalError};
use hybrank_core::models::{DocumentSource, IndexHit, LexicalQuery, SearchField, VectorQuery};
use hybrank_core::traits::{IEmbeddingProvider, ISearchIndex};
use tracing::debug;

const BM25_K1: f64 = 1.2;
const BM25_B: f64 = 0.75;

struct IndexedDoc {
    id: String,
    source: DocumentSource,
    vector: Vec<f32>,
    /// Lowercased tokens per text field.
    terms: HashMap<SearchField, Vec<String>>,
}

/// Per-field corpus statistics for BM25.
#[derive(Default)]
struct FieldStats {
    avg_len: f64,
    doc_freq: HashMap<String, usize>,
}

#[derive(Default)]
pub struct MemoryIndex {
    docs: Vec<IndexedDoc>,
    dimensions: Option<usize>,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index `docs`, embedding each one's title and description through
    /// `provider`.
    pub fn from_documents(
        provider: &dyn IEmbeddingProvider,
        docs: impl IntoIterator<Item = (String, DocumentSource)>,
    ) -> HybrankResult<Self> {
        let mut index = Self::new();
        for (id, source) in docs {
            let text = format!("{} {}", source.title, source.description);
            let vector = provider.embed(&text)?;
            index.insert(id, source, vector)?;
        }
        debug!(
            documents = index.len(),
            provider = provider.name(),
            "memory index built"
        );
        Ok(index)
    }

    /// Add a document with a precomputed vector. Every vector in the index
    /// must share one dimension. Re-inserting an id replaces it.
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        source: DocumentSource,
        vector: Vec<f32>,
    ) -> Result<(), RetrievalError> {
        match self.dimensions {
            Some(d) if d != vector.len() => {
                return Err(RetrievalError::VectorSearchFailed {
                    reason: format!(
                        "document vector has {} dimensions, index expects {d}",
                        vector.len()
                    ),
                });
            }
            _ => self.dimensions = Some(vector.len()),
        }

        let terms = [SearchField::Title, SearchField::Description, SearchField::Category]
            .into_iter()
            .map(|f| (f, tokenize(f.text(&source))))
            .collect();
        let id = id.into();
        let doc = IndexedDoc {
            id,
            source,
            vector,
            terms,
        };
        match self.docs.iter().position(|d| d.id == doc.id) {
            Some(pos) => self.docs[pos] = doc,
            None => self.docs.push(doc),
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    fn field_stats(&self, field: SearchField) -> FieldStats {
        if self.docs.is_empty() {
            return FieldStats::default();
        }
        let mut stats = FieldStats::default();
        let mut total_len = 0usize;
        for doc in &self.docs {
            let terms = doc.terms.get(&field).map(Vec::as_slice).unwrap_or(&[]);
            total_len += terms.len();
            let mut seen: Vec<&str> = Vec::new();
            for t in terms {
                if !seen.contains(&t.as_str()) {
                    seen.push(t);
                    *stats.doc_freq.entry(t.clone()).or_insert(0) += 1;
                }
            }
        }
        stats.avg_len = total_len as f64 / self.docs.len() as f64;
        stats
    }

    fn bm25(
        &self,
        doc: &IndexedDoc,
        field: SearchField,
        query: &[String],
        stats: &FieldStats,
    ) -> f64 {
        let terms = doc.terms.get(&field).map(Vec::as_slice).unwrap_or(&[]);
        if terms.is_empty() || stats.avg_len == 0.0 {
            return 0.0;
        }
        let n = self.docs.len() as f64;
        let len_norm = 1.0 - BM25_B + BM25_B * terms.len() as f64 / stats.avg_len;
        query
            .iter()
            .map(|q| {
                let tf = terms.iter().filter(|t| *t == q).count() as f64;
                if tf == 0.0 {
                    return 0.0;
                }
                let df = stats.doc_freq.get(q).copied().unwrap_or(0) as f64;
                let idf = (1.0 + (n - df + 0.5) / (df + 0.5)).ln();
                idf * tf * (BM25_K1 + 1.0) / (tf + BM25_K1 * len_norm)
            })
            .sum()
    }

    fn passes(doc: &IndexedDoc, filter: Option<&str>) -> bool {
        filter.map_or(true, |c| doc.source.category == c)
    }
}

impl ISearchIndex for MemoryIndex {
    fn lexical_search(&self, query: &LexicalQuery) -> Result<Vec<IndexHit>, RetrievalError> {
        let query_terms = tokenize(&query.text);
        if query_terms.is_empty() {
            return Ok(Vec::new());
        }
        let stats: Vec<(SearchField, f64, FieldStats)> = query
            .fields
            .iter()
            .map(|fb| (fb.field, fb.boost, self.field_stats(fb.field)))
            .collect();

        let mut scored: Vec<(usize, f64)> = self
            .docs
            .iter()
            .enumerate()
            .filter(|(_, d)| Self::passes(d, query.category_filter.as_deref()))
            .filter_map(|(i, doc)| {
                let field_scores: Vec<f64> = stats
                    .iter()
                    .map(|(field, boost, s)| boost * self.bm25(doc, *field, &query_terms, s))
                    .collect();
                let best = field_scores.iter().copied().fold(0.0f64, f64::max);
                let rest: f64 = field_scores.iter().sum::<f64>() - best;
                let score = best + query.tie_breaker * rest;
                (score > 0.0).then_some((i, score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(query.size);
        Ok(self.hits(scored))
    }

    fn vector_search(&self, query: &VectorQuery) -> Result<Vec<IndexHit>, RetrievalError> {
        if let Some(d) = self.dimensions {
            if d != query.vector.len() {
                return Err(RetrievalError::VectorSearchFailed {
                    reason: format!(
                        "query vector has {} dimensions, index expects {d}",
                        query.vector.len()
                    ),
                });
            }
        }

        let mut scored: Vec<(usize, f64)> = self
            .docs
            .iter()
            .enumerate()
            .filter(|(_, d)| Self::passes(d, query.category_filter.as_deref()))
            .map(|(i, doc)| (i, (1.0 + cosine_similarity(&query.vector, &doc.vector)) / 2.0))
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(query.k);
        Ok(self.hits(scored))
    }
}

impl MemoryIndex {
    fn hits(&self, scored: Vec<(usize, f64)>) -> Vec<IndexHit> {
        scored
            .into_iter()
            .map(|(i, score)| IndexHit {
                id: self.docs[i].id.clone(),
                source: self.docs[i].source.clone(),
                score: Some(score),
            })
            .collect()
    }
}

/// Lowercase alphanumeric tokens.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Cosine similarity; 0 when either vector has zero norm.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let (mut dot, mut na, mut nb) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        na += x * x;
        nb += y * y;
    }
    if na == 0.0 || nb == 0.0 {
        return 0.0;
    }
    dot / (na.sqrt() * nb.sqrt())
}
