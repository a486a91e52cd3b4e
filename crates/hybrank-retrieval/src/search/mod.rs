//! RetrievalFusion: lexical + vector retrieval, deduplicated into candidates.

pub mod attribution;
pub mod memory_index;

use std::collections::HashMap;
use std::sync::Arc;

use hybrank_core::config::RetrievalConfig;
use hybrank_core::errors::HybrankResult;
use hybrank_core::models::{
    Candidate, DocumentSource, FieldBoost, IndexHit, LexicalQuery, SearchField, VectorQuery,
};
use hybrank_core::traits::ISearchIndex;
use hybrank_embeddings::EmbeddingCache;
use tracing::debug;

pub use attribution::{FusedSplit, PerBranch, ScoreAttribution, SubScores};
pub use memory_index::MemoryIndex;

/// Per-document state accumulated while merging the two branches.
struct Merged {
    source: DocumentSource,
    lexical: Option<f64>,
    vector: Option<f64>,
}

/// Runs both retrieval branches against the index and fuses their hits.
///
/// A document qualifies when either branch returns it. Hits are merged in
/// rank order, alternating lexical then vector at each rank, so candidate
/// order is deterministic and reflects both branches.
pub struct RetrievalFusion {
    index: Arc<dyn ISearchIndex>,
    embeddings: Arc<EmbeddingCache>,
    attribution: Box<dyn ScoreAttribution>,
    config: RetrievalConfig,
}

impl RetrievalFusion {
    pub fn new(
        index: Arc<dyn ISearchIndex>,
        embeddings: Arc<EmbeddingCache>,
        config: RetrievalConfig,
    ) -> Self {
        let attribution = attribution::from_config(&config);
        Self {
            index,
            embeddings,
            attribution,
            config,
        }
    }

    /// Replace the sub-score attribution strategy.
    pub fn with_attribution(mut self, attribution: Box<dyn ScoreAttribution>) -> Self {
        self.attribution = attribution;
        self
    }

    pub fn embeddings(&self) -> &EmbeddingCache {
        &self.embeddings
    }

    /// Retrieve candidates for `query_text`, optionally restricted to one
    /// category. An empty result is not an error.
    pub fn retrieve(
        &self,
        query_text: &str,
        category_filter: Option<&str>,
    ) -> HybrankResult<Vec<Candidate>> {
        let vector = self.embeddings.get_or_compute(query_text)?;
        let category_filter = category_filter
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        let lexical_query = self.lexical_query(query_text, category_filter.clone());
        let vector_query = VectorQuery {
            vector,
            k: self.config.retrieval_width,
            category_filter,
        };

        let (lexical_hits, vector_hits) = rayon::join(
            || self.index.lexical_search(&lexical_query),
            || self.index.vector_search(&vector_query),
        );
        let lexical_hits = lexical_hits?;
        let vector_hits = vector_hits?;

        debug!(
            lexical = lexical_hits.len(),
            vector = vector_hits.len(),
            "retrieval branches returned"
        );

        Ok(self.fuse(lexical_hits, vector_hits))
    }

    fn lexical_query(&self, text: &str, category_filter: Option<String>) -> LexicalQuery {
        LexicalQuery {
            text: text.to_string(),
            fields: vec![
                FieldBoost {
                    field: SearchField::Title,
                    boost: self.config.title_boost,
                },
                FieldBoost {
                    field: SearchField::Description,
                    boost: self.config.description_boost,
                },
                FieldBoost {
                    field: SearchField::Category,
                    boost: self.config.category_boost,
                },
            ],
            tie_breaker: self.config.tie_breaker,
            size: self.config.retrieval_width,
            category_filter,
        }
    }

    /// Merge both branches into unique candidates.
    ///
    /// The first hit seen for an id supplies its source. Within one branch a
    /// repeated id keeps its first (highest-ranked) score.
    pub fn fuse(&self, lexical: Vec<IndexHit>, vector: Vec<IndexHit>) -> Vec<Candidate> {
        let mut order: Vec<String> = Vec::with_capacity(lexical.len() + vector.len());
        let mut merged: HashMap<String, Merged> = HashMap::with_capacity(order.capacity());

        let mut lexical = lexical.into_iter();
        let mut vector = vector.into_iter();
        loop {
            let l = lexical.next();
            let v = vector.next();
            if l.is_none() && v.is_none() {
                break;
            }
            if let Some(hit) = l {
                absorb(&mut order, &mut merged, hit, Branch::Lexical);
            }
            if let Some(hit) = v {
                absorb(&mut order, &mut merged, hit, Branch::Vector);
            }
        }

        let candidates: Vec<Candidate> = order
            .into_iter()
            .filter_map(|id| {
                let m = merged.remove(&id)?;
                let scores = self.attribution.attribute(m.lexical, m.vector);
                Some(Candidate::new(id, m.source, scores.lexical, scores.vector))
            })
            .collect();

        debug!(
            candidates = candidates.len(),
            attribution = self.attribution.name(),
            "fused retrieval candidates"
        );
        candidates
    }
}

#[derive(Clone, Copy)]
enum Branch {
    Lexical,
    Vector,
}

fn absorb(
    order: &mut Vec<String>,
    merged: &mut HashMap<String, Merged>,
    hit: IndexHit,
    branch: Branch,
) {
    let score = hit.score.unwrap_or(0.0);
    let entry = merged.entry(hit.id.clone()).or_insert_with(|| {
        order.push(hit.id);
        Merged {
            source: hit.source,
            lexical: None,
            vector: None,
        }
    });
    let slot = match branch {
        Branch::Lexical => &mut entry.lexical,
        Branch::Vector => &mut entry.vector,
    };
    if slot.is_none() {
        *slot = Some(score);
    }
}
