//! SearchPipeline: retrieve → extract features → score → sort → truncate.

use std::sync::Arc;
use std::time::Instant;

use hybrank_core::config::HybrankConfig;
use hybrank_core::errors::{HybrankError, HybrankResult};
use hybrank_core::models::{CacheStats, Candidate, ModelExplanation, PredictionExplanation};
use hybrank_core::traits::{IEmbeddingProvider, ISearchIndex};
use hybrank_embeddings::EmbeddingCache;
use serde::Serialize;
use tracing::{debug, info};

use crate::features::FeatureExtractor;
use crate::ranking::RankingModel;
use crate::search::RetrievalFusion;

/// Wall-clock time spent in each stage, in milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StageTimings {
    pub retrieval_ms: f64,
    pub features_ms: f64,
    pub ranking_ms: f64,
    pub total_ms: f64,
}

/// Ranked results plus timings.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub results: Vec<Candidate>,
    /// Candidates retrieved before truncation.
    pub retrieved: usize,
    pub timings: StageTimings,
}

pub struct SearchPipeline {
    retrieval: RetrievalFusion,
    extractor: FeatureExtractor,
    model: RankingModel,
}

impl SearchPipeline {
    pub fn new(
        retrieval: RetrievalFusion,
        extractor: FeatureExtractor,
        model: RankingModel,
    ) -> Self {
        Self {
            retrieval,
            extractor,
            model,
        }
    }

    /// Wire a pipeline from config around an index and an embedding provider.
    pub fn from_config(
        config: &HybrankConfig,
        index: Arc<dyn ISearchIndex>,
        provider: Arc<dyn IEmbeddingProvider>,
    ) -> HybrankResult<Self> {
        config.validate()?;
        let cache = Arc::new(EmbeddingCache::from_config(provider, &config.embedding)?);
        let retrieval = RetrievalFusion::new(index, cache, config.retrieval.clone());
        let extractor = FeatureExtractor::new(config.features.clone());
        let model = RankingModel::from_config(&config.ranking)?;
        Ok(Self::new(retrieval, extractor, model))
    }

    /// Top `top_k` candidates for `query`, best first. Equal scores keep
    /// retrieval order.
    pub fn search(
        &self,
        query: &str,
        top_k: usize,
        category_filter: Option<&str>,
    ) -> HybrankResult<Vec<Candidate>> {
        self.search_with_report(query, top_k, category_filter)
            .map(|report| report.results)
    }

    pub fn search_with_report(
        &self,
        query: &str,
        top_k: usize,
        category_filter: Option<&str>,
    ) -> HybrankResult<SearchReport> {
        if query.trim().is_empty() {
            return Err(HybrankError::invalid_input("query text is empty"));
        }
        if top_k == 0 {
            return Err(HybrankError::invalid_input("top_k must be positive"));
        }

        let start = Instant::now();
        let mut timings = StageTimings::default();

        let mut candidates = self.retrieval.retrieve(query, category_filter)?;
        timings.retrieval_ms = elapsed_ms(start);
        let retrieved = candidates.len();

        if candidates.is_empty() {
            timings.total_ms = elapsed_ms(start);
            info!(query, "no candidates retrieved");
            return Ok(SearchReport {
                results: candidates,
                retrieved,
                timings,
            });
        }

        let stage = Instant::now();
        let features = self.extractor.extract_all(&candidates, query);
        timings.features_ms = elapsed_ms(stage);

        let stage = Instant::now();
        for (candidate, fv) in candidates.iter_mut().zip(features) {
            let score = self.model.predict(&fv);
            candidate.set_features(fv);
            candidate.set_score(score);
        }
        candidates.sort_by(|a, b| b.score().total_cmp(&a.score()));
        candidates.truncate(top_k);
        timings.ranking_ms = elapsed_ms(stage);
        timings.total_ms = elapsed_ms(start);

        if let Some(best) = candidates.first() {
            debug!(doc_id = best.doc_id(), score = best.score(), "top candidate");
        }
        info!(
            query,
            retrieved,
            returned = candidates.len(),
            total_ms = timings.total_ms,
            "search complete"
        );

        Ok(SearchReport {
            results: candidates,
            retrieved,
            timings,
        })
    }

    pub fn explain_model(&self) -> ModelExplanation {
        self.model.explain_model()
    }

    /// Explain a ranked candidate. `InvalidInput` if it has not been through
    /// feature extraction.
    pub fn explain_prediction(
        &self,
        candidate: &Candidate,
    ) -> HybrankResult<PredictionExplanation> {
        let features = candidate.features().ok_or_else(|| {
            HybrankError::invalid_input(format!(
                "candidate {} has no features; rank it first",
                candidate.doc_id()
            ))
        })?;
        Ok(self.model.explain(features, candidate.score()))
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.retrieval.embeddings().stats()
    }

    pub fn model(&self) -> &RankingModel {
        &self.model
    }
}

fn elapsed_ms(since: Instant) -> f64 {
    since.elapsed().as_secs_f64() * 1000.0
}
