//! FeatureExtractor: the named feature vector behind each ranking decision.
//!
//! Features fall into five groups (see [`names::FeatureGroup`]):
//! relevance, textual match, text quality, query context and popularity.
//! Relevance, popularity and CTR are normalized relative to the candidate set,
//! so extraction always sees the complete set.

pub mod names;
pub mod stats;

use hybrank_core::config::FeaturesConfig;
use hybrank_core::models::{Candidate, FeatureVector};
use rayon::prelude::*;
use tracing::debug;

pub use names::FeatureGroup;
pub use stats::{CandidateSetStats, Range};

/// Lexical share of the raw hybrid score; the vector branch gets the rest.
const HYBRID_LEXICAL_WEIGHT: f64 = 0.4;
const HYBRID_VECTOR_WEIGHT: f64 = 0.6;
const MAX_QUERY_TITLE_RATIO: f64 = 2.0;

pub struct FeatureExtractor {
    config: FeaturesConfig,
    /// Lowercased once at construction.
    known_brands: Vec<String>,
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new(FeaturesConfig::default())
    }
}

impl FeatureExtractor {
    pub fn new(config: FeaturesConfig) -> Self {
        let known_brands = config
            .known_brands
            .iter()
            .map(|b| b.trim().to_lowercase())
            .filter(|b| !b.is_empty())
            .collect();
        Self {
            config,
            known_brands,
        }
    }

    /// Features for one candidate relative to `all`. Pure: recomputes the
    /// set statistics on every call. Prefer [`extract_all`](Self::extract_all)
    /// for a whole set.
    pub fn extract(&self, candidate: &Candidate, query: &str, all: &[Candidate]) -> FeatureVector {
        let stats = CandidateSetStats::compute(all, &self.config);
        self.extract_with_stats(candidate, &QueryText::new(query), &stats)
    }

    /// Features for every candidate, computing set statistics once and
    /// extracting in parallel. Output order matches `candidates`.
    pub fn extract_all(&self, candidates: &[Candidate], query: &str) -> Vec<FeatureVector> {
        let stats = CandidateSetStats::compute(candidates, &self.config);
        let query = QueryText::new(query);
        debug!(candidates = candidates.len(), ?stats, "extracting features");
        candidates
            .par_iter()
            .map(|c| self.extract_with_stats(c, &query, &stats))
            .collect()
    }

    fn extract_with_stats(
        &self,
        candidate: &Candidate,
        query: &QueryText,
        set: &CandidateSetStats,
    ) -> FeatureVector {
        let title = candidate.title().to_lowercase();
        let description = candidate.description().to_lowercase();
        let category = candidate.category().to_lowercase();
        let q = query.lowered.as_str();

        let lexical = candidate.lexical_score();
        let vector = candidate.vector_score();

        let document = format!("{title} {description}");
        let covered = query
            .terms
            .iter()
            .filter(|t| document.contains(t.as_str()))
            .count();
        let term_coverage = if query.terms.is_empty() {
            0.0
        } else {
            covered as f64 / query.terms.len() as f64
        };

        let title_len = title.chars().count();
        let query_title_ratio =
            (q.chars().count() as f64 / title_len.max(1) as f64).min(MAX_QUERY_TITLE_RATIO);

        let first_word_match = query
            .terms
            .first()
            .is_some_and(|w| title.contains(w.as_str()));

        let popularity = stats::popularity(candidate, &self.config);
        let quality = stats::quality(candidate, &self.config);
        let ctr = stats::ctr(candidate, &self.config);

        FeatureVector::builder()
            // relevance
            .add(names::BM25_SCORE, stats::min_max(lexical, set.lexical, 0.0))
            .add(names::KNN_SCORE, stats::min_max(vector, set.vector, 0.0))
            .add(
                names::HYBRID_SCORE,
                HYBRID_LEXICAL_WEIGHT * lexical + HYBRID_VECTOR_WEIGHT * vector,
            )
            // textual match
            .add_flag(names::EXACT_MATCH_TITLE, !q.is_empty() && title.contains(q))
            .add_flag(
                names::EXACT_MATCH_DESCRIPTION,
                !q.is_empty() && description.contains(q),
            )
            .add_flag(names::EXACT_MATCH_CATEGORY, !q.is_empty() && category.contains(q))
            .add(names::TERM_COVERAGE, term_coverage)
            .add_count(names::QUERY_LENGTH, query.terms.len())
            // text quality
            .add_count(names::TITLE_LENGTH, title_len)
            .add_count(names::DESCRIPTION_LENGTH, description.chars().count())
            .add(names::QUERY_TITLE_RATIO, query_title_ratio)
            // context
            .add_flag(names::FIRST_WORD_MATCH, first_word_match)
            .add_flag(names::QUERY_HAS_NUMBERS, has_digit(q))
            .add_flag(names::TITLE_HAS_NUMBERS, has_digit(&title))
            .add_flag(names::HAS_KNOWN_BRAND, self.mentions_brand(q))
            // popularity
            .add(names::POPULARITY, stats::min_max(popularity, set.popularity, 0.5))
            .add(names::QUALITY, stats::rescale_quality(quality))
            .add(names::CTR, stats::min_max(ctr, set.ctr, 0.5))
            .build()
    }

    /// Substring match, so "dell" also fires inside "modelling".
    fn mentions_brand(&self, query: &str) -> bool {
        self.known_brands.iter().any(|b| query.contains(b.as_str()))
    }
}

/// Query text prepared once per extraction batch.
struct QueryText {
    lowered: String,
    terms: Vec<String>,
}

impl QueryText {
    fn new(query: &str) -> Self {
        let lowered = query.trim().to_lowercase();
        let terms = lowered.split_whitespace().map(str::to_string).collect();
        Self { lowered, terms }
    }
}

fn has_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}
