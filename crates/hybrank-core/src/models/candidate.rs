use serde::Serialize;

use super::{DocumentSource, FeatureVector};

/// One document under consideration for a query.
///
/// Identity, source attributes and raw retrieval scores are fixed at
/// construction. The feature vector and final score are filled in by the
/// later pipeline stages.
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    doc_id: String,
    source: DocumentSource,
    lexical_score: f64,
    vector_score: f64,
    features: Option<FeatureVector>,
    score: f64,
}

impl Candidate {
    /// Negative or non-finite raw scores are recorded as 0.
    pub fn new(
        doc_id: impl Into<String>,
        source: DocumentSource,
        lexical_score: f64,
        vector_score: f64,
    ) -> Self {
        Self {
            doc_id: doc_id.into(),
            source,
            lexical_score: sanitize_score(lexical_score),
            vector_score: sanitize_score(vector_score),
            features: None,
            score: 0.0,
        }
    }

    pub fn doc_id(&self) -> &str {
        &self.doc_id
    }

    pub fn source(&self) -> &DocumentSource {
        &self.source
    }

    pub fn title(&self) -> &str {
        &self.source.title
    }

    pub fn description(&self) -> &str {
        &self.source.description
    }

    pub fn category(&self) -> &str {
        &self.source.category
    }

    pub fn lexical_score(&self) -> f64 {
        self.lexical_score
    }

    pub fn vector_score(&self) -> f64 {
        self.vector_score
    }

    /// `None` until feature extraction has run.
    pub fn features(&self) -> Option<&FeatureVector> {
        self.features.as_ref()
    }

    pub fn set_features(&mut self, features: FeatureVector) {
        self.features = Some(features);
    }

    /// Final ranking score; 0 before ranking.
    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn set_score(&mut self, score: f64) {
        self.score = score;
    }
}

fn sanitize_score(score: f64) -> f64 {
    if score.is_finite() {
        score.max(0.0)
    } else {
        0.0
    }
}
