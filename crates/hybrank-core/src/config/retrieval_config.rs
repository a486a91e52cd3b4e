use serde::{Deserialize, Serialize};

use super::defaults;

/// How a candidate's engine score is split into lexical and vector parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScoreAttributionKind {
    /// Each branch's score is recorded as-is.
    #[default]
    PerBranch,
    /// Branch scores are summed and apportioned by `lexical_share`.
    FusedSplit,
}

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Number of hits requested from each branch.
    pub retrieval_width: usize,
    /// Lexical boost for the title field.
    pub title_boost: f64,
    /// Lexical boost for the description field.
    pub description_boost: f64,
    /// Lexical boost for the category field.
    pub category_boost: f64,
    /// Best-fields tie breaker: weight given to non-best matching fields.
    pub tie_breaker: f64,
    /// Sub-score attribution strategy.
    pub score_attribution: ScoreAttributionKind,
    /// Lexical share of a fused score, used by `FusedSplit`.
    pub lexical_share: f64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            retrieval_width: defaults::DEFAULT_RETRIEVAL_WIDTH,
            title_boost: defaults::DEFAULT_TITLE_BOOST,
            description_boost: defaults::DEFAULT_DESCRIPTION_BOOST,
            category_boost: defaults::DEFAULT_CATEGORY_BOOST,
            tie_breaker: defaults::DEFAULT_TIE_BREAKER,
            score_attribution: ScoreAttributionKind::default(),
            lexical_share: defaults::DEFAULT_LEXICAL_SHARE,
        }
    }
}
