//! Apportioning engine scores into lexical and vector sub-scores.
//!
//! Exact attribution is implementation-defined: an engine that answers a
//! combined query reports one fused relevance score, and any split of it is an
//! estimate. Strategies here are deterministic so results stay reproducible.

use hybrank_core::config::{RetrievalConfig, ScoreAttributionKind};

/// Lexical and vector components of a candidate's retrieval score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub lexical: f64,
    pub vector: f64,
}

/// Strategy turning per-branch engine scores into sub-scores.
///
/// `lexical` / `vector` are `None` when that branch did not return the
/// document.
pub trait ScoreAttribution: Send + Sync {
    fn attribute(&self, lexical: Option<f64>, vector: Option<f64>) -> SubScores;

    fn name(&self) -> &str;
}

/// Each branch's score is taken as-is; a missing branch contributes 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerBranch;

impl ScoreAttribution for PerBranch {
    fn attribute(&self, lexical: Option<f64>, vector: Option<f64>) -> SubScores {
        SubScores {
            lexical: lexical.unwrap_or(0.0),
            vector: vector.unwrap_or(0.0),
        }
    }

    fn name(&self) -> &str {
        "per_branch"
    }
}

/// Branch scores are summed into one fused score, the way a boolean
/// should-query engine reports relevance, then split by a fixed share.
#[derive(Debug, Clone, Copy)]
pub struct FusedSplit {
    pub lexical_share: f64,
}

impl Default for FusedSplit {
    fn default() -> Self {
        Self { lexical_share: 0.4 }
    }
}

impl ScoreAttribution for FusedSplit {
    fn attribute(&self, lexical: Option<f64>, vector: Option<f64>) -> SubScores {
        let fused = lexical.unwrap_or(0.0) + vector.unwrap_or(0.0);
        SubScores {
            lexical: fused * self.lexical_share,
            vector: fused * (1.0 - self.lexical_share),
        }
    }

    fn name(&self) -> &str {
        "fused_split"
    }
}

/// Build the strategy selected in config.
pub fn from_config(config: &RetrievalConfig) -> Box<dyn ScoreAttribution> {
    match config.score_attribution {
        ScoreAttributionKind::PerBranch => Box::new(PerBranch),
        ScoreAttributionKind::FusedSplit => Box::new(FusedSplit {
            lexical_share: config.lexical_share,
        }),
    }
}
