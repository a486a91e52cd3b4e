//! Candidate-set statistics used for set-relative normalization.

use hybrank_core::config::FeaturesConfig;
use hybrank_core::constants::{DEGENERATE_NORMALIZED_VALUE, MIN_NORMALIZATION_SPREAD};
use hybrank_core::models::Candidate;

/// Observed range of one signal across a candidate set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    fn of(values: impl Iterator<Item = f64>) -> Option<Self> {
        values.fold(None, |acc, v| match acc {
            None => Some(Range { min: v, max: v }),
            Some(r) => Some(Range {
                min: r.min.min(v),
                max: r.max.max(v),
            }),
        })
    }
}

/// Min-max normalize `value` into `[0, 1]`.
///
/// A range narrower than [`MIN_NORMALIZATION_SPREAD`] yields exactly
/// [`DEGENERATE_NORMALIZED_VALUE`]. `None` (an empty set) yields `empty`.
pub fn min_max(value: f64, range: Option<Range>, empty: f64) -> f64 {
    match range {
        None => empty,
        Some(r) if r.max - r.min < MIN_NORMALIZATION_SPREAD => DEGENERATE_NORMALIZED_VALUE,
        Some(r) => (value - r.min) / (r.max - r.min),
    }
}

/// Rescale a 0-5 rating so that 3.0 maps to 0 and 5.0 to 1, clamped.
pub fn rescale_quality(quality: f64) -> f64 {
    ((quality - 3.0) / 2.0).clamp(0.0, 1.0)
}

/// Ranges of every set-relative signal, computed in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CandidateSetStats {
    pub lexical: Option<Range>,
    pub vector: Option<Range>,
    pub popularity: Option<Range>,
    pub ctr: Option<Range>,
}

impl CandidateSetStats {
    /// Metadata is read quietly here; unparsable values are reported once,
    /// when the candidate's own features are extracted.
    pub fn compute(candidates: &[Candidate], config: &FeaturesConfig) -> Self {
        let quiet = |c: &Candidate, field: &str, default: f64| {
            c.source().numeric_field_quiet(field, default)
        };
        Self {
            lexical: Range::of(candidates.iter().map(Candidate::lexical_score)),
            vector: Range::of(candidates.iter().map(Candidate::vector_score)),
            popularity: Range::of(
                candidates
                    .iter()
                    .map(|c| quiet(c, "popularity", config.default_popularity)),
            ),
            ctr: Range::of(candidates.iter().map(|c| quiet(c, "ctr", config.default_ctr))),
        }
    }
}

pub(crate) fn popularity(candidate: &Candidate, config: &FeaturesConfig) -> f64 {
    candidate
        .source()
        .numeric_field("popularity", config.default_popularity)
}

pub(crate) fn quality(candidate: &Candidate, config: &FeaturesConfig) -> f64 {
    candidate
        .source()
        .numeric_field("quality", config.default_quality)
}

pub(crate) fn ctr(candidate: &Candidate, config: &FeaturesConfig) -> f64 {
    candidate.source().numeric_field("ctr", config.default_ctr)
}
