//! Feature names and their groups.

use std::fmt;

use serde::Serialize;

pub const BM25_SCORE: &str = "bm25_score";
pub const KNN_SCORE: &str = "knn_score";
pub const HYBRID_SCORE: &str = "hybrid_score";

pub const EXACT_MATCH_TITLE: &str = "exact_match_title";
pub const EXACT_MATCH_DESCRIPTION: &str = "exact_match_description";
pub const EXACT_MATCH_CATEGORY: &str = "exact_match_category";
pub const TERM_COVERAGE: &str = "term_coverage";
pub const QUERY_LENGTH: &str = "query_length";

pub const TITLE_LENGTH: &str = "title_length";
pub const DESCRIPTION_LENGTH: &str = "description_length";
pub const QUERY_TITLE_RATIO: &str = "query_title_ratio";

pub const FIRST_WORD_MATCH: &str = "first_word_match";
pub const QUERY_HAS_NUMBERS: &str = "query_has_numbers";
pub const TITLE_HAS_NUMBERS: &str = "title_has_numbers";
pub const HAS_KNOWN_BRAND: &str = "has_known_brand";

pub const POPULARITY: &str = "popularity";
pub const QUALITY: &str = "quality";
pub const CTR: &str = "ctr";

/// Every feature the extractor emits.
pub const ALL: [&str; 18] = [
    BM25_SCORE,
    KNN_SCORE,
    HYBRID_SCORE,
    EXACT_MATCH_TITLE,
    EXACT_MATCH_DESCRIPTION,
    EXACT_MATCH_CATEGORY,
    TERM_COVERAGE,
    QUERY_LENGTH,
    TITLE_LENGTH,
    DESCRIPTION_LENGTH,
    QUERY_TITLE_RATIO,
    FIRST_WORD_MATCH,
    QUERY_HAS_NUMBERS,
    TITLE_HAS_NUMBERS,
    HAS_KNOWN_BRAND,
    POPULARITY,
    QUALITY,
    CTR,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureGroup {
    Relevance,
    TextualMatch,
    TextQuality,
    Context,
    Popularity,
}

impl FeatureGroup {
    pub const ALL: [FeatureGroup; 5] = [
        Self::Relevance,
        Self::TextualMatch,
        Self::TextQuality,
        Self::Context,
        Self::Popularity,
    ];

    /// Features belonging to this group, in display order.
    pub fn features(&self) -> &'static [&'static str] {
        match self {
            Self::Relevance => &[BM25_SCORE, KNN_SCORE, HYBRID_SCORE],
            Self::TextualMatch => &[
                EXACT_MATCH_TITLE,
                EXACT_MATCH_DESCRIPTION,
                EXACT_MATCH_CATEGORY,
                TERM_COVERAGE,
                QUERY_LENGTH,
            ],
            Self::TextQuality => &[TITLE_LENGTH, DESCRIPTION_LENGTH, QUERY_TITLE_RATIO],
            Self::Context => &[
                FIRST_WORD_MATCH,
                QUERY_HAS_NUMBERS,
                TITLE_HAS_NUMBERS,
                HAS_KNOWN_BRAND,
            ],
            Self::Popularity => &[POPULARITY, QUALITY, CTR],
        }
    }

    /// Group a feature name belongs to, if it is one of ours.
    pub fn of(feature: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|g| g.features().contains(&feature))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::TextualMatch => "textual match",
            Self::TextQuality => "text quality",
            Self::Context => "context",
            Self::Popularity => "popularity",
        }
    }
}

impl fmt::Display for FeatureGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
