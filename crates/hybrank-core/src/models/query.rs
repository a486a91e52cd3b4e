//! Requests sent to, and hits returned by, the external search index.

use serde::{Deserialize, Serialize};

use super::DocumentSource;

/// Text field of an indexed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    Title,
    Description,
    Category,
}

impl SearchField {
    /// Borrow the field's text from a document.
    pub fn text<'a>(&self, source: &'a DocumentSource) -> &'a str {
        match self {
            Self::Title => &source.title,
            Self::Description => &source.description,
            Self::Category => &source.category,
        }
    }
}

/// A field and its relevance boost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldBoost {
    pub field: SearchField,
    pub boost: f64,
}

/// Best-fields lexical query over several boosted fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexicalQuery {
    pub text: String,
    pub fields: Vec<FieldBoost>,
    /// Weight given to matching fields other than the best one.
    pub tie_breaker: f64,
    pub size: usize,
    /// Exact-match filter on the category field.
    pub category_filter: Option<String>,
}

/// Nearest-neighbor query under cosine similarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorQuery {
    pub vector: Vec<f32>,
    pub k: usize,
    /// Exact-match filter on the category field.
    pub category_filter: Option<String>,
}

/// One ranked hit from either branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexHit {
    pub id: String,
    pub source: DocumentSource,
    /// Engine-reported relevance score, `None` when the engine omitted it.
    pub score: Option<f64>,
}
