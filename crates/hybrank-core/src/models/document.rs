//! Source attributes of an indexed document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// The stored fields of a document as returned by the search index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentSource {
    pub title: String,
    pub description: String,
    pub category: String,
    /// Free-form attributes (popularity, quality, ctr, ...).
    #[serde(flatten)]
    pub metadata: BTreeMap<String, Value>,
}

impl DocumentSource {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category: category.into(),
            metadata: BTreeMap::new(),
        }
    }

    /// Attach a metadata attribute.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Read a numeric metadata attribute.
    ///
    /// Numbers are used as-is and numeric strings are parsed. A missing field,
    /// an unparsable string, a non-finite number, or any other JSON type
    /// yields `default`; every case but a missing field logs a warning.
    pub fn numeric_field(&self, field: &str, default: f64) -> f64 {
        match self.coerce(field) {
            Coerced::Missing => default,
            Coerced::Number(v) => v,
            Coerced::Invalid => {
                warn!(field, default, "metadata value is not numeric, using default");
                default
            }
        }
    }

    /// Same as [`numeric_field`](Self::numeric_field) without the warning,
    /// for repeated reads of a field already reported once.
    pub fn numeric_field_quiet(&self, field: &str, default: f64) -> f64 {
        match self.coerce(field) {
            Coerced::Number(v) => v,
            Coerced::Missing | Coerced::Invalid => default,
        }
    }

    fn coerce(&self, field: &str) -> Coerced {
        let parsed = match self.metadata.get(field) {
            None => return Coerced::Missing,
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            Some(_) => None,
        };
        match parsed {
            Some(v) if v.is_finite() => Coerced::Number(v),
            _ => Coerced::Invalid,
        }
    }
}

enum Coerced {
    Missing,
    Number(f64),
    Invalid,
}
