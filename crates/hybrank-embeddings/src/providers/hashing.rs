//! Signed feature-hashing embedder over words and character trigrams.
//!
//! Each lowercased word contributes itself plus its boundary-padded character
//! trigrams (`#no`, `not`, ..., `ok#`), so inflections such as "notebook" and
//! "notebooks" land close together. Features are hashed with blake3 into a
//! bucket and a sign; the sign keeps collisions from piling up in one
//! direction. Counts are dampened with `1 + ln(count)` and the result is
//! L2-normalized. Deterministic, offline, and cheap enough for catalog-sized
//! indexes.

use std::collections::BTreeMap;

use hybrank_core::errors::EmbeddingError;
use hybrank_core::traits::IEmbeddingProvider;

const WORD_WEIGHT: f32 = 1.0;
const TRIGRAM_WEIGHT: f32 = 0.35;

/// Deterministic embedder needing no model files.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dimensions: usize,
}

/// Hashed feature kind; words and trigrams never share a hash input.
/// Ordered so accumulation runs in a fixed order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Feature {
    Word,
    Trigram,
}

impl HashingEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Bucket index and sign for a feature.
    fn slot(&self, kind: Feature, text: &str) -> (usize, f32) {
        let mut hasher = blake3::Hasher::new();
        hasher.update(match kind {
            Feature::Word => b"w\0",
            Feature::Trigram => b"t\0",
        });
        hasher.update(text.as_bytes());
        let digest = hasher.finalize();
        let bytes = digest.as_bytes();

        let mut head = [0u8; 8];
        head.copy_from_slice(&bytes[..8]);
        let bucket = (u64::from_le_bytes(head) % self.dimensions as u64) as usize;
        let sign = if bytes[8] & 1 == 0 { 1.0 } else { -1.0 };
        (bucket, sign)
    }

    fn features(text: &str) -> BTreeMap<(Feature, String), u32> {
        let mut counts = BTreeMap::new();
        let lowered = text.to_lowercase();
        let words = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty());
        for word in words {
            *counts.entry((Feature::Word, word.to_string())).or_insert(0) += 1;

            let padded: Vec<char> = std::iter::once('#')
                .chain(word.chars())
                .chain(std::iter::once('#'))
                .collect();
            for gram in padded.windows(3) {
                let gram: String = gram.iter().collect();
                *counts.entry((Feature::Trigram, gram)).or_insert(0) += 1;
            }
        }
        counts
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut out = vec![0.0f32; self.dimensions];
        if self.dimensions == 0 {
            return out;
        }

        for ((kind, feature), count) in Self::features(text) {
            let weight = match kind {
                Feature::Word => WORD_WEIGHT,
                Feature::Trigram => TRIGRAM_WEIGHT,
            };
            let (bucket, sign) = self.slot(kind, &feature);
            out[bucket] += sign * weight * (1.0 + (count as f32).ln());
        }

        let norm = out.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            out.iter_mut().for_each(|x| *x /= norm);
        }
        out
    }
}

impl IEmbeddingProvider for HashingEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(self.vectorize(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashing-embedder"
    }
}
