use std::collections::HashSet;
use std::sync::Arc;

use hybrank_embeddings::{EmbeddingCache, HashingEmbedder};
use proptest::prelude::*;

fn cache(size: usize) -> EmbeddingCache {
    EmbeddingCache::new(Arc::new(HashingEmbedder::new(8)), size, 8).unwrap()
}

proptest! {
    #[test]
    fn size_never_exceeds_bound(
        size in 1usize..16,
        texts in prop::collection::vec("[a-z]{1,6}", 0..64),
    ) {
        let c = cache(size);
        for t in &texts {
            c.get_or_compute(t).unwrap();
            prop_assert!(c.stats().current_size <= size);
        }
        let distinct: HashSet<&String> = texts.iter().collect();
        prop_assert_eq!(c.stats().current_size, distinct.len().min(size));
    }

    #[test]
    fn most_recent_entry_always_survives(
        size in 1usize..8,
        texts in prop::collection::vec("[a-z]{1,4}", 1..32),
    ) {
        let c = cache(size);
        for t in &texts {
            c.get_or_compute(t).unwrap();
            prop_assert!(c.contains(t));
        }
    }

    #[test]
    fn normalization_is_case_and_padding_insensitive(word in "[a-zA-Z]{1,10}", pad in " {0,3}") {
        let c = cache(4);
        let a = c.get_or_compute(&format!("{pad}{word}{pad}")).unwrap();
        let b = c.get_or_compute(&word.to_lowercase()).unwrap();
        prop_assert_eq!(a, b);
        prop_assert_eq!(c.stats().current_size, 1);
    }
}
