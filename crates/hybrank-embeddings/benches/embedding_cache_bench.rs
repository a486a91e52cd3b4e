use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hybrank_embeddings::{EmbeddingCache, HashingEmbedder};

fn bench_cache(c: &mut Criterion) {
    let cache = EmbeddingCache::new(Arc::new(HashingEmbedder::new(384)), 1_000, 384).unwrap();
    cache.get_or_compute("notebook dell inspiron").unwrap();

    c.bench_function("cache_hit", |b| {
        b.iter(|| cache.get_or_compute(black_box("Notebook Dell Inspiron ")).unwrap())
    });

    let mut i = 0u64;
    c.bench_function("cache_miss_with_eviction", |b| {
        b.iter(|| {
            i += 1;
            cache.get_or_compute(black_box(&format!("query number {i}"))).unwrap()
        })
    });
}

criterion_group!(benches, bench_cache);
criterion_main!(benches);
