//! End-to-end pipeline tests over the fixture catalog.

use std::sync::Arc;

use hybrank_core::config::HybrankConfig;
use hybrank_core::errors::{EmbeddingError, HybrankError, RetrievalError};
use hybrank_core::models::DocumentSource;
use hybrank_core::traits::ISearchIndex;
use hybrank_embeddings::HashingEmbedder;
use hybrank_retrieval::features::names;
use hybrank_retrieval::{MemoryIndex, SearchPipeline};
use test_fixtures::{
    hit, load_catalog, CountingEmbedder, FailingBranch, FailingEmbedder, FailingIndex, StaticIndex,
};

const DIMS: usize = 384;

fn init_logging() {
    let config = HybrankConfig::default();
    hybrank_core::tracing_setup::init_tracing_from_config(&config.observability).unwrap();
}

fn catalog_pipeline(strip_metadata: bool) -> SearchPipeline {
    init_logging();
    let provider = Arc::new(HashingEmbedder::new(DIMS));
    let docs = load_catalog().into_iter().map(|(id, source)| {
        if strip_metadata {
            let bare = DocumentSource::new(source.title, source.description, source.category);
            (id, bare)
        } else {
            (id, source)
        }
    });
    let index = MemoryIndex::from_documents(provider.as_ref(), docs).unwrap();
    SearchPipeline::from_config(&HybrankConfig::default(), Arc::new(index), provider).unwrap()
}

fn pipeline_over(index: Arc<dyn ISearchIndex>) -> SearchPipeline {
    init_logging();
    let provider = Arc::new(HashingEmbedder::new(DIMS));
    SearchPipeline::from_config(&HybrankConfig::default(), index, provider).unwrap()
}

#[test]
fn notebook_query_ranks_exact_title_match_first() {
    let pipeline = catalog_pipeline(true);
    let results = pipeline.search("notebook", 5, None).unwrap();

    assert_eq!(results.len(), 5);
    let top = &results[0];
    assert_eq!(top.doc_id(), "doc_1");
    let features = top.features().unwrap();
    assert_eq!(features.get(names::EXACT_MATCH_TITLE), 1.0);

    for other in &results[1..] {
        assert!(top.score() >= other.score());
        assert_eq!(other.features().unwrap().get(names::EXACT_MATCH_TITLE), 0.0);
    }
}

#[test]
fn notebook_query_with_real_metadata() {
    let pipeline = catalog_pipeline(false);
    let results = pipeline.search("Notebook", 5, None).unwrap();
    assert_eq!(results[0].doc_id(), "doc_1");
    for pair in results.windows(2) {
        assert!(pair[0].score() >= pair[1].score());
    }
    for c in &results {
        assert!((0.0..=100.0).contains(&c.score()));
    }
}

#[test]
fn unparsable_metadata_falls_back_to_default() {
    let pipeline = catalog_pipeline(false);
    let results = pipeline.search("panela", 10, Some("Casa")).unwrap();
    let panela = results.iter().find(|c| c.doc_id() == "doc_10").unwrap();
    // default rating 4.0 rescales to 0.5
    assert_eq!(panela.features().unwrap().get(names::QUALITY), 0.5);
}

#[test]
fn category_filter_restricts_results() {
    let pipeline = catalog_pipeline(false);
    let results = pipeline.search("mochila laptop", 10, Some("Acessorios")).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].doc_id(), "doc_8");
}

#[test]
fn no_match_returns_empty_list() {
    let pipeline = catalog_pipeline(false);
    let results = pipeline.search("notebook", 5, Some("Brinquedos")).unwrap();
    assert!(results.is_empty());

    let pipeline = pipeline_over(Arc::new(StaticIndex::default()));
    let report = pipeline.search_with_report("anything", 5, None).unwrap();
    assert!(report.results.is_empty());
    assert_eq!(report.retrieved, 0);
    assert_eq!(report.timings.features_ms, 0.0);
}

#[test]
fn repeated_search_is_idempotent() {
    let pipeline = catalog_pipeline(false);
    let first = pipeline.search("fone sem fio", 5, None).unwrap();
    let second = pipeline.search("fone sem fio", 5, None).unwrap();
    let summary = |r: &[hybrank_core::Candidate]| -> Vec<(String, f64)> {
        r.iter().map(|c| (c.doc_id().to_string(), c.score())).collect()
    };
    assert_eq!(summary(&first), summary(&second));
}

#[test]
fn duplicate_hits_collapse_into_one_candidate() {
    let index = StaticIndex::new(
        vec![hit("doc_7", "Cafeteira eletrica", 4.2), hit("doc_2", "Mouse", 1.1)],
        vec![hit("doc_7", "Cafeteira eletrica", 0.93), hit("doc_5", "Garrafa", 0.61)],
    );
    let pipeline = pipeline_over(Arc::new(index));
    let results = pipeline.search("cafeteira", 10, None).unwrap();
    assert_eq!(results.iter().filter(|c| c.doc_id() == "doc_7").count(), 1);
    assert_eq!(results.len(), 3);

    let doc7 = results.iter().find(|c| c.doc_id() == "doc_7").unwrap();
    assert_eq!(doc7.lexical_score(), 4.2);
    assert_eq!(doc7.vector_score(), 0.93);
}

#[test]
fn ties_keep_retrieval_order() {
    let index = StaticIndex::new(
        vec![hit("doc_a", "Item", 1.0), hit("doc_b", "Item", 1.0), hit("doc_c", "Item", 1.0)],
        vec![],
    );
    let pipeline = pipeline_over(Arc::new(index));
    let results = pipeline.search("item", 3, None).unwrap();
    let ids: Vec<&str> = results.iter().map(|c| c.doc_id()).collect();
    assert_eq!(ids, vec!["doc_a", "doc_b", "doc_c"]);
}

#[test]
fn truncates_to_top_k() {
    let pipeline = catalog_pipeline(false);
    assert_eq!(pipeline.search("teclado", 3, None).unwrap().len(), 3);
}

#[test]
fn blank_query_and_zero_top_k_are_invalid() {
    let index = Arc::new(StaticIndex::default());
    let pipeline = pipeline_over(index.clone());

    let err = pipeline.search("   ", 5, None).unwrap_err();
    assert!(err.is_invalid_input());
    let err = pipeline.search("notebook", 0, None).unwrap_err();
    assert!(err.is_invalid_input());

    assert_eq!(index.lexical_calls(), 0);
    assert_eq!(index.vector_calls(), 0);
}

#[test]
fn lexical_failure_propagates() {
    let pipeline = pipeline_over(Arc::new(FailingIndex {
        branch: FailingBranch::Lexical,
    }));
    let err = pipeline.search("notebook", 5, None).unwrap_err();
    assert!(matches!(
        err,
        HybrankError::Retrieval(RetrievalError::LexicalSearchFailed { .. })
    ));
}

#[test]
fn vector_failure_propagates() {
    let pipeline = pipeline_over(Arc::new(FailingIndex {
        branch: FailingBranch::Vector,
    }));
    let err = pipeline.search("notebook", 5, None).unwrap_err();
    assert!(matches!(
        err,
        HybrankError::Retrieval(RetrievalError::VectorSearchFailed { .. })
    ));
}

#[test]
fn embedding_failure_propagates() {
    let pipeline = SearchPipeline::from_config(
        &HybrankConfig::default(),
        Arc::new(StaticIndex::default()),
        Arc::new(FailingEmbedder),
    )
    .unwrap();
    let err = pipeline.search("notebook", 5, None).unwrap_err();
    assert!(matches!(
        err,
        HybrankError::Embedding(EmbeddingError::InferenceFailed { .. })
    ));
}

#[test]
fn query_embedding_is_cached_between_searches() {
    let provider = Arc::new(CountingEmbedder::new(DIMS));
    let pipeline = SearchPipeline::from_config(
        &HybrankConfig::default(),
        Arc::new(StaticIndex::default()),
        provider.clone(),
    )
    .unwrap();

    pipeline.search("Notebook ", 5, None).unwrap();
    pipeline.search("notebook", 5, None).unwrap();
    assert_eq!(provider.calls(), 1);
    assert_eq!(pipeline.cache_stats().current_size, 1);
}

#[test]
fn explain_prediction_for_ranked_candidate() {
    let pipeline = catalog_pipeline(true);
    let results = pipeline.search("notebook", 5, None).unwrap();
    let report = pipeline.explain_prediction(&results[0]).unwrap();
    assert_eq!(report.final_score, results[0].score());
    assert!(report.contributions.len() <= 10);
    assert!(report
        .contributions
        .iter()
        .any(|c| c.feature == names::EXACT_MATCH_TITLE && c.contribution == 8.0));
    for pair in report.contributions.windows(2) {
        assert!(pair[0].contribution.abs() >= pair[1].contribution.abs());
    }
}

#[test]
fn explain_prediction_requires_features() {
    let pipeline = catalog_pipeline(true);
    let unranked = hybrank_core::Candidate::new("x", DocumentSource::new("x", "", ""), 0.0, 0.0);
    assert!(pipeline.explain_prediction(&unranked).unwrap_err().is_invalid_input());
}

#[test]
fn explain_model_lists_all_weights() {
    let pipeline = catalog_pipeline(true);
    let report = pipeline.explain_model();
    assert_eq!(report.weights.len(), names::ALL.len());
    assert!(report.to_string().contains("Total features: 18"));
}

#[test]
fn custom_weights_from_config() {
    let config = HybrankConfig::from_toml(
        r#"
        [ranking.weights]
        popularity = 10.0
        "#,
    )
    .unwrap();
    let provider = Arc::new(HashingEmbedder::new(DIMS));
    let docs = load_catalog();
    let index = MemoryIndex::from_documents(provider.as_ref(), docs).unwrap();
    let pipeline = SearchPipeline::from_config(&config, Arc::new(index), provider).unwrap();

    let results = pipeline.search("produto", 10, None).unwrap();
    // popularity is the only weighted feature; doc_3 is the most popular
    assert_eq!(results[0].doc_id(), "doc_3");
    assert_eq!(pipeline.model().weights().len(), 1);
}

#[test]
fn report_serializes() {
    let pipeline = catalog_pipeline(false);
    let report = pipeline.search_with_report("notebook", 2, None).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["results"].as_array().unwrap().len(), 2);
    assert!(json["timings"]["total_ms"].as_f64().unwrap() >= 0.0);
}
