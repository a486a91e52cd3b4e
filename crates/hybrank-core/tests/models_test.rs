use hybrank_core::models::*;

#[test]
fn feature_vector_missing_feature_reads_zero() {
    let fv = FeatureVector::builder().add("bm25_score", 0.7).build();
    assert_eq!(fv.get("bm25_score"), 0.7);
    assert_eq!(fv.get("knn_score"), 0.0);
    assert!(!fv.contains("knn_score"));
}

#[test]
fn feature_vector_flags_are_zero_or_one() {
    let fv = FeatureVector::builder()
        .add_flag("exact_match_title", true)
        .add_flag("has_known_brand", false)
        .build();
    assert_eq!(fv.get("exact_match_title"), 1.0);
    assert_eq!(fv.get("has_known_brand"), 0.0);
    assert!(fv.contains("has_known_brand"));
}

#[test]
fn feature_vector_replaces_non_finite_values() {
    let fv = FeatureVector::builder()
        .add("a", f64::NAN)
        .add("b", f64::INFINITY)
        .add_count("c", 3)
        .build();
    assert_eq!(fv.get("a"), 0.0);
    assert_eq!(fv.get("b"), 0.0);
    assert_eq!(fv.get("c"), 3.0);
    assert!(fv.iter().all(|(_, v)| v.is_finite()));
}

#[test]
fn feature_vector_iterates_in_name_order() {
    let fv: FeatureVector = vec![
        ("zeta".to_string(), 1.0),
        ("alpha".to_string(), 2.0),
        ("mid".to_string(), 3.0),
    ]
    .into_iter()
    .collect();
    let names: Vec<&str> = fv.iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    assert_eq!(fv.to_string(), "FeatureVector{alpha=2.000, mid=3.000, zeta=1.000}");
}

#[test]
fn candidate_starts_unranked() {
    let source = DocumentSource::new("Notebook", "Laptop", "Eletronicos");
    let c = Candidate::new("doc_1", source, 1.2, 0.8);
    assert_eq!(c.doc_id(), "doc_1");
    assert_eq!(c.title(), "Notebook");
    assert_eq!(c.category(), "Eletronicos");
    assert_eq!(c.lexical_score(), 1.2);
    assert_eq!(c.vector_score(), 0.8);
    assert!(c.features().is_none());
    assert_eq!(c.score(), 0.0);
}

#[test]
fn candidate_clamps_invalid_raw_scores() {
    let c = Candidate::new("doc_2", DocumentSource::default(), -3.0, f64::NAN);
    assert_eq!(c.lexical_score(), 0.0);
    assert_eq!(c.vector_score(), 0.0);
}

#[test]
fn search_field_reads_document_text() {
    let doc = DocumentSource::new("Title", "Desc", "Cat");
    assert_eq!(SearchField::Title.text(&doc), "Title");
    assert_eq!(SearchField::Description.text(&doc), "Desc");
    assert_eq!(SearchField::Category.text(&doc), "Cat");
}

#[test]
fn cache_stats_display() {
    let stats = CacheStats {
        current_size: 3,
        max_size: 10,
    };
    assert_eq!(stats.to_string(), "cache 3/10 entries");
}
