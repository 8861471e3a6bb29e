use doc_similarity::{Analyzer, SimilarityEngine, SimilarityError};

fn engine() -> SimilarityEngine {
    SimilarityEngine::new()
}

#[test]
fn returns_one_score_per_comparison_text() {
    let texts = vec![
        "first document".to_string(),
        "second document".to_string(),
        "third document".to_string(),
        "the query text".to_string(),
    ];
    let scores = engine().score_texts(&texts).unwrap();
    assert_eq!(scores.len(), texts.len() - 1);
}

#[test]
fn scoring_is_deterministic() {
    let texts = [
        "rust is a systems programming language",
        "python is a scripting language",
        "rust is fast and memory safe",
    ];
    let first = engine().score_texts(&texts).unwrap();
    let second = engine().score_texts(&texts).unwrap();
    assert_eq!(first, second);
}

#[test]
fn identical_comparison_text_scores_one() {
    // Query (last) is byte-identical to the first comparison text.
    let scores = engine()
        .score_texts(&[
            "the cat sat on the mat",
            "a dog barked loudly",
            "the cat sat on the mat",
        ])
        .unwrap();
    assert_eq!(scores.len(), 2);
    assert!((scores[0] - 1.0).abs() <= 1e-4);
    assert_eq!(scores[1], 0.0);
}

#[test]
fn two_identical_texts_score_one() {
    let scores = engine().score_texts(&["hello world", "hello world"]).unwrap();
    assert_eq!(scores, vec![1.0]);
}

#[test]
fn empty_query_yields_zero() {
    // Degenerate query: tokenizes to nothing, so its row is all zeros.
    let scores = engine().score_texts(&["apple banana", ""]).unwrap();
    assert_eq!(scores, vec![0.0]);
}

#[test]
fn disjoint_vocabularies_score_zero() {
    let scores = engine()
        .score("entirely unrelated words", &["alpha beta gamma"])
        .unwrap();
    assert_eq!(scores, vec![0.0]);
}

#[test]
fn all_scores_lie_in_unit_interval() {
    let corpus = [
        "shared terms appear in several documents",
        "shared terms appear here too",
        "totally different content altogether",
        "a mix of shared terms and different content",
    ];
    let scores = engine().score("shared terms and content", &corpus).unwrap();
    assert_eq!(scores.len(), corpus.len());
    for score in &scores {
        assert!((0.0..=1.0).contains(score), "score {score} out of range");
    }
}

#[test]
fn order_of_comparison_texts_is_preserved() {
    let query = "the quick brown fox";
    let corpus = [
        "the quick brown fox",       // identical
        "unrelated text entirely",   // disjoint
        "the quick brown fox jumps", // close but not identical
    ];
    let scores = engine().score(query, &corpus).unwrap();
    assert_eq!(scores[0], 1.0);
    assert_eq!(scores[1], 0.0);
    assert!(scores[2] > 0.0 && scores[2] < 1.0);
}

#[test]
fn single_text_fails_with_invalid_input() {
    let err = engine().score_texts(&["only one"]).unwrap_err();
    assert!(matches!(err, SimilarityError::InvalidInput(_)));
}

#[test]
fn scores_are_rounded_to_four_decimals() {
    let scores = engine()
        .score("one two three four", &["one two three five", "one six seven eight"])
        .unwrap();
    for score in scores {
        let scaled = score * 10_000.0;
        assert!(
            (scaled - scaled.round()).abs() < 1e-9,
            "score {score} carries more than 4 decimals"
        );
    }
}

#[test]
fn stop_term_analyzer_changes_scores_only_via_tokens() {
    let plain = SimilarityEngine::new();
    let filtered = SimilarityEngine::with_analyzer(Analyzer::with_stop_terms(["the"]));

    let corpus = ["the shared words"];
    let query = "shared words";
    // Without filtering, the extra "the" keeps the texts from matching exactly.
    let plain_score = plain.score(query, &corpus).unwrap()[0];
    assert!(plain_score < 1.0);
    // With "the" dropped, the token streams are identical.
    let filtered_score = filtered.score(query, &corpus).unwrap()[0];
    assert_eq!(filtered_score, 1.0);
}
