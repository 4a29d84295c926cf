//! Fuzzy suggestions on zero-result text queries.

use super::common::{fixture_casts, texts};
use castlens::fuzzy::MAX_SUGGESTIONS;
use castlens::testing::make_cast;
use castlens::{search, Cast, SearchFilters};

#[test]
fn test_typo_gets_suggestion() {
    let casts = fixture_casts();
    let response = search(&casts, &SearchFilters::query("farcastr"));
    assert_eq!(response.total, 0);
    assert!(response.results.is_empty());

    let suggestions = response.suggestions.expect("suggestions for a typo");
    assert_eq!(suggestions[0].cast.text(), "gm farcaster ☀️");
}

#[test]
fn test_suggestions_iff_query_and_no_results() {
    let casts = fixture_casts();

    let hit = search(&casts, &SearchFilters::query("farcaster"));
    assert!(hit.total > 0);
    assert!(hit.suggestions.is_none());

    let no_query = SearchFilters {
        min_likes: Some(1_000_000),
        ..SearchFilters::default()
    };
    let empty = search(&casts, &no_query);
    assert_eq!(empty.total, 0);
    assert!(empty.suggestions.is_none());
}

#[test]
fn test_capped_positive_descending() {
    let casts: Vec<Cast> = (0..20)
        .map(|i| make_cast(&format!("building on farcaster day {i}")))
        .collect();
    let response = search(&casts, &SearchFilters::query("bulding farcastr"));
    let suggestions = response.suggestions.expect("suggestions");
    assert!(suggestions.len() <= MAX_SUGGESTIONS);
    assert!(suggestions.iter().all(|s| s.score > 0.0));
    assert!(suggestions.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_candidate_pool_keeps_other_criteria() {
    let casts = fixture_casts();
    let filters = SearchFilters {
        is_quote: Some(true),
        ..SearchFilters::query("quotd")
    };
    let response = search(&casts, &filters);
    let suggestions = response.suggestions.expect("quote suggestions");
    assert_eq!(
        texts(suggestions.iter().map(|s| &s.cast)),
        vec!["this is the way"]
    );
}

#[test]
fn test_nothing_similar_omits_field() {
    let casts = vec![make_cast("abc def")];
    let response = search(&casts, &SearchFilters::query("zzz"));
    assert!(response.suggestions.is_none());
}

#[test]
fn test_serialized_suggestion_shape() {
    let casts = fixture_casts();
    let response = search(&casts, &SearchFilters::query("farcastr"));
    let json = serde_json::to_value(&response).unwrap();
    let first = &json["suggestions"][0];
    assert!(first["score"].as_f64().is_some_and(|s| s > 0.0));
    assert_eq!(first["cast"]["text"], "gm farcaster ☀️");
}
