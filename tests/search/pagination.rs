//! Offset/limit clamping and the total/page-length relation.

use castlens::filter::{DEFAULT_LIMIT, MAX_LIMIT};
use castlens::testing::make_cast;
use castlens::{search, Cast, SearchFilters};

fn archive(n: usize) -> Vec<Cast> {
    (0..n).map(|i| make_cast(&format!("cast {i}"))).collect()
}

fn page(offset: Option<i64>, limit: Option<i64>) -> SearchFilters {
    SearchFilters {
        offset,
        limit,
        ..SearchFilters::default()
    }
}

#[test]
fn test_default_limit() {
    let casts = archive(300);
    let response = search(&casts, &SearchFilters::default());
    assert_eq!(response.total, 300);
    assert_eq!(response.results.len(), DEFAULT_LIMIT as usize);
}

#[test]
fn test_limit_clamped_to_max() {
    let casts = archive(300);
    let response = search(&casts, &page(None, Some(10_000)));
    assert_eq!(response.results.len(), MAX_LIMIT as usize);
}

#[test]
fn test_limit_clamped_to_one() {
    let casts = archive(10);
    for limit in [0, -5] {
        let response = search(&casts, &page(None, Some(limit)));
        assert_eq!(response.results.len(), 1, "limit {limit}");
    }
}

#[test]
fn test_negative_offset_is_zero() {
    let casts = archive(10);
    let response = search(&casts, &page(Some(-20), Some(3)));
    assert_eq!(response.results[0].text(), "cast 0");
}

#[test]
fn test_pages_tile_the_result() {
    let casts = archive(25);
    let mut seen = Vec::new();
    for offset in (0..25).step_by(10) {
        let response = search(&casts, &page(Some(offset), Some(10)));
        assert_eq!(response.total, 25);
        seen.extend(response.results.into_iter().map(|c| c.text().to_string()));
    }
    let expected: Vec<String> = (0..25).map(|i| format!("cast {i}")).collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_offset_past_end() {
    let casts = archive(5);
    let response = search(&casts, &page(Some(5), None));
    assert!(response.results.is_empty());
    assert_eq!(response.total, 5);
    // Facets still describe the full result.
    assert!(response.facets.top_emojis.is_empty());
}
