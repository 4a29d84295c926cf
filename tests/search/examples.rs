//! Worked examples and whole-pipeline behavior on the fixture archive.

use super::common::{fixture_casts, texts};
use castlens::testing::{make_cast, make_quote, with_likes, with_url};
use castlens::{search, SearchFilters, SortBy};

// ============================================================================
// WORKED EXAMPLES
// ============================================================================

#[test]
fn test_gm_sorted_by_likes() {
    let casts = vec![
        with_likes(make_cast("gm world"), 5),
        with_likes(make_cast("gm"), 50),
    ];
    let filters = SearchFilters {
        sort_by: Some(SortBy::Likes),
        ..SearchFilters::query("gm")
    };
    let response = search(&casts, &filters);
    assert_eq!(response.total, 2);
    assert_eq!(texts(&response.results), vec!["gm", "gm world"]);
    assert_eq!(response.results[0].likes(), 50);
}

#[test]
fn test_one_word() {
    let casts = vec![make_cast("hello"), make_cast("hello world"), make_cast("  hello  ")];
    let filters = SearchFilters {
        one_word: Some(true),
        ..SearchFilters::default()
    };
    let response = search(&casts, &filters);
    assert_eq!(texts(&response.results), vec!["hello", "  hello  "]);
}

#[test]
fn test_emoji_filter_ignores_embedded_text() {
    let casts = vec![make_quote("no fire here", "🔥 in the quote"), make_cast("🔥 mine")];
    let filters = SearchFilters {
        emojis: vec!["🔥".to_string()],
        ..SearchFilters::default()
    };
    let response = search(&casts, &filters);
    assert_eq!(texts(&response.results), vec!["🔥 mine"]);
}

// ============================================================================
// FIXTURE ARCHIVE
// ============================================================================

#[test]
fn test_default_request_is_newest_first() {
    let casts = fixture_casts();
    let response = search(&casts, &SearchFilters::default());
    assert_eq!(response.total, casts.len());
    assert_eq!(
        texts(&response.results),
        vec![
            "read this https://paragraph.xyz/post",
            "this is the way",
            "agreed",
            "late night build",
            "make a wish 🌠",
            "gm farcaster ☀️",
            "🔥",
        ]
    );
}

#[test]
fn test_facets_over_fixture() {
    let casts = fixture_casts();
    let response = search(&casts, &SearchFilters::default());
    let counts = response.facets.counts;
    assert_eq!(counts.quotes, 1);
    assert_eq!(counts.images, 1);
    // An image embed is also a URL embed, so it counts as a link.
    assert_eq!(counts.links, 2);

    let emojis: Vec<&str> = response
        .facets
        .top_emojis
        .iter()
        .map(|e| e.emoji.as_str())
        .collect();
    // The quoted 🔥 does not count; the standalone one does.
    assert!(emojis.contains(&"🔥"));
    assert_eq!(
        response.facets.top_emojis.iter().find(|e| e.emoji == "🔥").map(|e| e.count),
        Some(1)
    );
}

#[test]
fn test_boolean_flags_combine() {
    let casts = vec![
        with_url(make_quote("both", "x"), "https://a.com/p.png"),
        make_quote("quote only", "x"),
        with_url(make_cast("image only"), "https://a.com/p.png"),
    ];
    let filters = SearchFilters {
        is_quote: Some(true),
        has_image: Some(true),
        ..SearchFilters::default()
    };
    assert_eq!(texts(&search(&casts, &filters).results), vec!["both"]);

    let no_images = SearchFilters {
        has_image: Some(false),
        ..SearchFilters::default()
    };
    assert_eq!(texts(&search(&casts, &no_images).results), vec!["quote only"]);
}

#[test]
fn test_engagement_thresholds() {
    let casts = fixture_casts();
    let filters = SearchFilters {
        min_likes: Some(40),
        sort_by: Some(SortBy::Likes),
        ..SearchFilters::default()
    };
    let response = search(&casts, &filters);
    assert_eq!(texts(&response.results), vec!["gm farcaster ☀️", "this is the way"]);

    let replies = SearchFilters {
        min_replies: Some(1),
        ..SearchFilters::default()
    };
    assert_eq!(texts(&search(&casts, &replies).results), vec!["make a wish 🌠"]);
}

#[test]
fn test_date_range_inclusive_and_excludes_undated() {
    let casts = fixture_casts();
    let filters = SearchFilters {
        date_from: Some("2024-01-15T19:11:00Z".to_string()),
        date_to: Some("2024-03-01".to_string()),
        ..SearchFilters::default()
    };
    let response = search(&casts, &filters);
    assert_eq!(texts(&response.results), vec!["late night build", "make a wish 🌠"]);
}

#[test]
fn test_response_json_shape() {
    let casts = fixture_casts();
    let response = search(&casts, &SearchFilters::query("gm"));
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["total"], 2);
    assert!(json["results"].is_array());
    assert!(json["facets"]["topEmojis"].is_array());
    assert_eq!(json["facets"]["counts"]["quotes"], 1);
    assert!(json.get("suggestions").is_none());
    // Records keep the export's snake_case keys.
    assert!(json["results"][0]["reactions"]["likes_count"].is_u64());
}
