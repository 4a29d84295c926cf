//! Requests decoded from URL query strings, run end to end.

use super::common::{fixture_casts, texts};
use castlens::filter::params::from_query_string;
use castlens::search;

#[test]
fn test_query_string_request() {
    let casts = fixture_casts();
    let filters = from_query_string("?q=GM&sortBy=likes&limit=1");
    let response = search(&casts, &filters);
    assert_eq!(response.total, 2);
    assert_eq!(texts(&response.results), vec!["gm farcaster ☀️"]);
}

#[test]
fn test_bad_numbers_fall_back_to_defaults() {
    let casts = fixture_casts();
    let filters = from_query_string("offset=abc&limit=lots&minLikes=many");
    let response = search(&casts, &filters);
    assert_eq!(response.total, casts.len());
    assert_eq!(response.results.len(), casts.len());
}

#[test]
fn test_flag_other_than_one_means_false() {
    let casts = fixture_casts();
    let filters = from_query_string("isQuote=true");
    let response = search(&casts, &filters);
    assert_eq!(response.total, casts.len() - 1);
    assert!(!texts(&response.results).contains(&"this is the way"));
}

#[test]
fn test_encoded_emoji_and_time_pattern() {
    let casts = fixture_casts();
    let filters = from_query_string("emoji=%F0%9F%8C%A0&timePattern=elevenEleven");
    let response = search(&casts, &filters);
    assert_eq!(texts(&response.results), vec!["make a wish 🌠"]);
}

#[test]
fn test_unknown_enum_values_ignored() {
    let casts = fixture_casts();
    let filters = from_query_string("sortBy=oldest&timeBucket=brunch");
    let response = search(&casts, &filters);
    assert_eq!(response.total, casts.len());
}
