//! Pacific wall-clock buckets and patterns, across DST.

use super::common::{at, fixture_casts, texts};
use castlens::{search, SearchFilters, TimeBucket, TimePattern};

fn by_pattern(pattern: TimePattern) -> SearchFilters {
    SearchFilters {
        time_pattern: Some(pattern),
        ..SearchFilters::default()
    }
}

fn by_bucket(bucket: TimeBucket) -> SearchFilters {
    SearchFilters {
        time_bucket: Some(bucket),
        ..SearchFilters::default()
    }
}

#[test]
fn test_eleven_eleven_am_and_pm_only() {
    let casts = vec![
        at("11:11 am", "2024-01-15T19:11:00Z"),
        at("11:11 pm", "2024-01-16T07:11:00Z"),
        at("1:11 am", "2024-01-15T09:11:00Z"),
        at("10:11 am", "2024-01-15T18:11:00Z"),
    ];
    let response = search(&casts, &by_pattern(TimePattern::ElevenEleven));
    let mut got = texts(&response.results);
    got.sort_unstable();
    assert_eq!(got, vec!["11:11 am", "11:11 pm"]);
}

#[test]
fn test_eleven_eleven_uses_daylight_time() {
    // 19:11 UTC is 11:11 in winter but 12:11 in summer.
    let casts = vec![
        at("summer 12:11", "2024-07-01T19:11:00Z"),
        at("summer 11:11", "2024-07-01T18:11:00Z"),
    ];
    let response = search(&casts, &by_pattern(TimePattern::ElevenEleven));
    assert_eq!(texts(&response.results), vec!["summer 11:11"]);
}

#[test]
fn test_duplicities() {
    let casts = vec![
        at("2:22", "2024-01-15T10:22:00Z"),
        at("3:33 pm", "2024-01-15T23:33:00Z"),
        at("4:44", "2024-01-15T12:44:00Z"),
        at("5:55 pm", "2024-01-16T01:55:00Z"),
        at("2:22 pm pdt", "2024-07-01T21:22:00Z"),
        at("11:11", "2024-01-15T19:11:00Z"),
        at("1:11", "2024-01-15T09:11:00Z"),
        at("10:22 pm", "2024-01-16T06:22:00Z"),
        at("6:06", "2024-01-15T14:06:00Z"),
    ];
    let response = search(&casts, &by_pattern(TimePattern::Duplicities));
    let mut got = texts(&response.results);
    got.sort_unstable();
    assert_eq!(got, vec!["2:22", "2:22 pm pdt", "3:33 pm", "4:44", "5:55 pm"]);
}

#[test]
fn test_minute_patterns() {
    let casts = fixture_casts();
    assert_eq!(
        texts(&search(&casts, &by_pattern(TimePattern::TopOfHour)).results),
        vec!["agreed", "gm farcaster ☀️"]
    );
    assert_eq!(
        texts(&search(&casts, &by_pattern(TimePattern::BuzzerBeater)).results),
        vec!["this is the way"]
    );
}

#[test]
fn test_buckets() {
    let casts = fixture_casts();
    assert_eq!(
        texts(&search(&casts, &by_bucket(TimeBucket::Midnight)).results),
        vec!["late night build"]
    );
    assert_eq!(
        texts(&search(&casts, &by_bucket(TimeBucket::Morning)).results),
        vec!["gm farcaster ☀️"]
    );
    assert_eq!(
        texts(&search(&casts, &by_bucket(TimeBucket::Lunch)).results),
        vec!["this is the way"]
    );
}

#[test]
fn test_bucket_and_pattern_combine() {
    let casts = fixture_casts();
    let filters = SearchFilters {
        time_bucket: Some(TimeBucket::Lunch),
        time_pattern: Some(TimePattern::TopOfHour),
        ..SearchFilters::default()
    };
    assert_eq!(search(&casts, &filters).total, 0);
}

#[test]
fn test_undated_casts_never_match() {
    let casts = fixture_casts();
    for pattern in TimePattern::ALL {
        let response = search(&casts, &by_pattern(*pattern));
        assert!(response.results.iter().all(|c| c.timestamp.is_some()));
    }
}
