//! Classification, filtering and pagination invariants.

use super::strategies::{archive_strategy, cast_strategy, filters_strategy};
use castlens::record::{has_image, has_link, is_quote, is_reply, is_standalone, own_emojis, reachable_urls};
use castlens::{apply_filters, search, SearchFilters};
use proptest::prelude::*;

proptest! {
    /// Property: every cast is exactly one of quote, reply, standalone.
    #[test]
    fn prop_classification_exclusive(cast in cast_strategy()) {
        let kinds = [is_quote(&cast), is_reply(&cast), is_standalone(&cast)];
        prop_assert_eq!(kinds.iter().filter(|k| **k).count(), 1);
    }

    /// Property: the filter keeps survivors in source order.
    #[test]
    fn prop_filter_is_stable(casts in archive_strategy(), filters in filters_strategy()) {
        let kept = apply_filters(&casts, &filters);
        let positions: Vec<usize> = kept
            .iter()
            .map(|k| casts.iter().position(|c| std::ptr::eq(c, *k)).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    /// Property: `total` is the filtered count and the page is the clamped slice.
    #[test]
    fn prop_total_and_page_length(casts in archive_strategy(), filters in filters_strategy()) {
        let response = search(&casts, &filters);
        let total = apply_filters(&casts, &filters).len();
        prop_assert_eq!(response.total, total);

        let limit = filters.page_limit();
        let offset = filters.page_offset();
        prop_assert_eq!(response.results.len(), limit.min(total.saturating_sub(offset)));
        prop_assert!((1..=200).contains(&limit));
    }

    /// Property: facets count the whole filtered set, not the page.
    #[test]
    fn prop_facet_counts_bounded_by_total(casts in archive_strategy(), filters in filters_strategy()) {
        let response = search(&casts, &filters);
        let counts = response.facets.counts;
        prop_assert!(counts.quotes <= response.total);
        prop_assert!(counts.images <= response.total);
        prop_assert!(counts.links <= response.total);
        prop_assert!(counts.images <= counts.links);
        prop_assert!(response.facets.top_emojis.len() <= 10);
    }

    /// Property: any reachable URL, top-level or nested, makes a link, and
    /// every image is a link.
    #[test]
    fn prop_reachable_url_is_link(cast in cast_strategy()) {
        if !reachable_urls(&cast).is_empty() {
            prop_assert!(has_link(&cast));
        }
        if has_image(&cast) {
            prop_assert!(has_link(&cast));
        }
    }

    /// Property: own emojis are drawn from own text only.
    #[test]
    fn prop_own_emojis_from_own_text(cast in cast_strategy()) {
        for emoji in own_emojis(&cast) {
            prop_assert!(cast.text().contains(emoji));
        }
    }

    /// Property: an emoji filter only admits casts using one of the emojis themselves.
    #[test]
    fn prop_emoji_filter_reads_own_text(casts in archive_strategy()) {
        let filters = SearchFilters {
            emojis: vec!["🔥".to_string()],
            ..SearchFilters::default()
        };
        for cast in apply_filters(&casts, &filters) {
            prop_assert!(cast.text().contains('🔥'));
        }
    }
}
