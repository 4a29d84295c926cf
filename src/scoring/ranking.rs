// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how filtered casts get ordered.
//!
//! With a text query, ranking is bucketed before it is sorted. Casts whose
//! own text contains the query form the first bucket; casts that matched only
//! through an embedded cast form the second. The sort key (newest, likes,
//! replies) only orders casts within a bucket, so an own-text hit with 1 like
//! beats an embedded-only hit with 1000.
//!
//! Bucket hierarchy: OwnText > EmbeddedOnly
//!
//! All sorts are stable: ties keep the order they arrived in.

use std::cmp::Ordering;

use crate::filter::{parse_timestamp_ms, SortBy};
use crate::record::{matches_embedded_text, matches_own_text};
use crate::types::Cast;

/// Which bucket a query match falls in. Smaller ranks first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
    /// Query found in the cast's own text.
    OwnText = 0,
    /// Query found only in an embedded cast's text.
    EmbeddedOnly = 1,
}

/// Bucket for a cast that passed the text filter.
///
/// A cast matching neither text lands in `OwnText`; the filter never lets
/// one through, but if it did it would not be demoted.
pub fn match_tier(cast: &Cast, needle: &str) -> MatchTier {
    if matches_own_text(cast, needle) {
        MatchTier::OwnText
    } else if matches_embedded_text(cast, needle) {
        MatchTier::EmbeddedOnly
    } else {
        MatchTier::OwnText
    }
}

/// Epoch milliseconds used by `SortBy::Newest`. Missing or unparseable
/// timestamps sort as 0.
pub fn sort_timestamp(cast: &Cast) -> i64 {
    cast.timestamp
        .as_deref()
        .and_then(parse_timestamp_ms)
        .unwrap_or(0)
}

/// Compare two casts under a sort key. `Less` means `a` ranks first.
///
/// Every key is descending: most likes, most replies, newest.
pub fn compare_casts(a: &Cast, b: &Cast, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Likes => b.likes().cmp(&a.likes()),
        SortBy::Replies => b.replies().cmp(&a.replies()),
        SortBy::Newest => sort_timestamp(b).cmp(&sort_timestamp(a)),
    }
}

fn sort_by_key(casts: &mut [&Cast], sort_by: SortBy) {
    match sort_by {
        // Parse each timestamp once instead of once per comparison.
        SortBy::Newest => casts.sort_by_cached_key(|cast| std::cmp::Reverse(sort_timestamp(cast))),
        SortBy::Likes | SortBy::Replies => casts.sort_by(|a, b| compare_casts(a, b, sort_by)),
    }
}

/// Order filtered casts for display.
///
/// `needle` is the lower-cased, trimmed query; pass `""` when there is none.
pub fn rank<'a>(mut casts: Vec<&'a Cast>, sort_by: SortBy, needle: &str) -> Vec<&'a Cast> {
    if needle.is_empty() {
        sort_by_key(&mut casts, sort_by);
        return casts;
    }

    let (mut own, mut embedded): (Vec<&Cast>, Vec<&Cast>) = casts
        .into_iter()
        .partition(|cast| match_tier(cast, needle) == MatchTier::OwnText);
    sort_by_key(&mut own, sort_by);
    sort_by_key(&mut embedded, sort_by);
    own.extend(embedded);
    own
}
