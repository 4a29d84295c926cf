// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The composite filter over a cast collection.
//!
//! A request is compiled once into [`Criteria`] (query lower-cased, date
//! bounds parsed, emoji set built) and then tested against every cast. Each
//! clause is an early return, so the cheap checks reject before the
//! expensive ones (URL regex, timezone conversion) run.
//!
//! **Invariant**: `apply_filters` is a stable filter. Casts that pass keep
//! their relative order from the source collection.

use std::collections::HashSet;

use tracing::warn;

use super::clock::{parse_timestamp_ms, PacificTime};
use super::criteria::{SearchFilters, TimeBucket, TimePattern, LONGFORM_MIN_LEN};
use crate::record::{
    has_image, has_link, is_quote, matches_embedded_text, matches_own_text, own_emojis,
    text_len, word_count,
};
use crate::types::Cast;

/// Inclusive date range. `active` is set whenever the request carried a
/// bound, even one that failed to parse: an active range still requires the
/// cast to have a parseable timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct DateRange {
    active: bool,
    from_ms: Option<i64>,
    to_ms: Option<i64>,
}

impl DateRange {
    fn new(from: Option<&str>, to: Option<&str>) -> Self {
        let from = from.filter(|s| !s.is_empty());
        let to = to.filter(|s| !s.is_empty());
        Self {
            active: from.is_some() || to.is_some(),
            from_ms: from.and_then(|raw| parse_bound("dateFrom", raw)),
            to_ms: to.and_then(|raw| parse_bound("dateTo", raw)),
        }
    }

    fn contains(&self, ts_ms: Option<i64>) -> bool {
        if !self.active {
            return true;
        }
        let Some(ts) = ts_ms else {
            return false;
        };
        self.from_ms.map_or(true, |from| ts >= from) && self.to_ms.map_or(true, |to| ts <= to)
    }
}

fn parse_bound(name: &str, raw: &str) -> Option<i64> {
    let parsed = parse_timestamp_ms(raw);
    if parsed.is_none() {
        warn!(bound = name, value = raw, "ignoring unparseable date bound");
    }
    parsed
}

/// A compiled request, ready to test casts.
#[derive(Debug, Clone)]
pub struct Criteria<'f> {
    needle: String,
    is_quote: Option<bool>,
    has_image: Option<bool>,
    has_link: Option<bool>,
    dates: DateRange,
    emojis: HashSet<&'f str>,
    one_word: bool,
    longform: bool,
    min_likes: Option<u64>,
    min_replies: Option<u64>,
    time_bucket: Option<TimeBucket>,
    time_pattern: Option<TimePattern>,
}

impl<'f> Criteria<'f> {
    pub fn new(filters: &'f SearchFilters) -> Self {
        Self {
            needle: filters.query_needle(),
            is_quote: filters.is_quote,
            has_image: filters.has_image,
            has_link: filters.has_link,
            dates: DateRange::new(filters.date_from.as_deref(), filters.date_to.as_deref()),
            emojis: filters.emojis.iter().map(String::as_str).collect(),
            one_word: filters.one_word == Some(true),
            longform: filters.longform == Some(true),
            min_likes: filters.min_likes,
            min_replies: filters.min_replies,
            time_bucket: filters.time_bucket,
            time_pattern: filters.time_pattern,
        }
    }

    /// Lower-cased, trimmed text query. Empty when the request has none.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Does the cast satisfy every clause?
    pub fn matches(&self, cast: &Cast) -> bool {
        if !self.needle.is_empty()
            && !matches_own_text(cast, &self.needle)
            && !matches_embedded_text(cast, &self.needle)
        {
            return false;
        }

        if self.is_quote.is_some_and(|want| is_quote(cast) != want) {
            return false;
        }
        if self.has_image.is_some_and(|want| has_image(cast) != want) {
            return false;
        }
        if self.has_link.is_some_and(|want| has_link(cast) != want) {
            return false;
        }

        if self.dates.active {
            let ts = cast.timestamp.as_deref().and_then(parse_timestamp_ms);
            if !self.dates.contains(ts) {
                return false;
            }
        }

        if !self.emojis.is_empty()
            && !own_emojis(cast).iter().any(|e| self.emojis.contains(e))
        {
            return false;
        }

        if self.one_word && word_count(cast.text()) != 1 {
            return false;
        }
        if self.longform && text_len(cast) < LONGFORM_MIN_LEN {
            return false;
        }

        if self.min_likes.is_some_and(|min| cast.likes() < min) {
            return false;
        }
        if self.min_replies.is_some_and(|min| cast.replies() < min) {
            return false;
        }

        if self.time_bucket.is_some() || self.time_pattern.is_some() {
            let Some(t) = cast.timestamp.as_deref().and_then(PacificTime::parse) else {
                return false;
            };
            if self.time_bucket.is_some_and(|bucket| !bucket.matches(t)) {
                return false;
            }
            if self.time_pattern.is_some_and(|pattern| !pattern.matches(t)) {
                return false;
            }
        }

        true
    }
}

/// Every cast satisfying `filters`, in source order.
pub fn apply_filters<'a>(casts: &'a [Cast], filters: &SearchFilters) -> Vec<&'a Cast> {
    let criteria = Criteria::new(filters);
    casts.iter().filter(|cast| criteria.matches(cast)).collect()
}
