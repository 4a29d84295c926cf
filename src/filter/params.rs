// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! URL query-string decoding for search requests.
//!
//! Web front-ends encode a request as `?q=gm&isQuote=1&emoji=🔥&sortBy=likes`.
//! Flags are `"1"` for true and anything else for false; `emoji` repeats;
//! numbers that fail to parse are dropped (offset/limit fall back to their
//! defaults). Unknown keys are ignored.

use super::criteria::SearchFilters;

fn flag(value: &str) -> bool {
    value == "1"
}

/// Decode a raw query string (with or without the leading `?`).
///
/// Values are percent-decoded and `+` is read as a space.
pub fn from_query_string(query: &str) -> SearchFilters {
    let query = query.strip_prefix('?').unwrap_or(query);
    let pairs = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (decode_component(key), decode_component(value)),
            None => (decode_component(pair), String::new()),
        })
        .collect::<Vec<_>>();
    from_query_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
}

/// Decode already-split `(key, value)` pairs.
///
/// For single-valued keys the first occurrence wins.
pub fn from_query_pairs<'a, I>(pairs: I) -> SearchFilters
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut filters = SearchFilters::default();
    for (key, value) in pairs {
        match key {
            "q" => {
                filters.q.get_or_insert_with(|| value.to_string());
            }
            "offset" => {
                if filters.offset.is_none() {
                    filters.offset = value.trim().parse().ok();
                }
            }
            "limit" => {
                if filters.limit.is_none() {
                    filters.limit = value.trim().parse().ok();
                }
            }
            "isQuote" => {
                filters.is_quote.get_or_insert(flag(value));
            }
            "hasImage" => {
                filters.has_image.get_or_insert(flag(value));
            }
            "hasLink" => {
                filters.has_link.get_or_insert(flag(value));
            }
            "oneWord" => {
                filters.one_word.get_or_insert(flag(value));
            }
            "longform" => {
                filters.longform.get_or_insert(flag(value));
            }
            "dateFrom" => {
                filters.date_from.get_or_insert_with(|| value.to_string());
            }
            "dateTo" => {
                filters.date_to.get_or_insert_with(|| value.to_string());
            }
            "emoji" => filters.emojis.push(value.to_string()),
            "minLikes" => {
                if filters.min_likes.is_none() {
                    filters.min_likes = value.trim().parse().ok();
                }
            }
            "minReplies" => {
                if filters.min_replies.is_none() {
                    filters.min_replies = value.trim().parse().ok();
                }
            }
            "sortBy" => {
                if filters.sort_by.is_none() {
                    filters.sort_by = value.parse().ok();
                }
            }
            "timeBucket" => {
                if filters.time_bucket.is_none() {
                    filters.time_bucket = value.parse().ok();
                }
            }
            "timePattern" => {
                if filters.time_pattern.is_none() {
                    filters.time_pattern = value.parse().ok();
                }
            }
            _ => {}
        }
    }
    filters
}

/// `application/x-www-form-urlencoded` component decoding.
///
/// Malformed escapes are kept verbatim; invalid UTF-8 is replaced.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}
