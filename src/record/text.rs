// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text views of a cast: own text, embedded text, emojis.
//!
//! "Own text" is what the primary author typed. Embedded casts carry someone
//! else's words (or the author's older ones), so emoji facets and the emoji
//! filter only ever read own text. Substring matching reads both, and the
//! ranker uses the distinction to put own-text hits first.

use crate::types::Cast;
use regex::Regex;
use std::sync::LazyLock;

static PICTOGRAPHIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Extended_Pictographic}").expect("static regex"));

/// Every extended-pictographic scalar in `text`, in order, duplicates kept.
pub fn extract_emojis(text: &str) -> Vec<&str> {
    PICTOGRAPHIC.find_iter(text).map(|m| m.as_str()).collect()
}

/// Emojis in the cast's own text only.
pub fn own_emojis(cast: &Cast) -> Vec<&str> {
    extract_emojis(cast.text())
}

/// Own text followed by each embedded cast's text, space separated.
///
/// Only the fuzzy scorer reads this.
pub fn combined_text(cast: &Cast) -> String {
    let mut acc = cast.text().to_string();
    for inner in cast.embedded_casts() {
        acc.push(' ');
        acc.push_str(inner.text());
    }
    acc
}

/// Case-insensitive substring test on own text. `needle` must already be
/// lower-cased; an empty needle never matches.
pub fn matches_own_text(cast: &Cast, needle: &str) -> bool {
    !needle.is_empty() && cast.text().to_lowercase().contains(needle)
}

/// Case-insensitive substring test on the text of any embedded cast.
pub fn matches_embedded_text(cast: &Cast, needle: &str) -> bool {
    !needle.is_empty()
        && cast
            .embedded_casts()
            .any(|inner| inner.text().to_lowercase().contains(needle))
}

/// Number of maximal non-whitespace runs in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Length of own text in UTF-16 code units, the unit web clients count in.
pub fn text_len(cast: &Cast) -> usize {
    cast.text().encode_utf16().count()
}
