// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Blended word/trigram similarity.
//!
//! Word overlap rewards getting the vocabulary right; trigram overlap rewards
//! getting the spelling nearly right. Blending them lets "gm frens" find
//! "gm friends" even though the second word never matches exactly.

use std::collections::HashSet;
use std::hash::Hash;
use std::sync::LazyLock;

use regex::Regex;

/// Weight of word-set overlap in the blended score.
pub const WORD_WEIGHT: f64 = 0.6;

/// Weight of character-trigram overlap in the blended score.
pub const TRIGRAM_WEIGHT: f64 = 0.4;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}\s]").expect("static regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

/// Lower-cased word tokens longer than one character.
///
/// Punctuation and symbols split words: "gm,frens!" gives `gm` and `frens`.
pub fn word_tokens(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    NON_WORD
        .replace_all(&lower, " ")
        .split_whitespace()
        .filter(|token| token.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

/// Character trigrams of the normalized text.
///
/// Normalization lower-cases, collapses whitespace runs to one space and
/// trims. Text shorter than three characters is its own single gram; empty
/// text has none.
pub fn trigrams(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let collapsed = WHITESPACE_RUN.replace_all(&lower, " ");
    let chars: Vec<char> = collapsed.trim().chars().collect();
    match chars.len() {
        0 => Vec::new(),
        1 | 2 => vec![chars.iter().collect()],
        _ => chars.windows(3).map(|w| w.iter().collect()).collect(),
    }
}

/// `|A ∩ B| / |A ∪ B|` over distinct elements. Two empty inputs score 0.
pub fn jaccard<T, A, B>(a: A, b: B) -> f64
where
    T: Eq + Hash,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let a: HashSet<T> = a.into_iter().collect();
    let b: HashSet<T> = b.into_iter().collect();
    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(&b).count();
    intersection as f64 / union as f64
}

/// Blended similarity in `[0, 1]`. Empty query or empty text scores 0.
pub fn similarity_score(query: &str, text: &str) -> f64 {
    if query.is_empty() || text.is_empty() {
        return 0.0;
    }
    let words = jaccard(word_tokens(query), word_tokens(text));
    let grams = jaccard(trigrams(query), trigrams(text));
    WORD_WEIGHT * words + TRIGRAM_WEIGHT * grams
}
