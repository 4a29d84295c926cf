// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy suggestions: typo tolerance when exact matching finds nothing.
//!
//! `similarity` holds the scoring pieces (word tokens, trigrams, Jaccard)
//! and `suggest` applies them to a filtered candidate pool.

mod similarity;
mod suggest;

pub use similarity::{
    jaccard, similarity_score, trigrams, word_tokens, TRIGRAM_WEIGHT, WORD_WEIGHT,
};
pub use suggest::{suggest, Suggestion, MAX_SUGGESTIONS};
