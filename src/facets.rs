// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Facets: aggregate summaries over a filtered result set.
//!
//! Computed over everything the filter kept, before pagination, so the
//! numbers describe the whole result and not the visible page.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::record::{has_image, has_link, is_quote, own_emojis};
use crate::types::Cast;

/// How many emojis the facet keeps.
pub const TOP_EMOJIS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: usize,
}

/// Per-category counts. Not exclusive: a quote with an image and a link
/// counts in all three.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CategoryCounts {
    pub quotes: usize,
    pub images: usize,
    pub links: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Facets {
    pub top_emojis: Vec<EmojiCount>,
    pub counts: CategoryCounts,
}

/// Tally own-text emojis and category counts.
///
/// Emojis are ranked by descending count; equal counts keep the order in
/// which each emoji was first seen.
pub fn compute_facets<'a, I>(casts: I) -> Facets
where
    I: IntoIterator<Item = &'a Cast>,
{
    let mut counts = CategoryCounts::default();
    // Insertion-ordered tally: slot index per emoji, counts in first-seen order.
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut tally: Vec<(&str, usize)> = Vec::new();

    for cast in casts {
        if is_quote(cast) {
            counts.quotes += 1;
        }
        if has_image(cast) {
            counts.images += 1;
        }
        if has_link(cast) {
            counts.links += 1;
        }
        for emoji in own_emojis(cast) {
            match slots.get(emoji) {
                Some(&slot) => tally[slot].1 += 1,
                None => {
                    slots.insert(emoji, tally.len());
                    tally.push((emoji, 1));
                }
            }
        }
    }

    // Stable: ties stay in first-seen order.
    tally.sort_by(|a, b| b.1.cmp(&a.1));
    let top_emojis = tally
        .into_iter()
        .take(TOP_EMOJIS)
        .map(|(emoji, count)| EmojiCount {
            emoji: emoji.to_string(),
            count,
        })
        .collect();

    Facets { top_emojis, counts }
}
