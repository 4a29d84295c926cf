// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! "Did you mean" suggestions for queries that matched nothing.

use serde::{Deserialize, Serialize};

use super::similarity::similarity_score;
use crate::filter::{apply_filters, SearchFilters};
use crate::record::combined_text;
use crate::types::Cast;

/// Most suggestions returned for one query.
pub const MAX_SUGGESTIONS: usize = 5;

/// A near match for a query that found nothing exactly.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Suggestion {
    pub cast: Cast,
    /// Blended similarity, always in `(0, 1]`.
    pub score: f64,
}

/// Score every cast that passes the non-text filters against the query.
///
/// Returns at most [`MAX_SUGGESTIONS`] suggestions with positive scores,
/// best first. Equal scores keep collection order. Callers decide when
/// suggestions apply; with no query this returns nothing.
pub fn suggest(casts: &[Cast], filters: &SearchFilters) -> Vec<Suggestion> {
    let query = filters.trimmed_query();
    if query.is_empty() {
        return Vec::new();
    }

    let pool = apply_filters(casts, &filters.without_query());
    let mut scored: Vec<(&Cast, f64)> = pool
        .into_iter()
        .map(|cast| (cast, similarity_score(query, &combined_text(cast))))
        .filter(|&(_, score)| score > 0.0)
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(cast, score)| Suggestion {
            cast: cast.clone(),
            score,
        })
        .collect()
}
