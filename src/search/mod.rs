// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query orchestration: one request in, one response out.
//!
//! Everything culminates here. Filtering picks the casts, ranking orders
//! them, facets summarize the whole ranked set, and the page is sliced last.
//! When a text query comes back empty, the fuzzy suggester gets a turn.
//!
//! ```text
//! collection ─► apply_filters ─► rank ─┬─► total
//!                                      ├─► facets
//!                                      └─► [offset .. offset+limit] ─► results
//!            (total == 0 && query) ─► suggest ─► suggestions
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::facets::{compute_facets, Facets};
use crate::filter::{apply_filters, SearchFilters};
use crate::fuzzy::{suggest, Suggestion};
use crate::scoring::rank;
use crate::types::Cast;

/// Result of one search.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// The requested page, in ranked order.
    pub results: Vec<Cast>,
    /// Size of the full filtered set, before pagination.
    pub total: usize,
    pub facets: Facets,
    /// Near matches, present only when a text query matched nothing and at
    /// least one cast scored above zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<Suggestion>>,
}

impl SearchResponse {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Run a request against a collection.
///
/// Pure: no I/O, no shared state. Malformed values in the request degrade
/// (bad timestamps exclude, page bounds clamp) rather than fail.
pub fn search(casts: &[Cast], filters: &SearchFilters) -> SearchResponse {
    let offset = filters.page_offset();
    let limit = filters.page_limit();
    let needle = filters.query_needle();

    let ranked = rank(apply_filters(casts, filters), filters.sort_key(), &needle);
    let total = ranked.len();
    let facets = compute_facets(ranked.iter().copied());

    let results: Vec<Cast> = ranked
        .iter()
        .skip(offset)
        .take(limit)
        .map(|cast| (*cast).clone())
        .collect();

    let suggestions = if total == 0 && filters.has_query() {
        Some(suggest(casts, filters)).filter(|found| !found.is_empty())
    } else {
        None
    };

    debug!(
        query = filters.trimmed_query(),
        total,
        returned = results.len(),
        offset,
        limit,
        suggestions = suggestions.as_ref().map_or(0, Vec::len),
        "search complete"
    );

    SearchResponse {
        results,
        total,
        facets,
        suggestions,
    }
}
