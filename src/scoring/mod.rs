// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ordering: how filtered casts get sorted for display.
//!
//! The key point is that the text-match bucket dominates the sort key. An
//! own-text hit always ranks above an embedded-only hit, whatever the likes,
//! replies or dates say.

pub mod ranking;

pub use ranking::{compare_casts, match_tier, rank, sort_timestamp, MatchTier};
