// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Filtering: which casts a request selects.
//!
//! The request type lives in `criteria`, Pacific-time arithmetic in `clock`,
//! the compiled predicate in `predicate`, and URL query-string decoding in
//! `params`. Nothing here reorders; ranking happens afterwards.

mod clock;
mod criteria;
pub mod params;
mod predicate;

pub use clock::{parse_timestamp_ms, PacificTime};
pub use criteria::*;
pub use predicate::{apply_filters, Criteria};
