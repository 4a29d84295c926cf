// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Derived properties of a single cast.
//!
//! Everything here is a pure function of one record: what kind of cast it is,
//! whether it carries media or links, which emojis the author typed, and what
//! text it exposes to matching. The filter, facet, ranking and fuzzy stages
//! all ask these questions, so they live in one place and give one answer.

mod classify;
mod media;
mod text;

pub use classify::*;
pub use media::*;
pub use text::*;
