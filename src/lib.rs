// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory search over one author's exported Farcaster casts.
//!
//! The whole export is loaded once and every query is a linear scan: filter,
//! rank, facet, paginate. No index is built; a personal archive is small
//! enough that a scan beats keeping one in sync.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  types.rs   │────▶│   record/    │────▶│   filter/    │
//! │ (Cast,      │     │ (classify,   │     │ (criteria,   │
//! │  Embed)     │     │  media, text)│     │  clock)      │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                                                 │
//!        ┌────────────────────┬───────────────────┤
//!        ▼                    ▼                   ▼
//! ┌──────────────┐     ┌──────────────┐    ┌──────────────┐
//! │  scoring/    │     │  facets.rs   │    │   fuzzy/     │
//! │  (rank)      │     │ (emojis,     │    │ (suggest)    │
//! │              │     │  counts)     │    │              │
//! └──────────────┘     └──────────────┘    └──────────────┘
//!        │                    │                   │
//!        └────────────────────┼───────────────────┘
//!                             ▼
//!                      ┌──────────────┐     ┌──────────────┐
//!                      │  search/     │◀────│ repository.rs│
//!                      │ (search)     │     │ (load once)  │
//!                      └──────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use castlens::{CastRepository, Config, SearchFilters, SortBy};
//!
//! # async fn demo() -> castlens::Result<()> {
//! let repo = CastRepository::from_config(&Config::from_env());
//! let filters = SearchFilters {
//!     sort_by: Some(SortBy::Likes),
//!     ..SearchFilters::query("gm")
//! };
//! let response = repo.search(&filters).await?;
//! println!("{} matches", response.total);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod facets;
pub mod filter;
pub mod fuzzy;
pub mod logging;
pub mod record;
pub mod repository;
pub mod scoring;
pub mod search;
pub mod testing;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use facets::{compute_facets, Facets};
pub use filter::{apply_filters, SearchFilters, SortBy, TimeBucket, TimePattern};
pub use fuzzy::{suggest, Suggestion};
pub use repository::{CastRepository, Stats};
pub use scoring::rank;
pub use search::{search, SearchResponse};
pub use types::{Cast, CastBatch, Embed, EmbeddedCast, PRIMARY_AUTHOR};
