// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the castlens command-line interface.
//!
//! Two subcommands: `search` to run a query against the export and `stats`
//! to report its size. Every request field has a flag; `--params` takes the
//! URL query-string form instead, for pasting requests out of a browser.

pub mod display;

use std::path::PathBuf;

use castlens::filter::{params, SearchFilters, SortBy, TimeBucket, TimePattern};
use castlens::config::DATA_FILE_ENV;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "castlens",
    about = "Search one author's exported Farcaster casts",
    version
)]
pub struct Cli {
    /// Path to the cast export (JSON)
    #[arg(long, global = true, env = DATA_FILE_ENV)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search casts and display results
    Search(SearchArgs),

    /// Print the number of casts in the export
    Stats {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Case-insensitive text query
    pub query: Option<String>,

    /// Request in URL query-string form, e.g. 'q=gm&sortBy=likes&isQuote=1'
    ///
    /// Replaces every other filter flag.
    #[arg(long, conflicts_with = "query")]
    pub params: Option<String>,

    /// Only quote casts
    #[arg(long, conflicts_with = "no_quote")]
    pub quote: bool,

    /// Exclude quote casts
    #[arg(long)]
    pub no_quote: bool,

    /// Only casts with an image
    #[arg(long, conflicts_with = "no_image")]
    pub image: bool,

    /// Exclude casts with an image
    #[arg(long)]
    pub no_image: bool,

    /// Only casts with a link
    #[arg(long, conflicts_with = "no_link")]
    pub link: bool,

    /// Exclude casts with a link
    #[arg(long)]
    pub no_link: bool,

    /// Only single-word casts
    #[arg(long)]
    pub one_word: bool,

    /// Only casts of 240 characters or more
    #[arg(long)]
    pub longform: bool,

    /// Earliest timestamp (ISO-8601, inclusive)
    #[arg(long)]
    pub from: Option<String>,

    /// Latest timestamp (ISO-8601, inclusive)
    #[arg(long)]
    pub to: Option<String>,

    /// Require an emoji in the cast's own text (repeatable; any matches)
    #[arg(long = "emoji")]
    pub emojis: Vec<String>,

    /// Minimum like count
    #[arg(long)]
    pub min_likes: Option<u64>,

    /// Minimum reply count
    #[arg(long)]
    pub min_replies: Option<u64>,

    /// Result order: newest, likes, replies
    #[arg(long)]
    pub sort: Option<SortBy>,

    /// Pacific time window: midnight, morning, lunch
    #[arg(long)]
    pub bucket: Option<TimeBucket>,

    /// Pacific clock pattern: topOfHour, buzzerBeater, elevenEleven, duplicities
    #[arg(long)]
    pub pattern: Option<TimePattern>,

    /// Results to skip
    #[arg(long)]
    pub offset: Option<i64>,

    /// Page size (1-200)
    #[arg(short, long)]
    pub limit: Option<i64>,

    /// Print the JSON response instead of cards
    #[arg(long)]
    pub json: bool,
}

/// Two mutually exclusive switches to an optional equality filter.
fn tri_state(yes: bool, no: bool) -> Option<bool> {
    match (yes, no) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

/// `true` switches become `Some(true)`; an unset switch means no filter.
fn switch(on: bool) -> Option<bool> {
    on.then_some(true)
}

impl SearchArgs {
    /// Build the request these arguments describe.
    pub fn to_filters(&self) -> SearchFilters {
        if let Some(raw) = &self.params {
            return params::from_query_string(raw);
        }
        SearchFilters {
            q: self.query.clone(),
            offset: self.offset,
            limit: self.limit,
            is_quote: tri_state(self.quote, self.no_quote),
            has_image: tri_state(self.image, self.no_image),
            has_link: tri_state(self.link, self.no_link),
            one_word: switch(self.one_word),
            longform: switch(self.longform),
            date_from: self.from.clone(),
            date_to: self.to.clone(),
            emojis: self.emojis.clone(),
            min_likes: self.min_likes,
            min_replies: self.min_replies,
            sort_by: self.sort,
            time_bucket: self.bucket,
            time_pattern: self.pattern,
        }
    }
}
