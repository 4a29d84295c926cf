// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search request: every filter, sort and page knob a caller can set.
//!
//! All fields are optional and absence means "no constraint". The JSON shape
//! is camelCase; the text query is `q` (also accepted as `textQuery`).

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default page size.
pub const DEFAULT_LIMIT: i64 = 50;

/// Largest page a single request may ask for.
pub const MAX_LIMIT: i64 = 200;

/// Own text at least this many UTF-16 code units long counts as longform.
pub const LONGFORM_MIN_LEN: usize = 240;

/// Result ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    #[default]
    Newest,
    Likes,
    Replies,
}

/// Pacific wall-clock hour windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeBucket {
    /// 00:00–00:59
    Midnight,
    /// 06:00–10:59
    Morning,
    /// 12:00–12:59
    Lunch,
}

/// Pacific wall-clock minute patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TimePattern {
    /// :00
    TopOfHour,
    /// :59
    BuzzerBeater,
    /// 11:11, AM or PM
    ElevenEleven,
    /// 2:22, 3:33, 4:44, 5:55, AM or PM
    Duplicities,
}

macro_rules! str_enum {
    ($ty:ident, $what:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok($ty::$variant),)+
                    other => Err(Error::InvalidQuery(format!(
                        "unknown {} '{}' (expected one of: {})",
                        $what,
                        other,
                        [$($name),+].join(", ")
                    ))),
                }
            }
        }
    };
}

str_enum!(SortBy, "sort", {
    Newest => "newest",
    Likes => "likes",
    Replies => "replies",
});

str_enum!(TimeBucket, "time bucket", {
    Midnight => "midnight",
    Morning => "morning",
    Lunch => "lunch",
});

str_enum!(TimePattern, "time pattern", {
    TopOfHour => "topOfHour",
    BuzzerBeater => "buzzerBeater",
    ElevenEleven => "elevenEleven",
    Duplicities => "duplicities",
});

/// A search request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    /// Free-text query, matched case-insensitively against own and embedded text.
    #[serde(alias = "textQuery", skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_quote: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_image: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_link: Option<bool>,
    /// Only `Some(true)` constrains.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_word: Option<bool>,
    /// Only `Some(true)` constrains.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longform: Option<bool>,
    /// Inclusive lower bound, ISO-8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    /// Inclusive upper bound, ISO-8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    /// Match any of these in own text. Empty means no constraint.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub emojis: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_likes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_replies: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_bucket: Option<TimeBucket>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_pattern: Option<TimePattern>,
}

impl SearchFilters {
    /// Request with just a text query.
    pub fn query(q: impl Into<String>) -> Self {
        Self {
            q: Some(q.into()),
            ..Self::default()
        }
    }

    /// The query as typed, trimmed. Empty when absent.
    pub fn trimmed_query(&self) -> &str {
        self.q.as_deref().map_or("", str::trim)
    }

    /// The query as matched: trimmed and lower-cased.
    pub fn query_needle(&self) -> String {
        self.trimmed_query().to_lowercase()
    }

    pub fn has_query(&self) -> bool {
        !self.trimmed_query().is_empty()
    }

    /// Same request with the text query removed. Used to build the fuzzy
    /// candidate pool.
    pub fn without_query(&self) -> Self {
        Self {
            q: None,
            ..self.clone()
        }
    }

    pub fn sort_key(&self) -> SortBy {
        self.sort_by.unwrap_or_default()
    }

    /// `offset` clamped to be non-negative.
    pub fn page_offset(&self) -> usize {
        self.offset.unwrap_or(0).max(0) as usize
    }

    /// `limit` defaulted to 50 and clamped to `[1, 200]`.
    pub fn page_limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT) as usize
    }
}
