// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The shape of an exported cast collection.
//!
//! These types mirror the compact export format one-for-one: snake_case keys,
//! nearly everything optional, embeds as a three-way tagged union keyed by
//! which field is present. The export is produced by a separate tool, so the
//! model is forgiving on read (absent counters are zero, absent
//! embed lists are empty) and never written back.
//!
//! # Invariants
//!
//! - **Collection**: loaded once, never mutated. `hash` is unique per cast.
//! - **Embed**: exactly one of `url`, `cast`, `cast_id_hash`. Modeled as a
//!   closed enum; every consumer matches all three. Entries with none of the
//!   three keys are dropped on read with a warning.
//! - **Classification**: every top-level cast is exactly one of quote, reply,
//!   standalone. See [`crate::record::classify`].

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Root of the export document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CastBatch {
    #[serde(default)]
    pub casts: Vec<Cast>,
}

/// Like and recast counters. Either may be missing in the export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Reactions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recasts_count: Option<u64>,
}

/// Reply counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Replies {
    pub count: u64,
}

/// Minimal author identity attached to embedded casts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Author {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fid: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pfp_url: Option<String>,
}

/// Borrowed view of an author, used for the process-wide primary identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorRef<'a> {
    pub fid: Option<u64>,
    pub username: Option<&'a str>,
    pub display_name: Option<&'a str>,
    pub pfp_url: Option<&'a str>,
}

impl Author {
    pub fn as_author_ref(&self) -> AuthorRef<'_> {
        AuthorRef {
            fid: self.fid,
            username: self.username.as_deref(),
            display_name: self.display_name.as_deref(),
            pfp_url: self.pfp_url.as_deref(),
        }
    }
}

/// Every top-level cast in the collection belongs to this account.
pub const PRIMARY_AUTHOR: AuthorRef<'static> = AuthorRef {
    fid: Some(3),
    username: Some("dwr.eth"),
    display_name: Some("Dan Romero"),
    pfp_url: Some(
        "https://imagedelivery.net/BXluQx4ige9GuW0Ia56BHw/bc698287-5adc-4cc5-a503-de16963ed900/original",
    ),
};

/// Parent author reference on a top-level cast. `fid` is null for non-replies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParentAuthor {
    #[serde(default)]
    pub fid: Option<u64>,
}

/// Attached content on a cast.
///
/// Untagged: serde tries the variants in order and picks the first whose
/// required key is present, which matches how the export discriminates.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Embed {
    /// A fully resolved nested cast (makes the parent a quote cast).
    Cast { cast: EmbeddedCast },
    /// External link or media.
    Url { url: String },
    /// Reference to a cast whose content was not exported.
    QuotedCastId { cast_id_hash: String },
}

/// Read an embed list, skipping entries that match no [`Embed`] variant.
///
/// `null` reads as empty.
fn lenient_embeds<'de, D>(deserializer: D) -> Result<Vec<Embed>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    let mut embeds = Vec::with_capacity(raw.len());
    for value in raw {
        match serde_json::from_value::<Embed>(value) {
            Ok(embed) => embeds.push(embed),
            Err(err) => warn!(error = %err, "skipping unrecognized embed"),
        }
    }
    Ok(embeds)
}

/// A cast nested inside another cast's embeds.
///
/// Carries its own author (the quoted account) but no parent information.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EmbeddedCast {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reactions: Option<Reactions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replies: Option<Replies>,
    #[serde(
        default,
        deserialize_with = "lenient_embeds",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub embeds: Vec<Embed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
}

impl EmbeddedCast {
    /// Own text, or the empty string.
    #[inline]
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// The quoted account, falling back to the primary author when the
    /// export omitted it.
    pub fn author_or_primary(&self) -> AuthorRef<'_> {
        self.author.as_ref().map_or(PRIMARY_AUTHOR, Author::as_author_ref)
    }
}

/// A top-level cast.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Cast {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reactions: Option<Reactions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replies: Option<Replies>,
    #[serde(
        default,
        deserialize_with = "lenient_embeds",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub embeds: Vec<Embed>,
    #[serde(default)]
    pub parent_hash: Option<String>,
    #[serde(default)]
    pub parent_author: Option<ParentAuthor>,
}

/// Permalinks use the first 10 characters of the hash.
const PERMALINK_HASH_LEN: usize = 10;

impl Cast {
    /// Own text, or the empty string.
    #[inline]
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    #[inline]
    pub fn likes(&self) -> u64 {
        self.reactions.and_then(|r| r.likes_count).unwrap_or(0)
    }

    #[inline]
    pub fn recasts(&self) -> u64 {
        self.reactions.and_then(|r| r.recasts_count).unwrap_or(0)
    }

    #[inline]
    pub fn replies(&self) -> u64 {
        self.replies.map_or(0, |r| r.count)
    }

    /// Embedded casts in embed order.
    pub fn embedded_casts(&self) -> impl Iterator<Item = &EmbeddedCast> {
        self.embeds.iter().filter_map(|embed| match embed {
            Embed::Cast { cast } => Some(cast),
            Embed::Url { .. } | Embed::QuotedCastId { .. } => None,
        })
    }

    /// Public URL of the cast on the primary author's profile.
    ///
    /// `None` when the export carries no hash.
    pub fn permalink(&self) -> Option<String> {
        let hash = self.hash.as_deref().filter(|h| !h.is_empty())?;
        let slug: String = hash.chars().take(PERMALINK_HASH_LEN).collect();
        let handle = PRIMARY_AUTHOR.username.unwrap_or("dwr.eth");
        Some(format!("https://farcaster.xyz/{}/{}", handle, slug))
    }
}
