//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical cast builders to avoid duplication.

#![doc(hidden)]

use crate::types::{Author, Cast, Embed, EmbeddedCast, ParentAuthor, Reactions, Replies};

/// Create a standalone top-level cast with the given text.
///
/// This is the canonical implementation used across all tests.
pub fn make_cast(text: &str) -> Cast {
    Cast {
        hash: Some(format!("0x{:016x}", fnv(text))),
        text: Some(text.to_string()),
        timestamp: None,
        reactions: None,
        replies: None,
        embeds: Vec::new(),
        parent_hash: None,
        parent_author: Some(ParentAuthor { fid: None }),
    }
}

/// Create a quote cast: own text plus one embedded cast with `inner_text`.
pub fn make_quote(text: &str, inner_text: &str) -> Cast {
    let mut cast = make_cast(text);
    cast.embeds.push(Embed::Cast {
        cast: EmbeddedCast {
            hash: Some(format!("0x{:016x}", fnv(inner_text))),
            text: Some(inner_text.to_string()),
            author: Some(Author {
                fid: Some(2),
                username: Some("v".to_string()),
                display_name: Some("Varun".to_string()),
                pfp_url: None,
            }),
            ..EmbeddedCast::default()
        },
    });
    cast
}

/// Create a cast with parent info. `parent_fid = None` models a cast posted
/// into a channel (parent hash set, no parent author).
pub fn make_reply(text: &str, parent_hash: &str, parent_fid: Option<u64>) -> Cast {
    let mut cast = make_cast(text);
    cast.parent_hash = Some(parent_hash.to_string());
    cast.parent_author = Some(ParentAuthor { fid: parent_fid });
    cast
}

/// Append a URL embed.
pub fn with_url(mut cast: Cast, url: &str) -> Cast {
    cast.embeds.push(Embed::Url {
        url: url.to_string(),
    });
    cast
}

/// Set the like count.
pub fn with_likes(mut cast: Cast, likes: u64) -> Cast {
    let reactions = cast.reactions.get_or_insert_with(Reactions::default);
    reactions.likes_count = Some(likes);
    cast
}

/// Set the reply count.
pub fn with_replies(mut cast: Cast, count: u64) -> Cast {
    cast.replies = Some(Replies { count });
    cast
}

/// Set the ISO-8601 timestamp.
pub fn with_timestamp(mut cast: Cast, timestamp: &str) -> Cast {
    cast.timestamp = Some(timestamp.to_string());
    cast
}

/// Append a URL embed to the first embedded cast. No-op on non-quotes.
pub fn with_embedded_url(mut cast: Cast, url: &str) -> Cast {
    let inner = cast.embeds.iter_mut().find_map(|embed| match embed {
        Embed::Cast { cast } => Some(cast),
        Embed::Url { .. } | Embed::QuotedCastId { .. } => None,
    });
    if let Some(inner) = inner {
        inner.embeds.push(Embed::Url {
            url: url.to_string(),
        });
    }
    cast
}

/// Texts of a result list, for compact ordering assertions.
pub fn texts<'a, I>(casts: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a Cast>,
{
    casts.into_iter().map(Cast::text).collect()
}

/// FNV-1a, so generated hashes are stable and distinct per text.
fn fnv(text: &str) -> u64 {
    text.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
    })
}
