// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Image and link detection.
//!
//! Images are recognized by URL alone: a known image extension at the end of
//! the URL, or the Farcaster image CDN anywhere in it. Nothing is fetched.
//! Both checks look one level into embedded casts and no further.

use crate::types::{Cast, Embed, EmbeddedCast};
use regex::Regex;
use std::sync::LazyLock;

/// Host substring of the image CDN most Farcaster clients upload to.
pub const IMAGE_CDN_HOST: &str = "imagedelivery.net";

/// Extensions treated as images, matched case-insensitively at the end.
pub const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".gif", ".webp"];

static URL_IN_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://").expect("static regex"));

/// Does this URL look like an image?
pub fn is_image_url(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) || lower.contains(IMAGE_CDN_HOST)
}

/// Does free text contain an `http://` or `https://` URL?
pub fn text_has_url(text: &str) -> bool {
    URL_IN_TEXT.is_match(text)
}

/// URLs of an embedded cast's own URL embeds.
fn nested_urls(cast: &EmbeddedCast) -> impl Iterator<Item = &str> {
    cast.embeds.iter().filter_map(|embed| match embed {
        Embed::Url { url } => Some(url.as_str()),
        // Nesting stops at one level.
        Embed::Cast { .. } | Embed::QuotedCastId { .. } => None,
    })
}

/// Every URL reachable from a cast: its own URL embeds, plus the URL embeds
/// of each embedded cast, in embed order.
pub fn reachable_urls(cast: &Cast) -> Vec<&str> {
    let mut urls = Vec::new();
    for embed in &cast.embeds {
        match embed {
            Embed::Url { url } => urls.push(url.as_str()),
            Embed::Cast { cast: inner } => urls.extend(nested_urls(inner)),
            Embed::QuotedCastId { .. } => {}
        }
    }
    urls
}

pub fn has_image(cast: &Cast) -> bool {
    reachable_urls(cast).into_iter().any(is_image_url)
}

/// Does the cast carry a link anywhere?
///
/// Own text URL, any URL embed, a URL in an embedded cast's text, or a URL
/// embed inside an embedded cast. Quoted-id embeds never count.
pub fn has_link(cast: &Cast) -> bool {
    if text_has_url(cast.text()) {
        return true;
    }
    cast.embeds.iter().any(|embed| match embed {
        Embed::Url { .. } => true,
        Embed::Cast { cast: inner } => {
            text_has_url(inner.text()) || nested_urls(inner).next().is_some()
        }
        Embed::QuotedCastId { .. } => false,
    })
}
