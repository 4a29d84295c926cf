// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Quote / reply / standalone classification.
//!
//! The three classes partition the collection. A cast that embeds another
//! cast is a quote even if the export also gave it parent info; the
//! exported working set only contains non-replies, so that overlap does not
//! occur in practice.

use crate::types::{Cast, Embed};
use serde::Serialize;

/// The class a top-level cast belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CastKind {
    Quote,
    Reply,
    Standalone,
}

/// Does the cast embed another full cast?
pub fn is_quote(cast: &Cast) -> bool {
    cast.embeds.iter().any(|embed| match embed {
        Embed::Cast { .. } => true,
        Embed::Url { .. } | Embed::QuotedCastId { .. } => false,
    })
}

/// Is the cast a reply? Both the parent hash and the parent author fid must
/// be present.
pub fn is_reply(cast: &Cast) -> bool {
    cast.parent_hash.is_some() && cast.parent_author.and_then(|p| p.fid).is_some()
}

pub fn is_standalone(cast: &Cast) -> bool {
    !is_reply(cast) && !is_quote(cast)
}

/// Exactly one class per cast. Quote wins over reply.
pub fn classify(cast: &Cast) -> CastKind {
    if is_quote(cast) {
        CastKind::Quote
    } else if is_reply(cast) {
        CastKind::Reply
    } else {
        CastKind::Standalone
    }
}
