//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use castlens::testing::{make_cast, make_quote, make_reply, with_likes, with_replies, with_timestamp, with_url};
use castlens::{Cast, CastBatch};

// Re-export canonical test utilities from castlens::testing
pub use castlens::testing::texts;

// ============================================================================
// FIXTURE COLLECTION
// ============================================================================

/// A small archive covering every cast kind, embed variant and counter.
///
/// Timestamps are UTC; the Pacific wall-clock reading is noted per cast.
pub fn fixture_casts() -> Vec<Cast> {
    vec![
        // 2024-01-15 09:00 PST
        with_likes(
            with_timestamp(make_cast("gm farcaster ☀️"), "2024-01-15T17:00:00Z"),
            120,
        ),
        // 2024-01-15 11:11 PST
        with_replies(
            with_timestamp(make_cast("make a wish 🌠"), "2024-01-15T19:11:00Z"),
            9,
        ),
        // 2024-01-16 00:30 PST
        with_timestamp(
            with_url(make_cast("late night build"), "https://imagedelivery.net/abc/def"),
            "2024-01-16T08:30:00.000Z",
        ),
        // 2024-07-04 12:59 PDT
        with_likes(
            with_timestamp(
                make_quote("this is the way", "gm from the quoted cast 🔥"),
                "2024-07-04T19:59:00Z",
            ),
            40,
        ),
        // 2024-07-05 02:22 PDT
        with_timestamp(
            with_url(make_cast("read this https://paragraph.xyz/post"), "https://example.com/doc"),
            "2024-07-05T09:22:00Z",
        ),
        with_timestamp(make_reply("agreed", "0xparent", Some(2)), "2024-03-01T10:00:00Z"),
        // No timestamp at all.
        make_cast("🔥"),
    ]
}

/// A cast timestamped at the given UTC instant, for clock tests.
pub fn at(text: &str, utc: &str) -> Cast {
    with_timestamp(make_cast(text), utc)
}

// ============================================================================
// EXPORT FILES
// ============================================================================

/// Write `casts` as an export document under `dir` and return its path.
pub fn write_export(dir: &Path, casts: Vec<Cast>) -> PathBuf {
    let path = dir.join("casts.json");
    let json = serde_json::to_string(&CastBatch { casts }).expect("serialize fixture");
    std::fs::write(&path, json).expect("write fixture");
    path
}
