// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Timestamps and Pacific wall-clock time.
//!
//! Casts carry ISO-8601 strings. Date-range filters compare epoch
//! milliseconds; bucket and pattern filters compare the wall clock in
//! America/Los_Angeles, which shifts with DST, so the conversion goes through
//! the tz database rather than a fixed -08:00.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use chrono_tz::America::Los_Angeles;

use super::criteria::{TimeBucket, TimePattern};

/// Parse an ISO-8601 timestamp to epoch milliseconds.
///
/// Accepts RFC 3339 (`2024-03-10T09:30:00Z`, `...+02:00`), a date-time
/// without offset (read as UTC), or a bare date (UTC midnight). Anything
/// else is `None`, which every date/time filter treats as "does not match".
pub fn parse_timestamp_ms(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive).timestamp_millis());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Some(Utc.from_utc_datetime(&naive).timestamp_millis());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive).timestamp_millis())
}

/// Wall-clock components of an instant in Pacific time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacificTime {
    /// 0–23
    pub hour24: u32,
    /// 1–12
    pub hour12: u32,
    /// 0–59
    pub minute: u32,
}

impl PacificTime {
    pub fn from_millis(ms: i64) -> Option<Self> {
        let utc = DateTime::<Utc>::from_timestamp_millis(ms)?;
        let local = utc.with_timezone(&Los_Angeles);
        let hour24 = local.hour();
        Some(Self {
            hour24,
            hour12: ((hour24 + 11) % 12) + 1,
            minute: local.minute(),
        })
    }

    pub fn parse(raw: &str) -> Option<Self> {
        parse_timestamp_ms(raw).and_then(Self::from_millis)
    }
}

impl TimeBucket {
    pub fn matches(self, t: PacificTime) -> bool {
        match self {
            TimeBucket::Midnight => t.hour24 == 0,
            TimeBucket::Morning => (6..=10).contains(&t.hour24),
            TimeBucket::Lunch => t.hour24 == 12,
        }
    }
}

impl TimePattern {
    pub fn matches(self, t: PacificTime) -> bool {
        match self {
            TimePattern::TopOfHour => t.minute == 0,
            TimePattern::BuzzerBeater => t.minute == 59,
            TimePattern::ElevenEleven => t.hour12 == 11 && t.minute == 11,
            TimePattern::Duplicities => {
                // 11:11 belongs to ElevenEleven; 1:11 is not a duplicity.
                let repeated = t.hour12 * 11;
                t.hour12 != 11 && t.hour12 != 1 && repeated < 60 && t.minute == repeated
            }
        }
    }
}
