//! Publication timestamps rendered in a display timezone.
//!
//! Feeds are inconsistent: RSS uses RFC 2822 (`Tue, 02 Jul 2024 00:13:30 GMT`),
//! JSON feeds RFC 3339, scrapers plain `YYYY-MM-DD HH:MM:SS`. Timestamps
//! without a zone are taken as UTC. Anything unparseable is shown as its first
//! 16 characters.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use thiserror::Error;

use crate::errors::CoreError;

/// Output layout, e.g. `2024-07-01 20:13 EDT`.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M %Z";

/// Characters of raw input kept when parsing fails.
pub const FALLBACK_CHARS: usize = 16;

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized timestamp: {0:?}")]
pub struct TimeError(pub String);

/// Parse a timestamp into UTC, honouring an explicit offset when present.
///
/// # Errors
///
/// Returns [`TimeError`] when `raw` matches none of the accepted layouts.
pub fn parse_utc(raw: &str) -> Result<DateTime<Utc>, TimeError> {
    let trimmed = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
    }

    Err(TimeError(raw.to_string()))
}

/// Converts publication timestamps to a fixed display zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeFormatter {
    zone: Tz,
}

impl Default for TimeFormatter {
    fn default() -> Self {
        Self {
            zone: chrono_tz::America::New_York,
        }
    }
}

impl TimeFormatter {
    #[must_use]
    pub const fn new(zone: Tz) -> Self {
        Self { zone }
    }

    /// Build a formatter from an IANA zone name such as `America/New_York`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownTimezone`] if the name is not in the IANA
    /// database.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        name.parse::<Tz>()
            .map(Self::new)
            .map_err(|_| CoreError::UnknownTimezone(name.to_string()))
    }

    #[must_use]
    pub const fn zone(&self) -> Tz {
        self.zone
    }

    /// Render `raw` as `YYYY-MM-DD HH:MM <ZONE>`, or its first 16 characters
    /// if it cannot be parsed.
    #[must_use]
    pub fn format(&self, raw: &str) -> String {
        match parse_utc(raw) {
            Ok(utc) => utc.with_timezone(&self.zone).format(DISPLAY_FORMAT).to_string(),
            Err(error) => {
                tracing::debug!(%error, "timestamp fallback");
                raw.chars().take(FALLBACK_CHARS).collect()
            }
        }
    }
}
