//! Cross-cutting error types for pace.
//!
//! The transformations themselves never fail: name lookups and timestamp
//! parsing fall back to display strings. `CoreError` covers the few
//! constructors that validate their input. Crate-specific errors
//! (`ConfigError`, `StatsError`) live in their own crates and converge into
//! `anyhow` in `pace-cli`.

use thiserror::Error;

/// Errors raised while building core values from untrusted input.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A timezone name was not found in the IANA database.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    /// A season definition is internally inconsistent.
    #[error("Invalid season window: {0}")]
    InvalidSeason(String),

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
