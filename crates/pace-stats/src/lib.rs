//! # pace-stats
//!
//! Async client for the public MLB Stats API.
//!
//! Covers the three lookups the tracker needs:
//! - team directory (`/teams`)
//! - active rosters (`/teams/{id}/roster`)
//! - person names (`/people/{id}`), including bulk prefetch into a
//!   [`pace_core::names::StaticDirectory`] so the synchronous core can
//!   resolve names without I/O.

pub mod people;
pub mod roster;
pub mod teams;

mod error;
mod http;

pub use error::StatsError;
pub use http::check_response;
pub use roster::{Roster, RosterEntry, RosterRole};
pub use teams::{DivisionName, League, TeamInfo};

use std::time::Duration;

use pace_config::StatsApiConfig;
use pace_core::ids::PersonId;

/// Player headshot on the MLB image CDN.
#[must_use]
pub fn headshot_url(id: PersonId) -> String {
    format!(
        "https://img.mlbstatic.com/mlb-photos/image/upload/w_180,q_100/v1/people/{id}/headshot/67/current.png"
    )
}

/// HTTP client bound to one Stats API root.
#[derive(Debug, Clone)]
pub struct StatsClient {
    http: reqwest::Client,
    base_url: String,
    sport_id: u32,
}

impl StatsClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::Http`] if the underlying `reqwest::Client` fails
    /// to build (e.g. TLS backend initialisation).
    pub fn new(config: &StatsApiConfig) -> Result<Self, StatsError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            sport_id: config.sport_id,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
