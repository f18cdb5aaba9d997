//! MLB Stats API client configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "https://statsapi.mlb.com/api/v1".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("pace/", env!("CARGO_PKG_VERSION")).to_string()
}

/// MLB sport id (1 = Major League Baseball).
const fn default_sport_id() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StatsApiConfig {
    /// API root without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_sport_id")]
    pub sport_id: u32,
}

impl Default for StatsApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            sport_id: default_sport_id(),
        }
    }
}

impl StatsApiConfig {
    /// Base URL with any trailing slashes removed.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
