//! # pace-config
//!
//! Layered configuration loading for pace using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PACE_*` prefix, `__` as separator)
//! 2. Project-level `.pace/config.toml`
//! 3. User-level `~/.config/pace/config.toml`
//! 4. Built-in defaults (the 2025 season)
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PACE_SEASON__REGULAR_SEASON_START` -> `season.regular_season_start`,
//! `PACE_STATS_API__TIMEOUT_SECS` -> `stats_api.timeout_secs`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use pace_config::PaceConfig;
//!
//! let config = PaceConfig::load_with_dotenv().expect("config");
//! let window = config.season.to_window().expect("season");
//! println!("opening day: {}", window.regular_season_start);
//! ```

mod display;
mod error;
mod season;
mod stats_api;

pub use display::{DisplayConfig, NewsConfig};
pub use error::ConfigError;
pub use season::{SeasonConfig, TwoWayPlayer};
pub use stats_api::StatsApiConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "PACE_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PaceConfig {
    #[serde(default)]
    pub season: SeasonConfig,
    #[serde(default)]
    pub stats_api: StatsApiConfig,
    #[serde(default)]
    pub news: NewsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl PaceConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".pace/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stats_api.base_url().is_empty() {
            return Err(ConfigError::invalid("stats_api.base_url", "must not be empty"));
        }
        if self.stats_api.timeout_secs == 0 {
            return Err(ConfigError::invalid("stats_api.timeout_secs", "must be positive"));
        }
        self.season.to_window()?;
        self.display.time_formatter()?;
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pace").join("config.toml"))
    }
}
