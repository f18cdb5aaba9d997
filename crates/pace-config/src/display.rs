//! News and display configuration.

use pace_core::time::TimeFormatter;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Articles shown per feed.
const fn default_news_limit() -> u32 {
    3
}

fn default_timezone() -> String {
    "America/New_York".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewsConfig {
    /// Maximum number of articles kept after filtering.
    #[serde(default = "default_news_limit")]
    pub limit: u32,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            limit: default_news_limit(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// IANA zone for publication timestamps.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

impl DisplayConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `timezone` is not an IANA name.
    pub fn time_formatter(&self) -> Result<TimeFormatter, ConfigError> {
        TimeFormatter::from_name(&self.timezone)
            .map_err(|e| ConfigError::invalid("display.timezone", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        assert_eq!(NewsConfig::default().limit, 3);
        let formatter = DisplayConfig::default().time_formatter().unwrap();
        assert_eq!(formatter, TimeFormatter::default());
    }

    #[test]
    fn bad_timezone_is_invalid_value() {
        let config = DisplayConfig {
            timezone: "Eastern".to_string(),
        };
        assert!(matches!(
            config.time_formatter(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "display.timezone"
        ));
    }
}
