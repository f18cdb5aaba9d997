//! Identifier newtypes for people and teams.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// MLBAM person identifier (batters and pitchers alike).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct PersonId(pub i64);

impl PersonId {
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PersonId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Team abbreviation as used by the Stats API and statcast (`LAD`, `NYY`, ...).
///
/// Always stored upper-case so `"lad"` and `"LAD"` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct TeamId(String);

impl TeamId {
    #[must_use]
    pub fn new(abbreviation: &str) -> Self {
        Self(abbreviation.trim().to_ascii_uppercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for TeamId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(&raw))
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TeamId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_id_is_case_insensitive() {
        assert_eq!(TeamId::new("lad"), TeamId::new("LAD"));
        assert_eq!(TeamId::new(" chc ").as_str(), "CHC");
    }

    #[test]
    fn team_id_deserializes_normalized() {
        let team: TeamId = serde_json::from_str("\"nyy\"").unwrap();
        assert_eq!(team.as_str(), "NYY");
    }

    #[test]
    fn person_id_displays_as_integer() {
        assert_eq!(PersonId(660_271).to_string(), "660271");
        assert_eq!(PersonId(-5).to_string(), "-5");
    }
}
