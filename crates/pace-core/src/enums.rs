//! Event outcome labels and tracker kinds.
//!
//! `EventType` serializes to the statcast `events` label (`home_run`,
//! `strikeout`, ...). Unknown labels are preserved verbatim in
//! [`EventType::Other`] so re-serialized input stays faithful.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ---------------------------------------------------------------------------
// EventType
// ---------------------------------------------------------------------------

/// Outcome of a plate appearance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventType {
    HomeRun,
    Strikeout,
    /// Any other outcome label, including the empty label for pitches that did
    /// not end a plate appearance.
    Other(String),
}

impl EventType {
    /// Map a statcast label onto an event type.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "home_run" => Self::HomeRun,
            "strikeout" => Self::Strikeout,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::HomeRun => "home_run",
            Self::Strikeout => "strikeout",
            Self::Other(label) => label,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EventType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(label.map_or_else(|| Self::Other(String::new()), |l| Self::from_label(&l)))
    }
}

// ---------------------------------------------------------------------------
// Tracker
// ---------------------------------------------------------------------------

/// Which cumulative statistic a log tracks.
///
/// ```text
/// home_runs  → subject is a batter,  counterparty is the pitcher
/// strikeouts → subject is a pitcher, counterparty is the batter
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tracker {
    HomeRuns,
    Strikeouts,
}

impl Tracker {
    /// Event type counted by this tracker.
    #[must_use]
    pub const fn target(self) -> EventType {
        match self {
            Self::HomeRuns => EventType::HomeRun,
            Self::Strikeouts => EventType::Strikeout,
        }
    }

    /// Column label for the running count.
    #[must_use]
    pub const fn count_label(self) -> &'static str {
        match self {
            Self::HomeRuns => "HR No",
            Self::Strikeouts => "K No",
        }
    }

    /// Role of the opposing participant named in each log entry.
    #[must_use]
    pub const fn counterparty_label(self) -> &'static str {
        match self {
            Self::HomeRuns => "Pitcher",
            Self::Strikeouts => "Batter",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HomeRuns => "home_runs",
            Self::Strikeouts => "strikeouts",
        }
    }
}

impl fmt::Display for Tracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_map_to_variants() {
        assert_eq!(EventType::from_label("home_run"), EventType::HomeRun);
        assert_eq!(EventType::from_label("strikeout"), EventType::Strikeout);
        assert_eq!(
            EventType::from_label("field_out"),
            EventType::Other("field_out".into())
        );
    }

    #[test]
    fn null_label_deserializes_as_empty_other() {
        let parsed: EventType = serde_json::from_str("null").unwrap();
        assert_eq!(parsed, EventType::Other(String::new()));
    }

    #[test]
    fn unknown_label_survives_serialization() {
        let parsed: EventType = serde_json::from_str("\"grounded_into_double_play\"").unwrap();
        assert_eq!(
            serde_json::to_string(&parsed).unwrap(),
            "\"grounded_into_double_play\""
        );
    }

    #[test]
    fn tracker_targets() {
        assert_eq!(Tracker::HomeRuns.target(), EventType::HomeRun);
        assert_eq!(Tracker::Strikeouts.target(), EventType::Strikeout);
        assert_eq!(Tracker::Strikeouts.count_label(), "K No");
        assert_eq!(Tracker::HomeRuns.counterparty_label(), "Pitcher");
    }
}
