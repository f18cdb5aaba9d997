use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EventType;
use crate::ids::{PersonId, TeamId};

/// One pitch or plate-appearance outcome for the tracked player.
///
/// Accepts statcast column names (`game_date`, `events`) as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GameEvent {
    #[serde(alias = "game_date")]
    pub date: NaiveDate,
    #[serde(alias = "events", default = "empty_event")]
    #[schemars(with = "Option<String>")]
    pub event_type: EventType,
    pub home_team: TeamId,
    pub away_team: TeamId,
    /// Pitcher when the subject is a batter, batter when the subject is a pitcher.
    #[serde(default)]
    pub counterparty_id: Option<PersonId>,
}

fn empty_event() -> EventType {
    EventType::Other(String::new())
}

impl GameEvent {
    #[must_use]
    pub fn new(date: NaiveDate, event_type: EventType, home_team: TeamId, away_team: TeamId) -> Self {
        Self {
            date,
            event_type,
            home_team,
            away_team,
            counterparty_id: None,
        }
    }

    #[must_use]
    pub const fn with_counterparty(mut self, id: PersonId) -> Self {
        self.counterparty_id = Some(id);
        self
    }
}
