//! Season boundary configuration.

use chrono::NaiveDate;
use pace_core::ids::{PersonId, TeamId};
use pace_core::season::SeasonWindow;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A player offered in both batter and pitcher selections.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TwoWayPlayer {
    pub name: String,
    pub id: PersonId,
    pub team: TeamId,
}

fn default_two_way_players() -> Vec<TwoWayPlayer> {
    vec![TwoWayPlayer {
        name: "Shohei Ohtani".to_string(),
        id: PersonId(660_271),
        team: TeamId::new("LAD"),
    }]
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SeasonConfig {
    /// Regular-season dates played abroad before opening day.
    #[serde(default = "default_overseas_dates")]
    pub overseas_dates: Vec<NaiveDate>,

    /// General opening day.
    #[serde(default = "default_regular_season_start")]
    pub regular_season_start: NaiveDate,

    /// Clubs that played the overseas dates.
    #[serde(default = "default_overseas_teams")]
    pub overseas_teams: Vec<TeamId>,

    /// Players always listed as pitchers on their club's roster.
    #[serde(default = "default_two_way_players")]
    pub two_way_players: Vec<TwoWayPlayer>,
}

fn default_overseas_dates() -> Vec<NaiveDate> {
    SeasonWindow::default().overseas_dates
}

fn default_regular_season_start() -> NaiveDate {
    SeasonWindow::default().regular_season_start
}

fn default_overseas_teams() -> Vec<TeamId> {
    SeasonWindow::default().overseas_teams
}

impl Default for SeasonConfig {
    fn default() -> Self {
        Self {
            overseas_dates: default_overseas_dates(),
            regular_season_start: default_regular_season_start(),
            overseas_teams: default_overseas_teams(),
            two_way_players: default_two_way_players(),
        }
    }
}

impl SeasonConfig {
    /// Build the window passed to the event-log filter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if overseas teams are listed
    /// without overseas dates.
    pub fn to_window(&self) -> Result<SeasonWindow, ConfigError> {
        SeasonWindow::new(
            self.overseas_dates.clone(),
            self.regular_season_start,
            self.overseas_teams.clone(),
        )
        .map_err(|e| ConfigError::invalid("season.overseas_dates", e.to_string()))
    }
}
