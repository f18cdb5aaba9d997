//! Season boundaries that decide which dates count for a team.
//!
//! Most clubs open on the general regular-season start date. A fixed pair of
//! clubs plays an overseas series first; for them the overseas dates count too.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::ids::TeamId;

/// Named date boundaries for one season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonWindow {
    /// Regular-season dates played abroad before the general start.
    pub overseas_dates: Vec<NaiveDate>,
    /// First date of the regular season for every club.
    pub regular_season_start: NaiveDate,
    /// Clubs that played the overseas dates.
    pub overseas_teams: Vec<TeamId>,
}

impl Default for SeasonWindow {
    /// The 2025 season: Tokyo Series on March 18-19 (LAD vs CHC), general
    /// opening day March 27.
    fn default() -> Self {
        Self {
            overseas_dates: vec![ymd(2025, 3, 18), ymd(2025, 3, 19)],
            regular_season_start: ymd(2025, 3, 27),
            overseas_teams: vec![TeamId::new("LAD"), TeamId::new("CHC")],
        }
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("literal season dates are valid")
}

impl SeasonWindow {
    /// Build a window, rejecting overseas teams without overseas dates.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidSeason`] when `overseas_teams` is non-empty
    /// but `overseas_dates` is empty.
    pub fn new(
        overseas_dates: Vec<NaiveDate>,
        regular_season_start: NaiveDate,
        overseas_teams: Vec<TeamId>,
    ) -> Result<Self, CoreError> {
        if !overseas_teams.is_empty() && overseas_dates.is_empty() {
            return Err(CoreError::InvalidSeason(
                "overseas teams listed without overseas dates".to_string(),
            ));
        }
        Ok(Self {
            overseas_dates,
            regular_season_start,
            overseas_teams,
        })
    }

    #[must_use]
    pub fn is_overseas_team(&self, team: &TeamId) -> bool {
        self.overseas_teams.contains(team)
    }

    /// Whether `date` counts for `team`, ignoring any caller date range.
    #[must_use]
    pub fn is_eligible(&self, team: &TeamId, date: NaiveDate) -> bool {
        date >= self.regular_season_start
            || (self.is_overseas_team(team) && self.overseas_dates.contains(&date))
    }

    /// Earliest date that can count for any club.
    #[must_use]
    pub fn opening_date(&self) -> NaiveDate {
        self.overseas_dates
            .iter()
            .copied()
            .min()
            .map_or(self.regular_season_start, |d| d.min(self.regular_season_start))
    }

    /// Warning for a query that starts before `team` has played any game.
    #[must_use]
    pub fn pre_season_notice(&self, team: &TeamId, start: NaiveDate, player: &str) -> Option<String> {
        if self.is_overseas_team(team) || start >= self.regular_season_start {
            return None;
        }
        Some(format!(
            "No official MLB games for {player} ({team}) before {}.",
            self.regular_season_start.format("%Y-%m-%d")
        ))
    }
}
