//! Team directory from `/teams`.

use serde::{Deserialize, Serialize};

use crate::{StatsClient, error::StatsError};
use pace_core::ids::TeamId;

#[derive(Deserialize)]
struct TeamsResponse {
    #[serde(default)]
    teams: Vec<TeamRaw>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TeamRaw {
    id: u32,
    name: String,
    #[serde(default)]
    team_name: String,
    abbreviation: String,
    #[serde(default)]
    active: bool,
    division: Option<DivisionRaw>,
}

#[derive(Deserialize)]
struct DivisionRaw {
    name: String,
}

/// Major-league club as shown in the team directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInfo {
    pub id: u32,
    pub abbreviation: TeamId,
    pub name: String,
    /// Path segment on mlb.com, e.g. `red-sox`.
    pub slug: String,
    /// Full division name, e.g. `American League East`.
    pub division: String,
    pub logo_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum League {
    American,
    National,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DivisionName {
    East,
    Central,
    West,
}

impl TeamInfo {
    #[must_use]
    pub fn site_url(&self) -> String {
        format!("https://www.mlb.com/{}", self.slug)
    }

    /// Split the division label into league and division.
    ///
    /// Returns `None` for labels outside the six MLB divisions.
    #[must_use]
    pub fn league_and_division(&self) -> Option<(League, DivisionName)> {
        let (league, division) = self.division.rsplit_once(' ')?;
        let league = match league {
            "American League" => League::American,
            "National League" => League::National,
            _ => return None,
        };
        let division = match division {
            "East" => DivisionName::East,
            "Central" => DivisionName::Central,
            "West" => DivisionName::West,
            _ => return None,
        };
        Some((league, division))
    }
}

impl From<TeamRaw> for TeamInfo {
    fn from(raw: TeamRaw) -> Self {
        Self {
            id: raw.id,
            abbreviation: TeamId::new(&raw.abbreviation),
            slug: raw.team_name.to_lowercase().replace(' ', "-"),
            division: raw.division.map(|d| d.name).unwrap_or_default(),
            logo_url: format!("https://www.mlbstatic.com/team-logos/{}.svg", raw.id),
            name: raw.name,
        }
    }
}

fn active_teams(data: TeamsResponse) -> Vec<TeamInfo> {
    let mut teams: Vec<TeamInfo> = data
        .teams
        .into_iter()
        .filter(|t| t.active)
        .map(TeamInfo::from)
        .collect();
    teams.sort_by(|a, b| a.abbreviation.as_str().cmp(b.abbreviation.as_str()));
    teams
}

/// Find a club by abbreviation (case-insensitive).
#[must_use]
pub fn team_by_abbreviation<'a>(teams: &'a [TeamInfo], abbreviation: &str) -> Option<&'a TeamInfo> {
    let wanted = TeamId::new(abbreviation);
    teams.iter().find(|t| t.abbreviation == wanted)
}

impl StatsClient {
    /// Active clubs for the configured sport, sorted by abbreviation.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError`] if the request fails or the body cannot be parsed.
    pub async fn teams(&self) -> Result<Vec<TeamInfo>, StatsError> {
        let data: TeamsResponse = self
            .get_json(&format!("/teams?sportIds={}", self.sport_id))
            .await?;
        let teams = active_teams(data);
        tracing::info!(count = teams.len(), "fetched team directory");
        Ok(teams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "copyright": "Copyright 2025 MLB Advanced Media, L.P.",
        "teams": [
            {
                "id": 119,
                "name": "Los Angeles Dodgers",
                "teamName": "Dodgers",
                "abbreviation": "LAD",
                "active": true,
                "division": { "id": 203, "name": "National League West" }
            },
            {
                "id": 111,
                "name": "Boston Red Sox",
                "teamName": "Red Sox",
                "abbreviation": "BOS",
                "active": true,
                "division": { "id": 201, "name": "American League East" }
            },
            {
                "id": 999,
                "name": "Montreal Expos",
                "teamName": "Expos",
                "abbreviation": "MON",
                "active": false
            }
        ]
    }"#;

    fn parsed() -> Vec<TeamInfo> {
        active_teams(serde_json::from_str(FIXTURE).unwrap())
    }

    #[test]
    fn keeps_active_clubs_sorted() {
        let teams = parsed();
        let abbrs: Vec<&str> = teams.iter().map(|t| t.abbreviation.as_str()).collect();
        assert_eq!(abbrs, vec!["BOS", "LAD"]);
    }

    #[test]
    fn derives_slug_and_urls() {
        let teams = parsed();
        let boston = &teams[0];
        assert_eq!(boston.slug, "red-sox");
        assert_eq!(boston.site_url(), "https://www.mlb.com/red-sox");
        assert_eq!(boston.logo_url, "https://www.mlbstatic.com/team-logos/111.svg");
    }

    #[test]
    fn splits_division_label() {
        let teams = parsed();
        assert_eq!(
            teams[0].league_and_division(),
            Some((League::American, DivisionName::East))
        );
        assert_eq!(
            teams[1].league_and_division(),
            Some((League::National, DivisionName::West))
        );
    }

    #[test]
    fn unknown_division_label_is_none() {
        let mut team = parsed().remove(0);
        team.division = "Cactus League".to_string();
        assert_eq!(team.league_and_division(), None);
    }

    #[test]
    fn lookup_by_abbreviation_ignores_case() {
        let teams = parsed();
        assert_eq!(team_by_abbreviation(&teams, "lad").map(|t| t.id), Some(119));
        assert!(team_by_abbreviation(&teams, "MON").is_none());
    }

    #[tokio::test]
    #[ignore] // requires network
    async fn live_team_directory() {
        let client = StatsClient::new(&pace_config::StatsApiConfig::default()).unwrap();
        let teams = client.teams().await.unwrap();
        assert_eq!(teams.len(), 30);
    }
}
