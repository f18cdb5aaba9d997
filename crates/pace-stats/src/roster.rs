//! Active rosters from `/teams/{id}/roster`.

use serde::{Deserialize, Serialize};

use crate::{StatsClient, TeamInfo, error::StatsError};
use pace_core::ids::{PersonId, TeamId};

#[derive(Deserialize)]
struct RosterResponse {
    #[serde(default)]
    roster: Vec<RosterSlot>,
}

#[derive(Deserialize)]
struct RosterSlot {
    #[serde(default)]
    person: PersonRaw,
    #[serde(default)]
    position: PositionRaw,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersonRaw {
    id: Option<i64>,
    full_name: Option<String>,
}

#[derive(Default, Deserialize)]
struct PositionRaw {
    #[serde(default)]
    abbreviation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RosterRole {
    Batter,
    Pitcher,
}

impl RosterRole {
    fn from_position(abbreviation: &str) -> Self {
        if abbreviation == "P" {
            Self::Pitcher
        } else {
            Self::Batter
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub id: PersonId,
    pub team: TeamId,
    pub role: RosterRole,
}

/// One or more active rosters split by role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub batters: Vec<RosterEntry>,
    pub pitchers: Vec<RosterEntry>,
}

impl Roster {
    fn push(&mut self, entry: RosterEntry) {
        match entry.role {
            RosterRole::Batter => self.batters.push(entry),
            RosterRole::Pitcher => self.pitchers.push(entry),
        }
    }

    /// Append another roster, keeping order.
    pub fn merge(&mut self, other: Self) {
        self.batters.extend(other.batters);
        self.pitchers.extend(other.pitchers);
    }

    /// Put a two-way player at the head of the pitcher list unless a pitcher
    /// of that name is already listed.
    pub fn ensure_two_way_player(&mut self, name: &str, id: PersonId, team: &TeamId) {
        if self.pitchers.iter().any(|p| p.name == name) {
            return;
        }
        self.pitchers.insert(
            0,
            RosterEntry {
                name: name.to_string(),
                id,
                team: team.clone(),
                role: RosterRole::Pitcher,
            },
        );
    }

    #[must_use]
    pub fn role(&self, role: RosterRole) -> &[RosterEntry] {
        match role {
            RosterRole::Batter => &self.batters,
            RosterRole::Pitcher => &self.pitchers,
        }
    }
}

fn to_roster(data: RosterResponse, team: &TeamId) -> Roster {
    let mut roster = Roster::default();
    for slot in data.roster {
        let (Some(id), Some(name)) = (slot.person.id, slot.person.full_name) else {
            tracing::debug!(%team, "skipping roster slot without id or name");
            continue;
        };
        if name.is_empty() || id == 0 {
            continue;
        }
        roster.push(RosterEntry {
            name,
            id: PersonId(id),
            team: team.clone(),
            role: RosterRole::from_position(&slot.position.abbreviation),
        });
    }
    roster
}

impl StatsClient {
    /// Active roster for one club.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError`] if the request fails or the body cannot be parsed.
    pub async fn active_roster(&self, team: &TeamInfo) -> Result<Roster, StatsError> {
        let path = format!("/teams/{}/roster?rosterType=active", team.id);
        let data: RosterResponse = self.get_json(&path).await?;
        let roster = to_roster(data, &team.abbreviation);
        tracing::info!(
            team = %team.abbreviation,
            batters = roster.batters.len(),
            pitchers = roster.pitchers.len(),
            "fetched active roster"
        );
        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "roster": [
            {
                "person": { "id": 660271, "fullName": "Shohei Ohtani" },
                "position": { "code": "Y", "abbreviation": "TWP" }
            },
            {
                "person": { "id": 808967, "fullName": "Yoshinobu Yamamoto" },
                "position": { "code": "1", "abbreviation": "P" }
            },
            {
                "person": { "id": 605141, "fullName": "Mookie Betts" },
                "position": { "code": "6", "abbreviation": "SS" }
            },
            {
                "person": { "fullName": "Missing Id" },
                "position": { "abbreviation": "P" }
            },
            {
                "person": { "id": 1, "fullName": "" },
                "position": { "abbreviation": "C" }
            }
        ],
        "teamId": 119
    }"#;

    fn parsed() -> Roster {
        to_roster(serde_json::from_str(FIXTURE).unwrap(), &TeamId::new("LAD"))
    }

    #[test]
    fn splits_by_position() {
        let roster = parsed();
        let batters: Vec<&str> = roster.batters.iter().map(|e| e.name.as_str()).collect();
        let pitchers: Vec<&str> = roster.pitchers.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(batters, vec!["Shohei Ohtani", "Mookie Betts"]);
        assert_eq!(pitchers, vec!["Yoshinobu Yamamoto"]);
        assert_eq!(roster.pitchers[0].team.as_str(), "LAD");
    }

    #[test]
    fn two_way_player_goes_first() {
        let mut roster = parsed();
        roster.ensure_two_way_player("Shohei Ohtani", PersonId(660_271), &TeamId::new("LAD"));
        assert_eq!(roster.pitchers.len(), 2);
        assert_eq!(roster.pitchers[0].id, PersonId(660_271));
        assert_eq!(roster.pitchers[0].role, RosterRole::Pitcher);
    }

    #[test]
    fn two_way_player_not_duplicated() {
        let mut roster = parsed();
        roster.ensure_two_way_player("Yoshinobu Yamamoto", PersonId(808_967), &TeamId::new("LAD"));
        assert_eq!(roster.pitchers.len(), 1);
    }

    #[test]
    fn empty_body_is_empty_roster() {
        let roster = to_roster(serde_json::from_str("{}").unwrap(), &TeamId::new("SD"));
        assert_eq!(roster, Roster::default());
    }

    #[test]
    fn merge_appends() {
        let mut roster = parsed();
        roster.merge(parsed());
        assert_eq!(roster.role(RosterRole::Batter).len(), 4);
    }
}
