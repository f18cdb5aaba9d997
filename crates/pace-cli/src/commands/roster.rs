use anyhow::Context;
use pace_stats::teams::team_by_abbreviation;
use pace_stats::{Roster, RosterEntry, RosterRole, headshot_url};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RosterArgs;
use crate::context::AppContext;
use crate::output::{Tabular, header_row, output};
use crate::progress::Spinner;

#[derive(Debug, Serialize)]
struct PlayerRow {
    #[serde(flatten)]
    entry: RosterEntry,
    headshot_url: String,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct RosterResponse {
    players: Vec<PlayerRow>,
}

impl Tabular for RosterResponse {
    fn headers(&self) -> Vec<String> {
        header_row(&["Name", "Id", "Team", "Role"])
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.players
            .iter()
            .map(|row| {
                vec![
                    row.entry.name.clone(),
                    row.entry.id.to_string(),
                    row.entry.team.to_string(),
                    format!("{:?}", row.entry.role).to_lowercase(),
                ]
            })
            .collect()
    }
}

/// Pitchers first, then batters, or only the requested side.
fn select(roster: &Roster, role: Option<RosterRole>) -> Vec<PlayerRow> {
    let entries: Vec<&RosterEntry> = match role {
        Some(role) => roster.role(role).iter().collect(),
        None => roster.pitchers.iter().chain(&roster.batters).collect(),
    };
    entries
        .into_iter()
        .map(|entry| PlayerRow {
            headshot_url: headshot_url(entry.id),
            entry: entry.clone(),
        })
        .collect()
}

/// Handle `pace roster`.
pub async fn handle(args: &RosterArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stats = ctx.stats()?;
    let spinner = Spinner::start("fetching active roster");

    let teams = stats.teams().await?;
    let team = team_by_abbreviation(&teams, &args.team)
        .with_context(|| format!("unknown team abbreviation '{}'", args.team))?;
    let mut roster = stats.active_roster(team).await?;
    spinner.finish_clear();

    for player in ctx
        .config
        .season
        .two_way_players
        .iter()
        .filter(|p| p.team == team.abbreviation)
    {
        roster.ensure_two_way_player(&player.name, player.id, &player.team);
    }

    output(
        &RosterResponse {
            players: select(&roster, args.role.map(Into::into)),
        },
        flags.format,
    )
}

#[cfg(test)]
mod tests {
    use pace_core::ids::{PersonId, TeamId};

    use super::*;

    fn roster() -> Roster {
        let mut roster = Roster::default();
        roster.batters.push(RosterEntry {
            name: "Mookie Betts".into(),
            id: PersonId(605_141),
            team: TeamId::new("LAD"),
            role: RosterRole::Batter,
        });
        roster.ensure_two_way_player("Shohei Ohtani", PersonId(660_271), &TeamId::new("LAD"));
        roster
    }

    #[test]
    fn lists_pitchers_before_batters() {
        let rows = select(&roster(), None);
        let names: Vec<&str> = rows.iter().map(|r| r.entry.name.as_str()).collect();
        assert_eq!(names, vec!["Shohei Ohtani", "Mookie Betts"]);
        assert!(rows[0].headshot_url.contains("/people/660271/"));
    }

    #[test]
    fn role_filter_and_table_rows() {
        let response = RosterResponse {
            players: select(&roster(), Some(RosterRole::Batter)),
        };
        assert_eq!(
            response.rows(),
            vec![vec![
                "Mookie Betts".to_string(),
                "605141".to_string(),
                "LAD".to_string(),
                "batter".to_string(),
            ]]
        );
    }
}
