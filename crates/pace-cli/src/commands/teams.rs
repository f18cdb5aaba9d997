use pace_stats::{DivisionName, League, TeamInfo};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{Tabular, header_row, output};
use crate::progress::Spinner;

#[derive(Debug, Serialize)]
struct TeamRow {
    #[serde(flatten)]
    team: TeamInfo,
    site_url: String,
    league: Option<League>,
    division_name: Option<DivisionName>,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct TeamsResponse {
    teams: Vec<TeamRow>,
}

impl Tabular for TeamsResponse {
    fn headers(&self) -> Vec<String> {
        header_row(&["Abbr", "Name", "Division", "Site"])
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.teams
            .iter()
            .map(|row| {
                vec![
                    row.team.abbreviation.to_string(),
                    row.team.name.clone(),
                    row.team.division.clone(),
                    row.site_url.clone(),
                ]
            })
            .collect()
    }
}

fn to_row(team: TeamInfo) -> TeamRow {
    let (league, division_name) = team.league_and_division().unzip();
    TeamRow {
        site_url: team.site_url(),
        league,
        division_name,
        team,
    }
}

/// Handle `pace teams`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stats = ctx.stats()?;
    let spinner = Spinner::start("fetching team directory");
    let teams = match stats.teams().await {
        Ok(teams) => teams,
        Err(error) => {
            spinner.finish_err("team directory unavailable");
            return Err(error.into());
        }
    };
    spinner.finish_clear();

    output(
        &TeamsResponse {
            teams: teams.into_iter().map(to_row).collect(),
        },
        flags.format,
    )
}
