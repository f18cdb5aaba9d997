use std::path::Path;

use chrono::{Local, NaiveDate};
use pace_core::entities::{FilteredLog, GameEvent};
use pace_core::enums::Tracker;
use pace_core::event_log::filter_events;
use pace_core::ids::TeamId;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LogArgs;
use crate::commands::shared::input::{load_events, player_label};
use crate::commands::shared::window::DateWindow;
use crate::context::AppContext;
use crate::output::{Tabular, output};

/// One player's numbered log and the window it was cut from.
#[derive(Debug, Serialize)]
pub struct PlayerLog {
    pub player: String,
    pub team: TeamId,
    pub tracker: Tracker,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub total: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub entries: FilteredLog,
}

impl Tabular for PlayerLog {
    fn headers(&self) -> Vec<String> {
        log_headers(self.tracker)
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.entries
            .iter()
            .map(|entry| {
                vec![
                    entry.sequence_number.to_string(),
                    entry.short_date.clone(),
                    entry.counterparty_name.clone(),
                    entry.event.away_team.to_string(),
                    entry.event.home_team.to_string(),
                ]
            })
            .collect()
    }
}

pub(crate) fn log_headers(tracker: Tracker) -> Vec<String> {
    vec![
        tracker.count_label().to_string(),
        "MM-DD".to_string(),
        tracker.counterparty_label().to_string(),
        "Away".to_string(),
        "Home".to_string(),
    ]
}

/// Build a player's log, resolving counterparty names through the Stats API
/// unless offline.
pub async fn build_player_log(
    ctx: &AppContext,
    events: &[GameEvent],
    player: String,
    team: &str,
    window: DateWindow,
) -> PlayerLog {
    let team = TeamId::new(team);
    let query = window.query(&team);

    let notice = ctx.season.pre_season_notice(&team, window.start, &player);
    if let Some(notice) = &notice {
        tracing::warn!("{notice}");
    }

    let names = ctx
        .counterparty_names(
            events
                .iter()
                .filter(|e| e.event_type == query.target && query.admits(&ctx.season, e.date)),
        )
        .await;
    let entries = filter_events(events, &query, &ctx.season, &names);

    PlayerLog {
        player,
        team,
        tracker: window.tracker,
        start: window.start,
        end: window.end,
        total: entries.total(),
        notice,
        entries,
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub(crate) fn load_player(path: &Path, player: Option<&str>) -> anyhow::Result<(Vec<GameEvent>, String)> {
    Ok((load_events(path)?, player_label(player, path)))
}

/// Handle `pace log`.
pub async fn handle(args: &LogArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (events, player) = load_player(&args.events, args.player.as_deref())?;
    let window = DateWindow::resolve(&args.window, &ctx.season, today());
    let log = build_player_log(ctx, &events, player, &args.team, window).await;
    output(&log, flags.format)
}
