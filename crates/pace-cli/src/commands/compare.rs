use pace_core::compare::{ComparisonPoint, head_to_head};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CompareArgs;
use crate::commands::log::{PlayerLog, build_player_log, load_player, today};
use crate::commands::shared::window::DateWindow;
use crate::context::AppContext;
use crate::output::{Tabular, header_row, output};

#[derive(Debug, Serialize)]
struct CompareResponse {
    first: PlayerLog,
    second: PlayerLog,
    /// Absent when either player has no qualifying events.
    series: Option<Vec<ComparisonPoint>>,
}

impl Tabular for CompareResponse {
    fn headers(&self) -> Vec<String> {
        header_row(&[
            "Player",
            "Date",
            self.first.tracker.count_label(),
            self.first.tracker.counterparty_label(),
        ])
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.series
            .iter()
            .flatten()
            .map(|point| {
                vec![
                    point.player.clone(),
                    point.date.to_string(),
                    point.sequence_number.to_string(),
                    point.counterparty_name.clone(),
                ]
            })
            .collect()
    }
}

/// Handle `pace compare`.
pub async fn handle(args: &CompareArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (first_events, first_player) = load_player(&args.first, args.first_player.as_deref())?;
    let (second_events, second_player) = load_player(&args.second, args.second_player.as_deref())?;
    let window = DateWindow::resolve(&args.window, &ctx.season, today());

    let first = build_player_log(ctx, &first_events, first_player, &args.first_team, window).await;
    let second = build_player_log(ctx, &second_events, second_player, &args.second_team, window).await;

    let series = head_to_head(&[
        (first.player.as_str(), &first.entries),
        (second.player.as_str(), &second.entries),
    ]);
    if series.is_none() {
        tracing::warn!(
            first = first.total,
            second = second.total,
            "no head-to-head series: a player has no {} in range",
            window.tracker
        );
    }

    output(
        &CompareResponse {
            first,
            second,
            series,
        },
        flags.format,
    )
}
