use chrono::NaiveDate;
use pace_core::enums::Tracker;
use pace_core::event_log::LogQuery;
use pace_core::ids::TeamId;
use pace_core::season::SeasonWindow;

use crate::cli::root_commands::WindowArgs;

/// `--tracker/--start/--end` with defaults applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateWindow {
    pub tracker: Tracker,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Start defaults to the season's first game, end to `today`.
    pub fn resolve(args: &WindowArgs, season: &SeasonWindow, today: NaiveDate) -> Self {
        let window = Self {
            tracker: args.tracker.into(),
            start: args.start.unwrap_or_else(|| season.opening_date()),
            end: args.end.unwrap_or(today),
        };
        if window.start > window.end {
            tracing::warn!(start = %window.start, end = %window.end, "start is after end, log will be empty");
        }
        window
    }

    pub fn query(&self, team: &TeamId) -> LogQuery {
        LogQuery::new(self.start, self.end, team.clone(), self.tracker.target())
    }
}
