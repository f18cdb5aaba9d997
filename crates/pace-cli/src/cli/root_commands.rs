use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};
use pace_core::enums::Tracker;
use pace_stats::RosterRole;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Numbered event log for one player.
    Log(LogArgs),
    /// Two players' logs plus their head-to-head series.
    Compare(CompareArgs),
    /// Filter and de-duplicate a news feed.
    News(NewsArgs),
    /// Render one publication timestamp in the display zone.
    Time(TimeArgs),
    /// Active MLB clubs.
    Teams,
    /// Active roster of one club.
    Roster(RosterArgs),
    /// Print the JSON Schema of an input file.
    Schema(SchemaArgs),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum TrackerArg {
    HomeRuns,
    Strikeouts,
}

impl From<TrackerArg> for Tracker {
    fn from(arg: TrackerArg) -> Self {
        match arg {
            TrackerArg::HomeRuns => Self::HomeRuns,
            TrackerArg::Strikeouts => Self::Strikeouts,
        }
    }
}

/// Event kind and date range shared by `log` and `compare`.
#[derive(Clone, Debug, Args)]
pub struct WindowArgs {
    #[arg(long, value_enum, default_value = "home-runs")]
    pub tracker: TrackerArg,
    /// First date, inclusive (default: first overseas game)
    #[arg(long)]
    pub start: Option<NaiveDate>,
    /// Last date, inclusive (default: today)
    #[arg(long)]
    pub end: Option<NaiveDate>,
}

#[derive(Clone, Debug, Args)]
pub struct LogArgs {
    /// JSON array of the player's game events
    #[arg(long)]
    pub events: PathBuf,
    /// Player's club abbreviation
    #[arg(long)]
    pub team: String,
    /// Display name (default: file stem)
    #[arg(long)]
    pub player: Option<String>,
    #[command(flatten)]
    pub window: WindowArgs,
}

#[derive(Clone, Debug, Args)]
pub struct CompareArgs {
    #[arg(long)]
    pub first: PathBuf,
    #[arg(long)]
    pub first_team: String,
    #[arg(long)]
    pub first_player: Option<String>,
    #[arg(long)]
    pub second: PathBuf,
    #[arg(long)]
    pub second_team: String,
    #[arg(long)]
    pub second_player: Option<String>,
    #[command(flatten)]
    pub window: WindowArgs,
}

#[derive(Clone, Debug, Args)]
pub struct NewsArgs {
    /// JSON array of feed articles
    #[arg(long)]
    pub articles: PathBuf,
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct TimeArgs {
    /// Timestamp as found in the feed
    pub raw: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum RosterRoleArg {
    Batters,
    Pitchers,
}

impl From<RosterRoleArg> for RosterRole {
    fn from(arg: RosterRoleArg) -> Self {
        match arg {
            RosterRoleArg::Batters => Self::Batter,
            RosterRoleArg::Pitchers => Self::Pitcher,
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct RosterArgs {
    #[arg(long)]
    pub team: String,
    /// Only one side of the roster
    #[arg(long, value_enum)]
    pub role: Option<RosterRoleArg>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaTarget {
    Events,
    Articles,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub target: SchemaTarget,
}
