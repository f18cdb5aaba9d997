use anyhow::Context;
use pace_config::PaceConfig;
use pace_core::entities::GameEvent;
use pace_core::names::StaticDirectory;
use pace_core::season::SeasonWindow;
use pace_core::time::TimeFormatter;
use pace_stats::StatsClient;

use crate::cli::GlobalFlags;
use crate::progress::Spinner;

/// Validated configuration plus the shared Stats API client.
pub struct AppContext {
    pub config: PaceConfig,
    pub season: SeasonWindow,
    pub formatter: TimeFormatter,
    /// `None` under `--offline`.
    stats: Option<StatsClient>,
}

impl AppContext {
    pub fn init(config: PaceConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let season = config.season.to_window()?;
        let formatter = config.display.time_formatter()?;
        let stats = if flags.offline {
            tracing::debug!("offline mode, stats api disabled");
            None
        } else {
            Some(StatsClient::new(&config.stats_api).context("failed to build stats api client")?)
        };

        Ok(Self {
            config,
            season,
            formatter,
            stats,
        })
    }

    pub fn stats(&self) -> anyhow::Result<&StatsClient> {
        self.stats
            .as_ref()
            .context("this command needs the MLB Stats API; drop --offline")
    }

    /// Counterparty names for every event, fetched up front.
    ///
    /// Offline, or for ids the API cannot answer, the directory stays empty
    /// and names fall back to ids.
    pub async fn counterparty_names<'a, I>(&self, events: I) -> StaticDirectory
    where
        I: IntoIterator<Item = &'a GameEvent>,
    {
        let Some(stats) = &self.stats else {
            return StaticDirectory::new();
        };
        let ids: Vec<_> = events.into_iter().filter_map(|e| e.counterparty_id).collect();
        if ids.is_empty() {
            return StaticDirectory::new();
        }

        let spinner = Spinner::start("resolving player names");
        let names = stats.prefetch_names(ids).await;
        spinner.finish_clear();
        names
    }
}
