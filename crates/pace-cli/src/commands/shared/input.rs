use std::path::Path;

use anyhow::Context;
use pace_core::entities::{GameEvent, NewsArticle};
use serde::de::DeserializeOwned;

fn read_json_array<T: DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<Vec<T>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {what} file {}", path.display()))?;
    let items: Vec<T> = serde_json::from_str(&text)
        .with_context(|| format!("invalid {what} file {}", path.display()))?;
    tracing::debug!(path = %path.display(), count = items.len(), "loaded {what}");
    Ok(items)
}

/// Load a JSON array of game events.
pub fn load_events(path: &Path) -> anyhow::Result<Vec<GameEvent>> {
    read_json_array(path, "events")
}

/// Load a JSON array of news articles.
pub fn load_articles(path: &Path) -> anyhow::Result<Vec<NewsArticle>> {
    read_json_array(path, "articles")
}

/// Display label for a player: explicit name, else the file stem.
pub fn player_label(explicit: Option<&str>, path: &Path) -> String {
    explicit.map_or_else(
        || {
            path.file_stem()
                .map_or_else(|| path.display().to_string(), |s| s.to_string_lossy().into_owned())
        },
        ToString::to_string,
    )
}
