use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A news feed entry as handed over by the feed reader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NewsArticle {
    #[serde(default)]
    pub title: String,
    /// Unique key for de-duplication.
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub summary: String,
    /// Free-form publication timestamp (RSS `pubDate`, ISO 8601, ...).
    #[serde(default, alias = "published")]
    pub published_raw: String,
}

impl NewsArticle {
    #[must_use]
    pub fn new(title: &str, link: &str, summary: &str) -> Self {
        Self {
            title: title.to_string(),
            link: link.to_string(),
            summary: summary.to_string(),
            published_raw: String::new(),
        }
    }

    #[must_use]
    pub fn published(mut self, raw: &str) -> Self {
        self.published_raw = raw.to_string();
        self
    }
}
