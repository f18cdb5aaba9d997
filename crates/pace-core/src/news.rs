//! Teaser filtering and link de-duplication for news feeds.

use std::collections::HashSet;

use crate::entities::NewsArticle;

/// Phrases that mark placeholder entries (polls, countdowns, "check back").
pub const TEASER_KEYWORDS: [&str; 5] = ["vote", "voting", "check back", "countdown", "announcement"];

/// Whether an article carries substantive content.
#[must_use]
pub fn is_substantive(article: &NewsArticle) -> bool {
    if article.title.trim().is_empty() && article.summary.trim().is_empty() {
        return false;
    }
    let content = format!("{} {}", article.title, article.summary).to_lowercase();
    !TEASER_KEYWORDS.iter().any(|kw| content.contains(kw))
}

/// Keep at most `limit` substantive articles with distinct links.
///
/// The input is consumed lazily and no further articles are pulled once
/// `limit` have been accepted. The first occurrence of a link wins and input
/// order is preserved.
pub fn filter_and_dedupe<I>(articles: I, limit: usize) -> Vec<NewsArticle>
where
    I: IntoIterator<Item = NewsArticle>,
{
    if limit == 0 {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let accepted: Vec<NewsArticle> = articles
        .into_iter()
        .filter(is_substantive)
        .filter(|a| seen.insert(a.link.clone()))
        .take(limit)
        .collect();

    tracing::debug!(limit, accepted = accepted.len(), "filtered news");
    accepted
}
