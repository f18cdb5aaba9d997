use pace_core::entities::NewsArticle;
use pace_core::news::filter_and_dedupe;
use pace_core::time::TimeFormatter;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::NewsArgs;
use crate::commands::shared::input::load_articles;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::{Tabular, header_row, output};

#[derive(Debug, Serialize, PartialEq, Eq)]
struct NewsItem {
    title: String,
    link: String,
    summary: String,
    /// Publication time in the display zone.
    published: String,
}

impl NewsItem {
    fn from_article(article: NewsArticle, formatter: &TimeFormatter) -> Self {
        Self {
            published: formatter.format(&article.published_raw),
            title: article.title,
            link: article.link,
            summary: article.summary,
        }
    }
}

#[derive(Debug, Serialize)]
struct NewsResponse {
    articles: Vec<NewsItem>,
    limit: usize,
}

impl Tabular for NewsResponse {
    fn headers(&self) -> Vec<String> {
        header_row(&["Published", "Title", "Link"])
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.articles
            .iter()
            .map(|a| vec![a.published.clone(), a.title.clone(), a.link.clone()])
            .collect()
    }
}

fn build_response(articles: Vec<NewsArticle>, limit: usize, formatter: &TimeFormatter) -> NewsResponse {
    let kept = filter_and_dedupe(articles, limit);
    NewsResponse {
        articles: kept
            .into_iter()
            .map(|article| NewsItem::from_article(article, formatter))
            .collect(),
        limit,
    }
}

/// Handle `pace news`.
pub fn handle(args: &NewsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(args.limit, flags.limit, ctx.config.news.limit);
    let articles = load_articles(&args.articles)?;
    let response = build_response(articles, limit, &ctx.formatter);
    if response.articles.is_empty() {
        tracing::info!("no valid MLB news articles found");
    }
    output(&response, flags.format)
}
