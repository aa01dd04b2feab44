use std::time::Duration;

use chrono::{DateTime, Utc};
use feed_rs::parser;
use reqwest::Client;
use tracing::{info, warn};

/// A single entry pulled from a feed. Rebuilt on every synthesis cycle,
/// never persisted.
#[derive(Debug, Clone)]
pub struct NewsItem {
    pub title: String,
    pub summary: String,
    pub link: String,
    pub published: Option<DateTime<Utc>>,
}

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("CentristNews/1.0 (RSS Aggregator)")
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch every feed in `urls`, keeping at most `limit` entries per feed
    /// in feed order. An unreachable or malformed feed contributes zero
    /// items; the failure is logged and never surfaces to the caller.
    pub async fn fetch(&self, urls: &[String], limit: usize) -> Vec<NewsItem> {
        let mut items = Vec::new();
        for url in urls {
            match self.fetch_one(url, limit).await {
                Ok(mut fetched) => {
                    info!("Fetched {} items from {}", fetched.len(), url);
                    items.append(&mut fetched);
                }
                Err(e) => warn!("Skipping feed '{}': {}", url, e),
            }
        }
        items
    }

    async fn fetch_one(&self, url: &str, limit: usize) -> anyhow::Result<Vec<NewsItem>> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        Self::parse_items(&bytes, limit)
    }

    /// Parse a feed document into at most `limit` items, preserving feed
    /// order. Entries with no link are skipped; a missing summary becomes
    /// the empty string.
    pub fn parse_items(bytes: &[u8], limit: usize) -> anyhow::Result<Vec<NewsItem>> {
        let parsed = parser::parse(bytes)?;

        let mut items = Vec::new();
        for entry in parsed.entries.into_iter().take(limit) {
            let title = entry
                .title
                .as_ref()
                .map(|t| t.content.clone())
                .unwrap_or_else(|| "Untitled".to_string());

            let link = entry
                .links
                .first()
                .map(|l| l.href.clone())
                .unwrap_or_default();

            if link.is_empty() {
                warn!("Skipping entry with no link: {}", title);
                continue;
            }

            let summary = entry.summary.map(|s| s.content).unwrap_or_default();
            let published: Option<DateTime<Utc>> = entry.published.or(entry.updated);

            items.push(NewsItem {
                title,
                summary,
                link,
                published,
            });
        }

        Ok(items)
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}
