use async_trait::async_trait;
use reqwest::Client;

use crate::error::RssError;
use crate::models::FeedEntry;
use crate::parser::parse_feed;

/// Anything that can turn a feed URL into its entries.
///
/// The briefing pipeline only depends on this trait so tests can feed it
/// canned entries.
#[async_trait]
pub trait FeedFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> crate::Result<Vec<FeedEntry>>;
}

/// RSS feed fetcher client
pub struct RssClient {
    client: Client,
}

impl RssClient {
    /// Create a new RssClient with a custom reqwest Client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FeedFetcher for RssClient {
    /// Fetch and parse a feed
    ///
    /// # Example
    /// ```no_run
    /// use rss::{FeedFetcher, RssClient};
    ///
    /// # async fn example() -> rss::Result<()> {
    /// let client = RssClient::with_client(reqwest::Client::new());
    /// let entries = client.fetch("https://www.yna.co.kr/rss/economy.xml").await?;
    ///
    /// for entry in entries {
    ///     println!("{}", entry.title);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn fetch(&self, url: &str) -> crate::Result<Vec<FeedEntry>> {
        tracing::debug!("Fetching feed from: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(RssError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        let entries = parse_feed(&bytes)?;

        tracing::debug!("Parsed {} entries from {}", entries.len(), url);
        Ok(entries)
    }
}
