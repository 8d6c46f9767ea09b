use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode};
use tracing::{info, warn};

use crate::error::FetchError;

/// Result of a single GET that reached the server.
#[derive(Debug)]
pub enum FetchOutcome {
    /// HTTP 200 with the page body.
    Page(String),
    /// Any other status. The body is discarded.
    Unavailable(StatusCode),
}

impl FetchOutcome {
    /// Page body, or an empty document when the page was unavailable.
    pub fn into_html(self) -> String {
        match self {
            FetchOutcome::Page(html) => html,
            FetchOutcome::Unavailable(_) => String::new(),
        }
    }
}

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    /// One GET, no retries. Connection and body errors are returned; a
    /// non-200 status is not an error.
    pub async fn fetch(&self, url: &str) -> Result<FetchOutcome, FetchError> {
        info!("Fetching leaderboard: {}", url);
        let start = Instant::now();

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Leaderboard request returned {} for {}", status, url);
            return Ok(FetchOutcome::Unavailable(status));
        }

        let html = response.text().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;
        info!(
            "Fetched {} bytes in {}ms",
            html.len(),
            start.elapsed().as_millis()
        );
        Ok(FetchOutcome::Page(html))
    }
}
