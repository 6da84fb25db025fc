//! HTTP fetcher implementation.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::error::{FetchError, FetchResult};
use crate::traits::fetcher::{DocumentFetcher, RawDocument};

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = "ActorCatalogBot/1.0";

/// Fetches listing pages with a single HTTP GET.
///
/// No JavaScript rendering and no retries: a non-success status or a
/// transport error is returned as-is.
///
/// # Example
///
/// ```rust,ignore
/// use actor_catalog::fetchers::HttpFetcher;
///
/// let fetcher = HttpFetcher::with_timeout(Duration::from_secs(10))?
///     .with_user_agent("MyBot/2.0");
/// let doc = fetcher.fetch("https://example.com/actors").await?;
/// ```
pub struct HttpFetcher {
    client: reqwest::Client,
    user_agent: String,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    /// Create a fetcher with a default client (no request timeout).
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Create a fetcher whose requests time out after `timeout`.
    pub fn with_timeout(timeout: Duration) -> FetchResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| FetchError::Http(Box::new(e)))?;

        Ok(Self::new().with_client(client))
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a custom HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    fn validate_url(url: &str) -> FetchResult<Url> {
        let parsed = Url::parse(url).map_err(|_| FetchError::InvalidUrl {
            url: url.to_string(),
        })?;
        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            _ => Err(FetchError::InvalidUrl {
                url: url.to_string(),
            }),
        }
    }
}

#[async_trait]
impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<RawDocument> {
        let parsed = Self::validate_url(url)?;

        debug!(url = %url, "HTTP fetch starting");
        let response = self
            .client
            .get(parsed)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "HTTP request failed");
                FetchError::Http(Box::new(e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let html = response
            .text()
            .await
            .map_err(|e| FetchError::Http(Box::new(e)))?;

        debug!(url = %url, content_length = html.len(), "HTTP fetch completed");

        let mut doc = RawDocument::new(url, html);
        doc.content_type = content_type;
        Ok(doc)
    }

    fn name(&self) -> &str {
        "http"
    }
}
