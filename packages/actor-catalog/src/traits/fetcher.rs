//! Document fetcher trait.
//!
//! A fetcher retrieves the raw HTML of a provider's listing page. Parsing
//! into a navigable tree happens afterwards, synchronously, in
//! [`Document::parse`](crate::dom::Document::parse): the parsed tree is not
//! `Send` and must never be held across an await point.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dom::Document;
use crate::error::FetchResult;

/// Raw document content as returned by a fetcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDocument {
    /// URL the document was requested from
    pub url: String,

    /// Raw HTML source
    pub html: String,

    /// MIME type if the source reported one
    pub content_type: Option<String>,

    /// When the content was fetched
    pub fetched_at: DateTime<Utc>,
}

impl RawDocument {
    /// Create a new raw document fetched now.
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: html.into(),
            content_type: None,
            fetched_at: Utc::now(),
        }
    }

    /// Set the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Parse the HTML into a navigable tree.
    pub fn parse(&self) -> Document {
        Document::parse(&self.html)
    }
}

/// Retrieves documents by URL.
///
/// Implementations:
/// - `HttpFetcher` - reqwest-backed HTTP GET
/// - `FileFetcher` - local files and `file://` URLs
/// - `MockFetcher` - canned documents for tests
///
/// No retries are expected: a failure is reported once and ends the run.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Fetch a single document.
    async fn fetch(&self, url: &str) -> FetchResult<RawDocument>;

    /// Get the fetcher name (for logging/debugging).
    fn name(&self) -> &str {
        "unknown"
    }
}

#[async_trait]
impl<F: DocumentFetcher + ?Sized> DocumentFetcher for std::sync::Arc<F> {
    async fn fetch(&self, url: &str) -> FetchResult<RawDocument> {
        (**self).fetch(url).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
