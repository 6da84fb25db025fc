//! Mock fetcher for testing.
//!
//! Provides a configurable mock implementation of the DocumentFetcher trait.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{FetchError, FetchResult};
use crate::traits::fetcher::{DocumentFetcher, RawDocument};

#[derive(Debug, Clone)]
enum Canned {
    Document(String),
    Status(u16),
}

/// Mock fetcher for testing.
///
/// Serves canned HTML by URL and records every requested URL. Unknown URLs
/// answer with status 404.
///
/// # Example
///
/// ```rust
/// use actor_catalog::fetchers::MockFetcher;
///
/// let mock = MockFetcher::new()
///     .with_document("https://example.com/list", "<li>Tom Hanks</li>")
///     .with_failure("https://example.com/down", 503);
/// ```
#[derive(Default, Clone)]
pub struct MockFetcher {
    responses: Arc<RwLock<HashMap<String, Canned>>>,
    fetch_calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    /// Create a new empty mock fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` for `url`.
    pub fn add_document(&self, url: impl Into<String>, html: impl Into<String>) {
        self.responses
            .write()
            .unwrap()
            .insert(url.into(), Canned::Document(html.into()));
    }

    /// Answer `url` with a non-success status.
    pub fn add_failure(&self, url: impl Into<String>, status: u16) {
        self.responses
            .write()
            .unwrap()
            .insert(url.into(), Canned::Status(status));
    }

    /// Builder form of [`add_document`](Self::add_document).
    pub fn with_document(self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.add_document(url, html);
        self
    }

    /// Builder form of [`add_failure`](Self::add_failure).
    pub fn with_failure(self, url: impl Into<String>, status: u16) -> Self {
        self.add_failure(url, status);
        self
    }

    /// Get the number of times fetch was called.
    pub fn fetch_call_count(&self) -> usize {
        self.fetch_calls.read().unwrap().len()
    }

    /// Get the URLs that were requested, in order.
    pub fn fetch_calls(&self) -> Vec<String> {
        self.fetch_calls.read().unwrap().clone()
    }

    /// Clear all recorded calls.
    pub fn reset_calls(&self) {
        self.fetch_calls.write().unwrap().clear();
    }
}

#[async_trait]
impl DocumentFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<RawDocument> {
        self.fetch_calls.write().unwrap().push(url.to_string());

        let canned = self.responses.read().unwrap().get(url).cloned();
        match canned {
            Some(Canned::Document(html)) => {
                Ok(RawDocument::new(url, html).with_content_type("text/html"))
            }
            Some(Canned::Status(status)) => Err(FetchError::Status {
                url: url.to_string(),
                status,
            }),
            None => Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
