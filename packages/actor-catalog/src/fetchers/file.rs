//! Local file fetcher, for offline runs against saved listing pages.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

use crate::error::{FetchError, FetchResult};
use crate::traits::fetcher::{DocumentFetcher, RawDocument};

/// Reads documents from disk.
///
/// Accepts `file://` URLs and plain paths. Relative paths resolve against
/// the base directory when one is set.
#[derive(Debug, Clone, Default)]
pub struct FileFetcher {
    base_dir: Option<PathBuf>,
}

impl FileFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative paths against `dir`.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    fn resolve(&self, url: &str) -> FetchResult<PathBuf> {
        if url.starts_with("file:") {
            let parsed = Url::parse(url).map_err(|_| FetchError::InvalidUrl {
                url: url.to_string(),
            })?;
            return parsed.to_file_path().map_err(|_| FetchError::InvalidUrl {
                url: url.to_string(),
            });
        }

        let path = Path::new(url);
        match &self.base_dir {
            Some(base) if path.is_relative() => Ok(base.join(path)),
            _ => Ok(path.to_path_buf()),
        }
    }
}

#[async_trait]
impl DocumentFetcher for FileFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<RawDocument> {
        let path = self.resolve(url)?;
        debug!(path = %path.display(), "reading local document");

        let html = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| FetchError::Io {
                path: path.display().to_string(),
                source,
            })?;

        Ok(RawDocument::new(url, html).with_content_type("text/html"))
    }

    fn name(&self) -> &str {
        "file"
    }
}
