//! Typed errors for the actor catalog.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can match
//! on the failure kind and map it to their own transport.

use thiserror::Error;

use crate::types::record::{ActorId, Rank};

/// Errors raised by an extraction run.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// No usable configuration exists for the requested provider
    #[error("can't find the provider in configuration: {provider}")]
    ProviderNotFound { provider: String },

    /// A configured selector is not valid in the selector dialect
    #[error("provider {provider}: invalid {field} selector {selector:?}: {reason}")]
    InvalidSelector {
        provider: String,
        field: &'static str,
        selector: String,
        reason: String,
    },

    /// The listing page could not be retrieved
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The catalog rejected the ingested records
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Errors raised by catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Missing name, non-positive rank or bad paging arguments
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Another record already holds this rank
    #[error("another actor with rank {rank} already exists")]
    RankConflict { rank: Rank },

    /// No record with this id
    #[error("actor with id {id} not found")]
    NotFound { id: ActorId },

    /// Persistence backend failed
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl CatalogError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// Errors raised while retrieving a document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// URL could not be parsed or has an unsupported scheme
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// Server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Local document could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid JSON for the expected shape
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Environment variable has an unusable value
    #[error("{var}: {reason}")]
    Env { var: &'static str, reason: String },
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result type alias for configuration loading.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
