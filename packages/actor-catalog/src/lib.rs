//! Ranked Actor Catalog with Configuration-Driven Extraction
//!
//! Populates a catalog of actor records by scraping third-party listing
//! pages. Each provider is described purely by configuration: a listing URL
//! and a set of selectors locating the list nodes and the fields inside them.
//!
//! # Design
//!
//! - Providers are data, not code: adding a site means adding selectors
//! - Absent fields are normal; only a missing name drops a candidate
//! - Rank is the uniqueness axis, ids are assignment artifacts
//! - Strict `create` and permissive `ingest` are separate operations
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actor_catalog::{Catalog, ExtractionEngine, HttpFetcher, ListQuery, MemoryStore, ProviderRegistry};
//!
//! let catalog = Arc::new(Catalog::new(MemoryStore::new()));
//! let engine = ExtractionEngine::new(HttpFetcher::new(), ProviderRegistry::builtin()?, catalog.clone());
//!
//! let report = engine.extract_all("imdb").await?;
//! let page = catalog.list(&ListQuery::new().min_rank(1).max_rank(10)).await?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Collaborator abstractions (DocumentFetcher, ProviderSource, ActorStore)
//! - [`types`] - Records, provider configs, listing queries
//! - [`dom`] - Parsed documents and compiled selectors
//! - [`extract`] - Field extraction, record building, the extraction engine
//! - [`catalog`] - Id assignment, rank uniqueness, listing
//! - [`providers`] - JSON-backed provider registry
//! - [`fetchers`] - Fetcher implementations (HttpFetcher, FileFetcher, MockFetcher)
//! - [`stores`] - Storage implementations (MemoryStore)
//! - [`config`] - Environment configuration
//! - [`testing`] - Listing builders and wired test scenarios

pub mod catalog;
pub mod config;
pub mod dom;
pub mod error;
pub mod extract;
pub mod fetchers;
pub mod providers;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use catalog::{Catalog, IngestOutcome, RankPolicy};
pub use config::AppConfig;
pub use error::{CatalogError, ConfigError, ExtractionError, FetchError};
pub use extract::{ExtractionEngine, ExtractionReport};
pub use traits::{
    fetcher::{DocumentFetcher, RawDocument},
    provider::ProviderSource,
    store::ActorStore,
};
pub use types::{
    provider::ProviderConfig,
    query::{ActorPage, ListQuery},
    record::{ActorId, ActorRecord, ActorSummary, ActorUpdate, CandidateRecord, NewActor, Rank},
};

// Re-export implementations
pub use fetchers::{FileFetcher, HttpFetcher, MockFetcher};
pub use providers::ProviderRegistry;
pub use stores::MemoryStore;
