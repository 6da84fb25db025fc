//! Document fetcher implementations.
//!
//! # Available Fetchers
//!
//! - `HttpFetcher` - HTTP GET via reqwest
//! - `FileFetcher` - Saved pages on local disk
//! - `MockFetcher` - For testing

mod file;
mod http;
mod mock;

pub use file::FileFetcher;
pub use http::{HttpFetcher, DEFAULT_USER_AGENT};
pub use mock::MockFetcher;

// Re-export from traits for convenience
pub use crate::traits::fetcher::{DocumentFetcher, RawDocument};
