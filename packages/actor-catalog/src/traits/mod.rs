//! Core trait abstractions for the collaborators the catalog and engine call.
//!
//! Applications implement these to plug in fetching, provider lookup and
//! persistence.

pub mod fetcher;
pub mod provider;
pub mod store;
