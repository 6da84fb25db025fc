//! Data types shared by the catalog and the extraction engine.

pub mod provider;
pub mod query;
pub mod record;
