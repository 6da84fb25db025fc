//! Configuration-driven record extraction.
//!
//! - [`field`] - locate one descendant and normalise its text
//! - [`builder`] - compose field extractions into a candidate record
//! - [`engine`] - fetch a provider's listing and ingest its records

pub mod builder;
pub mod engine;
pub mod field;

pub use builder::{build_candidate, build_candidates, RecordSelectors};
pub use engine::{ExtractionEngine, ExtractionReport};
pub use field::{extract_rank, extract_text, extract_type, parse_rank, parse_type};
