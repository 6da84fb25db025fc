//! Record building: one candidate per listing node.

use crate::dom::{Document, Node, Path, PathError};
use crate::error::{ExtractionError, Result};
use crate::extract::field::{extract_rank, extract_text, extract_type};
use crate::types::provider::ProviderConfig;
use crate::types::record::CandidateRecord;

/// A provider's selectors, compiled once per extraction run.
#[derive(Debug, Clone)]
pub struct RecordSelectors {
    pub list: Path,
    pub name: Path,
    pub rank: Option<Path>,
    pub details: Option<Path>,
    pub actor_type: Option<Path>,
}

impl RecordSelectors {
    /// Compile every selector of `config`.
    ///
    /// `provider` is only used to label errors.
    pub fn compile(provider: &str, config: &ProviderConfig) -> Result<Self> {
        let label = |field: &'static str| {
            move |e: PathError| ExtractionError::InvalidSelector {
                provider: provider.to_string(),
                field,
                selector: e.selector,
                reason: e.reason,
            }
        };

        Ok(Self {
            list: Path::parse(&config.list_selector).map_err(label("list"))?,
            name: Path::parse(&config.name_selector).map_err(label("name"))?,
            rank: Path::parse_optional(&config.rank_selector).map_err(label("rank"))?,
            details: Path::parse_optional(&config.details_selector).map_err(label("details"))?,
            actor_type: Path::parse_optional(&config.type_selector).map_err(label("type"))?,
        })
    }
}

/// Build a candidate from one listing node. Never fails; unmatched fields
/// carry their defaults and rejection is left to the caller.
pub fn build_candidate(node: &Node<'_>, selectors: &RecordSelectors) -> CandidateRecord {
    CandidateRecord {
        name: extract_text(node, Some(&selectors.name)),
        rank: extract_rank(node, selectors.rank.as_ref()),
        details: extract_text(node, selectors.details.as_ref()),
        actor_type: extract_type(node, selectors.actor_type.as_ref()),
    }
}

/// Build a candidate for every node matched by the list selector.
pub fn build_candidates(document: &Document, selectors: &RecordSelectors) -> Vec<CandidateRecord> {
    document
        .select_all(&selectors.list)
        .iter()
        .map(|node| build_candidate(node, selectors))
        .collect()
}
