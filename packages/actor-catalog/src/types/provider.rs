//! Provider extraction configuration.

use serde::{Deserialize, Serialize};

/// Where a provider's listing lives and how to read records off it.
///
/// All selectors except `list_selector` are relative to a candidate node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Page containing the list of candidate records
    pub listing_url: String,

    /// Yields one node per candidate record
    pub list_selector: String,

    pub name_selector: String,

    #[serde(default)]
    pub rank_selector: String,

    #[serde(default)]
    pub details_selector: String,

    #[serde(default)]
    pub type_selector: String,
}

impl ProviderConfig {
    /// Create a config with the required selectors.
    pub fn new(
        listing_url: impl Into<String>,
        list_selector: impl Into<String>,
        name_selector: impl Into<String>,
    ) -> Self {
        Self {
            listing_url: listing_url.into(),
            list_selector: list_selector.into(),
            name_selector: name_selector.into(),
            rank_selector: String::new(),
            details_selector: String::new(),
            type_selector: String::new(),
        }
    }

    pub fn with_rank_selector(mut self, selector: impl Into<String>) -> Self {
        self.rank_selector = selector.into();
        self
    }

    pub fn with_details_selector(mut self, selector: impl Into<String>) -> Self {
        self.details_selector = selector.into();
        self
    }

    pub fn with_type_selector(mut self, selector: impl Into<String>) -> Self {
        self.type_selector = selector.into();
        self
    }

    /// A config without a list or name selector cannot be used.
    pub fn is_usable(&self) -> bool {
        !self.list_selector.trim().is_empty() && !self.name_selector.trim().is_empty()
    }
}
