//! Provider registry backed by a JSON configuration document.
//!
//! ```json
//! {
//!   "providers": {
//!     "imdb": {
//!       "listing_url": "https://www.imdb.com/list/ls054840033/",
//!       "list_selector": "div.lister-item",
//!       "name_selector": "h3 > a",
//!       "rank_selector": "span.lister-item-index"
//!     }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{ConfigError, ConfigResult};
use crate::traits::provider::ProviderSource;
use crate::types::provider::ProviderConfig;

/// Provider definitions shipped with the crate.
const BUILTIN_PROVIDERS_JSON: &str = include_str!("../providers.json");

/// On-disk shape of a providers file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvidersFile {
    #[serde(default)]
    pub providers: BTreeMap<String, ProviderConfig>,
}

/// Immutable provider lookup, keyed by lower-cased name.
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, ProviderConfig>,
}

impl ProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The providers embedded in the crate.
    pub fn builtin() -> ConfigResult<Self> {
        Self::from_json_str(BUILTIN_PROVIDERS_JSON)
    }

    /// Parse a providers document.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let file: ProvidersFile = serde_json::from_str(json)?;
        Ok(Self::from(file))
    }

    /// Read and parse a providers file.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let registry = Self::from_json_str(&json)?;
        debug!(path = %path.display(), providers = registry.len(), "providers loaded");
        Ok(registry)
    }

    /// Add a provider (builder pattern). A later entry replaces an earlier one
    /// whose name differs only in case.
    pub fn with_provider(mut self, name: &str, config: ProviderConfig) -> Self {
        self.insert(name, config);
        self
    }

    /// Add a provider.
    pub fn insert(&mut self, name: &str, config: ProviderConfig) {
        if !config.is_usable() {
            warn!(provider = %name, "provider registered without list or name selector");
        }
        self.providers.insert(name.to_lowercase(), config);
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl From<ProvidersFile> for ProviderRegistry {
    fn from(file: ProvidersFile) -> Self {
        let mut registry = Self::new();
        for (name, config) in file.providers {
            registry.insert(&name, config);
        }
        registry
    }
}

impl ProviderSource for ProviderRegistry {
    fn resolve(&self, provider: &str) -> Option<ProviderConfig> {
        self.providers.get(&provider.to_lowercase()).cloned()
    }

    fn provider_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.providers.keys().cloned().collect();
        names.sort();
        names
    }
}
