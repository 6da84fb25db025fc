//! Provider configuration source.

use crate::types::provider::ProviderConfig;

/// Looks up provider configurations by name.
///
/// Lookups are case-insensitive. A source must return the same answer for a
/// name for the duration of an extraction run.
pub trait ProviderSource: Send + Sync {
    /// Resolve a provider by name, or `None` if it is not configured.
    fn resolve(&self, provider: &str) -> Option<ProviderConfig>;

    /// Names of all configured providers.
    fn provider_names(&self) -> Vec<String>;
}

impl<P: ProviderSource + ?Sized> ProviderSource for std::sync::Arc<P> {
    fn resolve(&self, provider: &str) -> Option<ProviderConfig> {
        (**self).resolve(provider)
    }

    fn provider_names(&self) -> Vec<String> {
        (**self).provider_names()
    }
}
