//! Runtime configuration loaded from environment variables.

use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ConfigError, ConfigResult, FetchResult};
use crate::fetchers::{HttpFetcher, DEFAULT_USER_AGENT};
use crate::providers::ProviderRegistry;
use crate::types::query::DEFAULT_PAGE_SIZE;

const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Providers JSON file; the built-in providers are used when unset
    pub providers_path: Option<PathBuf>,
    pub fetch_timeout: Duration,
    pub user_agent: String,
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            providers_path: None,
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let defaults = Self::default();

        let fetch_timeout = match var("ACTOR_FETCH_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(parse_positive("ACTOR_FETCH_TIMEOUT_SECS", &raw)?),
            None => defaults.fetch_timeout,
        };

        let page_size = match var("ACTOR_PAGE_SIZE") {
            Some(raw) => parse_positive("ACTOR_PAGE_SIZE", &raw)? as usize,
            None => defaults.page_size,
        };

        Ok(Self {
            providers_path: var("ACTOR_PROVIDERS_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            fetch_timeout,
            user_agent: var("ACTOR_USER_AGENT")
                .filter(|ua| !ua.trim().is_empty())
                .unwrap_or(defaults.user_agent),
            page_size,
        })
    }

    /// Load the configured providers file, or the built-in providers.
    pub fn load_providers(&self) -> ConfigResult<ProviderRegistry> {
        match &self.providers_path {
            Some(path) => ProviderRegistry::from_path(path),
            None => ProviderRegistry::builtin(),
        }
    }

    /// Build an HTTP fetcher with the configured timeout and user agent.
    pub fn http_fetcher(&self) -> FetchResult<HttpFetcher> {
        Ok(HttpFetcher::with_timeout(self.fetch_timeout)?.with_user_agent(&self.user_agent))
    }
}

fn parse_positive(var: &'static str, raw: &str) -> ConfigResult<u64> {
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::Env {
            var,
            reason: format!("expected a positive integer, got {raw:?}"),
        }),
    }
}
