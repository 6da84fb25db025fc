//! Extraction engine: provider name in, catalog records out.
//!
//! resolve provider → compile selectors → fetch listing → build candidates
//! → drop unnamed → [`Catalog::ingest`].

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, RankPolicy};
use crate::error::{ExtractionError, Result};
use crate::extract::builder::{build_candidates, RecordSelectors};
use crate::traits::{fetcher::DocumentFetcher, provider::ProviderSource, store::ActorStore};
use crate::types::record::{ActorId, NewActor};

/// Outcome of one extraction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionReport {
    /// Provider name as requested
    pub provider: String,

    /// Listing URL that was fetched
    pub url: String,

    /// Nodes matched by the list selector
    pub candidates: usize,

    /// Ids of the records written to the catalog
    pub ingested_ids: Vec<ActorId>,

    /// Candidates dropped for lacking a name
    pub discarded_unnamed: usize,

    /// Candidates dropped by the rank policy
    pub skipped_conflicts: usize,
}

impl ExtractionReport {
    pub fn ingested(&self) -> usize {
        self.ingested_ids.len()
    }
}

/// Runs provider extractions into a shared catalog.
pub struct ExtractionEngine<F, P, S>
where
    F: DocumentFetcher,
    P: ProviderSource,
    S: ActorStore,
{
    fetcher: F,
    providers: P,
    catalog: Arc<Catalog<S>>,
    rank_policy: RankPolicy,
}

impl<F, P, S> ExtractionEngine<F, P, S>
where
    F: DocumentFetcher,
    P: ProviderSource,
    S: ActorStore,
{
    /// Create an engine with the permissive rank policy.
    pub fn new(fetcher: F, providers: P, catalog: Arc<Catalog<S>>) -> Self {
        Self {
            fetcher,
            providers,
            catalog,
            rank_policy: RankPolicy::default(),
        }
    }

    /// Set how ingested ranks are treated.
    pub fn with_rank_policy(mut self, policy: RankPolicy) -> Self {
        self.rank_policy = policy;
        self
    }

    /// The catalog records are ingested into.
    pub fn catalog(&self) -> &Arc<Catalog<S>> {
        &self.catalog
    }

    /// Scrape every record from a provider's listing page into the catalog.
    ///
    /// Fails with [`ExtractionError::ProviderNotFound`] before any fetch when the
    /// provider is unknown or lacks a list/name selector. A fetch failure
    /// ends the run with nothing ingested. A listing with no matching nodes
    /// is a successful, empty run.
    pub async fn extract_all(&self, provider: &str) -> Result<ExtractionReport> {
        let config = self
            .providers
            .resolve(provider)
            .filter(|c| {
                let usable = c.is_usable();
                if !usable {
                    warn!(provider = %provider, "provider config lacks list or name selector");
                }
                usable
            })
            .ok_or_else(|| ExtractionError::ProviderNotFound {
                provider: provider.to_string(),
            })?;

        let selectors = RecordSelectors::compile(provider, &config)?;

        info!(
            provider = %provider,
            url = %config.listing_url,
            fetcher = self.fetcher.name(),
            "extraction starting"
        );

        let raw = self.fetcher.fetch(&config.listing_url).await.map_err(|e| {
            warn!(provider = %provider, url = %config.listing_url, error = %e, "listing fetch failed");
            e
        })?;

        // The parsed tree is !Send; keep it inside this block.
        let candidates = {
            let document = raw.parse();
            build_candidates(&document, &selectors)
        };
        let candidate_count = candidates.len();

        let mut actors: Vec<NewActor> = Vec::with_capacity(candidate_count);
        let mut discarded_unnamed = 0;
        for candidate in candidates {
            match candidate.into_new_actor() {
                Some(actor) => actors.push(actor),
                None => {
                    discarded_unnamed += 1;
                    debug!(provider = %provider, "discarding candidate without name");
                }
            }
        }

        let outcome = self.catalog.ingest(actors, self.rank_policy).await?;

        let report = ExtractionReport {
            provider: provider.to_string(),
            url: config.listing_url,
            candidates: candidate_count,
            ingested_ids: outcome.ingested_ids(),
            discarded_unnamed,
            skipped_conflicts: outcome.skipped_conflicts,
        };

        info!(
            provider = %provider,
            candidates = report.candidates,
            ingested = report.ingested(),
            discarded_unnamed = report.discarded_unnamed,
            skipped_conflicts = report.skipped_conflicts,
            "extraction completed"
        );

        Ok(report)
    }
}
