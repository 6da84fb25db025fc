//! Testing utilities.
//!
//! These build listing pages, provider configs and fully wired engines so
//! applications can test against the catalog without network access.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::error::CatalogResult;
use crate::extract::engine::ExtractionEngine;
use crate::fetchers::MockFetcher;
use crate::providers::ProviderRegistry;
use crate::stores::MemoryStore;
use crate::types::provider::ProviderConfig;
use crate::types::record::{ActorRecord, NewActor};

/// Selectors matching the HTML produced by [`ListingBuilder`].
pub fn listing_provider(listing_url: impl Into<String>) -> ProviderConfig {
    ProviderConfig::new(listing_url, "div.actor", "h3.name")
        .with_rank_selector("span.rank")
        .with_details_selector("p.details")
        .with_type_selector("p.type")
}

/// One entry of a generated listing page. `None` fields are left out of the markup.
#[derive(Debug, Clone, Default)]
pub struct ListingEntry {
    pub name: Option<String>,
    pub rank: Option<String>,
    pub details: Option<String>,
    pub actor_type: Option<String>,
}

impl ListingEntry {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn unnamed() -> Self {
        Self::default()
    }

    /// Raw rank text, e.g. `"12."`.
    pub fn rank(mut self, rank: impl Into<String>) -> Self {
        self.rank = Some(rank.into());
        self
    }

    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn actor_type(mut self, actor_type: impl Into<String>) -> Self {
        self.actor_type = Some(actor_type.into());
        self
    }

    fn render(&self, out: &mut String) {
        out.push_str("    <div class=\"actor\">\n");
        if let Some(rank) = &self.rank {
            out.push_str(&format!("      <span class=\"rank\">{rank}</span>\n"));
        }
        if let Some(name) = &self.name {
            out.push_str(&format!("      <h3 class=\"name\"><a href=\"#\">{name}</a></h3>\n"));
        }
        if let Some(details) = &self.details {
            out.push_str(&format!("      <p class=\"details\">{details}</p>\n"));
        }
        if let Some(actor_type) = &self.actor_type {
            out.push_str(&format!("      <p class=\"type\">{actor_type}</p>\n"));
        }
        out.push_str("    </div>\n");
    }
}

/// Builds listing page HTML in the shape [`listing_provider`] expects.
#[derive(Debug, Clone, Default)]
pub struct ListingBuilder {
    entries: Vec<ListingEntry>,
}

impl ListingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(mut self, entry: ListingEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// `count` named entries ranked `1.` to `count.`.
    pub fn ranked(mut self, count: usize) -> Self {
        for i in 1..=count {
            self.entries
                .push(ListingEntry::named(format!("Actor {i}")).rank(format!("{i}.")));
        }
        self
    }

    pub fn build(&self) -> String {
        let mut html = String::from("<html>\n  <body>\n  <div class=\"list\">\n");
        for entry in &self.entries {
            entry.render(&mut html);
        }
        html.push_str("  </div>\n  </body>\n</html>\n");
        html
    }
}

/// Create `count` records with ranks `1..=count` through the strict path.
pub async fn seed_catalog(
    catalog: &Catalog<MemoryStore>,
    count: usize,
) -> CatalogResult<Vec<ActorRecord>> {
    let mut records = Vec::with_capacity(count);
    for i in 1..=count {
        records.push(
            catalog
                .create(NewActor::new(format!("Actor {i}"), i as i64))
                .await?,
        );
    }
    Ok(records)
}

/// A mock fetcher, a one-provider registry and an empty in-memory catalog.
pub struct TestScenario {
    pub fetcher: MockFetcher,
    pub catalog: Arc<Catalog<MemoryStore>>,
    pub provider: String,
    pub listing_url: String,
}

impl TestScenario {
    /// Scenario with provider `name` whose listing lives at `listing_url`.
    pub fn new(name: impl Into<String>, listing_url: impl Into<String>) -> Self {
        Self {
            fetcher: MockFetcher::new(),
            catalog: Arc::new(Catalog::new(MemoryStore::new())),
            provider: name.into(),
            listing_url: listing_url.into(),
        }
    }

    /// Serve `listing` at the provider's listing URL.
    pub fn with_listing(self, listing: &ListingBuilder) -> Self {
        self.fetcher.add_document(&self.listing_url, listing.build());
        self
    }

    /// Build an engine sharing this scenario's fetcher and catalog.
    pub fn engine(&self) -> ExtractionEngine<MockFetcher, ProviderRegistry, MemoryStore> {
        let registry = ProviderRegistry::new()
            .with_provider(&self.provider, listing_provider(&self.listing_url));
        ExtractionEngine::new(self.fetcher.clone(), registry, self.catalog.clone())
    }
}
