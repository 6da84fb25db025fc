//! The actor catalog: identifier assignment, rank uniqueness and listing.
//!
//! Every mutating operation holds one catalog-wide lock exclusively, so the
//! "is this rank taken" read, the id assignment and the write are observed
//! by other callers as a single step. Reads share the same lock: they run
//! concurrently with each other but never see half of an ingest batch.
//!
//! Two insertion paths exist:
//! - [`Catalog::create`] - strict: non-empty name, positive and unique rank
//! - [`Catalog::ingest`] - permissive bulk path used by scraping, governed by [`RankPolicy`]

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::traits::store::ActorStore;
use crate::types::query::{total_pages, ActorPage, ListQuery};
use crate::types::record::{ActorId, ActorRecord, ActorUpdate, NewActor, Rank};

/// How [`Catalog::ingest`] treats ranks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankPolicy {
    /// Store every record as-is, including zero and duplicate ranks.
    #[default]
    Permissive,

    /// Skip records whose rank is not positive or is already taken,
    /// either in the catalog or earlier in the same batch.
    SkipConflicts,
}

/// Result of a bulk ingestion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestOutcome {
    /// Records written, in input order
    pub ingested: Vec<ActorRecord>,

    /// Records skipped under [`RankPolicy::SkipConflicts`]
    pub skipped_conflicts: usize,
}

impl IngestOutcome {
    pub fn ingested_ids(&self) -> Vec<ActorId> {
        self.ingested.iter().map(|r| r.id).collect()
    }
}

/// Owns the actor records behind a persistence backend.
pub struct Catalog<S: ActorStore> {
    store: S,
    lock: RwLock<()>,
}

impl<S: ActorStore> Catalog<S> {
    /// Create a catalog over a store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            lock: RwLock::new(()),
        }
    }

    /// Filter, order by ascending id and paginate.
    ///
    /// Out-of-range pages (zero, or past the end) yield no items; that is
    /// not an error.
    pub async fn list(&self, query: &ListQuery) -> CatalogResult<ActorPage> {
        if query.page_size < 1 {
            return Err(CatalogError::invalid("page size must be at least 1"));
        }

        let _guard = self.lock.read().await;

        let matching: Vec<ActorRecord> = self
            .store
            .scan()
            .await?
            .into_iter()
            .filter(|r| query.matches(r))
            .collect();

        let total_count = matching.len();
        let items = if query.page < 1 {
            Vec::new()
        } else {
            matching
                .into_iter()
                .skip(query.offset())
                .take(query.page_size)
                .collect()
        };

        Ok(ActorPage {
            items,
            total_count,
            total_pages: total_pages(total_count, query.page_size),
            page: query.page,
            page_size: query.page_size,
        })
    }

    /// Get a record by id.
    pub async fn get(&self, id: ActorId) -> CatalogResult<ActorRecord> {
        let _guard = self.lock.read().await;
        self.store
            .get(id)
            .await?
            .ok_or(CatalogError::NotFound { id })
    }

    /// Create a record with a fresh id (one past the current maximum).
    pub async fn create(&self, actor: NewActor) -> CatalogResult<ActorRecord> {
        validate(&actor.name, actor.rank)?;

        let _guard = self.lock.write().await;

        if self.store.find_by_rank(actor.rank, None).await?.is_some() {
            return Err(CatalogError::RankConflict { rank: actor.rank });
        }

        let id = self.next_id().await?;
        let record = actor.into_record(id);
        self.store.insert(&record).await?;

        debug!(id, rank = record.rank, "actor created");
        Ok(record)
    }

    /// Overwrite rank, details and type of an existing record.
    pub async fn update(&self, update: ActorUpdate) -> CatalogResult<ActorRecord> {
        validate(&update.name, update.rank)?;

        let _guard = self.lock.write().await;

        let id = update.id;
        let mut record = self
            .store
            .get(id)
            .await?
            .ok_or(CatalogError::NotFound { id })?;

        if self.store.find_by_rank(update.rank, Some(id)).await?.is_some() {
            return Err(CatalogError::RankConflict { rank: update.rank });
        }

        update.apply_to(&mut record);
        self.store.insert(&record).await?;

        debug!(id, rank = record.rank, "actor updated");
        Ok(record)
    }

    /// Delete a record by id.
    pub async fn delete(&self, id: ActorId) -> CatalogResult<()> {
        let _guard = self.lock.write().await;

        if !self.store.remove(id).await? {
            return Err(CatalogError::NotFound { id });
        }

        debug!(id, "actor deleted");
        Ok(())
    }

    /// Bulk-insert scraped records.
    ///
    /// Names are expected to be present already; the engine filters unnamed
    /// candidates before calling this. Ids are assigned in input order.
    /// Records written before a storage failure stay written.
    pub async fn ingest(
        &self,
        actors: Vec<NewActor>,
        policy: RankPolicy,
    ) -> CatalogResult<IngestOutcome> {
        let _guard = self.lock.write().await;

        let mut taken: HashSet<Rank> = match policy {
            RankPolicy::Permissive => HashSet::new(),
            RankPolicy::SkipConflicts => {
                self.store.scan().await?.iter().map(|r| r.rank).collect()
            }
        };

        let mut next_id = self.next_id().await?;
        let mut outcome = IngestOutcome::default();

        for actor in actors {
            if policy == RankPolicy::SkipConflicts
                && (actor.rank <= 0 || !taken.insert(actor.rank))
            {
                debug!(name = %actor.name, rank = actor.rank, "skipping conflicting rank");
                outcome.skipped_conflicts += 1;
                continue;
            }

            let record = actor.into_record(next_id);
            self.store.insert(&record).await?;
            next_id += 1;
            outcome.ingested.push(record);
        }

        Ok(outcome)
    }

    /// Number of records in the catalog.
    pub async fn len(&self) -> CatalogResult<usize> {
        let _guard = self.lock.read().await;
        self.store.count().await
    }

    pub async fn is_empty(&self) -> CatalogResult<bool> {
        Ok(self.len().await? == 0)
    }

    async fn next_id(&self) -> CatalogResult<ActorId> {
        Ok(self.store.max_id().await?.unwrap_or(0) + 1)
    }
}

fn validate(name: &str, rank: Rank) -> CatalogResult<()> {
    if name.trim().is_empty() {
        return Err(CatalogError::invalid("missing name"));
    }
    if rank <= 0 {
        return Err(CatalogError::invalid(format!(
            "rank must be positive, got {rank}"
        )));
    }
    Ok(())
}
