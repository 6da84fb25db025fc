//! Persistence backend trait for actor records.
//!
//! The store is a plain keyed collection. It performs no validation: rank
//! uniqueness and id assignment are enforced by the [`Catalog`](crate::Catalog),
//! which serializes every check-then-write sequence behind its own lock.
//! Each individual store call must still be atomic with respect to readers.

use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::types::record::{ActorId, ActorRecord, Rank};

/// Keyed storage for actor records.
#[async_trait]
pub trait ActorStore: Send + Sync {
    /// Insert a record under its id, replacing any previous value.
    async fn insert(&self, record: &ActorRecord) -> CatalogResult<()>;

    /// Get a record by id.
    async fn get(&self, id: ActorId) -> CatalogResult<Option<ActorRecord>>;

    /// Delete a record by id. Returns whether a record was removed.
    async fn remove(&self, id: ActorId) -> CatalogResult<bool>;

    /// All records, ordered by ascending id.
    async fn scan(&self) -> CatalogResult<Vec<ActorRecord>>;

    /// Highest id currently stored.
    async fn max_id(&self) -> CatalogResult<Option<ActorId>> {
        Ok(self.scan().await?.iter().map(|r| r.id).max())
    }

    /// First record holding `rank`, ignoring the record with id `excluding`.
    async fn find_by_rank(
        &self,
        rank: Rank,
        excluding: Option<ActorId>,
    ) -> CatalogResult<Option<ActorRecord>> {
        Ok(self
            .scan()
            .await?
            .into_iter()
            .find(|r| r.rank == rank && Some(r.id) != excluding))
    }

    /// Number of stored records.
    async fn count(&self) -> CatalogResult<usize> {
        Ok(self.scan().await?.len())
    }
}
