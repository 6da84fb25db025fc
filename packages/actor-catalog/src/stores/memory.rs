//! In-memory storage implementation.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{CatalogError, CatalogResult};
use crate::traits::store::ActorStore;
use crate::types::record::{ActorId, ActorRecord, Rank};

/// In-memory storage for actor records, keyed and ordered by id.
///
/// Data is lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<BTreeMap<ActorId, ActorRecord>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with records.
    pub fn with_records(records: impl IntoIterator<Item = ActorRecord>) -> Self {
        Self {
            records: RwLock::new(records.into_iter().map(|r| (r.id, r)).collect()),
        }
    }

    fn read(&self) -> CatalogResult<RwLockReadGuard<'_, BTreeMap<ActorId, ActorRecord>>> {
        self.records
            .read()
            .map_err(|e| CatalogError::Storage(e.to_string().into()))
    }

    fn write(&self) -> CatalogResult<RwLockWriteGuard<'_, BTreeMap<ActorId, ActorRecord>>> {
        self.records
            .write()
            .map_err(|e| CatalogError::Storage(e.to_string().into()))
    }
}

#[async_trait]
impl ActorStore for MemoryStore {
    async fn insert(&self, record: &ActorRecord) -> CatalogResult<()> {
        self.write()?.insert(record.id, record.clone());
        Ok(())
    }

    async fn get(&self, id: ActorId) -> CatalogResult<Option<ActorRecord>> {
        Ok(self.read()?.get(&id).cloned())
    }

    async fn remove(&self, id: ActorId) -> CatalogResult<bool> {
        Ok(self.write()?.remove(&id).is_some())
    }

    async fn scan(&self) -> CatalogResult<Vec<ActorRecord>> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn max_id(&self) -> CatalogResult<Option<ActorId>> {
        Ok(self.read()?.keys().next_back().copied())
    }

    async fn find_by_rank(
        &self,
        rank: Rank,
        excluding: Option<ActorId>,
    ) -> CatalogResult<Option<ActorRecord>> {
        Ok(self
            .read()?
            .values()
            .find(|r| r.rank == rank && Some(r.id) != excluding)
            .cloned())
    }

    async fn count(&self) -> CatalogResult<usize> {
        Ok(self.read()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::record::NewActor;

    fn record(id: ActorId, name: &str, rank: Rank) -> ActorRecord {
        NewActor::new(name, rank).into_record(id)
    }

    #[tokio::test]
    async fn test_record_crud() {
        let store = MemoryStore::new();

        store.insert(&record(1, "Tom Hanks", 1)).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 1);

        let retrieved = store.get(1).await.unwrap();
        assert_eq!(retrieved.unwrap().name, "Tom Hanks");

        assert!(store.remove(1).await.unwrap());
        assert!(!store.remove(1).await.unwrap());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_scan_is_ordered_by_id() {
        let store = MemoryStore::with_records([
            record(7, "c", 3),
            record(2, "a", 1),
            record(5, "b", 2),
        ]);

        let ids: Vec<_> = store.scan().await.unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 5, 7]);
        assert_eq!(store.max_id().await.unwrap(), Some(7));
    }

    #[tokio::test]
    async fn test_find_by_rank_excluding() {
        let store = MemoryStore::with_records([record(5, "a", 1), record(7, "b", 3)]);

        assert_eq!(store.find_by_rank(3, None).await.unwrap().map(|r| r.id), Some(7));
        assert!(store.find_by_rank(3, Some(7)).await.unwrap().is_none());
        assert!(store.find_by_rank(9, None).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = MemoryStore::new();
        assert_eq!(store.max_id().await.unwrap(), None);
        assert!(store.scan().await.unwrap().is_empty());
    }
}
