//! InMemoryBackend - HashMap-backed storage for testing and ephemeral use.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use super::{CollectionData, StorageBackend};
use crate::error::{Result, StoreError};
use crate::record::{Record, RecordKey};
use crate::schema::Schema;

/// In-memory storage backed by a HashMap of collections.
///
/// Clone-friendly via Arc: clones share the same underlying storage.
#[derive(Clone, Default)]
pub struct InMemoryBackend {
    storage: Arc<RwLock<HashMap<String, CollectionData>>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, CollectionData>>> {
        self.storage
            .read()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, CollectionData>>> {
        self.storage
            .write()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))
    }

    fn with_collection<T>(
        &self,
        collection: &str,
        f: impl FnOnce(&CollectionData) -> T,
    ) -> Result<T> {
        let storage = self.read()?;
        storage
            .get(collection)
            .map(f)
            .ok_or_else(|| not_open(collection))
    }

    fn with_collection_mut<T>(
        &self,
        collection: &str,
        f: impl FnOnce(&mut CollectionData) -> T,
    ) -> Result<T> {
        let mut storage = self.write()?;
        storage
            .get_mut(collection)
            .map(f)
            .ok_or_else(|| not_open(collection))
    }
}

fn not_open(collection: &str) -> StoreError {
    StoreError::Storage(format!("collection '{}' is not open", collection))
}

#[async_trait]
impl StorageBackend for InMemoryBackend {
    async fn open(&self, schema: &Schema) -> Result<()> {
        let mut storage = self.write()?;
        for name in schema.names() {
            storage.entry(name.to_string()).or_default();
        }
        Ok(())
    }

    async fn get(&self, collection: &str, key: &RecordKey) -> Result<Option<Record>> {
        self.with_collection(collection, |c| c.records.get(key).cloned())
    }

    async fn put(&self, collection: &str, key: RecordKey, record: Record) -> Result<()> {
        self.with_collection_mut(collection, |c| c.put(key, record))
    }

    async fn remove(&self, collection: &str, key: &RecordKey) -> Result<bool> {
        self.with_collection_mut(collection, |c| c.remove(key))
    }

    async fn scan(&self, collection: &str) -> Result<Vec<Record>> {
        self.with_collection(collection, |c| c.records.values().cloned().collect())
    }

    async fn count(&self, collection: &str) -> Result<usize> {
        self.with_collection(collection, |c| c.records.len())
    }

    async fn clear(&self, collection: &str) -> Result<()> {
        self.with_collection_mut(collection, |c| c.records.clear())
    }

    async fn allocate_key(&self, collection: &str) -> Result<u64> {
        self.with_collection_mut(collection, |c| c.allocate_key())
    }

    async fn observe_key(&self, collection: &str, key: u64) -> Result<()> {
        self.with_collection_mut(collection, |c| c.observe_key(key))
    }
}
