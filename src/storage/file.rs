//! FileBackend - one JSON document per collection on local disk.
//!
//! Layout: `<dir>/<collection>.json`. Every mutation rewrites the affected
//! collection's document through a temporary file and an atomic rename
//! before returning, so a crash leaves either the old or the new document.
//! Mutations are applied to a copy of the collection, and the copy replaces
//! the loaded state only once it is on disk. A failed write leaves both
//! unchanged.
//!
//! Key allocation only advances the in-memory counter; the counter reaches
//! disk with the next record written. A key allocated but never written
//! may be handed out again after a restart.
//!
//! All operations go through one async mutex and complete in issue order.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, error};

use super::{CollectionData, StorageBackend};
use crate::error::{Result, StoreError};
use crate::record::{Record, RecordKey};
use crate::schema::Schema;

struct OpenCollection {
    key_field: &'static str,
    data: CollectionData,
}

/// Durable storage rooted at a directory.
pub struct FileBackend {
    dir: PathBuf,
    collections: Mutex<HashMap<String, OpenCollection>>,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            collections: Mutex::new(HashMap::new()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, collection: &str) -> PathBuf {
        self.dir.join(format!("{}.json", collection))
    }

    async fn persist(
        &self,
        collection: &str,
        key_field: &str,
        data: &CollectionData,
    ) -> Result<()> {
        let bytes = data.to_json(key_field)?;
        let path = self.path_for(collection);
        let tmp = self.dir.join(format!("{}.json.tmp", collection));

        fs::write(&tmp, bytes).await.map_err(|e| {
            error!("Failed to write collection {} to {:?}: {}", collection, tmp, e);
            StoreError::Storage(format!("write {}: {}", collection, e))
        })?;
        fs::rename(&tmp, &path).await.map_err(|e| {
            error!("Failed to move {:?} into place: {}", tmp, e);
            StoreError::Storage(format!("rename {}: {}", collection, e))
        })?;
        debug!("Persisted collection {}", collection);
        Ok(())
    }

    async fn load(&self, collection: &str) -> Result<CollectionData> {
        let path = self.path_for(collection);
        match fs::read(&path).await {
            Ok(bytes) => CollectionData::from_json(&bytes).map_err(|e| {
                StoreError::StoreUnavailable(format!("corrupt collection file {:?}: {}", path, e))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(CollectionData::default()),
            Err(e) => Err(StoreError::StoreUnavailable(format!(
                "failed to read {:?}: {}",
                path, e
            ))),
        }
    }
}

fn not_open(collection: &str) -> StoreError {
    StoreError::Storage(format!("collection '{}' is not open", collection))
}

#[async_trait]
impl StorageBackend for FileBackend {
    async fn open(&self, schema: &Schema) -> Result<()> {
        fs::create_dir_all(&self.dir).await.map_err(|e| {
            StoreError::StoreUnavailable(format!("failed to create {:?}: {}", self.dir, e))
        })?;

        let mut collections = self.collections.lock().await;
        for collection in schema.collections() {
            if collections.contains_key(collection.name) {
                continue;
            }
            let data = self.load(collection.name).await?;
            debug!(
                "Loaded collection {} ({} records)",
                collection.name,
                data.records.len()
            );
            collections.insert(
                collection.name.to_string(),
                OpenCollection {
                    key_field: collection.key_field(),
                    data,
                },
            );
        }
        Ok(())
    }

    async fn get(&self, collection: &str, key: &RecordKey) -> Result<Option<Record>> {
        let collections = self.collections.lock().await;
        let open = collections.get(collection).ok_or_else(|| not_open(collection))?;
        Ok(open.data.records.get(key).cloned())
    }

    async fn put(&self, collection: &str, key: RecordKey, record: Record) -> Result<()> {
        let mut collections = self.collections.lock().await;
        let open = collections
            .get_mut(collection)
            .ok_or_else(|| not_open(collection))?;
        let mut next = open.data.clone();
        next.put(key, record);
        self.persist(collection, open.key_field, &next).await?;
        open.data = next;
        Ok(())
    }

    async fn remove(&self, collection: &str, key: &RecordKey) -> Result<bool> {
        let mut collections = self.collections.lock().await;
        let open = collections
            .get_mut(collection)
            .ok_or_else(|| not_open(collection))?;
        if !open.data.records.contains_key(key) {
            return Ok(false);
        }
        let mut next = open.data.clone();
        next.remove(key);
        self.persist(collection, open.key_field, &next).await?;
        open.data = next;
        Ok(true)
    }

    async fn scan(&self, collection: &str) -> Result<Vec<Record>> {
        let collections = self.collections.lock().await;
        let open = collections.get(collection).ok_or_else(|| not_open(collection))?;
        Ok(open.data.records.values().cloned().collect())
    }

    async fn count(&self, collection: &str) -> Result<usize> {
        let collections = self.collections.lock().await;
        let open = collections.get(collection).ok_or_else(|| not_open(collection))?;
        Ok(open.data.records.len())
    }

    async fn clear(&self, collection: &str) -> Result<()> {
        let mut collections = self.collections.lock().await;
        let open = collections
            .get_mut(collection)
            .ok_or_else(|| not_open(collection))?;
        let next = CollectionData {
            last_key: open.data.last_key,
            records: Default::default(),
        };
        self.persist(collection, open.key_field, &next).await?;
        open.data = next;
        Ok(())
    }

    async fn allocate_key(&self, collection: &str) -> Result<u64> {
        let mut collections = self.collections.lock().await;
        let open = collections
            .get_mut(collection)
            .ok_or_else(|| not_open(collection))?;
        Ok(open.data.allocate_key())
    }

    async fn observe_key(&self, collection: &str, key: u64) -> Result<()> {
        let mut collections = self.collections.lock().await;
        let open = collections
            .get_mut(collection)
            .ok_or_else(|| not_open(collection))?;
        open.data.observe_key(key);
        Ok(())
    }
}
