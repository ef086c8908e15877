//! RecordStore - CRUD over declared collections on top of a storage backend.
//!
//! The store validates collection names against the schema, assigns keys,
//! enforces unique indexes, sanitizes input and merges partial updates. It
//! holds no ambient state: construct one at startup and hand it (or a
//! clone) to every model facade.
//!
//! Updates read then write without a lock, so two concurrent updates of
//! the same key race and the last writer wins.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::error::{Result, StoreError};
use crate::query::{compare_values, Query};
use crate::record::{merge, value_label, Record, RecordKey};
use crate::sanitize::sanitize_record;
use crate::schema::{CollectionSchema, KeyStrategy, Schema};
use crate::storage::{InMemoryBackend, StorageBackend};

/// Handle to an opened store. Clone-friendly: clones share the backend.
#[derive(Clone)]
pub struct RecordStore {
    backend: Arc<dyn StorageBackend>,
    schema: Arc<Schema>,
    sanitize: bool,
}

impl RecordStore {
    /// Open `backend` for every collection in `schema`.
    ///
    /// Any failure here is reported as [`StoreError::StoreUnavailable`].
    pub async fn open(backend: Arc<dyn StorageBackend>, schema: Schema) -> Result<Self> {
        backend.open(&schema).await.map_err(|e| match e {
            StoreError::StoreUnavailable(_) => e,
            other => StoreError::StoreUnavailable(other.to_string()),
        })?;
        info!(
            "Record store opened with {} collections",
            schema.collections().len()
        );
        Ok(Self {
            backend,
            schema: Arc::new(schema),
            sanitize: true,
        })
    }

    /// Open a fresh in-memory store.
    pub async fn in_memory(schema: Schema) -> Result<Self> {
        Self::open(Arc::new(InMemoryBackend::new()), schema).await
    }

    /// Enable or disable markup stripping on create/update (default: enabled).
    pub fn with_sanitize(mut self, sanitize: bool) -> Self {
        self.sanitize = sanitize;
        self
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Insert a new record and return its key.
    ///
    /// Auto-increment collections assign the next sequential key when the
    /// record has none. A caller-supplied key that already exists fails with
    /// [`StoreError::DuplicateKey`], as does a clash on a unique index.
    pub async fn create(&self, collection: &str, record: Record) -> Result<RecordKey> {
        let schema = self.schema.collection(collection)?;
        let mut record = self.prepare(record);
        let key_field = schema.key_field();

        let supplied = match record.get(key_field) {
            None | Some(serde_json::Value::Null) => None,
            Some(value) => Some(RecordKey::from_value(value).ok_or_else(|| {
                StoreError::invalid_record(
                    collection,
                    format!("'{}' must be a non-negative integer or a string", key_field),
                )
            })?),
        };

        let key = match (supplied, schema.key) {
            (Some(key), strategy) => {
                if self.backend.get(collection, &key).await?.is_some() {
                    return Err(StoreError::duplicate(collection, key_field, &key));
                }
                self.check_unique(schema, &record, None).await?;
                if let (KeyStrategy::AutoIncrement { .. }, Some(n)) = (strategy, key.as_int()) {
                    self.backend.observe_key(collection, n).await?;
                }
                key
            }
            (None, KeyStrategy::AutoIncrement { .. }) => {
                self.check_unique(schema, &record, None).await?;
                RecordKey::Int(self.backend.allocate_key(collection).await?)
            }
            (None, KeyStrategy::Natural { field }) => {
                return Err(StoreError::invalid_record(
                    collection,
                    format!("missing key field '{}'", field),
                ));
            }
        };

        record.insert(key_field.to_string(), key.to_value());
        self.backend.put(collection, key.clone(), record).await?;
        debug!("Created {}:{}", collection, key);
        Ok(key)
    }

    /// Point lookup. An absent key is `Ok(None)`, not an error.
    pub async fn read(&self, collection: &str, key: &RecordKey) -> Result<Option<Record>> {
        self.schema.collection(collection)?;
        self.backend.get(collection, key).await
    }

    /// Shallow-merge `partial` into the record at `key`.
    ///
    /// Fails with [`StoreError::NotFound`] if the key is absent. The key
    /// field itself cannot be changed through `partial`.
    pub async fn update(
        &self,
        collection: &str,
        key: &RecordKey,
        partial: Record,
    ) -> Result<RecordKey> {
        let schema = self.schema.collection(collection)?;
        let partial = self.prepare(partial);

        let mut record = self
            .backend
            .get(collection, key)
            .await?
            .ok_or_else(|| StoreError::not_found(collection, key))?;
        merge(&mut record, partial);
        record.insert(schema.key_field().to_string(), key.to_value());

        self.check_unique(schema, &record, Some(key)).await?;
        self.backend.put(collection, key.clone(), record).await?;
        debug!("Updated {}:{}", collection, key);
        Ok(key.clone())
    }

    /// Delete the record at `key`. Returns false (not an error) if it was absent.
    pub async fn delete(&self, collection: &str, key: &RecordKey) -> Result<bool> {
        self.schema.collection(collection)?;
        let existed = self.backend.remove(collection, key).await?;
        debug!("Deleted {}:{} (existed: {})", collection, key, existed);
        Ok(existed)
    }

    /// Every record in the collection, in insertion order.
    pub async fn query_all(&self, collection: &str) -> Result<Vec<Record>> {
        self.schema.collection(collection)?;
        self.backend.scan(collection).await
    }

    /// Filter, sort and limit the collection's records in memory.
    pub async fn query(&self, collection: &str, query: &Query) -> Result<Vec<Record>> {
        let records = self.query_all(collection).await?;
        let results = query.apply(records);
        debug!("Query on {} returned {} records", collection, results.len());
        Ok(results)
    }

    pub async fn count(&self, collection: &str) -> Result<usize> {
        self.schema.collection(collection)?;
        self.backend.count(collection).await
    }

    /// Delete every record of the collection. Keys are still not reused.
    pub async fn clear(&self, collection: &str) -> Result<()> {
        self.schema.collection(collection)?;
        self.backend.clear(collection).await?;
        debug!("Cleared {}", collection);
        Ok(())
    }

    /// Record count per declared collection, in schema order.
    pub async fn stats(&self) -> Result<IndexMap<String, usize>> {
        let mut stats = IndexMap::new();
        for name in self.schema.names() {
            stats.insert(name.to_string(), self.backend.count(name).await?);
        }
        Ok(stats)
    }

    fn prepare(&self, record: Record) -> Record {
        if self.sanitize {
            sanitize_record(record)
        } else {
            record
        }
    }

    /// Reject `record` if another record (other than `exclude`) holds the same
    /// value in any unique field. Records without the field are unconstrained.
    async fn check_unique(
        &self,
        schema: &CollectionSchema,
        record: &Record,
        exclude: Option<&RecordKey>,
    ) -> Result<()> {
        let constrained: Vec<(&str, &serde_json::Value)> = schema
            .unique_fields()
            .filter_map(|field| match record.get(field) {
                None | Some(serde_json::Value::Null) => None,
                Some(value) => Some((field, value)),
            })
            .collect();
        if constrained.is_empty() {
            return Ok(());
        }

        let key_field = schema.key_field();
        for other in self.backend.scan(schema.name).await? {
            let other_key = other.get(key_field).and_then(RecordKey::from_value);
            if exclude.is_some() && other_key.as_ref() == exclude {
                continue;
            }
            for (field, value) in &constrained {
                let taken = other.get(*field).is_some_and(|v| {
                    v == *value || compare_values(v, value) == Some(std::cmp::Ordering::Equal)
                });
                if taken {
                    return Err(StoreError::duplicate(schema.name, field, value_label(value)));
                }
            }
        }
        Ok(())
    }
}
