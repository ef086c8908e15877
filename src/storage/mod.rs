//! Storage backends - key-value persistence per named collection.
//!
//! The record store speaks to persistence only through [`StorageBackend`].
//! Every record mutation has been persisted by the time its future resolves;
//! there is no write-behind. A mutation that fails leaves the collection as
//! it was. Backends keep each collection's records in insertion order and
//! own the collection's key generator, whose state is saved alongside the
//! records.
//!
//! - [`InMemoryBackend`]: process-local, for tests and ephemeral use.
//! - [`FileBackend`]: one JSON document per collection (feature `file`).

mod collection;
#[cfg(feature = "file")]
mod file;
mod in_memory;

use async_trait::async_trait;

use crate::error::Result;
use crate::record::{Record, RecordKey};
use crate::schema::Schema;

pub(crate) use collection::CollectionData;
#[cfg(feature = "file")]
pub use file::FileBackend;
pub use in_memory::InMemoryBackend;

/// Abstract persistence for keyed records grouped into collections.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Prepare storage for every collection in `schema`. Existing data is kept.
    async fn open(&self, schema: &Schema) -> Result<()>;

    /// Point lookup. Returns `None` if the key is absent.
    async fn get(&self, collection: &str, key: &RecordKey) -> Result<Option<Record>>;

    /// Insert or overwrite the record at `key`. An overwrite keeps the
    /// record's original position in the collection.
    async fn put(&self, collection: &str, key: RecordKey, record: Record) -> Result<()>;

    /// Delete the record at `key`. Returns true if it existed.
    async fn remove(&self, collection: &str, key: &RecordKey) -> Result<bool>;

    /// Every record in the collection, in insertion order.
    async fn scan(&self, collection: &str) -> Result<Vec<Record>>;

    async fn count(&self, collection: &str) -> Result<usize>;

    /// Delete every record. The key generator is left untouched.
    async fn clear(&self, collection: &str) -> Result<()>;

    /// Hand out the next sequential key. Within one process a key is never
    /// handed out twice.
    async fn allocate_key(&self, collection: &str) -> Result<u64>;

    /// Advance the key generator so it never hands out `key` or anything below it.
    async fn observe_key(&self, collection: &str, key: u64) -> Result<()>;
}
