//! Data access layer for a booster-club association.
//!
//! Records live in named collections declared by a [`Schema`]. The
//! [`RecordStore`] provides keyed CRUD and in-memory filter/sort/limit
//! queries over a pluggable [`StorageBackend`]; [`Model`] adds per-entity
//! defaults and named queries; [`backup`] exports and restores the whole
//! store; [`Database`] wires it all together from a [`DatabaseConfig`].

pub mod backup;
pub mod clock;
pub mod config;
mod database;
mod error;
pub mod model;
pub mod query;
pub mod record;
pub mod sanitize;
pub mod schema;
pub mod seed;
pub mod storage;
mod store;

pub use backup::{RestoreReport, Snapshot};
pub use config::{DatabaseConfig, StorageConfig};
pub use database::Database;
pub use error::{Result, StoreError};
pub use model::{entities, EntitySpec, Model, ModelsExt, QueryArgs};
pub use query::{Condition, Direction, Filter, Operator, Query, Sort};
pub use record::{Record, RecordKey};
pub use schema::{CollectionSchema, IndexSpec, KeyStrategy, Schema};
#[cfg(feature = "file")]
pub use storage::FileBackend;
pub use storage::{InMemoryBackend, StorageBackend};
pub use store::RecordStore;
