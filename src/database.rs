//! Database - the application-level handle.
//!
//! Opens the configured backend with the booster-club schema, optionally
//! seeds sample data, and hands out model facades. Construct one at
//! startup and pass it (or its [`RecordStore`]) to whatever needs data
//! access.

#[cfg(feature = "file")]
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{info, warn};

use crate::backup::{self, RestoreReport, Snapshot};
use crate::config::{DatabaseConfig, StorageConfig};
use crate::error::Result;
use crate::model::{EntitySpec, Model, ModelsExt};
use crate::schema::Schema;
use crate::seed;
use crate::storage::{InMemoryBackend, StorageBackend};
use crate::store::RecordStore;

pub struct Database {
    config: DatabaseConfig,
    store: RecordStore,
}

impl Database {
    /// Open the database described by `config`.
    ///
    /// Fails with [`StoreUnavailable`](crate::StoreError::StoreUnavailable)
    /// if the backend cannot be opened. A failure while seeding sample data
    /// is logged, not returned.
    pub async fn open(config: DatabaseConfig) -> Result<Self> {
        let backend = backend_for(&config.storage)?;
        let store = RecordStore::open(backend, Schema::booster())
            .await?
            .with_sanitize(config.sanitize_input);
        info!("Database {} v{} ready", config.name, config.version);

        let db = Self { config, store };
        if db.config.seed_sample_data {
            if let Err(e) = seed::load_sample_data(&db.store).await {
                warn!("Failed to load sample data: {}", e);
            }
        }
        Ok(db)
    }

    /// Open an empty in-memory database with default settings.
    pub async fn in_memory() -> Result<Self> {
        Self::open(DatabaseConfig::in_memory()).await
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn model(&self, spec: &'static EntitySpec) -> Model<'_> {
        self.store.model(spec)
    }

    pub fn model_for(&self, collection: &str) -> Result<Model<'_>> {
        self.store.model_for(collection)
    }

    pub async fn stats(&self) -> Result<IndexMap<String, usize>> {
        self.store.stats().await
    }

    pub async fn load_sample_data(&self) -> Result<IndexMap<String, usize>> {
        seed::load_sample_data(&self.store).await
    }

    /// Snapshot every collection, stamped with the configured version.
    pub async fn backup(&self) -> Result<Snapshot> {
        backup::backup(&self.store, self.config.version).await
    }

    pub async fn restore(&self, snapshot: &Snapshot) -> Result<RestoreReport> {
        backup::restore(&self.store, snapshot).await
    }

    /// Write a backup into `dir` as `<prefix>_backup_<YYYY-MM-DD>.json`.
    ///
    /// An existing backup with the same name is replaced.
    #[cfg(feature = "file")]
    pub async fn backup_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        let snapshot = self.backup().await?;
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(backup::backup_file_name(&self.config.backup_prefix));
        tokio::fs::write(&path, snapshot.to_json_pretty()?).await?;
        info!("Backup written to {:?}", path);
        Ok(path)
    }

    #[cfg(feature = "file")]
    pub async fn restore_from_file(&self, path: &Path) -> Result<RestoreReport> {
        let text = tokio::fs::read_to_string(path).await?;
        let snapshot = Snapshot::from_json(&text)?;
        info!("Restoring from {:?}", path);
        self.restore(&snapshot).await
    }
}

fn backend_for(storage: &StorageConfig) -> Result<Arc<dyn StorageBackend>> {
    match storage {
        StorageConfig::Memory => Ok(Arc::new(InMemoryBackend::new())),
        #[cfg(feature = "file")]
        StorageConfig::File { path } => Ok(Arc::new(crate::storage::FileBackend::new(path.clone()))),
        #[cfg(not(feature = "file"))]
        StorageConfig::File { .. } => Err(crate::error::StoreError::StoreUnavailable(
            "file storage requires the `file` feature".into(),
        )),
    }
}
