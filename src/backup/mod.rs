//! Backup/Restore - whole-store export and import.
//!
//! A [`Snapshot`] is the `{timestamp, version, data}` document written to
//! and read from backup files. [`backup`] only reads; [`restore`] validates
//! first, then clears every declared collection and recreates the
//! snapshot's records. A failure while recreating leaves the collections
//! handled so far restored and the rest empty. Nothing is rolled back.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::clock;
use crate::error::{Result, StoreError};
use crate::record::Record;
use crate::store::RecordStore;

/// Point-in-time export of every declared collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub timestamp: String,
    pub version: u32,
    pub data: IndexMap<String, Vec<Record>>,
}

impl Snapshot {
    /// Parse a backup document, rejecting anything that is not
    /// `{version: positive integer, data: {name: [object, ...]}}`.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| StoreError::InvalidFormat(format!("not a JSON document: {}", e)))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut doc) = value else {
            return Err(StoreError::InvalidFormat(
                "backup must be a JSON object".into(),
            ));
        };

        let version = doc
            .get("version")
            .and_then(Value::as_u64)
            .filter(|v| *v > 0)
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| {
                StoreError::InvalidFormat("'version' must be a positive integer".into())
            })?;

        let timestamp = match doc.remove("timestamp") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s,
            Some(_) => {
                return Err(StoreError::InvalidFormat(
                    "'timestamp' must be a string".into(),
                ))
            }
        };

        let Some(Value::Object(collections)) = doc.remove("data") else {
            return Err(StoreError::InvalidFormat(
                "'data' must map collection names to record arrays".into(),
            ));
        };

        let mut data = IndexMap::with_capacity(collections.len());
        for (name, records) in collections {
            let Value::Array(items) = records else {
                return Err(StoreError::InvalidFormat(format!(
                    "'data.{}' must be an array",
                    name
                )));
            };
            let mut parsed = Vec::with_capacity(items.len());
            for (i, item) in items.into_iter().enumerate() {
                match item {
                    Value::Object(record) => parsed.push(record),
                    _ => {
                        return Err(StoreError::InvalidFormat(format!(
                            "'data.{}[{}]' must be an object",
                            name, i
                        )))
                    }
                }
            }
            data.insert(name, parsed);
        }

        Ok(Self {
            timestamp,
            version,
            data,
        })
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn record_count(&self) -> usize {
        self.data.values().map(Vec::len).sum()
    }
}

/// Outcome of a [`restore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoreReport {
    /// Records recreated per declared collection, in schema order.
    pub restored: IndexMap<String, usize>,
    /// Snapshot collections absent from the schema.
    pub skipped: Vec<String>,
}

impl RestoreReport {
    pub fn total(&self) -> usize {
        self.restored.values().sum()
    }
}

/// `<prefix>_backup_<YYYY-MM-DD>.json` for today's date.
pub fn backup_file_name(prefix: &str) -> String {
    format!("{}_backup_{}.json", prefix, clock::today())
}

/// Export every declared collection of `store`.
pub async fn backup(store: &RecordStore, version: u32) -> Result<Snapshot> {
    let mut data = IndexMap::new();
    for name in store.schema().names() {
        data.insert(name.to_string(), store.query_all(name).await?);
    }
    let snapshot = Snapshot {
        timestamp: clock::now_iso(),
        version,
        data,
    };
    info!(
        "Backup created: {} records across {} collections",
        snapshot.record_count(),
        snapshot.data.len()
    );
    Ok(snapshot)
}

/// Replace the contents of `store` with `snapshot`.
///
/// Auto-increment keys are reassigned; natural keys are kept.
pub async fn restore(store: &RecordStore, snapshot: &Snapshot) -> Result<RestoreReport> {
    if snapshot.version == 0 {
        return Err(StoreError::InvalidFormat(
            "'version' must be a positive integer".into(),
        ));
    }

    let schema = store.schema();
    for name in schema.names() {
        store.clear(name).await?;
    }

    let mut report = RestoreReport::default();
    for collection in schema.collections() {
        let records = snapshot.data.get(collection.name).map(Vec::as_slice).unwrap_or(&[]);
        for record in records {
            let record: Record = if collection.key.is_auto_increment() {
                record
                    .iter()
                    .filter(|(field, _)| field.as_str() != collection.key_field())
                    .map(|(field, value)| (field.clone(), value.clone()))
                    .collect()
            } else {
                record.clone()
            };
            store.create(collection.name, record).await?;
        }
        debug!("Restored {} records into {}", records.len(), collection.name);
        report
            .restored
            .insert(collection.name.to_string(), records.len());
    }

    for name in snapshot.data.keys() {
        if !schema.contains(name) {
            warn!("Skipping unknown collection '{}' in backup", name);
            report.skipped.push(name.clone());
        }
    }

    info!(
        "Restore complete: {} records, {} collections skipped",
        report.total(),
        report.skipped.len()
    );
    Ok(report)
}
