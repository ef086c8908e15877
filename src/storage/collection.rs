use indexmap::IndexMap;
#[cfg(feature = "file")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "file")]
use crate::error::{Result, StoreError};
use crate::record::{Record, RecordKey};

/// Records of one collection plus its key generator state.
#[derive(Debug, Clone, Default)]
pub(crate) struct CollectionData {
    pub last_key: u64,
    pub records: IndexMap<RecordKey, Record>,
}

/// On-disk shape of a collection: keys are recovered from `key_field`.
#[cfg(feature = "file")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CollectionFile {
    key_field: String,
    last_key: u64,
    records: Vec<Record>,
}

impl CollectionData {
    pub fn put(&mut self, key: RecordKey, record: Record) {
        // IndexMap::insert keeps the slot of an existing key.
        self.records.insert(key, record);
    }

    pub fn remove(&mut self, key: &RecordKey) -> bool {
        self.records.shift_remove(key).is_some()
    }

    pub fn allocate_key(&mut self) -> u64 {
        self.last_key += 1;
        self.last_key
    }

    pub fn observe_key(&mut self, key: u64) {
        if key > self.last_key {
            self.last_key = key;
        }
    }
}

#[cfg(feature = "file")]
impl CollectionData {
    pub fn to_json(&self, key_field: &str) -> Result<Vec<u8>> {
        let file = CollectionFile {
            key_field: key_field.to_string(),
            last_key: self.last_key,
            records: self.records.values().cloned().collect(),
        };
        Ok(serde_json::to_vec_pretty(&file)?)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let file: CollectionFile = serde_json::from_slice(bytes)?;
        let mut data = CollectionData {
            last_key: file.last_key,
            records: IndexMap::with_capacity(file.records.len()),
        };
        for record in file.records {
            let key = record
                .get(&file.key_field)
                .and_then(RecordKey::from_value)
                .ok_or_else(|| {
                    StoreError::Storage(format!(
                        "stored record is missing key field '{}'",
                        file.key_field
                    ))
                })?;
            if let Some(n) = key.as_int() {
                data.observe_key(n);
            }
            data.records.insert(key, record);
        }
        Ok(data)
    }
}
