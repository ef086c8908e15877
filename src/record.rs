//! Records and record keys.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One persisted entity: an insertion-ordered mapping from field name to value.
pub type Record = Map<String, Value>;

/// Key of a record within its collection.
///
/// Auto-increment collections use `Int`; natural-key collections (e.g.
/// `settings`) use whatever scalar the caller supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordKey {
    Int(u64),
    Text(String),
}

impl RecordKey {
    /// Read a key out of a JSON value. Only non-negative integers and strings qualify.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_u64().map(RecordKey::Int),
            Value::String(s) => Some(RecordKey::Text(s.clone())),
            _ => None,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            RecordKey::Int(n) => Value::from(*n),
            RecordKey::Text(s) => Value::String(s.clone()),
        }
    }

    pub fn as_int(&self) -> Option<u64> {
        match self {
            RecordKey::Int(n) => Some(*n),
            RecordKey::Text(_) => None,
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKey::Int(n) => write!(f, "{}", n),
            RecordKey::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for RecordKey {
    fn from(n: u64) -> Self {
        RecordKey::Int(n)
    }
}

impl From<&str> for RecordKey {
    fn from(s: &str) -> Self {
        RecordKey::Text(s.to_string())
    }
}

impl From<String> for RecordKey {
    fn from(s: String) -> Self {
        RecordKey::Text(s)
    }
}

/// Convert a `serde_json::json!({...})` literal into a record.
///
/// Non-object values yield an empty record.
pub fn record_from(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Human-readable form of a value: strings unquoted, everything else as JSON.
pub(crate) fn value_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Shallow merge: top-level fields of `partial` replace those of `base`.
pub fn merge(base: &mut Record, partial: Record) {
    for (field, value) in partial {
        base.insert(field, value);
    }
}
