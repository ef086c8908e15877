use thiserror::Error;

/// Error type for record store, query, model and backup operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record exists at the addressed key.
    #[error("record not found: {collection}:{key}")]
    NotFound { collection: String, key: String },

    /// A key or unique field value is already taken in the collection.
    #[error("duplicate value for {collection}.{field}: {value}")]
    DuplicateKey {
        collection: String,
        field: String,
        value: String,
    },

    /// Malformed backup/restore input.
    #[error("invalid backup format: {0}")]
    InvalidFormat(String),

    /// The persistence layer failed to open or initialize.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// The collection is not declared in the schema.
    #[error("unknown collection: {0}")]
    UnknownCollection(String),

    /// The record cannot be stored as given (e.g. a natural key is missing).
    #[error("invalid record for {collection}: {reason}")]
    InvalidRecord { collection: String, reason: String },

    /// The filter, sort or named query cannot be evaluated.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serde(String),

    /// A read or write against the persistence layer failed.
    #[error("storage error: {0}")]
    Storage(String),
}

impl StoreError {
    pub(crate) fn not_found(collection: &str, key: impl ToString) -> Self {
        StoreError::NotFound {
            collection: collection.to_string(),
            key: key.to_string(),
        }
    }

    pub(crate) fn duplicate(collection: &str, field: &str, value: impl ToString) -> Self {
        StoreError::DuplicateKey {
            collection: collection.to_string(),
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub(crate) fn invalid_record(collection: &str, reason: impl Into<String>) -> Self {
        StoreError::InvalidRecord {
            collection: collection.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serde(err.to_string())
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
