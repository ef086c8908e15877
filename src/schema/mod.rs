//! Schema - declared collections, their key strategy and indexed fields.
//!
//! A schema is a static table: every collection the store may touch is
//! declared up front, with its key field and the fields that filters are
//! expected to use. Unique indexes are enforced by the record store;
//! non-unique ones are informational.

mod booster;

pub use booster::BOOSTER_COLLECTIONS;

use crate::error::{Result, StoreError};

/// How a collection's records are keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStrategy {
    /// Store-generated sequential integer written to `field`.
    AutoIncrement { field: &'static str },
    /// Caller-supplied key read from `field`.
    Natural { field: &'static str },
}

impl KeyStrategy {
    pub fn field(&self) -> &'static str {
        match self {
            KeyStrategy::AutoIncrement { field } | KeyStrategy::Natural { field } => field,
        }
    }

    pub fn is_auto_increment(&self) -> bool {
        matches!(self, KeyStrategy::AutoIncrement { .. })
    }
}

/// A declared searchable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexSpec {
    pub field: &'static str,
    pub unique: bool,
}

/// Declaration of one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionSchema {
    pub name: &'static str,
    pub key: KeyStrategy,
    pub indexes: &'static [IndexSpec],
}

impl CollectionSchema {
    /// Auto-increment collection keyed by `id`.
    pub const fn auto(name: &'static str, indexes: &'static [IndexSpec]) -> Self {
        Self {
            name,
            key: KeyStrategy::AutoIncrement { field: "id" },
            indexes,
        }
    }

    /// Natural-key collection keyed by `field`.
    pub const fn natural(
        name: &'static str,
        field: &'static str,
        indexes: &'static [IndexSpec],
    ) -> Self {
        Self {
            name,
            key: KeyStrategy::Natural { field },
            indexes,
        }
    }

    pub fn key_field(&self) -> &'static str {
        self.key.field()
    }

    pub fn unique_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.indexes.iter().filter(|i| i.unique).map(|i| i.field)
    }

    pub fn is_indexed(&self, field: &str) -> bool {
        field == self.key_field() || self.indexes.iter().any(|i| i.field == field)
    }
}

/// The full set of declared collections, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    collections: Vec<CollectionSchema>,
}

impl Schema {
    pub fn new(collections: impl IntoIterator<Item = CollectionSchema>) -> Self {
        Self {
            collections: collections.into_iter().collect(),
        }
    }

    /// The booster-club association schema.
    pub fn booster() -> Self {
        Self::new(BOOSTER_COLLECTIONS.iter().copied())
    }

    pub fn collection(&self, name: &str) -> Result<&CollectionSchema> {
        self.collections
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| StoreError::UnknownCollection(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.collections.iter().any(|c| c.name == name)
    }

    pub fn collections(&self) -> &[CollectionSchema] {
        &self.collections
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.collections.iter().map(|c| c.name)
    }
}
