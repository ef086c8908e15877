//! Models - one generic facade over the record store for every entity type.
//!
//! Each entity is a row in a table of [`EntitySpec`]s rather than a type of
//! its own: the spec names the collection, the default fields injected on
//! create, and the named queries the entity offers. [`Model`] interprets a
//! spec against a [`RecordStore`](crate::store::RecordStore).
//!
//! ## Example
//!
//! ```ignore
//! use booster_store::model::{entities, ModelsExt};
//! use booster_store::{args, record};
//!
//! let members = store.model(&entities::MEMBERS);
//! let id = members.create(record!({"name": "Ann", "tier": "gold"})).await?;
//! let gold = members.named("by_tier", &args!({"tier": "gold"})).await?;
//! ```

pub mod entities;
mod repository;

use serde_json::{Map, Value};

use crate::clock;
use crate::query::{Direction, Operator};

pub use repository::{Model, ModelsExt};

/// Arguments passed to a named query, by parameter name.
pub type QueryArgs = Map<String, Value>;

/// Value injected into a new record when the caller does not supply the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    /// Current ISO-8601 timestamp.
    Now,
    /// Current date, `YYYY-MM-DD`.
    Today,
    Text(&'static str),
    Flag(bool),
    /// `<prefix>_<millis>_<random>` identifier.
    GeneratedId(&'static str),
}

impl FieldDefault {
    pub fn resolve(&self) -> Value {
        match self {
            FieldDefault::Now => Value::String(clock::now_iso()),
            FieldDefault::Today => Value::String(clock::today()),
            FieldDefault::Text(s) => Value::String((*s).to_string()),
            FieldDefault::Flag(b) => Value::Bool(*b),
            FieldDefault::GeneratedId(prefix) => Value::String(clock::generate_id(prefix)),
        }
    }
}

/// A constant operand in a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal {
    Text(&'static str),
    Int(i64),
    Flag(bool),
}

impl Literal {
    pub fn to_value(&self) -> Value {
        match self {
            Literal::Text(s) => Value::String((*s).to_string()),
            Literal::Int(n) => Value::from(*n),
            Literal::Flag(b) => Value::Bool(*b),
        }
    }
}

/// Where a query term takes its operand from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryArg {
    /// Required call argument.
    Param(&'static str),
    /// Optional call argument with a fallback.
    ParamOr(&'static str, Literal),
    Fixed(Literal),
    /// Today's date, `YYYY-MM-DD`.
    Today,
    /// Timestamp `days` from now, where `days` comes from `param` or `default`.
    DaysFromNow { param: &'static str, default: i64 },
}

/// One `field operator operand` term of a named query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTerm {
    pub field: &'static str,
    pub operator: Operator,
    pub arg: QueryArg,
}

/// Result limit of a named query, overridable through `param`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitArg {
    pub param: &'static str,
    pub default: usize,
}

/// A fixed filter/sort/limit shape with a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedQuery {
    pub name: &'static str,
    pub terms: &'static [QueryTerm],
    pub sort: Option<(&'static str, Direction)>,
    pub limit: Option<LimitArg>,
}

/// Declaration of one entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySpec {
    pub collection: &'static str,
    pub defaults: &'static [(&'static str, FieldDefault)],
    pub queries: &'static [NamedQuery],
}

impl EntitySpec {
    pub fn query(&self, name: &str) -> Option<&'static NamedQuery> {
        self.queries.iter().find(|q| q.name == name)
    }
}

/// Build a [`Record`](crate::record::Record) from a JSON object literal.
#[macro_export]
macro_rules! record {
    ($($json:tt)+) => {
        $crate::record::record_from(::serde_json::json!($($json)+))
    };
}

/// Build [`QueryArgs`] from a JSON object literal.
#[macro_export]
macro_rules! args {
    ($($json:tt)+) => {
        $crate::record::record_from(::serde_json::json!($($json)+))
    };
}
