//! Query engine - in-memory filter, sort and limit over a collection's records.
//!
//! A [`Query`] is evaluated against the full record set of a collection:
//! records are kept when they satisfy every filter term (logical AND), then
//! stably sorted on one field, then truncated to the limit.
//!
//! Missing, `null` or wrong-typed field values never satisfy a term. In a
//! sort they are placed after every comparable value, in both directions.
//!
//! ## Example
//!
//! ```ignore
//! use booster_store::query::{Filter, Operator, Query, Sort};
//! use serde_json::json;
//!
//! let query = Query::new()
//!     .filter(Filter::new().eq("tier", json!("gold")).with("amount", Operator::Gte, json!(20)))
//!     .sort(Sort::desc("amount"))
//!     .limit(10);
//! let hits = store.query("donations", &query).await?;
//! ```

mod eval;

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, StoreError};
use crate::record::Record;

pub use eval::compare_values;

/// Comparison applied by a filter term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Implicit when a filter gives a bare literal.
    Eq,
    /// Case-insensitive substring match on strings.
    Contains,
    /// Case-insensitive prefix match on strings.
    StartsWith,
    /// Case-insensitive suffix match on strings.
    EndsWith,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::Contains => "contains",
            Operator::StartsWith => "startsWith",
            Operator::EndsWith => "endsWith",
            Operator::Gt => "gt",
            Operator::Gte => "gte",
            Operator::Lt => "lt",
            Operator::Lte => "lte",
        }
    }
}

impl FromStr for Operator {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "eq" => Ok(Operator::Eq),
            "contains" => Ok(Operator::Contains),
            "startsWith" => Ok(Operator::StartsWith),
            "endsWith" => Ok(Operator::EndsWith),
            "gt" => Ok(Operator::Gt),
            "gte" => Ok(Operator::Gte),
            "lt" => Ok(Operator::Lt),
            "lte" => Ok(Operator::Lte),
            other => Err(StoreError::InvalidQuery(format!(
                "unknown operator '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One operator applied to one operand.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub operator: Operator,
    pub value: Value,
}

impl Condition {
    pub fn new(operator: Operator, value: Value) -> Self {
        Self { operator, value }
    }

    pub fn eq(value: Value) -> Self {
        Self::new(Operator::Eq, value)
    }

    /// Whether `actual` (the record's field value, if present) satisfies this condition.
    pub fn matches(&self, actual: Option<&Value>) -> bool {
        actual.is_some_and(|v| eval::satisfies(v, self))
    }
}

/// Ordered list of `(field, condition)` terms, all of which must hold.
///
/// A field may appear more than once (e.g. `gte` and `lte` for a range).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    terms: Vec<(String, Condition)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an equality term.
    pub fn eq(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with(field, Operator::Eq, value)
    }

    /// Add a term with an explicit operator.
    pub fn with(
        mut self,
        field: impl Into<String>,
        operator: Operator,
        value: impl Into<Value>,
    ) -> Self {
        self.push(field, Condition::new(operator, value.into()));
        self
    }

    pub fn push(&mut self, field: impl Into<String>, condition: Condition) {
        self.terms.push((field.into(), condition));
    }

    pub fn terms(&self) -> &[(String, Condition)] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.terms
            .iter()
            .all(|(field, condition)| condition.matches(record.get(field)))
    }

    /// Parse the `{field: literal | {operator, value}}` mapping form.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self> {
        let mut filter = Filter::new();
        for (field, spec) in map {
            let condition = match spec {
                Value::Object(obj) if obj.contains_key("operator") => {
                    let operator = obj
                        .get("operator")
                        .and_then(Value::as_str)
                        .ok_or_else(|| {
                            StoreError::InvalidQuery(format!(
                                "operator for '{}' must be a string",
                                field
                            ))
                        })?
                        .parse::<Operator>()?;
                    let value = obj.get("value").cloned().ok_or_else(|| {
                        StoreError::InvalidQuery(format!("missing value for '{}'", field))
                    })?;
                    Condition::new(operator, value)
                }
                literal => Condition::eq(literal.clone()),
            };
            filter.push(field.clone(), condition);
        }
        Ok(filter)
    }

    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Object(map) => Self::from_map(map),
            Value::Null => Ok(Filter::new()),
            _ => Err(StoreError::InvalidQuery(
                "filters must be a mapping".to_string(),
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Filter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Filter::from_json(&value).map_err(de::Error::custom)
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

/// Single-field sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub field: String,
    #[serde(default)]
    pub direction: Direction,
}

impl Sort {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Desc,
        }
    }
}

/// Filter + optional sort + optional limit.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Query {
    #[serde(default, alias = "filter")]
    pub filters: Filter,
    #[serde(default)]
    pub sort: Option<Sort>,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters = filter;
        self
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Apply filter, then a stable sort, then the limit.
    pub fn apply(&self, records: Vec<Record>) -> Vec<Record> {
        let mut results: Vec<Record> = if self.filters.is_empty() {
            records
        } else {
            records
                .into_iter()
                .filter(|r| self.filters.matches(r))
                .collect()
        };

        if let Some(sort) = &self.sort {
            // slice::sort_by is stable
            results.sort_by(|a, b| eval::sort_order(a, b, sort));
        }

        if let Some(limit) = self.limit {
            results.truncate(limit);
        }

        results
    }
}

impl From<Filter> for Query {
    fn from(filter: Filter) -> Self {
        Query::new().filter(filter)
    }
}
