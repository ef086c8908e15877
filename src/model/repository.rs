//! Model - entity-level accessor over a [`RecordStore`].

use serde_json::Value;
use tracing::debug;

use super::{entities, EntitySpec, LimitArg, NamedQuery, QueryArg, QueryArgs};
use crate::clock;
use crate::error::{Result, StoreError};
use crate::query::{Condition, Filter, Query, Sort};
use crate::record::{merge, Record, RecordKey};
use crate::store::RecordStore;

/// Facade for one entity type: defaults on create, `updatedAt` on update,
/// and the entity's named queries.
#[derive(Clone, Copy)]
pub struct Model<'a> {
    store: &'a RecordStore,
    spec: &'static EntitySpec,
}

impl<'a> Model<'a> {
    pub fn new(store: &'a RecordStore, spec: &'static EntitySpec) -> Self {
        Self { store, spec }
    }

    pub fn spec(&self) -> &'static EntitySpec {
        self.spec
    }

    pub fn collection(&self) -> &'static str {
        self.spec.collection
    }

    /// Insert `data` on top of the entity's defaults. Fields in `data` win.
    pub async fn create(&self, data: Record) -> Result<RecordKey> {
        let mut record = Record::new();
        for (field, default) in self.spec.defaults {
            record.insert((*field).to_string(), default.resolve());
        }
        merge(&mut record, data);
        self.store.create(self.spec.collection, record).await
    }

    /// Merge `data` into the record and stamp `updatedAt`.
    pub async fn update(&self, key: &RecordKey, mut data: Record) -> Result<RecordKey> {
        data.insert("updatedAt".to_string(), Value::String(clock::now_iso()));
        self.store.update(self.spec.collection, key, data).await
    }

    pub async fn get(&self, key: &RecordKey) -> Result<Option<Record>> {
        self.store.read(self.spec.collection, key).await
    }

    pub async fn delete(&self, key: &RecordKey) -> Result<bool> {
        self.store.delete(self.spec.collection, key).await
    }

    pub async fn all(&self) -> Result<Vec<Record>> {
        self.store.query_all(self.spec.collection).await
    }

    pub async fn find(&self, query: &Query) -> Result<Vec<Record>> {
        self.store.query(self.spec.collection, query).await
    }

    /// Run the named query `name` with `args`.
    pub async fn named(&self, name: &str, args: &QueryArgs) -> Result<Vec<Record>> {
        let query = self.build_query(name, args)?;
        self.find(&query).await
    }

    /// First result of the named query, if any.
    pub async fn first(&self, name: &str, args: &QueryArgs) -> Result<Option<Record>> {
        Ok(self.named(name, args).await?.into_iter().next())
    }

    /// Total of `field` over the records matching `filter`.
    ///
    /// Numeric strings are parsed; missing or unparseable values count as 0.
    pub async fn sum(&self, field: &str, filter: &Filter) -> Result<f64> {
        let records = self.find(&Query::from(filter.clone())).await?;
        let total = records
            .iter()
            .map(|record| record.get(field).and_then(numeric).unwrap_or(0.0))
            .sum();
        debug!(
            "Summed {}.{} over {} records",
            self.spec.collection,
            field,
            records.len()
        );
        Ok(total)
    }

    /// Resolve the named query `name` against `args` without running it.
    pub fn build_query(&self, name: &str, args: &QueryArgs) -> Result<Query> {
        let named = self.spec.query(name).ok_or_else(|| {
            StoreError::InvalidQuery(format!(
                "{} has no query named '{}'",
                self.spec.collection, name
            ))
        })?;

        let mut filter = Filter::new();
        for term in named.terms {
            let value = resolve_arg(named, &term.arg, args)?;
            filter.push(term.field, Condition::new(term.operator, value));
        }

        let mut query = Query::new().filter(filter);
        if let Some((field, direction)) = named.sort {
            query = query.sort(Sort {
                field: field.to_string(),
                direction,
            });
        }
        if let Some(limit) = named.limit {
            query = query.limit(resolve_limit(named, limit, args)?);
        }
        Ok(query)
    }
}

fn resolve_arg(named: &NamedQuery, arg: &QueryArg, args: &QueryArgs) -> Result<Value> {
    let value = match arg {
        QueryArg::Param(param) => args.get(*param).cloned().ok_or_else(|| {
            StoreError::InvalidQuery(format!(
                "query '{}' requires argument '{}'",
                named.name, param
            ))
        })?,
        QueryArg::ParamOr(param, fallback) => args
            .get(*param)
            .cloned()
            .unwrap_or_else(|| fallback.to_value()),
        QueryArg::Fixed(literal) => literal.to_value(),
        QueryArg::Today => Value::String(clock::today()),
        QueryArg::DaysFromNow { param, default } => {
            let days = match args.get(*param) {
                Some(v) => v.as_i64().ok_or_else(|| {
                    StoreError::InvalidQuery(format!(
                        "argument '{}' of query '{}' must be an integer",
                        param, named.name
                    ))
                })?,
                None => *default,
            };
            let at = clock::days_from_now(days).ok_or_else(|| {
                StoreError::InvalidQuery(format!(
                    "argument '{}' of query '{}' is out of range: {}",
                    param, named.name, days
                ))
            })?;
            Value::String(at)
        }
    };
    Ok(value)
}

fn resolve_limit(named: &NamedQuery, limit: LimitArg, args: &QueryArgs) -> Result<usize> {
    match args.get(limit.param) {
        None => Ok(limit.default),
        Some(v) => v.as_u64().map(|n| n as usize).ok_or_else(|| {
            StoreError::InvalidQuery(format!(
                "argument '{}' of query '{}' must be a non-negative integer",
                limit.param, named.name
            ))
        }),
    }
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Entity access on a [`RecordStore`].
pub trait ModelsExt {
    /// Facade for `spec`.
    fn model(&self, spec: &'static EntitySpec) -> Model<'_>;

    /// Facade for the entity stored in `collection`.
    fn model_for(&self, collection: &str) -> Result<Model<'_>>;
}

impl ModelsExt for RecordStore {
    fn model(&self, spec: &'static EntitySpec) -> Model<'_> {
        Model::new(self, spec)
    }

    fn model_for(&self, collection: &str) -> Result<Model<'_>> {
        entities::find(collection)
            .map(|spec| Model::new(self, spec))
            .ok_or_else(|| StoreError::UnknownCollection(collection.to_string()))
    }
}
