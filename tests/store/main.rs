//! Integration tests for RecordStore CRUD and queries.

use booster_store::{
    record, Direction, Filter, Operator, Query, Record, RecordKey, RecordStore, Schema, Sort,
    StoreError,
};
use serde_json::{json, Value};

async fn open() -> RecordStore {
    RecordStore::in_memory(Schema::booster()).await.unwrap()
}

fn amounts(records: &[Record]) -> Vec<i64> {
    records
        .iter()
        .map(|r| r["amount"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn create_then_read_returns_record_plus_key() {
    let store = open().await;
    let input = record!({"name": "John Smith", "tier": "gold", "amount": 25});

    let key = store.create("members", input.clone()).await.unwrap();
    let stored = store.read("members", &key).await.unwrap().unwrap();

    let mut expected = input;
    expected.insert("id".into(), key.to_value());
    assert_eq!(stored, expected);
}

#[tokio::test]
async fn auto_increment_keys_are_sequential_and_not_reused() {
    let store = open().await;
    let a = store.create("donations", record!({"amount": 1})).await.unwrap();
    let b = store.create("donations", record!({"amount": 2})).await.unwrap();
    assert_eq!((a.clone(), b.clone()), (RecordKey::Int(1), RecordKey::Int(2)));

    store.delete("donations", &b).await.unwrap();
    let c = store.create("donations", record!({"amount": 3})).await.unwrap();
    assert_eq!(c, RecordKey::Int(3));
}

#[tokio::test]
async fn absent_key_reads_none_and_update_fails() {
    let store = open().await;
    let missing = RecordKey::Int(42);

    assert_eq!(store.read("members", &missing).await.unwrap(), None);
    let err = store
        .update("members", &missing, record!({"tier": "gold"}))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
}

#[tokio::test]
async fn delete_is_idempotent() {
    let store = open().await;
    let key = store.create("members", record!({"name": "A"})).await.unwrap();

    assert!(store.delete("members", &key).await.unwrap());
    assert!(!store.delete("members", &key).await.unwrap());
    assert_eq!(store.read("members", &key).await.unwrap(), None);
}

#[tokio::test]
async fn update_merges_shallowly() {
    let store = open().await;
    let key = store
        .create("members", record!({"name": "A", "tier": "gold"}))
        .await
        .unwrap();

    store
        .update("members", &key, record!({"tier": "silver"}))
        .await
        .unwrap();

    let stored = store.read("members", &key).await.unwrap().unwrap();
    assert_eq!(
        Value::Object(stored),
        json!({"name": "A", "tier": "silver", "id": 1})
    );
}

#[tokio::test]
async fn unique_index_rejects_duplicates_on_create_and_update() {
    let store = open().await;
    store
        .create("members", record!({"email": "a@x.org"}))
        .await
        .unwrap();
    let other = store
        .create("members", record!({"email": "b@x.org"}))
        .await
        .unwrap();

    let err = store
        .create("members", record!({"email": "a@x.org"}))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::DuplicateKey {
            collection: "members".into(),
            field: "email".into(),
            value: "a@x.org".into(),
        }
    );

    let err = store
        .update("members", &other, record!({"email": "a@x.org"}))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateKey { .. }));

    // Re-saving a record's own value is not a clash.
    store
        .update("members", &other, record!({"email": "b@x.org"}))
        .await
        .unwrap();
}

#[tokio::test]
async fn natural_key_collection_uses_supplied_key() {
    let store = open().await;
    let key = store
        .create("settings", record!({"key": "theme", "value": "dark"}))
        .await
        .unwrap();
    assert_eq!(key, RecordKey::from("theme"));

    let err = store
        .create("settings", record!({"value": "no key"}))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::InvalidRecord { .. }));

    let err = store
        .create("settings", record!({"key": "theme", "value": "light"}))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateKey { .. }));
}

#[tokio::test]
async fn unknown_collection_is_rejected() {
    let store = open().await;
    assert_eq!(
        store.query_all("trophies").await.unwrap_err(),
        StoreError::UnknownCollection("trophies".into())
    );
}

#[tokio::test]
async fn equality_filter_selects_exact_matches() {
    let store = open().await;
    store.create("members", record!({"tier": "gold"})).await.unwrap();
    store.create("members", record!({"tier": "silver"})).await.unwrap();

    let results = store
        .query("members", &Query::from(Filter::new().eq("tier", "gold")))
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["tier"], "gold");
}

#[tokio::test]
async fn gte_operator_selects_upper_range() {
    let store = open().await;
    for amount in [10, 20, 30] {
        store
            .create("donations", record!({ "amount": amount }))
            .await
            .unwrap();
    }

    let filter = Filter::from_json(&json!({"amount": {"operator": "gte", "value": 20}})).unwrap();
    let results = store.query("donations", &filter.into()).await.unwrap();

    assert_eq!(amounts(&results), vec![20, 30]);
}

#[tokio::test]
async fn sort_desc_then_limit() {
    let store = open().await;
    for amount in [5, 50, 25] {
        store
            .create("donations", record!({ "amount": amount }))
            .await
            .unwrap();
    }

    let query = Query::new().sort(Sort::desc("amount")).limit(2);
    let results = store.query("donations", &query).await.unwrap();

    assert_eq!(amounts(&results), vec![50, 25]);
}

#[tokio::test]
async fn query_parsed_from_json() {
    let store = open().await;
    for (name, amount) in [("a", 5), ("b", 15), ("c", 25)] {
        store
            .create("donations", record!({"donorName": name, "amount": amount}))
            .await
            .unwrap();
    }

    let query: Query = serde_json::from_value(json!({
        "filter": {"amount": {"operator": "lt", "value": 20}},
        "sort": {"field": "amount", "direction": "desc"},
        "limit": 5
    }))
    .unwrap();
    let results = store.query("donations", &query).await.unwrap();

    assert_eq!(amounts(&results), vec![15, 5]);
    assert_eq!(
        query.sort,
        Some(Sort {
            field: "amount".into(),
            direction: Direction::Desc
        })
    );
}

#[tokio::test]
async fn range_on_one_field() {
    let store = open().await;
    for date in ["2024-01-01", "2024-02-15", "2024-03-30"] {
        store
            .create("donations", record!({ "date": date, "amount": 1 }))
            .await
            .unwrap();
    }

    let filter = Filter::new()
        .with("date", Operator::Gte, "2024-02-01")
        .with("date", Operator::Lte, "2024-02-28");
    let results = store.query("donations", &filter.into()).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["date"], "2024-02-15");
}

#[tokio::test]
async fn sanitizes_strings_recursively() {
    let store = open().await;
    let key = store
        .create(
            "members",
            record!({
                "name": "  <script>x</script>Ann ",
                "address": {"city": "<i>Sammamish</i>"},
                "tags": ["<b>gold</b>", 3]
            }),
        )
        .await
        .unwrap();

    let stored = store.read("members", &key).await.unwrap().unwrap();
    assert_eq!(stored["name"], "xAnn");
    assert_eq!(stored["address"]["city"], "Sammamish");
    assert_eq!(stored["tags"], json!(["gold", 3]));
}

#[tokio::test]
async fn stats_count_and_clear() {
    let store = open().await;
    store.create("members", record!({"name": "A"})).await.unwrap();
    store.create("members", record!({"name": "B"})).await.unwrap();
    store.create("events", record!({"eventName": "E"})).await.unwrap();

    let stats = store.stats().await.unwrap();
    assert_eq!(stats.len(), 28);
    assert_eq!(stats.keys().next().map(String::as_str), Some("members"));
    assert_eq!(stats["members"], 2);
    assert_eq!(stats["events"], 1);

    store.clear("members").await.unwrap();
    assert_eq!(store.count("members").await.unwrap(), 0);
    assert_eq!(store.count("events").await.unwrap(), 1);
}
