//! Integration tests for durable file storage.
#![cfg(feature = "file")]

use booster_store::entities::{MEMBERS, NOTIFICATIONS};
use booster_store::{args, record, Database, DatabaseConfig, RecordKey, StoreError};

#[tokio::test]
async fn records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig::file(dir.path());

    let key = {
        let db = Database::open(config.clone()).await.unwrap();
        let members = db.model(&MEMBERS);
        let key = members
            .create(record!({"name": "Ann", "email": "ann@x.org", "tier": "gold"}))
            .await
            .unwrap();
        members
            .update(&key, record!({"tier": "silver"}))
            .await
            .unwrap();
        db.store()
            .create("settings", record!({"key": "season", "value": "fall"}))
            .await
            .unwrap();
        key
    };

    let db = Database::open(config).await.unwrap();
    let members = db.model(&MEMBERS);
    let saved = members.get(&key).await.unwrap().unwrap();
    assert_eq!(saved["tier"], "silver");

    let season = db
        .store()
        .read("settings", &RecordKey::from("season"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(season["value"], "fall");

    // The key generator and unique index state come back too.
    let next = members
        .create(record!({"name": "Bo", "email": "bo@x.org"}))
        .await
        .unwrap();
    assert_eq!(next, RecordKey::Int(2));
    let err = members
        .create(record!({"email": "ann@x.org"}))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateKey { .. }));
}

#[tokio::test]
async fn deletes_and_clears_are_durable() {
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig::file(dir.path());

    {
        let db = Database::open(config.clone()).await.unwrap();
        let notifications = db.model(&NOTIFICATIONS);
        let first = notifications
            .create(record!({"userId": 1, "message": "a"}))
            .await
            .unwrap();
        notifications
            .create(record!({"userId": 1, "message": "b"}))
            .await
            .unwrap();
        notifications.delete(&first).await.unwrap();
        db.store().create("members", record!({"name": "X"})).await.unwrap();
        db.store().clear("members").await.unwrap();
    }

    let db = Database::open(config).await.unwrap();
    let unread = db
        .model(&NOTIFICATIONS)
        .named("unread", &args!({"userId": 1}))
        .await
        .unwrap();
    assert_eq!(unread.len(), 1);
    assert_eq!(unread[0]["message"], "b");
    assert_eq!(db.store().count("members").await.unwrap(), 0);
}

#[tokio::test]
async fn seeding_is_skipped_on_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig::file(dir.path()).with_sample_data(true);

    let first = Database::open(config.clone()).await.unwrap();
    let seeded = first.stats().await.unwrap();
    drop(first);

    let second = Database::open(config).await.unwrap();
    assert_eq!(second.stats().await.unwrap(), seeded);
}

#[tokio::test]
async fn failed_write_is_not_visible_to_reads() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("db");
    let db = Database::open(DatabaseConfig::file(&root)).await.unwrap();
    let members = db.model(&MEMBERS);
    let key = members
        .create(record!({"name": "A", "email": "a@x.org"}))
        .await
        .unwrap();

    std::fs::remove_dir_all(&root).unwrap();

    let err = members
        .update(&key, record!({"name": "B"}))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Storage(_)));
    assert!(members
        .create(record!({"name": "C", "email": "c@x.org"}))
        .await
        .is_err());

    assert_eq!(members.get(&key).await.unwrap().unwrap()["name"], "A");
    assert_eq!(db.store().count("members").await.unwrap(), 1);
}

#[tokio::test]
async fn corrupt_collection_file_makes_store_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("members.json"), "{ nope").unwrap();

    let result = Database::open(DatabaseConfig::file(dir.path())).await;
    assert!(matches!(result, Err(StoreError::StoreUnavailable(_))));
}

#[tokio::test]
async fn backup_to_dir_then_restore_into_file_store() {
    let backups = tempfile::tempdir().unwrap();
    let data = tempfile::tempdir().unwrap();

    let source = Database::open(DatabaseConfig::in_memory().with_sample_data(true))
        .await
        .unwrap();
    let path = source.backup_to_dir(backups.path()).await.unwrap();

    {
        let target = Database::open(DatabaseConfig::file(data.path())).await.unwrap();
        target.restore_from_file(&path).await.unwrap();
    }

    let reopened = Database::open(DatabaseConfig::file(data.path())).await.unwrap();
    assert_eq!(
        reopened.stats().await.unwrap(),
        source.stats().await.unwrap()
    );
}
