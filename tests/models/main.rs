//! Integration tests for the entity facades.

use booster_store::clock;
use booster_store::entities::{
    ACHIEVEMENTS, ADMIN_LOGS, BOOSTER_CLUBS, COMPLIANCE_RECORDS, DONATIONS, EQUIPMENT, EVENTS,
    FINANCIAL_TRANSACTIONS, INVENTORY, MEMBERS, NOTIFICATIONS, USER_ACTIVITY, VENDORS,
    VOLUNTEER_HOURS,
};
use booster_store::{
    args, record, Database, DatabaseConfig, Filter, ModelsExt, Operator, QueryArgs, StoreError,
};

async fn seeded() -> Database {
    Database::open(DatabaseConfig::in_memory().with_sample_data(true))
        .await
        .unwrap()
}

fn names(records: &[booster_store::Record], field: &str) -> Vec<String> {
    records
        .iter()
        .map(|r| r[field].as_str().unwrap_or_default().to_string())
        .collect()
}

#[tokio::test]
async fn member_defaults_and_lookups() {
    let db = Database::in_memory().await.unwrap();
    let members = db.model(&MEMBERS);

    let key = members
        .create(record!({"name": "Ann Lee", "email": "ann@x.org", "tier": "gold"}))
        .await
        .unwrap();
    let saved = members.get(&key).await.unwrap().unwrap();
    assert_eq!(saved["status"], "active");
    assert!(saved["joinDate"].is_string());
    assert!(saved["updatedAt"].is_string());

    let found = members
        .first("by_email", &args!({"email": "ann@x.org"}))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found["name"], "Ann Lee");
    assert!(members
        .first("by_email", &args!({"email": "nobody@x.org"}))
        .await
        .unwrap()
        .is_none());

    let hits = members.named("search", &args!({"term": "LEE"})).await.unwrap();
    assert_eq!(hits.len(), 1);
}

#[tokio::test]
async fn donation_update_refreshes_timestamp_and_merges() {
    let db = Database::in_memory().await.unwrap();
    let donations = db.model(&DONATIONS);
    let key = donations
        .create(record!({"donorName": "A", "tier": "gold", "updatedAt": "2000-01-01T00:00:00.000Z"}))
        .await
        .unwrap();
    assert_eq!(donations.get(&key).await.unwrap().unwrap()["status"], "pending");

    donations
        .update(&key, record!({"tier": "silver"}))
        .await
        .unwrap();
    let saved = donations.get(&key).await.unwrap().unwrap();

    assert_eq!(saved["donorName"], "A");
    assert_eq!(saved["tier"], "silver");
    assert_ne!(saved["updatedAt"], "2000-01-01T00:00:00.000Z");
}

#[tokio::test]
async fn seeded_named_queries() {
    let db = seeded().await;

    let gold = db
        .model(&MEMBERS)
        .named("by_tier", &args!({"tier": "gold"}))
        .await
        .unwrap();
    assert_eq!(names(&gold, "name"), vec!["John Smith"]);

    let pending = db
        .model(&DONATIONS)
        .named("by_status", &args!({"status": "pending"}))
        .await
        .unwrap();
    assert_eq!(names(&pending, "donorName"), vec!["Lisa Wilson"]);

    let band = db
        .model(&BOOSTER_CLUBS)
        .first("by_name", &args!({"name": "Band"}))
        .await
        .unwrap();
    assert!(band.is_some());

    let vendor = db
        .model(&VENDORS)
        .first("by_tax_id", &args!({"taxId": "12-3456789"}))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(vendor["businessName"], "Dirk Huebner Training");

    let low = db
        .model(&INVENTORY)
        .named("low_stock", &QueryArgs::new())
        .await
        .unwrap();
    assert_eq!(names(&low, "itemName"), vec!["Soccer Balls"]);

    let below_twenty = db
        .model(&INVENTORY)
        .named("low_stock", &args!({"threshold": 20}))
        .await
        .unwrap();
    assert_eq!(below_twenty.len(), 2);

    // Seeded maintenance dates are all in the past.
    let maintenance = db
        .model(&EQUIPMENT)
        .named("needs_maintenance", &QueryArgs::new())
        .await
        .unwrap();
    assert_eq!(maintenance.len(), 3);
}

#[tokio::test]
async fn date_range_is_inclusive() {
    let db = seeded().await;
    let in_range = db
        .model(&DONATIONS)
        .named(
            "by_date_range",
            &args!({"start": "2024-01-14", "end": "2024-01-15"}),
        )
        .await
        .unwrap();
    assert_eq!(in_range.len(), 2);
}

#[tokio::test]
async fn upcoming_uses_today() {
    let db = Database::in_memory().await.unwrap();
    let events = db.model(&EVENTS);
    events
        .create(record!({"eventName": "Past", "date": "2020-01-01"}))
        .await
        .unwrap();
    events
        .create(record!({"eventName": "Today", "date": clock::today()}))
        .await
        .unwrap();
    events
        .create(record!({"eventName": "Future", "date": "2999-01-01"}))
        .await
        .unwrap();

    let upcoming = events.named("upcoming", &QueryArgs::new()).await.unwrap();
    assert_eq!(names(&upcoming, "eventName"), vec!["Today", "Future"]);
}

#[tokio::test]
async fn expiring_soon_honours_days_argument() {
    let db = Database::in_memory().await.unwrap();
    let compliance = db.model(&COMPLIANCE_RECORDS);
    compliance
        .create(record!({"documentName": "soon", "expiryDate": clock::days_from_now(10).unwrap()}))
        .await
        .unwrap();
    compliance
        .create(record!({"documentName": "later", "expiryDate": clock::days_from_now(60).unwrap()}))
        .await
        .unwrap();

    let default_window = compliance
        .named("expiring_soon", &QueryArgs::new())
        .await
        .unwrap();
    assert_eq!(names(&default_window, "documentName"), vec!["soon"]);

    let wide = compliance
        .named("expiring_soon", &args!({"days": 90}))
        .await
        .unwrap();
    assert_eq!(wide.len(), 2);
}

#[tokio::test]
async fn expiring_soon_rejects_out_of_range_days() {
    let db = Database::in_memory().await.unwrap();
    let compliance = db.model(&COMPLIANCE_RECORDS);

    for days in [9_000_000_000_000i64, -9_000_000_000_000, 300_000_000] {
        let err = compliance
            .named("expiring_soon", &args!({ "days": days }))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidQuery(_)), "{}", days);
    }
}

#[tokio::test]
async fn recent_sorts_descending_with_limit() {
    let db = Database::in_memory().await.unwrap();
    let logs = db.model(&ADMIN_LOGS);
    for (action, ts) in [
        ("login", "2024-01-01T00:00:00.000Z"),
        ("export", "2024-03-01T00:00:00.000Z"),
        ("logout", "2024-02-01T00:00:00.000Z"),
    ] {
        logs.create(record!({"action": action, "timestamp": ts}))
            .await
            .unwrap();
    }

    let recent = logs.named("recent", &args!({"limit": 2})).await.unwrap();
    assert_eq!(names(&recent, "action"), vec!["export", "logout"]);

    let achievements = db.model(&ACHIEVEMENTS);
    for n in 0..25 {
        achievements
            .create(record!({"title": format!("a{}", n)}))
            .await
            .unwrap();
    }
    let recent = achievements.named("recent", &QueryArgs::new()).await.unwrap();
    assert_eq!(recent.len(), 20);
}

#[tokio::test]
async fn notifications_unread_and_mark_read() {
    let db = Database::in_memory().await.unwrap();
    let notifications = db.model(&NOTIFICATIONS);
    let first = notifications
        .create(record!({"userId": 7, "message": "hello"}))
        .await
        .unwrap();
    notifications
        .create(record!({"userId": 7, "message": "again"}))
        .await
        .unwrap();
    notifications
        .create(record!({"userId": 8, "message": "other"}))
        .await
        .unwrap();

    notifications
        .update(&first, record!({"read": true}))
        .await
        .unwrap();

    let unread = notifications
        .named("unread", &args!({"userId": 7}))
        .await
        .unwrap();
    assert_eq!(names(&unread, "message"), vec!["again"]);
}

#[tokio::test]
async fn generated_identifiers() {
    let db = Database::in_memory().await.unwrap();
    let txns = db.model(&FINANCIAL_TRANSACTIONS);
    let key = txns.create(record!({"amount": 10})).await.unwrap();
    let saved = txns.get(&key).await.unwrap().unwrap();
    let txn_id = saved["transactionId"].as_str().unwrap().to_string();
    assert!(txn_id.starts_with("txn_"));

    let found = txns
        .first("by_transaction_id", &args!({ "transactionId": txn_id }))
        .await
        .unwrap();
    assert!(found.is_some());

    let activity = db.model(&USER_ACTIVITY);
    let key = activity.create(record!({"page": "/donate"})).await.unwrap();
    let saved = activity.get(&key).await.unwrap().unwrap();
    assert!(saved["sessionId"].as_str().unwrap().starts_with("session_"));
}

#[tokio::test]
async fn totals() {
    let db = seeded().await;

    let donations = db.model(&DONATIONS);
    assert_eq!(donations.sum("amount", &Filter::new()).await.unwrap(), 625.0);
    let mid_january = Filter::new()
        .with("date", Operator::Gte, "2024-01-14")
        .with("date", Operator::Lte, "2024-01-15");
    assert_eq!(donations.sum("amount", &mid_january).await.unwrap(), 600.0);

    let txns = db.model(&FINANCIAL_TRANSACTIONS);
    assert_eq!(txns.sum("amount", &Filter::new()).await.unwrap(), 125.0);

    let hours = db.model(&VOLUNTEER_HOURS);
    let volunteer_two = Filter::new().eq("volunteerId", 2);
    assert_eq!(hours.sum("hours", &volunteer_two).await.unwrap(), 6.0);
}

#[tokio::test]
async fn store_level_model_lookup() {
    let db = Database::in_memory().await.unwrap();
    let model = db.store().model_for("boosterClubs").unwrap();
    model.create(record!({"name": "Robotics"})).await.unwrap();

    let err = model.create(record!({"name": "Robotics"})).await.unwrap_err();
    assert!(matches!(err, StoreError::DuplicateKey { .. }));
    assert!(matches!(
        db.model_for("nope"),
        Err(StoreError::UnknownCollection(_))
    ));
}
