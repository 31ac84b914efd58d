use orderdesk::connection::ConnectionManager;
use orderdesk::errors::StoreError;
use orderdesk::intent::{Intent, Outcome, dispatch};

const DEAD_URI: &str = "mongodb://127.0.0.1:9/?serverSelectionTimeoutMS=200&connectTimeoutMS=200";

#[tokio::test]
async fn test_unconfirmed_delete_all_cancels_without_store_access() {
    let conn = ConnectionManager::new(DEAD_URI);
    let intent = Intent::DeleteAll {
        database: "auction".into(),
        collection: "orders".into(),
        confirmed: false,
    };
    let outcome = dispatch(&conn, intent).await.unwrap();
    assert_eq!(outcome, Outcome::Cancelled);
}

#[tokio::test]
async fn test_delete_intent_with_empty_title_short_circuits() {
    let conn = ConnectionManager::new(DEAD_URI);
    let intent = Intent::Delete {
        database: "auction".into(),
        collection: "orders".into(),
        title: String::new(),
    };
    let err = dispatch(&conn, intent).await.unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)), "got {err:?}");
}
