//! End-to-end properties against a real MongoDB instance.
//!
//! Ignored by default; run with a mongod reachable at `MONGO_URI` (or
//! localhost) via `cargo test --test live_store -- --ignored`.

use orderdesk::connection::ConnectionManager;
use orderdesk::document::{OrderRecord, Price};
use orderdesk::ops::{self, FindOutcome};
use std::io::Write;
use tempfile::tempdir;

const DATABASE: &str = "orderdesk_tests";

fn live_conn() -> ConnectionManager {
    let uri =
        std::env::var("MONGO_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    ConnectionManager::new(uri)
}

// Per-test collection so runs don't interfere with each other.
fn collection_for(test: &str) -> String {
    format!("orders_{test}_{}", std::process::id())
}

fn lamp(title: &str) -> OrderRecord {
    OrderRecord::new(title, "a lamp", Price::Number(40.0), Price::Number(60.0))
}

#[tokio::test]
#[ignore = "requires a running mongod"]
async fn test_insert_then_find_returns_every_field() {
    let conn = live_conn();
    let coll = collection_for("round_trip");
    ops::delete_all(&conn, DATABASE, &coll).await.unwrap();

    let record = OrderRecord::new("Antique Lamp", "Brass, 1920s", Price::Number(40.0), Price::Text("sixty".into()));
    ops::insert_one(&conn, DATABASE, &coll, record.clone()).await.unwrap();

    match ops::find_or_list(&conn, DATABASE, &coll, Some("Antique Lamp")).await.unwrap() {
        FindOutcome::Found(found) => {
            assert_eq!(found.title, record.title);
            assert_eq!(found.description, record.description);
            assert_eq!(found.start_price, record.start_price);
            assert_eq!(found.reserve_price, record.reserve_price);
            assert!(found.id.is_some());
        }
        other => panic!("expected Found, got {other:?}"),
    }

    ops::delete_all(&conn, DATABASE, &coll).await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running mongod"]
async fn test_unseen_title_is_not_found_and_deletes_zero() {
    let conn = live_conn();
    let coll = collection_for("unseen");
    ops::delete_all(&conn, DATABASE, &coll).await.unwrap();

    let outcome = ops::find_or_list(&conn, DATABASE, &coll, Some("No Such Title")).await.unwrap();
    assert_eq!(outcome, FindOutcome::NotFound);
    let deleted = ops::delete_one(&conn, DATABASE, &coll, "No Such Title").await.unwrap();
    assert_eq!(deleted, 0);
}

#[tokio::test]
#[ignore = "requires a running mongod"]
async fn test_delete_all_empties_the_collection() {
    let conn = live_conn();
    let coll = collection_for("delete_all");
    ops::insert_one(&conn, DATABASE, &coll, lamp("One")).await.unwrap();
    ops::insert_one(&conn, DATABASE, &coll, lamp("Two")).await.unwrap();

    ops::delete_all(&conn, DATABASE, &coll).await.unwrap();

    match ops::find_or_list(&conn, DATABASE, &coll, None).await.unwrap() {
        FindOutcome::All(records) => assert!(records.is_empty()),
        other => panic!("expected All, got {other:?}"),
    }
}

#[tokio::test]
#[ignore = "requires a running mongod"]
async fn test_seed_inserts_exactly_the_file_records() {
    let conn = live_conn();
    let coll = collection_for("seed");
    ops::delete_all(&conn, DATABASE, &coll).await.unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("orders.json");
    let data = r#"[
        {"title":"Antique Lamp","description":"Brass","start_price":40,"reserve_price":60},
        {"title":"Modern Lamp","description":"LED","start_price":20,"reserve_price":35},
        {"title":"Old Chair","description":"Oak","start_price":15,"reserve_price":25}
    ]"#;
    std::fs::File::create(&path).unwrap().write_all(data.as_bytes()).unwrap();

    let report = ops::bulk_seed(&conn, DATABASE, &coll, &path).await.unwrap();
    assert_eq!(report.inserted, 3);

    match ops::find_or_list(&conn, DATABASE, &coll, None).await.unwrap() {
        FindOutcome::All(records) => assert_eq!(records.len(), 3),
        other => panic!("expected All, got {other:?}"),
    }

    ops::delete_all(&conn, DATABASE, &coll).await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running mongod"]
async fn test_search_is_a_case_insensitive_substring_match() {
    let conn = live_conn();
    let coll = collection_for("search");
    ops::delete_all(&conn, DATABASE, &coll).await.unwrap();
    for title in ["Antique Lamp", "Modern Lamp", "Old Chair"] {
        ops::insert_one(&conn, DATABASE, &coll, lamp(title)).await.unwrap();
    }

    let lamps = ops::search(&conn, DATABASE, &coll, Some("lamp")).await.unwrap();
    assert_eq!(lamps.len(), 2);
    let chairs = ops::search(&conn, DATABASE, &coll, Some("chair")).await.unwrap();
    assert_eq!(chairs.len(), 1);
    let none = ops::search(&conn, DATABASE, &coll, Some("xyz")).await.unwrap();
    assert!(none.is_empty());
    // Empty and absent search both return the full set
    let all = ops::search(&conn, DATABASE, &coll, None).await.unwrap();
    assert_eq!(all.len(), 3);
    let all_empty = ops::search(&conn, DATABASE, &coll, Some("")).await.unwrap();
    assert_eq!(all_empty.len(), 3);

    ops::delete_all(&conn, DATABASE, &coll).await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running mongod"]
async fn test_concurrent_inserts_with_distinct_titles_both_land() {
    let conn = live_conn();
    let coll = collection_for("concurrent");
    ops::delete_all(&conn, DATABASE, &coll).await.unwrap();

    let (a, b) = tokio::join!(
        ops::insert_one(&conn, DATABASE, &coll, lamp("Left Lamp")),
        ops::insert_one(&conn, DATABASE, &coll, lamp("Right Lamp")),
    );
    a.unwrap();
    b.unwrap();

    for title in ["Left Lamp", "Right Lamp"] {
        let outcome = ops::find_or_list(&conn, DATABASE, &coll, Some(title)).await.unwrap();
        assert!(matches!(outcome, FindOutcome::Found(_)), "missing {title}");
    }

    ops::delete_all(&conn, DATABASE, &coll).await.unwrap();
}
