//! Record operations over the order collection.
//!
//! Each operation is a self-contained unit of work: one scoped connection,
//! one or more store calls, exactly one outcome. None retries, and none logs
//! beyond what its caller asked for.

use crate::connection::ConnectionManager;
use crate::document::OrderRecord;
use crate::errors::StoreError;
use crate::query::{exact_title_filter, substring_title_filter};
use crate::seed::{SeedReport, read_seed_file};
use futures::TryStreamExt;
use mongodb::bson::{Bson, Document};
use mongodb::error::ErrorKind;
use std::path::Path;

/// Result of a find-or-list call.
#[derive(Debug, Clone, PartialEq)]
pub enum FindOutcome {
    Found(OrderRecord),
    NotFound,
    All(Vec<OrderRecord>),
}

/// Inserts a single order and returns the id the store assigned.
///
/// # Errors
/// `Validation` when title or description is empty; `Store` on any driver
/// fault (the operation aborts with no partial state).
pub async fn insert_one(
    conn: &ConnectionManager,
    database: &str,
    collection: &str,
    record: OrderRecord,
) -> Result<Bson, StoreError> {
    if record.title.is_empty() {
        return Err(StoreError::Validation("title is required".into()));
    }
    if record.description.is_empty() {
        return Err(StoreError::Validation("description is required".into()));
    }
    conn.with_collection(database, collection, |handle| async move {
        let result = handle.insert_one(&record).await?;
        log::info!("inserted order title={} id={}", record.title, result.inserted_id);
        Ok(result.inserted_id)
    })
    .await
}

/// Finds the first order with the given title, or lists every order when the
/// title is absent or empty.
///
/// Under duplicate titles the store returns an arbitrary match.
///
/// # Errors
/// `Store` on any driver fault. A missing record is `FindOutcome::NotFound`,
/// not an error.
pub async fn find_or_list(
    conn: &ConnectionManager,
    database: &str,
    collection: &str,
    title: Option<&str>,
) -> Result<FindOutcome, StoreError> {
    match title.and_then(exact_title_filter) {
        Some(filter) => {
            conn.with_collection(database, collection, |handle| async move {
                match handle.find_one(filter).await? {
                    Some(record) => Ok(FindOutcome::Found(record)),
                    None => Ok(FindOutcome::NotFound),
                }
            })
            .await
        }
        None => {
            let records = find_all(conn, database, collection, Document::new()).await?;
            Ok(FindOutcome::All(records))
        }
    }
}

/// Deletes the first order matching the title. Returns the deleted count
/// (0 or 1).
///
/// # Errors
/// `Validation` for an empty title; the delete short-circuits before any
/// store access rather than running an unconditional delete.
pub async fn delete_one(
    conn: &ConnectionManager,
    database: &str,
    collection: &str,
    title: &str,
) -> Result<u64, StoreError> {
    let Some(filter) = exact_title_filter(title) else {
        return Err(StoreError::Validation("title is required to delete an order".into()));
    };
    conn.with_collection(database, collection, |handle| async move {
        let result = handle.delete_one(filter).await?;
        Ok(result.deleted_count)
    })
    .await
}

/// Deletes every order in the collection. Unconditional once called; the
/// confirmation policy lives in the caller layer.
pub async fn delete_all(
    conn: &ConnectionManager,
    database: &str,
    collection: &str,
) -> Result<u64, StoreError> {
    conn.with_collection(database, collection, |handle| async move {
        let result = handle.delete_many(Document::new()).await?;
        log::info!("deleted {} orders from {}", result.deleted_count, handle.name());
        Ok(result.deleted_count)
    })
    .await
}

/// Seeds the collection from a JSON-array file.
///
/// The file is parsed in full before any insert. Inserts are ordered, so a
/// mid-sequence store fault stops the batch; the error then carries the
/// count the store accepted. A well-formed empty array inserts nothing and
/// reports zero without touching the store.
///
/// # Errors
/// `Validation` for a missing or malformed file; `Seed` for a partial
/// insert failure.
pub async fn bulk_seed(
    conn: &ConnectionManager,
    database: &str,
    collection: &str,
    path: &Path,
) -> Result<SeedReport, StoreError> {
    let records = read_seed_file(path)?;
    log::info!("seed: path={} records={}", path.display(), records.len());
    if records.is_empty() {
        log::warn!("seed file {} contains no records", path.display());
        return Ok(SeedReport::default());
    }
    conn.with_collection(database, collection, |handle| async move {
        match handle.insert_many(&records).await {
            Ok(result) => Ok(SeedReport { inserted: result.inserted_ids.len() as u64 }),
            Err(err) => {
                let inserted = match err.kind.as_ref() {
                    ErrorKind::InsertMany(e) => e.inserted_ids.len() as u64,
                    _ => 0,
                };
                Err(StoreError::Seed { inserted, reason: err.to_string() })
            }
        }
    })
    .await
}

/// Returns every order whose title contains `text` as a case-insensitive
/// substring; all orders when `text` is absent or empty.
pub async fn search(
    conn: &ConnectionManager,
    database: &str,
    collection: &str,
    text: Option<&str>,
) -> Result<Vec<OrderRecord>, StoreError> {
    find_all(conn, database, collection, substring_title_filter(text)).await
}

async fn find_all(
    conn: &ConnectionManager,
    database: &str,
    collection: &str,
    filter: Document,
) -> Result<Vec<OrderRecord>, StoreError> {
    conn.with_collection(database, collection, |handle| async move {
        let cursor = handle.find(filter).await?;
        let records: Vec<OrderRecord> = cursor.try_collect().await?;
        Ok(records)
    })
    .await
}
