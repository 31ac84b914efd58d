//! The closed set of interactive intents and their dispatch onto record
//! operations.

use crate::connection::ConnectionManager;
use crate::document::OrderRecord;
use crate::errors::StoreError;
use crate::ops::{self, FindOutcome};
use mongodb::bson::Bson;
use std::path::PathBuf;

/// A validated user intent: one variant per operation, carrying exactly the
/// parameters that operation needs. Field-level validation is the caller's
/// responsibility; the dispatcher assumes well-formed input.
#[derive(Debug, Clone)]
pub enum Intent {
    Insert { database: String, collection: String, record: OrderRecord },
    Find { database: String, collection: String, title: String },
    List { database: String, collection: String },
    Delete { database: String, collection: String, title: String },
    DeleteAll { database: String, collection: String, confirmed: bool },
    Seed { database: String, collection: String, file: PathBuf },
}

/// Outcome of a dispatched intent.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Inserted { id: Bson },
    Found(OrderRecord),
    NotFound,
    Listed(Vec<OrderRecord>),
    Deleted { count: u64 },
    Cleared { count: u64 },
    Seeded { count: u64 },
    Cancelled,
}

/// Executes exactly one record operation for the given intent.
///
/// An unconfirmed `DeleteAll` resolves to `Outcome::Cancelled` without
/// touching the store; once confirmed, the underlying operation is
/// unconditional.
///
/// # Errors
/// Whatever the dispatched operation returns.
pub async fn dispatch(conn: &ConnectionManager, intent: Intent) -> Result<Outcome, StoreError> {
    match intent {
        Intent::Insert { database, collection, record } => {
            let id = ops::insert_one(conn, &database, &collection, record).await?;
            Ok(Outcome::Inserted { id })
        }
        Intent::Find { database, collection, title } => {
            match ops::find_or_list(conn, &database, &collection, Some(&title)).await? {
                FindOutcome::Found(record) => Ok(Outcome::Found(record)),
                FindOutcome::NotFound => Ok(Outcome::NotFound),
                FindOutcome::All(records) => Ok(Outcome::Listed(records)),
            }
        }
        Intent::List { database, collection } => {
            match ops::find_or_list(conn, &database, &collection, None).await? {
                FindOutcome::All(records) => Ok(Outcome::Listed(records)),
                FindOutcome::Found(record) => Ok(Outcome::Found(record)),
                FindOutcome::NotFound => Ok(Outcome::NotFound),
            }
        }
        Intent::Delete { database, collection, title } => {
            let count = ops::delete_one(conn, &database, &collection, &title).await?;
            Ok(Outcome::Deleted { count })
        }
        Intent::DeleteAll { database, collection, confirmed } => {
            if !confirmed {
                return Ok(Outcome::Cancelled);
            }
            let count = ops::delete_all(conn, &database, &collection).await?;
            Ok(Outcome::Cleared { count })
        }
        Intent::Seed { database, collection, file } => {
            let report = ops::bulk_seed(conn, &database, &collection, &file).await?;
            Ok(Outcome::Seeded { count: report.inserted })
        }
    }
}
