//! Per-operation connection lifecycle.
//!
//! Every public operation performs exactly one acquire/release cycle: a
//! fresh client is established from the configured URI, the named database
//! and collection are resolved, the operation runs against the typed handle,
//! and the client is shut down on every exit path. There is no process-wide
//! client singleton.

use crate::document::OrderRecord;
use crate::errors::StoreError;
use mongodb::bson::doc;
use mongodb::{Client, Collection};
use std::future::Future;

pub struct ConnectionManager {
    uri: String,
}

impl ConnectionManager {
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    /// Runs `op` against the named collection under a scoped connection.
    ///
    /// A missing database or collection is not an error; it behaves as
    /// empty. Empty names are rejected before any connection attempt.
    ///
    /// # Errors
    /// `Validation` for empty names, `Store` for connection faults, plus
    /// whatever `op` itself returns. The client is released in every case.
    pub async fn with_collection<T, F, Fut>(
        &self,
        database: &str,
        collection: &str,
        op: F,
    ) -> Result<T, StoreError>
    where
        F: FnOnce(Collection<OrderRecord>) -> Fut,
        Fut: Future<Output = Result<T, StoreError>>,
    {
        if database.is_empty() {
            return Err(StoreError::Validation("database name is required".into()));
        }
        if collection.is_empty() {
            return Err(StoreError::Validation("collection name is required".into()));
        }
        let client = Client::with_uri_str(&self.uri).await?;
        let handle = client.database(database).collection::<OrderRecord>(collection);
        let out = op(handle).await;
        client.shutdown().await;
        out
    }
}

/// Verifies connectivity with a round-trip ping.
///
/// Called once at startup; a failure here is the only fault that terminates
/// the whole run.
///
/// # Errors
/// `Store` when the server cannot be reached.
pub async fn ping(uri: &str) -> Result<(), StoreError> {
    let client = Client::with_uri_str(uri).await?;
    let result = client.database("admin").run_command(doc! { "ping": 1 }).await;
    client.shutdown().await;
    result?;
    log::info!("connected to MongoDB");
    Ok(())
}
