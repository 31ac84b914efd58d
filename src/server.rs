//! Read-only HTTP search endpoint over the order collection.
//!
//! `GET /api/orders?search=<text>` returns the matching records as a JSON
//! array. Store faults are logged server-side and surface to the client as a
//! generic `500 {"error": "Server error"}` with no internal detail.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use serde_json::json;

use crate::connection::ConnectionManager;
use crate::document::OrderRecord;
use crate::errors::StoreError;
use crate::ops;

/// Shared state for the search endpoint. Each request runs its own
/// connection lifecycle; nothing here is mutable.
#[derive(Clone)]
pub struct AppState {
    pub conn: Arc<ConnectionManager>,
    pub database: String,
    pub collection: String,
}

/// Create the Axum router with all endpoints.
#[must_use]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/orders", get(search_orders))
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    search: Option<String>,
}

async fn search_orders(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<OrderRecord>>, ApiError> {
    let records = ops::search(
        &state.conn,
        &state.database,
        &state.collection,
        params.search.as_deref(),
    )
    .await?;
    Ok(Json(records))
}

/// API error wrapper: logs the cause, answers with a generic body.
#[derive(Debug)]
struct ApiError(StoreError);

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        log::error!("search request failed: {}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "Server error"}))).into_response()
    }
}
