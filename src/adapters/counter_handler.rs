//! HTTP handlers for the hit counter REST surface.
//!
//! Counter names come verbatim from the path segment; no decoding or
//! normalization is applied.

use axum::{
    extract::{Host, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::adapters::counter_store::CounterStore;
use crate::adapters::metrics_handler::MetricsCollector;
use crate::domain::CounterError;

/// Shared application state for the counter handlers
#[derive(Clone)]
pub struct ApiState {
    pub store: CounterStore,
    pub metrics: Arc<MetricsCollector>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn error_body(err: &CounterError) -> Json<ErrorBody> {
    Json(ErrorBody {
        error: err.to_string(),
    })
}

/// GET /health - Health status
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "OK" })))
}

/// GET / - Service information
pub async fn index(Host(host): Host) -> impl IntoResponse {
    info!("Request for Base URL");
    (
        StatusCode::OK,
        Json(json!({
            "status": StatusCode::OK.as_u16(),
            "message": "Hit Counter Service",
            "version": env!("CARGO_PKG_VERSION"),
            "url": format!("http://{}/counters", host),
        })),
    )
}

/// GET /counters - List all counters
pub async fn list_counters(State(state): State<ApiState>) -> impl IntoResponse {
    info!("Request to list all counters...");
    (StatusCode::OK, Json(state.store.list().await))
}

/// POST /counters/:name - Create a new counter
pub async fn create_counter(
    State(state): State<ApiState>,
    Host(host): Host,
    Path(name): Path<String>,
) -> Response {
    info!("Request to Create counter: {}...", name);

    match state.store.create(&name).await {
        Ok(counter) => {
            state
                .metrics
                .counters_live
                .set(state.store.count().await as f64);
            let location = format!("http://{}/counters/{}", host, name);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(counter),
            )
                .into_response()
        }
        Err(err) => (StatusCode::CONFLICT, error_body(&err)).into_response(),
    }
}

/// GET /counters/:name - Read a single counter
pub async fn read_counter(State(state): State<ApiState>, Path(name): Path<String>) -> Response {
    info!("Request to Read counter: {}...", name);

    match state.store.read(&name).await {
        Ok(counter) => (StatusCode::OK, Json(counter)).into_response(),
        Err(err) => (StatusCode::NOT_FOUND, error_body(&err)).into_response(),
    }
}

/// PUT /counters/:name - Increment a counter
pub async fn update_counter(State(state): State<ApiState>, Path(name): Path<String>) -> Response {
    info!("Request to Update counter: {}...", name);

    match state.store.increment(&name).await {
        Ok(counter) => (StatusCode::OK, Json(counter)).into_response(),
        Err(err) => (StatusCode::NOT_FOUND, error_body(&err)).into_response(),
    }
}

/// DELETE /counters/:name - Delete a counter
pub async fn delete_counter(
    State(state): State<ApiState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    info!("Request to Delete counter: {}...", name);

    state.store.delete(&name).await;
    state
        .metrics
        .counters_live
        .set(state.store.count().await as f64);

    StatusCode::NO_CONTENT
}
