//! # Tally - Hit Counter Service
//!
//! Tally is a small HTTP service exposing named counters backed by an
//! in-process store. Counters are created at zero, only ever count up,
//! and disappear on delete.
//!
//! ## Endpoints
//!
//! - **GET /** service information
//! - **GET /health** health status
//! - **GET /counters** list all counters
//! - **POST /counters/:name** create a counter
//! - **GET /counters/:name** read a counter
//! - **PUT /counters/:name** increment a counter
//! - **DELETE /counters/:name** delete a counter
//! - **GET /metrics** Prometheus metrics
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tally::adapters::counter_store::CounterStore;
//! use tally::adapters::metrics_handler::MetricsCollector;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = CounterStore::new();
//!     let metrics = Arc::new(MetricsCollector::new()?);
//!     let app = tally::create_app(store, metrics);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;

use crate::adapters::counter_handler::{self, ApiState};
use crate::adapters::counter_store::CounterStore;
use crate::adapters::metrics_handler::{self, MetricsCollector, MetricsHandler};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Creates the Axum application router with all endpoints configured.
///
/// The store and metrics collector are constructed by the caller and
/// injected here, so tests can build a fresh app per case.
pub fn create_app(store: CounterStore, metrics: Arc<MetricsCollector>) -> Router {
    let metrics_handler = Arc::new(MetricsHandler::new(metrics.clone()));

    let api_state = ApiState {
        store,
        metrics: metrics.clone(),
    };

    let router = Router::new()
        .route("/", get(counter_handler::index))
        .route("/health", get(counter_handler::health))
        .route("/metrics", get({
            let handler = metrics_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.metrics().await }
            }
        }))
        .route("/counters", get(counter_handler::list_counters))
        .route(
            "/counters/:name",
            post(counter_handler::create_counter)
                .get(counter_handler::read_counter)
                .put(counter_handler::update_counter)
                .delete(counter_handler::delete_counter),
        )
        .with_state(api_state);

    router
        .layer(middleware::from_fn_with_state(
            metrics,
            metrics_handler::track_requests,
        ))
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
}
