#![deny(warnings)]
//! Tally Receipts API
//!
//! The HTTP layer over the Tally engine: submit a receipt with
//! `POST /receipts`, then ask `GET /receipts/{id}/points` for its reward
//! points. Routing, status-code mapping and body parsing live here; the
//! scoring semantics live in `tally-core` and `tally-calculator`.

pub mod config;
pub mod error;
pub mod types;

use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use chrono::{DateTime, Utc};
use tally_core::TallyEngine;
use tally_types::{ReceiptData, ReceiptId};
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ApiResult;
use crate::types::{CreateReceiptResponse, HealthResponse, PointsResponse};

/// Application state shared by all request handlers.
#[derive(Debug)]
pub struct AppState {
    /// When the service started, for the health report.
    pub start_time: DateTime<Utc>,
    /// The receipt store and scorer. Thread-safe; shared by reference.
    pub engine: TallyEngine,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Fresh state with an empty engine.
    pub fn new() -> Self {
        Self { start_time: Utc::now(), engine: TallyEngine::new() }
    }

    /// Whole seconds since the service started.
    pub fn uptime_seconds(&self) -> u64 {
        (Utc::now() - self.start_time).num_seconds().max(0) as u64
    }
}

/// Build the application router with default configuration.
pub fn create_app() -> Router {
    create_app_with_config(&ServerConfig::default())
}

/// Build the application router.
pub fn create_app_with_config(config: &ServerConfig) -> Router {
    let state = Arc::new(AppState::new());

    Router::new()
        .route("/receipts", post(create_receipt))
        .route("/receipts/{id}/points", get(get_points))
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(config.max_body_bytes())),
        )
        .with_state(state)
}

/// `POST /receipts` — accept a receipt, return its identifier.
///
/// No semantic validation happens here; a receipt with malformed fields is
/// stored and the problem surfaces when its points are requested.
async fn create_receipt(
    State(state): State<Arc<AppState>>,
    Json(data): Json<ReceiptData>,
) -> (StatusCode, Json<CreateReceiptResponse>) {
    let id = state.engine.submit_receipt(data);
    (StatusCode::CREATED, Json(CreateReceiptResponse { id }))
}

/// `GET /receipts/{id}/points` — the point total for a stored receipt.
async fn get_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<ReceiptId>,
) -> ApiResult<Json<PointsResponse>> {
    let points = state.engine.score_receipt(id)?;
    Ok(Json(PointsResponse { points }))
}

/// `GET /health` — liveness plus a couple of cheap gauges.
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        uptime_seconds: state.uptime_seconds(),
        receipts_stored: state.engine.receipt_count(),
    })
}
