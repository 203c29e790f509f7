//! Alert Ingestion API
//!
//! Thin HTTP host around the processing pipeline: one bearer-token-guarded
//! ingest endpoint plus a health check. Each request runs one alert through
//! the pipeline to completion before responding.

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use alert_model::AlertFields;
use processor::{AlertProcessor, ProcessError};
use storage::AlertStore;

mod logging;

pub use logging::{init_logging, CommaFormat};

/// Application state shared across handlers
pub struct AppState<S> {
    /// The alert processing pipeline
    pub processor: AlertProcessor<S>,
    /// Token required on ingest requests
    pub api_token: String,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl<S> AppState<S> {
    /// Create new application state
    pub fn new(processor: AlertProcessor<S>, api_token: String) -> Self {
        Self {
            processor,
            api_token,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Error body returned on rejected requests
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Create the application router
pub fn create_router<S: AlertStore + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler::<S>))
        .route("/api/v1/alerts", post(ingest_handler::<S>))
        .with_state(state)
}

/// Health check handler
async fn health_handler<S: AlertStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}

/// Ingest one alert reading
async fn ingest_handler<S: AlertStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    headers: HeaderMap,
    Json(fields): Json<AlertFields>,
) -> Response {
    if !authorized(&headers, &state.api_token) {
        debug!("ingest request rejected: bad or missing token");
        return error_response(StatusCode::UNAUTHORIZED, "invalid API token");
    }

    match state.processor.process(fields).await {
        Ok(alert) => (StatusCode::CREATED, Json(alert)).into_response(),
        Err(ProcessError::Validation(err)) => {
            error_response(StatusCode::UNPROCESSABLE_ENTITY, &err.to_string())
        }
        Err(ProcessError::Persistence(err)) => {
            error_response(StatusCode::SERVICE_UNAVAILABLE, &err.to_string())
        }
    }
}

fn authorized(headers: &HeaderMap, expected: &str) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| token == expected)
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}
