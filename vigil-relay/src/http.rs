//! HTTP ingress: axum router and handlers for the relay and reader paths.
//!
//! The pipeline underneath is synchronous (blocking HTTP client, blocking
//! store), so each handler hops onto the blocking thread pool.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use vigil_core::{constants, VigilError};

use crate::reader::ReaderService;
use crate::relay::{ErrorEnvelope, RelayService};

/// Shared application state: one relay and one reader, built once at
/// startup over the production collaborators.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<RelayService>,
    pub reader: Arc<ReaderService>,
}

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/v1/classify", post(classify))
        .route("/v1/records", get(list_records))
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: constants::VERSION,
    })
}

/// POST /v1/classify — the classification relay.
///
/// The body is taken as a raw string so that every failure, JSON parse
/// errors included, maps to the single `{error, details}` envelope.
async fn classify(State(state): State<AppState>, body: String) -> Response {
    let relay = state.relay.clone();
    let result = run_blocking(move || {
        let raw: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| VigilError::Validation {
                reason: format!("request body is not valid JSON: {e}"),
            })?;
        relay.handle(raw)
    })
    .await;

    match result {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) => error_response(&e),
    }
}

/// GET /v1/records — the audit reader. Newest first, permissive CORS.
async fn list_records(State(state): State<AppState>) -> Response {
    let reader = state.reader.clone();
    match run_blocking(move || reader.list_records()).await {
        Ok(records) => (
            StatusCode::OK,
            [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
            Json(records),
        )
            .into_response(),
        Err(e) => error_response(&e),
    }
}

/// Run a synchronous pipeline step on the blocking pool.
async fn run_blocking<T, F>(f: F) -> Result<T, VigilError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, VigilError> + Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(result) => result,
        Err(e) => Err(VigilError::Unexpected {
            reason: format!("blocking task failed: {e}"),
        }),
    }
}

/// Map any failure to the generic 500 envelope. The error kind stays in
/// the logs only.
fn error_response(error: &VigilError) -> Response {
    tracing::error!(error = %error, "relay: request failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorEnvelope::from_error(error)),
    )
        .into_response()
}
