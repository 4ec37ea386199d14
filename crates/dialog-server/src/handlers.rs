//! HTTP Handlers

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use serde::Serialize;

use dialog_core::{DialogError, InvocationContext};

use crate::state::AppState;

/// Header carrying an upstream request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub intents: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    fn from_dialog_error(err: &DialogError) -> (StatusCode, Json<Self>) {
        let status = match err {
            DialogError::UnsupportedIntent(_) | DialogError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            DialogError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(Self {
                error: err.to_string(),
                code: err.code().into(),
            }),
        )
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        intents: state
            .dispatcher
            .intents()
            .names()
            .into_iter()
            .map(str::to_owned)
            .collect(),
    })
}

/// Code-hook invocation endpoint
///
/// Takes the event as raw JSON so events that are valid JSON but not a
/// code-hook request get the same `{error, code}` body as other failures.
pub async fn invoke_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(event): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    let context = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map_or_else(InvocationContext::new, InvocationContext::with_request_id);

    state
        .dispatcher
        .handle_json(event, &context)
        .map(Json)
        .map_err(|e| {
            tracing::warn!(request_id = %context.request_id, "Invocation rejected: {}", e);
            ErrorResponse::from_dialog_error(&e)
        })
}
