// LogLens - server/mod.rs
//
// Analysis proxy HTTP surface. Stateless: each request makes at most one
// upstream call and shares nothing with other requests beyond the
// read-only provider handle.

use crate::analysis::AnalysisProvider;
use crate::util::constants;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared server state: the upstream provider, read-only after startup.
pub struct ServerState {
    pub provider: Arc<dyn AnalysisProvider>,
}

/// Request body for POST /analyze-log.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// The raw log line to explain. Missing or empty means a 400 without
    /// contacting the upstream API.
    #[serde(default)]
    pub log: Option<String>,
}

/// Success body for POST /analyze-log.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: String,
}

/// Error body shared by the 400 and 500 paths.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create the proxy router.
pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/analyze-log", post(analyze_log))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: constants::APP_VERSION.to_string(),
    })
}

/// Forward one log line to the upstream provider.
///
/// Failure semantics: validation failures answer 400 with a descriptive
/// message; any upstream failure answers 500 with a fixed message, the
/// underlying cause going to the server log only.
async fn analyze_log(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, Json<ErrorResponse>)> {
    let log = request.log.as_deref().unwrap_or_default();
    if log.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: constants::LOG_REQUIRED_MESSAGE.to_string(),
            }),
        ));
    }

    match state.provider.analyze(log).await {
        Ok(analysis) => {
            tracing::debug!(
                provider = state.provider.name(),
                chars = analysis.len(),
                "Analysis completed"
            );
            Ok(Json(AnalyzeResponse { analysis }))
        }
        Err(e) => {
            // Operator diagnosis only; the caller gets the fixed message.
            tracing::error!(
                provider = state.provider.name(),
                error = %e,
                "Upstream analysis failed"
            );
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: constants::ANALYSIS_FAILED_MESSAGE.to_string(),
                }),
            ))
        }
    }
}
