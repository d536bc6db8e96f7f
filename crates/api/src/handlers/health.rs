use axum::extract::State;
use serde::Serialize;

use crate::response::json_utf8;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when storage answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Which storage backend is wired (`sqlite` or `postgres`).
    pub backend: &'static str,
}

/// GET /api/health
pub async fn health_check(State(state): State<AppState>) -> axum::response::Response {
    let db_healthy = match state.store.health_check().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Storage health check failed");
            false
        }
    };

    let body = HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        backend: state.store.backend(),
    };

    json_utf8(axum::http::StatusCode::OK, &body)
}
