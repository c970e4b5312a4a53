//! `GET /health`, mounted at the root rather than under [`API_PREFIX`](super::API_PREFIX).

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Health {
    /// `"ok"`, or `"degraded"` when Postgres does not answer.
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// Answers 200 while the pool can run `SELECT 1`, 503 otherwise.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<Health>) {
    let (code, status, db_healthy) = match clientele_db::health_check(&state.pool).await {
        Ok(()) => (StatusCode::OK, "ok", true),
        Err(e) => {
            tracing::warn!(error = %e, "Database unreachable from health check");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", false)
        }
    };

    let body = Health {
        status,
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    };
    (code, Json(body))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
