use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub timestamp: String,
}

/// Liveness plus a database round-trip. Always 200; `database` tells
/// whether Neo4j answered.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match state.store.ping().await {
        Ok(()) => "up",
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach Neo4j");
            "down"
        }
    };
    Json(HealthResponse {
        status: "ok",
        database,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
