//! Health check endpoint
//!
//! Verifies database connectivity; deployment platforms poll this route
//! to decide whether the instance is ready for traffic.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::state::AppState;

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "ok",
                "service": "Radar Fiscal API",
                "version": env!("CARGO_PKG_VERSION"),
                "environment": state.environment,
                "db_connection": "connected",
            })),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Database health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "status": "error",
                    "message": "Database connection failed",
                    "environment": state.environment,
                })),
            )
        }
    }
}
