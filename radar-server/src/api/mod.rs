//! API routes for radar-server

pub mod audit;
pub mod blacklist;
pub mod health;
pub mod leads;
pub mod session;

use crate::audit::service::{MAX_FILE_BYTES, MAX_FILES_PER_BATCH};
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::{Json, Router};
use http::HeaderValue;
use shared::error::AppError;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Result type for JSON handlers
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Request-level timeout; individual handlers carry no timeout logic
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    // XML audit upload (multipart, sized for a full batch)
    let upload = Router::new()
        .route("/api/audit/xml", post(audit::audit_xml))
        .layer(DefaultBodyLimit::max(
            MAX_FILES_PER_BATCH * MAX_FILE_BYTES + 1024 * 1024,
        ));

    // Landing page endpoints (JSON bodies)
    let public = Router::new()
        .route("/api/leads", post(leads::capture_lead))
        .route("/api/session/token", post(session::issue_token))
        .route("/api/blacklists/metadata", get(blacklist::metadata));

    let cors = cors_layer(&state.cors_origin);

    Router::new()
        .route("/", get(health::health_check))
        .route("/health", get(health::health_check))
        .merge(public)
        .merge(upload)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .with_state(state)
}

/// CORS layer from the configured origin ("*" = permissive).
fn cors_layer(origin: &str) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origin == "*" {
        return base.allow_origin(Any);
    }
    match origin.parse::<HeaderValue>() {
        Ok(value) => base.allow_origin(value),
        Err(_) => {
            tracing::warn!("Invalid CORS_ORIGIN {origin:?}, falling back to permissive CORS");
            base.allow_origin(Any)
        }
    }
}
