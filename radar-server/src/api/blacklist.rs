//! Public blacklist metadata
//!
//! GET /api/blacklists/metadata — record count and provenance of the
//! loaded denylist, shown on the landing page.

use axum::Json;
use axum::extract::State;

use crate::state::AppState;

pub async fn metadata(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "last_updated": chrono::Utc::now().to_rfc3339(),
        "total_records": state.denylist.len(),
        "source": "SAT 69-B",
    }))
}
