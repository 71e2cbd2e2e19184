//! Lead capture API
//!
//! POST /api/leads — persist a landing-page lead (upsert on email) and
//! record a LEAD_CAPTURED entry in the system audit log.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::json;
use shared::error::{AppError, ErrorCode};
use shared::util::now_millis;

use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;

/// Score above which a captured lead is logged as critical
const CRITICAL_SCORE_THRESHOLD: i32 = 80;

#[derive(Deserialize)]
pub struct LeadRequest {
    pub email: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub business_sector: Option<String>,
    pub risk_score_captured: Option<i32>,
}

pub async fn capture_lead(
    State(state): State<AppState>,
    Json(req): Json<LeadRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ServiceError> {
    let email = req.email.trim().to_lowercase();

    if email.is_empty() || !email.contains('@') {
        return Err(AppError::with_message(ErrorCode::LeadEmailRequired, "Invalid email").into());
    }

    // Missing form fields degrade to defaults, never to a rejected lead
    let full_name = req
        .full_name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| "Anonymous".to_string());
    let risk_score = req.risk_score_captured.unwrap_or(0);
    let now = now_millis();

    let lead_id = db::leads::upsert(
        &state.pool,
        &email,
        &full_name,
        req.phone.as_deref(),
        req.business_sector.as_deref(),
        risk_score,
        now,
    )
    .await?;

    // Best-effort audit trail; a failed write never fails the capture
    let risk_level = if risk_score > CRITICAL_SCORE_THRESHOLD {
        "CRITICO"
    } else {
        "MEDIO"
    };
    let meta = json!({ "email": email, "score": risk_score });
    if let Err(e) =
        db::system_audit::log(&state.pool, "LEAD_CAPTURED", Some(risk_level), Some(&meta), now)
            .await
    {
        tracing::warn!(error = %e, "Failed to write system audit entry");
    }

    tracing::info!(lead_id, email = %email, score = risk_score, "Lead captured");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Lead captured successfully",
            "leadId": lead_id,
        })),
    ))
}
