//! Mock session token endpoint
//!
//! POST /api/session/token — issues a short-lived JWT scoped to reading
//! the audit report. Nothing in this service verifies the token; it exists
//! so the landing page can exercise the full flow before real accounts land.

use axum::Json;
use axum::extract::State;
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};

use super::ApiResult;
use crate::state::AppState;

/// Token lifetime in seconds (1 hour)
const TOKEN_TTL_SECS: i64 = 3600;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub scope: String,
    pub exp: usize,
}

#[derive(Deserialize)]
pub struct TokenRequest {
    pub email: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub token: String,
    #[serde(rename = "expiresIn")]
    pub expires_in: i64,
}

pub async fn issue_token(
    State(state): State<AppState>,
    Json(req): Json<TokenRequest>,
) -> ApiResult<TokenResponse> {
    let email = req.email.trim().to_lowercase();
    if email.is_empty() {
        return Err(AppError::with_message(
            ErrorCode::LeadEmailRequired,
            "Email required",
        ));
    }

    let token = create_token(&email, &state.jwt_secret).map_err(|e| {
        tracing::error!(error = %e, "JWT creation failed");
        AppError::new(ErrorCode::InternalError)
    })?;

    Ok(Json(TokenResponse {
        token,
        expires_in: TOKEN_TTL_SECS,
    }))
}

/// Sign an HS256 token carrying the report-read scope.
fn create_token(email: &str, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let expiration = (Utc::now() + Duration::seconds(TOKEN_TTL_SECS)).timestamp();

    let claims = Claims {
        sub: email.to_string(),
        scope: "read:report".to_string(),
        exp: expiration as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

    #[test]
    fn issued_token_roundtrips() {
        let token = create_token("lead@example.com", "test-secret").unwrap();

        let data = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"test-secret"),
            &Validation::new(Algorithm::HS256),
        )
        .unwrap();

        assert_eq!(data.claims.sub, "lead@example.com");
        assert_eq!(data.claims.scope, "read:report");
        assert!(data.claims.exp > Utc::now().timestamp() as usize);
    }

    #[test]
    fn wrong_secret_fails_validation() {
        let token = create_token("lead@example.com", "test-secret").unwrap();

        let result = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"other-secret"),
            &Validation::new(Algorithm::HS256),
        );
        assert!(result.is_err());
    }
}
