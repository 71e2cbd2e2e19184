//! System audit log operations

use sqlx::PgPool;

/// Write a system audit entry
pub async fn log(
    pool: &PgPool,
    event_type: &str,
    risk_level_detected: Option<&str>,
    meta: Option<&serde_json::Value>,
    now: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO system_audit (event_type, risk_level_detected, meta_json, created_at) VALUES ($1, $2, $3, $4)"
    )
    .bind(event_type)
    .bind(risk_level_detected)
    .bind(meta)
    .bind(now)
    .execute(pool)
    .await?;
    Ok(())
}
