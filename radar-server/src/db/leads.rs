use sqlx::PgPool;

/// Insert a lead, or refresh it if the email was already captured.
/// Returns the lead id.
pub async fn upsert(
    pool: &PgPool,
    email: &str,
    full_name: &str,
    phone: Option<&str>,
    business_sector: Option<&str>,
    risk_score_captured: i32,
    now: i64,
) -> Result<i64, sqlx::Error> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO leads (email, full_name, phone, business_sector, risk_score_captured, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6, $6)
         ON CONFLICT (email) DO UPDATE SET
             full_name = EXCLUDED.full_name,
             risk_score_captured = EXCLUDED.risk_score_captured,
             updated_at = EXCLUDED.updated_at
         RETURNING id",
    )
    .bind(email)
    .bind(full_name)
    .bind(phone)
    .bind(business_sector)
    .bind(risk_score_captured)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(id)
}
