//! Application state for radar-server

use sqlx::PgPool;
use std::sync::Arc;

use crate::audit::denylist::StaticDenylist;
use crate::config::Config;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
    /// Issuer denylist, loaded once at startup and immutable afterwards
    pub denylist: Arc<StaticDenylist>,
    /// JWT secret for mock session tokens
    pub jwt_secret: String,
    /// Allowed CORS origin
    pub cors_origin: String,
    /// Environment name (reported by the health check)
    pub environment: String,
}

impl AppState {
    /// Create a new AppState
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPool::connect(&config.database_url).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        let denylist = match &config.denylist_path {
            Some(path) => {
                let list = StaticDenylist::from_path(path)?;
                tracing::info!("Denylist loaded from {path} ({} issuers)", list.len());
                list
            }
            None => {
                let list = StaticDenylist::builtin();
                tracing::info!("Using built-in denylist ({} issuers)", list.len());
                list
            }
        };

        Ok(Self {
            pool,
            denylist: Arc::new(denylist),
            jwt_secret: config.jwt_secret.clone(),
            cors_origin: config.cors_origin.clone(),
            environment: config.environment.clone(),
        })
    }
}
