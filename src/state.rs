use crate::config::AppConfig;
use crate::store::{PgStore, Store};
use anyhow::Context;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init(config: AppConfig) -> anyhow::Result<Self> {
        let config = Arc::new(config);
        if config.jwt.secret.is_none() {
            tracing::warn!("JWT_SECRET is not set; logins will fail until it is");
        }

        let db = sqlx::postgres::PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;

        if let Err(e) = sqlx::migrate!("./migrations").run(&db).await {
            tracing::warn!(error = %e, "migration failed; continuing");
        }

        Ok(Self::from_parts(Arc::new(PgStore::new(db)), config))
    }

    pub fn from_parts(store: Arc<dyn Store>, config: Arc<AppConfig>) -> Self {
        Self { store, config }
    }

    #[cfg(test)]
    pub fn fake(store: Arc<dyn Store>) -> Self {
        Self::from_parts(store, Arc::new(crate::testing::test_config()))
    }
}
