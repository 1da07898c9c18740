mod app;
mod auth;
mod config;
mod error;
mod saved_meals;
mod state;
mod store;
mod users;

#[cfg(test)]
mod testing;

use crate::config::{AppConfig, LogFormat};
use crate::state::AppState;

const DEFAULT_LOG_FILTER: &str = "mealmind_auth=debug,axum=info,tower_http=info";

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.with_target(false).json().init(),
        LogFormat::Text => builder.init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    init_tracing(config.log_format);
    let addr = config.listen_addr()?;

    let state = AppState::init(config).await?;
    tracing::info!(base_path = %state.config.base_path, "routes mounted");

    app::serve(app::build_app(state), addr).await
}
