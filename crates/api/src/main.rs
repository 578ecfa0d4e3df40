use std::sync::Arc;

use anyhow::Context;

use hanumantay_api::{AppConfig, app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    hanumantay_observability::init_with(config.log_format, "info");

    if !config.gemini.has_credential() {
        tracing::warn!("GEMINI_API_KEY not set; inquiry drafts will fall back to manual entry");
    }

    let services = Arc::new(app::services::AppServices::from_config(&config)?);
    let app = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
