use anyhow::Context;
use cjk_core::ServiceConfig;
use cjk_server::{app_with_state, state::AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::var("CJK_FORMATTER_CONFIG") {
        Ok(path) => ServiceConfig::load(&path).with_context(|| format!("loading config {path}"))?,
        Err(_) => ServiceConfig::default(),
    }
    .with_env_overrides()?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, max_input_bytes = config.max_input_bytes, "cjk-server listening");

    axum::serve(listener, app_with_state(AppState::new(config))).await?;
    Ok(())
}
