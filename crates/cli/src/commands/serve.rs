use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use newsdesk_core::Config;
use newsdesk_http::{AppState, create_router};
use newsdesk_upstream::{NewsClient, NewsSource};

pub(crate) async fn run(config_path: &Path, port: u16, host: String) -> Result<()> {
    let config = Config::load(config_path)?;
    let client = NewsClient::new(&config).context("failed to build upstream client")?;
    tracing::info!(
        categories = config.categories.len(),
        page_size = config.page_size,
        cache_enabled = config.cache.enabled,
        cache_ttl_secs = config.cache.ttl_secs,
        "configuration ready"
    );

    let upstream: Arc<dyn NewsSource> = Arc::new(client);
    let state = Arc::new(AppState::new(config, upstream));
    let router = create_router(state);

    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, router).await?;

    Ok(())
}
