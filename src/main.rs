//! Album catalog server binary

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use album_catalog::api::{create_router, AppState};
use album_catalog::catalog::Catalog;
use album_catalog::config::{AppConfig, LogFormat, LoggingSection};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config.logging);

    let catalog = if config.catalog.seed {
        Catalog::seeded()
    } else {
        Catalog::new()
    };
    tracing::info!(albums = catalog.len().await, "Catalog initialised");

    let router = create_router(AppState::new(Arc::new(catalog)));

    // Start server
    let addr = config.listen_addr().context("invalid server configuration")?;
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    tracing::info!(%addr, "Listening for HTTP traffic");

    axum::serve(listener, router).await?;

    Ok(())
}

/// Install the global subscriber. `RUST_LOG` wins over `logging.level`; a bare
/// level such as `debug` applies to this crate and the request trace layer.
fn init_tracing(logging: &LoggingSection) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directives(&logging.level)))
        .unwrap_or_else(|_| EnvFilter::new("album_catalog=info,tower_http=info"));

    let fmt_layer = match logging.format {
        LogFormat::Json => tracing_subscriber::fmt::layer().json().boxed(),
        LogFormat::Text => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn filter_directives(level: &str) -> String {
    let level = level.trim();
    if level.contains('=') || level.contains(',') {
        level.to_string()
    } else {
        format!("album_catalog={0},tower_http={0}", level)
    }
}
