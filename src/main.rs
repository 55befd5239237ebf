use anyhow::Context;
use clap::Parser;
use shopping_list_rust::config::ServerConfig;
use shopping_list_rust::router::create_app_router;
use shopping_list_rust::shopping::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shopping_list_rust::init_tracing("info,shopping_list_rust=debug");

    let config = ServerConfig::parse();

    // Initialize application state
    let data_file = config.resolve_data_file();
    let state = Arc::new(match &config.assets_dir {
        Some(dir) => AppState::with_assets_dir(data_file, dir),
        None => AppState::new(data_file),
    });

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let url = config.page_url();
    tracing::info!("Shopping list running on {}", url);

    if !config.no_browser {
        tokio::task::spawn_blocking(move || open_browser(&url));
    }

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

/// Opens `url` in the default browser; failure is logged, not fatal.
fn open_browser(url: &str) {
    if let Err(e) = open::that(url) {
        tracing::warn!(url, error = %e, "could not open browser");
    }
}
