//! InfoCheck web server.
//!
//! Run with: cargo run -p infocheck-web

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use infocheck_web::config::Config;
use infocheck_web::router::build_router;
use infocheck_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load()?;
    info!(
        search_url = %config.backend.search_url,
        rest_base_url = %config.backend.rest_base_url,
        "Starting InfoCheck web server"
    );

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let state = Arc::new(AppState::new(config)?);
    let app = build_router(state);

    info!("Server listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
