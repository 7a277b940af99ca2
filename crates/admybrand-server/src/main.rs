mod config;
mod routes;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();

    if !config.static_dir.join("index.html").exists() {
        tracing::warn!(
            "No index.html in {}; build the site with `trunk build` first",
            config.static_dir.display()
        );
    }

    let app = routes::build_router(&config.static_dir);

    let addr = config.addr();
    info!("Server listening on {}", addr);
    info!("Serving static files from {}", config.static_dir.display());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
