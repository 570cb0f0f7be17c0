use std::sync::Arc;

use anyhow::Context;
use deckmasters_api::config::Config;
use deckmasters_api::routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    let port = config.port;

    eprintln!("🛠  Deck Masters API v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Lead intake:    http://0.0.0.0:{}/api/lead", port);
    eprintln!("   Media upload:   http://0.0.0.0:{}/api/upload-portfolio", port);
    eprintln!("   Portfolio save: http://0.0.0.0:{}/api/save-project", port);
    eprintln!(
        "   Content repo:   {}/{}\n",
        config.repo_owner, config.repo_name
    );

    let app = routes::app(Arc::new(config));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;
    tracing::info!(port, "server started");
    axum::serve(listener, app).await?;

    Ok(())
}
