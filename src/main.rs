use dotenv::dotenv;
use repository_dates::app;
use repository_dates::config::AppConfig;
use repository_dates::state::AppState;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Log initialized");

    let config = AppConfig::from_env();
    tracing::info!(
        "Search API: {} (default rows={}, timeout={:?})",
        config.search_api_url,
        config.default_rows,
        config.request_timeout
    );
    if config.debug {
        tracing::warn!("DEBUG is enabled; /error_check/ will raise an intentional error");
    }

    let http_client = config.build_http_client()?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app_state = AppState::new(config, http_client);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app(app_state)).await?;

    Ok(())
}
