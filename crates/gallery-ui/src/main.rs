use anyhow::Result;
use gallery_ui::{api, AppState, Config};
use telemetry::LogConfig;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Held for the lifetime of the process when file logging is on
    let _log_guard = telemetry::init_structured_logging(
        LogConfig::new("gallery-ui").with_version(env!("CARGO_PKG_VERSION")),
    );

    // Load configuration
    let config = Config::from_env()?;
    info!("Starting gallery UI on {}", config.bind_addr);
    info!(
        cloud_name = %config.cloud_name,
        media_base_url = %config.media_base_url,
        catalog = ?config.catalog_path,
        "media configuration"
    );

    // Initialize application state
    let addr = config.socket_addr()?;
    let state = AppState::new(config)?;

    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Gallery UI listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received terminate signal");
        },
    }

    info!("Shutting down gracefully...");
}
