//! User Directory Server binary.

use std::net::SocketAddr;
use std::time::Duration;

use directory_server::{config::Config, create_app, create_state, create_store, init_tracing};
use tokio::signal;
use user_store::UserStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    init_tracing(&config.log_level);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.environment,
        "Starting User Directory Server"
    );

    let store = create_store(&config);
    tracing::info!(users = store.count_users().await?, "User store ready");

    let state = create_state(config.clone(), store);
    let app = create_app(state);

    let addr: SocketAddr = config.server_addr().parse()?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");
    tracing::info!("Health check: http://localhost:{}/health", config.port);
    tracing::info!("Dashboard: http://localhost:{}/", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(Duration::from_secs(
            config.shutdown_timeout_secs,
        )))
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Waits for Ctrl+C or SIGTERM, then arms a deadline for draining connections.
async fn shutdown_signal(grace_period: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down gracefully");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down gracefully");
        }
    }

    tokio::spawn(async move {
        tokio::time::sleep(grace_period).await;
        tracing::error!(
            timeout_secs = grace_period.as_secs(),
            "Could not close connections in time, forcing shutdown"
        );
        std::process::exit(1);
    });
}
