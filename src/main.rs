mod domain;
mod clients;
mod http;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod product_actor;

use clap::Parser;
use tracing::{info, warn};
use crate::app_system::{setup_tracing, CatalogSystem, Config};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = Config::parse();
    setup_tracing(config.log_format);

    info!(bind = %config.bind, "Starting product catalog");

    let system = CatalogSystem::new(config.buffer_size.into());

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .map_err(|e| format!("failed to bind {}: {}", config.bind, e))?;

    let served = http::serve(listener, system.product_client.clone(), shutdown_signal()).await;
    if let Err(e) = &served {
        warn!(error = %e, "HTTP server stopped with an error");
    }

    system.shutdown().await?;
    served.map_err(|e| e.to_string())?;

    info!("Product catalog stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
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
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
