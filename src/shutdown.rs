use tokio::signal;

/// Signal handler for graceful shutdown.
///
/// Resolves when SIGTERM or SIGINT (Ctrl+C) is received, letting the
/// server finish in-flight requests before exiting.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C received");
        },
        _ = terminate => {
            tracing::info!("SIGTERM received");
        },
    }

    tracing::info!("Shutting down gracefully...");
}
