//! Shutdown signal handling.
//!
//! Stops the server on Ctrl+C or SIGTERM. In-flight requests are not
//! drained; the listener is torn down immediately, which is all a throwaway
//! local development server needs.

use axum_server::Handle;

/// Stop the server when Ctrl+C or SIGTERM arrives.
pub fn setup_shutdown_handler(handle: Handle) {
    tokio::spawn(async move {
        let ctrl_c = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("Failed to install SIGTERM handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                tracing::info!("Received Ctrl+C, stopping server");
            }
            _ = terminate => {
                tracing::info!("Received SIGTERM, stopping server");
            }
        }

        handle.shutdown();
    });
}
