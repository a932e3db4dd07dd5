//! HTTP/HTTPS server startup logic.
//!
//! `start_http_server` binds the plain development server;
//! `start_https_server` changes into the serving directory, bootstraps the
//! self-signed certificate pair, and binds a rustls-backed listener. Both
//! block until shutdown.

use std::net::SocketAddr;

use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;

use crate::config::{HttpConfig, HttpsConfig};
use crate::tls::{self, CertError};

use super::shutdown;
use super::static_files;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to change into serving directory '{directory}': {source}")]
    Chdir {
        directory: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Certificate(#[from] CertError),

    #[error("Failed to load TLS configuration: {0}")]
    TlsConfig(String),

    #[error("Server error: {0}")]
    Server(String),
}

/// Start the plain HTTP development server.
///
/// This function blocks until the server shuts down.
pub async fn start_http_server(config: &HttpConfig) -> Result<(), ServerError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = static_files::create_dev_router(&config.directory);

    let handle = Handle::new();
    shutdown::setup_shutdown_handler(handle.clone());

    tracing::info!(directory = %config.directory.display(), "Serving directory");
    tracing::info!("URL: http://localhost:{}", config.port);
    tracing::info!("WebGPU ready with cross-origin isolation headers");
    tracing::info!("Press Ctrl+C to stop");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Start the HTTPS development server.
///
/// Changes the working directory to the serving directory first, so the
/// certificate pair is looked up (and generated) inside the served tree.
/// Certificate bootstrap failures abort startup before any socket is bound.
/// This function blocks until the server shuts down.
pub async fn start_https_server(config: &HttpsConfig) -> Result<(), ServerError> {
    std::env::set_current_dir(&config.directory).map_err(|source| ServerError::Chdir {
        directory: config.directory.display().to_string(),
        source,
    })?;

    let (cert_path, key_path) = tls::ensure_certificate()?;

    let rustls_config = RustlsConfig::from_pem_file(&cert_path, &key_path)
        .await
        .map_err(|e| ServerError::TlsConfig(format!("Failed to load certificates: {}", e)))?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = static_files::create_https_router();

    let handle = Handle::new();
    shutdown::setup_shutdown_handler(handle.clone());

    tracing::info!("HTTPS server running at: https://localhost:{}", config.port);
    tracing::info!(directory = %config.directory.display(), "Serving directory");
    tracing::info!("Using self-signed certificate (browser will warn - click 'Advanced' and 'Proceed')");
    tracing::warn!("For WebGPU testing, ignore certificate warnings in browser");
    tracing::info!("Press Ctrl+C to stop");

    axum_server::bind_rustls(addr, rustls_config)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    tracing::info!("Server stopped");
    Ok(())
}
