//! HTTPS development server.
//!
//! Generates a self-signed certificate on first start (via the `openssl`
//! CLI) and serves a directory over TLS for WebGPU testing.
//!
//! Usage: `https-server [directory] [port]` — note the argument order is
//! reversed relative to `dev-server`; existing callers depend on it.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use webgpu_dev_server::config::{
    HttpsConfig, DEFAULT_HTTPS_DIR, DEFAULT_HTTPS_PORT, DEFAULT_LOG_FILTER,
};
use webgpu_dev_server::http::start_https_server;

/// WebGPU HTTPS test server with a self-signed certificate
#[derive(Parser, Debug)]
#[command(name = "https-server", version, about)]
struct Args {
    /// Directory to serve (the process changes into it before binding)
    #[arg(default_value = DEFAULT_HTTPS_DIR)]
    directory: PathBuf,

    /// Port to listen on
    #[arg(default_value_t = DEFAULT_HTTPS_PORT)]
    port: u16,

    /// Log level filter (e.g., "webgpu_dev_server=debug,tower_http=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = HttpsConfig {
        directory: args.directory,
        port: args.port,
    };

    tracing::info!("WebGPU HTTPS Test Server");
    start_https_server(&config).await?;

    Ok(())
}
