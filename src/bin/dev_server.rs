//! Plain HTTP development server.
//!
//! Serves a directory with the cross-origin isolation headers and content
//! types WebGPU and WebAssembly need.
//!
//! Usage: `dev-server [port] [directory]`

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use webgpu_dev_server::config::{HttpConfig, DEFAULT_HTTP_PORT, DEFAULT_LOG_FILTER};
use webgpu_dev_server::http::start_http_server;

/// WebGPU development server with cross-origin isolation headers
#[derive(Parser, Debug)]
#[command(name = "dev-server", version, about)]
struct Args {
    /// Port to listen on
    #[arg(default_value_t = DEFAULT_HTTP_PORT)]
    port: u16,

    /// Directory to serve (defaults to the current directory)
    directory: Option<PathBuf>,

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

    let config = HttpConfig {
        port: args.port,
        directory: args.directory.unwrap_or_else(|| PathBuf::from(".")),
    };

    tracing::info!("WebGPU Development Server");
    start_http_server(&config).await?;

    Ok(())
}
