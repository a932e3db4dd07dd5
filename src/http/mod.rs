//! HTTP server module.
//!
//! Startup logic for both development servers:
//! - **Plain HTTP**: static files with cross-origin isolation headers and
//!   pinned content types.
//! - **HTTPS**: static files over TLS with a self-signed certificate,
//!   without the header and content type treatment (the two tools diverge
//!   here on purpose).
//!
//! Both shut down on Ctrl+C/SIGTERM.

mod server;
mod shutdown;
pub mod static_files;

pub use server::{start_http_server, start_https_server, ServerError};
