//! Configuration and constants.
//!
//! Defines the default ports and directories for both servers, the
//! certificate artifacts used by the HTTPS bootstrap, and the cross-origin
//! isolation header values required by WebGPU. The two servers are
//! intentionally separate tools with separate defaults and argument orders;
//! they do not share a configuration surface.

use std::path::PathBuf;

// =============================================================================
// Server Defaults
// =============================================================================

/// Default port for the plain HTTP development server
pub const DEFAULT_HTTP_PORT: u16 = 3377;

/// Default port for the HTTPS development server
pub const DEFAULT_HTTPS_PORT: u16 = 3443;

/// Default serving directory for the HTTPS server (viewer build output)
pub const DEFAULT_HTTPS_DIR: &str = "build_web/apps/viewer";

// =============================================================================
// Cross-Origin Isolation Headers
// =============================================================================
// WebGPU and SharedArrayBuffer require a cross-origin isolated context, which
// browsers grant only when both headers are present on every response.
//
// References:
// - https://developer.mozilla.org/docs/Web/HTTP/Headers/Cross-Origin-Embedder-Policy
// - https://developer.mozilla.org/docs/Web/HTTP/Headers/Cross-Origin-Opener-Policy

/// Cross-Origin-Embedder-Policy header name (lowercase for `HeaderName::from_static`)
pub const COEP_HEADER: &str = "cross-origin-embedder-policy";

/// Cross-Origin-Embedder-Policy value sent on every HTTP response
pub const COEP_VALUE: &str = "require-corp";

/// Cross-Origin-Opener-Policy header name
pub const COOP_HEADER: &str = "cross-origin-opener-policy";

/// Cross-Origin-Opener-Policy value sent on every HTTP response
pub const COOP_VALUE: &str = "same-origin";

// =============================================================================
// Certificate Bootstrap
// =============================================================================

/// Certificate file, looked up relative to the (post-chdir) serving directory
pub const CERT_FILE: &str = "server.crt";

/// Private key file, looked up relative to the (post-chdir) serving directory
pub const KEY_FILE: &str = "server.key";

/// Validity of freshly generated certificates, in days
pub const CERT_VALIDITY_DAYS: u32 = 365;

/// Subject for generated certificates; CN stays "localhost" so browsers can
/// at least match the hostname when the user clicks through the warning
pub const CERT_SUBJECT: &str = "/C=US/ST=CA/L=localhost/O=WebGPU-Test/CN=localhost";

// =============================================================================
// Logging
// =============================================================================

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "webgpu_dev_server=info,tower_http=info";

/// Configuration for the plain HTTP development server.
///
/// CLI order: `dev-server [port] [directory]`.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Port to listen on
    pub port: u16,
    /// Directory served at the root path
    pub directory: PathBuf,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_HTTP_PORT,
            directory: PathBuf::from("."),
        }
    }
}

/// Configuration for the HTTPS development server.
///
/// CLI order: `https-server [directory] [port]` — reversed relative to
/// `dev-server`. Existing callers rely on the order, so it is preserved.
#[derive(Debug, Clone)]
pub struct HttpsConfig {
    /// Directory the process changes into before serving
    pub directory: PathBuf,
    /// Port to listen on
    pub port: u16,
}

impl Default for HttpsConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_HTTPS_DIR),
            port: DEFAULT_HTTPS_PORT,
        }
    }
}
