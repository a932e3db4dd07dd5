//! Request middleware for the plain HTTP development server.
//!
//! Two concerns live here: pinning content types for WebAssembly-related
//! extensions after static file resolution, and emitting one log line per
//! handled request with a status marker.

use axum::{extract::Request, middleware::Next, response::Response};
use http::header::{HeaderValue, CONTENT_TYPE};

use crate::mime;

/// Middleware that pins the Content-Type for `.wasm`, `.js` and `.html`.
///
/// Runs after static file resolution so it sees the final response. Only
/// successful responses are rewritten; a 404 page for `/missing.wasm` keeps
/// its own content type.
pub async fn mime_override_layer(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let mut response = next.run(request).await;

    if response.status().is_success() {
        if let Some(content_type) = mime::override_for_path(&path) {
            response
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
    }

    response
}

/// Middleware that logs one line per handled request.
pub async fn request_log_layer(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;

    let line = format!("{} {} {}", method, path, response.status().as_u16());
    tracing::info!("{} {}", marker_for(&line), line);

    response
}

/// Pick the marker for a log line by substring: "200" anywhere means
/// success, "404" a missing file, anything else is informational. Substring
/// matching over the whole line (not the status code) is deliberate.
fn marker_for(line: &str) -> &'static str {
    if line.contains("200") {
        "✅"
    } else if line.contains("404") {
        "❌"
    } else {
        "ℹ️"
    }
}
