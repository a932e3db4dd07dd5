//! Integration tests for the development server router.
//!
//! Drives the router in-process with `tower::ServiceExt::oneshot` against a
//! temporary fixture directory, so no socket is bound and tests can run in
//! parallel.

use axum::body::Body;
use axum::response::Response;
use axum::Router;
use http::header::CONTENT_TYPE;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use webgpu_dev_server::http::static_files::create_dev_router;

const WASM_MAGIC: &[u8] = b"\0asm\x01\0\0\0";

/// Build a fixture directory with one file of each interesting kind and a
/// router serving it. The `TempDir` must stay alive for the router to work.
fn serve_fixture() -> (TempDir, Router) {
    let dir = tempfile::tempdir().expect("create fixture dir");
    std::fs::write(dir.path().join("index.html"), "<html><body>hi</body></html>")
        .expect("write index.html");
    std::fs::write(dir.path().join("model.wasm"), WASM_MAGIC).expect("write model.wasm");
    std::fs::write(dir.path().join("app.js"), "console.log('hi');").expect("write app.js");
    std::fs::write(dir.path().join("style.css"), "body { margin: 0 }").expect("write style.css");

    let router = create_dev_router(dir.path());
    (dir, router)
}

async fn get(router: Router, path: &str) -> Response {
    router
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

fn assert_isolation_headers(response: &Response) {
    assert_eq!(
        response
            .headers()
            .get("cross-origin-embedder-policy")
            .expect("COEP header missing"),
        "require-corp"
    );
    assert_eq!(
        response
            .headers()
            .get("cross-origin-opener-policy")
            .expect("COOP header missing"),
        "same-origin"
    );
}

#[tokio::test]
async fn html_is_served_with_pinned_type_and_isolation_headers() {
    let (_dir, router) = serve_fixture();
    let response = get(router, "/index.html").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "text/html"
    );
    assert_isolation_headers(&response);
}

#[tokio::test]
async fn wasm_is_served_as_application_wasm() {
    let (_dir, router) = serve_fixture();
    let response = get(router, "/model.wasm").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "application/wasm"
    );

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], WASM_MAGIC);
}

#[tokio::test]
async fn js_is_served_as_application_javascript() {
    let (_dir, router) = serve_fixture();
    let response = get(router, "/app.js").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "application/javascript"
    );
}

#[tokio::test]
async fn other_extensions_keep_guessed_type() {
    let (_dir, router) = serve_fixture();
    let response = get(router, "/style.css").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(
        content_type.starts_with("text/css"),
        "unexpected content type: {content_type}"
    );
    assert_isolation_headers(&response);
}

#[tokio::test]
async fn missing_file_is_404_with_isolation_headers() {
    let (_dir, router) = serve_fixture();
    let response = get(router, "/missing.txt").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_isolation_headers(&response);
}

#[tokio::test]
async fn missing_wasm_is_not_mislabeled() {
    let (_dir, router) = serve_fixture();
    let response = get(router, "/missing.wasm").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    // The pin only applies to successful responses.
    let content_type = response.headers().get(CONTENT_TYPE);
    assert_ne!(
        content_type.map(|v| v.to_str().unwrap()),
        Some("application/wasm")
    );
    assert_isolation_headers(&response);
}

#[tokio::test]
async fn directory_request_resolves_index_html() {
    let (_dir, router) = serve_fixture();
    let response = get(router, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_isolation_headers(&response);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(body.windows(2).any(|w| w == b"hi"));
}

#[tokio::test]
async fn path_traversal_is_rejected() {
    let (_dir, router) = serve_fixture();
    // ServeDir normalizes the path; an escape attempt never reaches the
    // parent directory.
    let response = get(router, "/../Cargo.toml").await;

    assert_ne!(response.status(), StatusCode::OK);
    assert_isolation_headers(&response);
}
