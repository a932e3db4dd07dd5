//! Content type pinning for WebAssembly development.
//!
//! `ServeDir` guesses content types from file extensions, but browsers are
//! strict about the types needed for WebAssembly streaming compilation and
//! module scripts. `.wasm`, `.js` and `.html` therefore get pinned values;
//! every other extension keeps whatever the guesser reports.

/// Content type for `.wasm` files, required by
/// `WebAssembly.instantiateStreaming`.
pub const MIME_WASM: &str = "application/wasm";

/// Content type for `.js` files.
pub const MIME_JS: &str = "application/javascript";

/// Content type for `.html` files.
pub const MIME_HTML: &str = "text/html";

/// Return the pinned content type for `path`, if its extension has one.
pub fn override_for_path(path: &str) -> Option<&'static str> {
    if path.ends_with(".wasm") {
        Some(MIME_WASM)
    } else if path.ends_with(".js") {
        Some(MIME_JS)
    } else if path.ends_with(".html") {
        Some(MIME_HTML)
    } else {
        None
    }
}
