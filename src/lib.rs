//! Local development servers for WebGPU and WebAssembly testing.
//!
//! Two binaries share this crate:
//! - `dev-server`: a plain HTTP static file server that adds the
//!   cross-origin isolation headers WebGPU requires and pins the content
//!   types of `.wasm`, `.js` and `.html` files.
//! - `https-server`: an HTTPS static file server backed by a self-signed
//!   certificate, generated with the `openssl` CLI on first start.

pub mod config;
pub mod http;
pub mod middleware;
pub mod mime;
pub mod tls;
