//! Self-signed certificate bootstrap for the HTTPS server.
//!
//! The certificate pair lives as `server.crt`/`server.key` in the current
//! working directory; the server changes into the serving directory before
//! calling in here, so the pair sits inside the served tree. An existing
//! pair is reused as-is with no validation of contents, expiry or subject.
//! A missing pair is generated with the `openssl` command line tool.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::{CERT_FILE, CERT_SUBJECT, CERT_VALIDITY_DAYS, KEY_FILE};

/// Certificate bootstrap error. Both variants are fatal to HTTPS startup;
/// no listener is created and there is no retry.
#[derive(Debug, thiserror::Error)]
pub enum CertError {
    #[error(
        "OpenSSL not found. Please install OpenSSL first.\n\
         On macOS: brew install openssl\n\
         On Ubuntu: sudo apt-get install openssl"
    )]
    OpenSslMissing,

    #[error("Failed to create certificate (openssl exited with {status}). Make sure OpenSSL is installed.")]
    Generation { status: std::process::ExitStatus },

    #[error("Failed to run openssl: {0}")]
    Io(#[from] io::Error),
}

/// Ensure a certificate pair exists in the current working directory.
///
/// Returns the paths of `server.crt` and `server.key`, generating them with
/// `openssl` when either file is missing.
pub fn ensure_certificate() -> Result<(PathBuf, PathBuf), CertError> {
    ensure_certificate_in(Path::new("."))
}

/// Ensure a certificate pair exists under `dir`.
pub fn ensure_certificate_in(dir: &Path) -> Result<(PathBuf, PathBuf), CertError> {
    let cert_path = dir.join(CERT_FILE);
    let key_path = dir.join(KEY_FILE);

    if cert_path.exists() && key_path.exists() {
        tracing::info!("Using existing certificate");
        return Ok((cert_path, key_path));
    }

    tracing::info!("Creating self-signed certificate...");

    let status = Command::new("openssl")
        .args(openssl_args(&cert_path, &key_path))
        .status()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CertError::OpenSslMissing,
            _ => CertError::Io(e),
        })?;

    if !status.success() {
        return Err(CertError::Generation { status });
    }

    tracing::info!("Certificate created successfully");
    Ok((cert_path, key_path))
}

/// Arguments for a one-shot self-signed certificate request: 365-day
/// validity, unencrypted key, fixed subject with CN=localhost.
fn openssl_args(cert_path: &Path, key_path: &Path) -> Vec<String> {
    vec![
        "req".to_string(),
        "-new".to_string(),
        "-x509".to_string(),
        "-keyout".to_string(),
        key_path.display().to_string(),
        "-out".to_string(),
        cert_path.display().to_string(),
        "-days".to_string(),
        CERT_VALIDITY_DAYS.to_string(),
        "-nodes".to_string(),
        "-subj".to_string(),
        CERT_SUBJECT.to_string(),
    ]
}
