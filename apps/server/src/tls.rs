use anyhow::{Context, Result, bail};
use axum_server::tls_rustls::RustlsConfig;
use vapps::domain::config::SslConfig;

/// Fails early when a configured certificate or key is missing.
pub(crate) fn check_files(ssl: &SslConfig) -> Result<()> {
    for (label, path) in [("certificate", &ssl.cert), ("key", &ssl.key)] {
        if !path.is_file() {
            bail!("SSL {label} not found at: {}", path.display());
        }
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = ssl.key.metadata()?.permissions().mode();
        if mode & 0o077 != 0 {
            tracing::warn!(key = %ssl.key.display(), mode = %format!("{mode:o}"), "SSL private key is readable by others (expected 600)");
        }
    }
    Ok(())
}

pub(crate) async fn load(ssl: &SslConfig) -> Result<RustlsConfig> {
    RustlsConfig::from_pem_file(&ssl.cert, &ssl.key).await.context("Failed to load SSL/TLS certificates")
}
