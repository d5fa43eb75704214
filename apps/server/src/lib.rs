//! # Various Apps Server
//!
//! Serves the localized portfolio pages, the sitemap, `robots.txt` and a small
//! JSON content API, built on `Axum`.
//!
//! ## Example
//! ```no_run
//! use vapps_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(8080)
//!         .build()?
//!         .run()
//!         .await
//! }
//! ```

mod locale;
mod pages;
mod router;
mod shutdown;
mod tls;

use anyhow::{Context, Result, anyhow};
use axum::Router;
use axum_server::Handle;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;
use vapps::domain::config::SiteConfig;
use vapps::kernel::server::state::SiteState;

/// Collects configuration overrides, then assembles the [`Server`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: SiteConfig,
}

impl ServerBuilder {
    /// Replaces the whole configuration.
    pub fn config(mut self, cfg: SiteConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    /// Directory of the assets served for file-like paths (`/favicon.ico`).
    pub fn static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cfg.storage.static_dir = dir.into();
        self
    }

    /// Initializes the feature slices and the shared state.
    ///
    /// # Errors
    /// Returns an error if configured TLS files are missing, the content
    /// records are invalid, or a message catalog fails to parse.
    pub fn build(self) -> Result<Server> {
        if let Some(ssl) = &self.cfg.server.ssl {
            tls::check_files(ssl)?;
        }

        info!(
            base_url = %self.cfg.site.base_url,
            default_locale = %self.cfg.site.default_locale,
            "Initializing site"
        );

        let slices = vapps::init(&self.cfg).map_err(|e| anyhow!("Site bootstrap failed: {e}"))?;
        let state = SiteState::builder()
            .config(self.cfg)
            .register_slices(slices)
            .build()
            .context("Failed to finalize site state registry")?;

        info!(slices = ?state.slice_names(), "Feature slices registered");
        Ok(Server { state })
    }
}

/// A fully initialized server, ready to [`run`](Server::run).
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: SiteState,
}

impl Server {
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// The complete application router, for serving or in-process testing.
    pub fn router(&self) -> Router {
        router::init(self.state.clone())
    }

    #[must_use]
    pub const fn state(&self) -> &SiteState {
        &self.state
    }

    /// Serves HTTP, or HTTPS when TLS is configured, until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    /// Returns an error if binding the address or loading the certificates fails.
    pub async fn run(self) -> Result<()> {
        let server = &self.state.config.server;
        let address = SocketAddr::new(server.address, server.port);
        let app = self.router().into_make_service();

        let handle = Handle::<SocketAddr>::new();
        shutdown::watch(handle.clone());

        if let Some(ssl) = &server.ssl {
            let tls = tls::load(ssl).await?;
            info!("Listening on https://{address}");
            axum_server::bind_rustls(address, tls).handle(handle).serve(app).await.context("HTTPS server failed")?;
        } else {
            info!("Listening on http://{address}");
            axum_server::bind(address).handle(handle).serve(app).await.context("HTTP server failed")?;
        }

        info!("Server shutdown complete");
        Ok(())
    }
}
