use anyhow::{Context, Result};
use axum_server::Handle;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info};

/// In-flight requests get this long to finish after a shutdown signal.
const GRACE_PERIOD: Duration = Duration::from_secs(30);

/// Starts a task that drains `handle` on Ctrl+C or SIGTERM.
pub(crate) fn watch(handle: Handle<SocketAddr>) {
    tokio::spawn(async move {
        if let Err(e) = signal_received().await {
            error!("Error while waiting for shutdown signal: {e}");
            return;
        }
        info!(grace_secs = GRACE_PERIOD.as_secs(), "Shutdown signal received, draining connections");
        handle.graceful_shutdown(Some(GRACE_PERIOD));
    });
}

async fn signal_received() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => res,
        res = terminate => res,
    }
}
