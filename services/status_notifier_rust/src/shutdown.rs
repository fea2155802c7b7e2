//! Process shutdown signals (Ctrl-C, and SIGTERM on unix)

use log::{error, info};
use std::future::Future;
use std::io;

/// Resolves once Ctrl-C or SIGTERM arrives.
///
/// A signal whose handler cannot be installed never resolves, so the poller
/// keeps running on the remaining one instead of exiting at startup.
pub async fn shutdown_signal() {
    let ctrl_c = wait_for("Ctrl-C", tokio::signal::ctrl_c());

    #[cfg(unix)]
    let terminate = wait_for("SIGTERM", async {
        use tokio::signal::unix::{signal, SignalKind};
        signal(SignalKind::terminate())?.recv().await;
        Ok::<(), io::Error>(())
    });
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}

pub(crate) async fn wait_for<F>(name: &str, signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("Received {}, shutting down", name),
        Err(err) => {
            error!("Unable to listen for {}: {}", name, err);
            std::future::pending::<()>().await;
        }
    }
}
