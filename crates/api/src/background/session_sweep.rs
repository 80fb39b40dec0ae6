//! Periodic removal of expired admin sessions.
//!
//! Expiry is already enforced whenever a token is validated; the sweep only
//! keeps the session table from accumulating dead rows.

use std::sync::Arc;
use std::time::Duration;

use helpdesk_core::session_manager::SessionManager;
use tokio_util::sync::CancellationToken;

/// Run the sweep loop until `cancel` is triggered.
pub async fn run(sessions: Arc<SessionManager>, every: Duration, cancel: CancellationToken) {
    tracing::info!(interval_secs = every.as_secs(), "Session sweep started");

    let mut interval = tokio::time::interval(every);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Session sweep stopping");
                break;
            }
            _ = interval.tick() => {
                match sessions.purge_expired().await {
                    Ok(0) => tracing::debug!("Session sweep: nothing to purge"),
                    Ok(purged) => tracing::info!(purged, "Session sweep: removed expired sessions"),
                    Err(e) => tracing::error!(error = %e, "Session sweep failed"),
                }
            }
        }
    }
}
