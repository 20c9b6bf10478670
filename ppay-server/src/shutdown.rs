//! Signal handling for graceful shutdown and config reload.

use crate::config::{ConfigLoader, LoadedConfig};
use crate::state::AppState;
use ppay_core::gateway::{BuildGatewayError, HttpGateway};
use std::sync::Arc;
use tokio::signal::unix::{SignalKind, signal};
use tokio::sync::Notify;

/// Creates a future that completes when a shutdown signal is received.
///
/// Listens for SIGTERM and SIGINT (Ctrl+C).
pub async fn shutdown_signal() {
    let (mut sigterm, mut sigint) =
        match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
            (Ok(term), Ok(int)) => (term, int),
            (Err(e), _) | (_, Err(e)) => {
                tracing::error!("Failed to install signal handlers ({}), using Ctrl+C only", e);
                let _ = tokio::signal::ctrl_c().await;
                return;
            }
        };

    tokio::select! {
        _ = sigterm.recv() => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
        _ = sigint.recv() => {
            tracing::info!("Received SIGINT, initiating graceful shutdown");
        }
    }
}

/// Spawns a task that listens for SIGHUP and reloads the configuration.
///
/// Returns a Notify that can be used to signal when shutdown is complete.
pub fn spawn_config_reload_handler(
    state: AppState,
    config_loader: Arc<ConfigLoader>,
) -> Arc<Notify> {
    let shutdown_notify = Arc::new(Notify::new());
    let shutdown_notify_clone = shutdown_notify.clone();

    tokio::spawn(async move {
        let mut sighup = match signal(SignalKind::hangup()) {
            Ok(sighup) => sighup,
            Err(e) => {
                tracing::error!("Failed to install SIGHUP handler, config reload disabled: {}", e);
                return;
            }
        };

        loop {
            tokio::select! {
                _ = sighup.recv() => {
                    tracing::info!("Received SIGHUP, reloading configuration");
                    let result = match config_loader.reload() {
                        Ok(loaded_config) => apply_reload(&state, loaded_config)
                            .await
                            .map_err(|e| e.to_string()),
                        Err(e) => Err(e.to_string()),
                    };
                    match result {
                        Ok(()) => tracing::info!("Configuration reloaded successfully"),
                        Err(e) => tracing::error!("Failed to reload configuration: {}", e),
                    }
                }
                _ = shutdown_notify_clone.notified() => {
                    tracing::debug!("Config reload handler shutting down");
                    break;
                }
            }
        }
    });

    shutdown_notify
}

/// Swap in a freshly loaded configuration.
///
/// The new gateway is built first so a bad upstream section leaves the
/// running one untouched.
async fn apply_reload(state: &AppState, loaded: LoadedConfig) -> Result<(), BuildGatewayError> {
    let gateway = HttpGateway::new(&loaded.upstream)?;

    if state.config.server().await.listen != loaded.server.listen {
        tracing::warn!(
            "Listen address changed to {}, restart the server to apply it",
            loaded.server.listen
        );
    }

    state
        .config
        .update_all(loaded.server, loaded.upstream)
        .await;
    state.replace_gateway(Arc::new(gateway)).await;
    Ok(())
}
