//! Periodic current-rate refresh with an explicit start/stop lifecycle.
//!
//! The scheduler drives only the lightweight `refresh_current` path, not
//! the full chart rebuild. Its failures are best-effort: logged and
//! dropped, never surfaced to the user.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::models::snapshot::LiveFigures;
use crate::CurrencyMonitor;

/// How often the live figures are refreshed by default.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Handle to the background refresh task. Stopping (or dropping) the
/// handle tears the task down; nothing outlives the scheduler.
pub struct RefreshScheduler {
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl RefreshScheduler {
    /// Spawn the refresh loop. Every `interval`, the monitor's
    /// `refresh_current` runs and the resulting figures are delivered
    /// through `on_refresh` — the presentation adapter subscribes here
    /// instead of sharing widget state with the core.
    ///
    /// Unconfigured monitors are skipped; fetch failures are logged at
    /// `warn` and the loop keeps ticking.
    pub fn start<F>(
        monitor: Arc<Mutex<CurrencyMonitor>>,
        interval: Duration,
        on_refresh: F,
    ) -> Self
    where
        F: Fn(LiveFigures) + Send + Sync + 'static,
    {
        let (shutdown, mut shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick of a tokio interval fires immediately;
            // consume it so the first refresh lands one interval in.
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let monitor = monitor.lock().await;
                        if !monitor.is_configured() {
                            continue;
                        }
                        match monitor.refresh_current().await {
                            Ok(figures) => on_refresh(figures),
                            Err(e) => {
                                tracing::warn!(error = %e, "background rate refresh failed");
                            }
                        }
                    }
                    _ = shutdown_rx.changed() => break,
                }
            }
        });

        Self { shutdown, handle }
    }

    /// Stop the refresh loop. Signals a graceful exit; the task is
    /// aborted on drop as a backstop.
    pub fn stop(self) {
        let _ = self.shutdown.send(true);
    }

    /// Whether the background task is still running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
