//! Recurring trigger for the reconciler.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::sleep;
use tracing::{error, info};

use socialpilot_drive::MediaSource;
use socialpilot_sheet::RowSource;
use socialpilot_upload::Publisher;

use crate::Reconciler;

/// Run reconcile passes on a fixed period until shutdown.
///
/// Passes are awaited inline, so two passes can never overlap: a pass that
/// outlives the period simply delays the next firing. A pass-fatal error
/// (row listing failed) is logged and the trigger keeps its schedule.
pub async fn run_trigger<S, M, P>(
    reconciler: &Reconciler<S, M, P>,
    period: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
) where
    S: RowSource,
    M: MediaSource,
    P: Publisher,
{
    info!(period_secs = period.as_secs(), "recurring trigger started");

    loop {
        if *shutdown_rx.borrow() {
            break;
        }

        if let Err(e) = reconciler.run_pass().await {
            error!(error = %e, "reconcile pass aborted, waiting for next firing");
        }

        tokio::select! {
            _ = shutdown_rx.changed() => {
                if *shutdown_rx.borrow() {
                    info!("trigger received shutdown signal");
                }
            }
            _ = sleep(period) => {}
        }
    }

    info!("trigger shut down gracefully");
}
