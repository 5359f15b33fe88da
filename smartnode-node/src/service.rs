//! Background tasks of the daemon.

use crate::context::NodeContext;
use smartnode_sync::{QueuedNetworkDriver, SyncEvent};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info, warn};

/// Calls [`NodeContext::do_maintenance`] every `period` until shutdown.
pub async fn run_maintenance(
    ctx: Arc<NodeContext>,
    period: Duration,
    mut shutdown: broadcast::Receiver<()>,
) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    info!("Maintenance loop started, period {:?}", period);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if let Some(outcome) = ctx.do_maintenance() {
                    if outcome.is_applied() {
                        info!(?outcome, "Quorum parameters updated");
                    }
                }
            }
            _ = shutdown.recv() => {
                info!("Maintenance loop received shutdown signal.");
                break;
            }
        }
    }
}

/// Logs every sync event until shutdown.
pub async fn log_sync_events(
    mut events: broadcast::Receiver<SyncEvent>,
    mut shutdown: broadcast::Receiver<()>,
) {
    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(SyncEvent::Failed { asset }) => error!(%asset, "Sync failed"),
                Ok(event) => info!(?event, "Sync event"),
                Err(broadcast::error::RecvError::Lagged(missed)) => warn!(missed, "Sync event log lagged"),
                Err(broadcast::error::RecvError::Closed) => break,
            },
            _ = shutdown.recv() => break,
        }
    }
}

/// Hands queued sync requests to the transport. The transport is not part
/// of this daemon yet, so requests are only logged.
pub async fn drain_outbound(
    driver: Arc<QueuedNetworkDriver>,
    period: Duration,
    mut shutdown: broadcast::Receiver<()>,
) {
    let mut ticker = interval(period);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                for request in driver.take_outgoing() {
                    debug!(?request, "Outbound sync request");
                }
            }
            _ = shutdown.recv() => break,
        }
    }
}
