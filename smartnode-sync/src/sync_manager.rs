//! Staged synchronization state machine.

use crate::clock::Clock;
use crate::constants::{
    EVENT_CHANNEL_CAPACITY, FAST_ADVANCE_PEER_THRESHOLD, MAX_ASSET_ATTEMPTS, SUSPEND_RESTART_SECONDS,
    SYNC_RESET_SECONDS, SYNC_TICK_SECONDS, SYNC_TIMEOUT_SECONDS,
};
use crate::error::SyncError;
use crate::messages::{MessageDisposition, SyncMessage};
use crate::network::{NetworkDriver, OutboundRequest};
use serde::{Deserialize, Serialize};
use smartnode_types::{BlockRef, PeerId, SyncAsset};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

/// Timing and retry knobs of the sync state machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    pub tick_secs: i64,
    pub asset_timeout_secs: i64,
    pub tip_reset_secs: i64,
    pub max_asset_attempts: u32,
    pub suspend_restart_secs: i64,
    pub fast_advance_peer_threshold: usize,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            tick_secs: SYNC_TICK_SECONDS,
            asset_timeout_secs: SYNC_TIMEOUT_SECONDS,
            tip_reset_secs: SYNC_RESET_SECONDS,
            max_asset_attempts: MAX_ASSET_ATTEMPTS,
            suspend_restart_secs: SUSPEND_RESTART_SECONDS,
            fast_advance_peer_threshold: FAST_ADVANCE_PEER_THRESHOLD,
        }
    }
}

/// Notifications for observers of the sync progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SyncEvent {
    Reset,
    AssetSwitched { from: SyncAsset, to: SyncAsset },
    Failed { asset: SyncAsset },
}

/// Point-in-time view of the sync progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyncStatus {
    pub asset_id: i32,
    pub asset_name: &'static str,
    pub attempt: u32,
    pub asset_start_time: i64,
    pub is_blockchain_synced: bool,
    pub is_synced: bool,
    pub is_failed: bool,
    pub reached_best_header: bool,
    pub progress: f64,
}

#[derive(Debug)]
struct SyncState {
    asset: SyncAsset,
    /// Timed-out attempts for the current asset.
    tried_peer_count: u32,
    /// Peers already asked for the current asset.
    tried_peers: HashSet<PeerId>,
    current_peer: Option<PeerId>,
    asset_started: i64,
    last_bumped: i64,
    last_failure: i64,
    reached_best_header: bool,
    last_tip_update: i64,
    best_header: Option<BlockRef>,
    tip: Option<BlockRef>,
    /// Latest best height advertised by each connected peer.
    peer_heights: HashMap<PeerId, u64>,
    last_tick: i64,
    ticks: u64,
}

impl SyncState {
    fn new(now: i64) -> Self {
        Self {
            asset: SyncAsset::Blockchain,
            tried_peer_count: 0,
            tried_peers: HashSet::new(),
            current_peer: None,
            asset_started: now,
            last_bumped: now,
            last_failure: 0,
            reached_best_header: false,
            last_tip_update: now,
            best_header: None,
            tip: None,
            peer_heights: HashMap::new(),
            last_tick: now,
            ticks: 0,
        }
    }

    fn tip_matches_best_header(&self) -> bool {
        match (self.tip, self.best_header) {
            (Some(tip), Some(best)) => tip.hash == best.hash,
            _ => false,
        }
    }

    /// Tip equals the best header and no connected peer advertised more.
    /// Only gates reaching the best header; divergence is decided by hash.
    fn at_best_header(&self) -> bool {
        let best_height = match self.best_header {
            Some(best) => best.height,
            None => return false,
        };
        self.tip_matches_best_header() && self.peer_heights.values().all(|h| *h <= best_height)
    }

    /// Picks the first connected peer not yet asked for the current asset.
    fn next_request(&mut self, peers: &[PeerId]) -> Option<OutboundRequest> {
        let peer = peers.iter().find(|p| !self.tried_peers.contains(*p))?.clone();
        self.tried_peers.insert(peer.clone());
        self.current_peer = Some(peer.clone());
        Some(OutboundRequest::for_asset(self.asset, peer))
    }
}

/// Sequences BLOCKCHAIN, GOVERNANCE, GOVERNANCE_OBJECTS, GOVERNANCE_VOTES and
/// FINISHED.
///
/// All state sits behind one mutex; every operation is a single critical
/// section. Requests chosen inside a critical section are handed to the
/// network driver after the lock is released.
pub struct SyncStateMachine {
    config: SyncConfig,
    clock: Arc<dyn Clock>,
    state: Mutex<SyncState>,
    events: broadcast::Sender<SyncEvent>,
}

impl SyncStateMachine {
    pub fn new(config: SyncConfig, clock: Arc<dyn Clock>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let state = SyncState::new(clock.now());
        Self {
            config,
            clock,
            state: Mutex::new(state),
            events,
        }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SyncEvent> {
        self.events.subscribe()
    }

    fn lock(&self) -> MutexGuard<'_, SyncState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, event: SyncEvent) {
        // no subscribers is fine
        let _ = self.events.send(event);
    }

    fn dispatch(network: &dyn NetworkDriver, requests: Vec<OutboundRequest>) {
        for request in requests {
            request.send(network);
        }
    }

    /// Restarts the sync from BLOCKCHAIN. Without `force` a finished sync is
    /// left alone. Returns whether the state was reinitialized.
    pub fn reset(&self, force: bool, notify: bool) -> bool {
        let now = self.clock.now();
        let mut state = self.lock();
        self.reset_locked(&mut state, now, force, notify)
    }

    fn reset_locked(&self, state: &mut SyncState, now: i64, force: bool, notify: bool) -> bool {
        if !force && state.asset == SyncAsset::Finished {
            return false;
        }
        state.asset = SyncAsset::Blockchain;
        state.tried_peer_count = 0;
        state.tried_peers.clear();
        state.current_peer = None;
        state.asset_started = now;
        state.last_bumped = now;
        state.last_failure = 0;
        state.last_tip_update = now;
        state.reached_best_header = false;
        state.peer_heights.clear();
        info!(force, "Sync reset");
        if notify {
            self.emit(SyncEvent::Reset);
        }
        true
    }

    /// Moves to the next asset and asks a peer for it.
    pub fn switch_to_next_asset(&self, network: &dyn NetworkDriver) -> Result<SyncAsset, SyncError> {
        let peers = network.connected_peers();
        let now = self.clock.now();
        let (asset, requests) = {
            let mut state = self.lock();
            self.switch_locked(&mut state, &peers, now)?
        };
        Self::dispatch(network, requests);
        Ok(asset)
    }

    fn switch_locked(
        &self,
        state: &mut SyncState,
        peers: &[PeerId],
        now: i64,
    ) -> Result<(SyncAsset, Vec<OutboundRequest>), SyncError> {
        let from = state.asset;
        let to = match from.next() {
            Some(next) => next,
            None if from == SyncAsset::Finished => return Ok((from, Vec::new())),
            None => return Err(SyncError::SwitchFromFailed(from)),
        };

        state.asset = to;
        state.tried_peer_count = 0;
        state.tried_peers.clear();
        state.current_peer = None;
        state.asset_started = now;
        state.last_bumped = now;

        let mut requests = Vec::new();
        if to == SyncAsset::Finished {
            info!("Sync has finished");
        } else {
            info!(%from, %to, "Switching sync asset");
            requests.extend(state.next_request(peers));
        }
        self.emit(SyncEvent::AssetSwitched { from, to });
        Ok((to, requests))
    }

    /// Records evidence of forward progress on the current asset.
    pub fn bump_asset_last_time(&self, source: &str) {
        let now = self.clock.now();
        let mut state = self.lock();
        Self::bump_locked(&mut state, now, source);
    }

    fn bump_locked(state: &mut SyncState, now: i64, source: &str) {
        if state.asset == SyncAsset::Finished {
            return;
        }
        state.last_bumped = now;
        debug!(source, asset = %state.asset, "Sync progress");
    }

    /// Routes a message from `peer`. Messages for an asset other than the
    /// current one are dropped.
    pub fn process_message(
        &self,
        peer: &PeerId,
        message: &SyncMessage,
        network: &dyn NetworkDriver,
    ) -> MessageDisposition {
        let peers = network.connected_peers();
        let now = self.clock.now();
        let mut requests = Vec::new();

        let disposition = {
            let mut state = self.lock();

            if let SyncMessage::BestHeight { height } = message {
                if state.peer_heights.insert(peer.clone(), *height) != Some(*height) {
                    debug!(%peer, height, "Peer advertised best height");
                }
                return MessageDisposition::Recorded;
            }

            if state.asset == SyncAsset::Finished || state.asset == SyncAsset::Failed {
                return MessageDisposition::Ignored;
            }

            let target = match message.asset() {
                Some(asset) => asset,
                None => {
                    debug!(%peer, command = message.command(), "Unknown sync item");
                    return MessageDisposition::Ignored;
                }
            };
            if target != state.asset {
                debug!(%peer, command = message.command(), %target, current = %state.asset, "Dropping stale sync message");
                return MessageDisposition::Stale;
            }

            match message {
                SyncMessage::SyncStatusCount { count, .. } => {
                    info!(%peer, asset = %target, count, "Peer finished serving sync asset");
                    match self.switch_locked(&mut state, &peers, now) {
                        Ok((_, issued)) => {
                            requests = issued;
                            MessageDisposition::AssetCompleted
                        }
                        Err(e) => {
                            warn!("{}", e);
                            MessageDisposition::Ignored
                        }
                    }
                }
                _ => {
                    Self::bump_locked(&mut state, now, message.command());
                    MessageDisposition::Progress
                }
            }
        };

        Self::dispatch(network, requests);
        disposition
    }

    /// Time-driven transitions: advancing out of BLOCKCHAIN, retries and
    /// failure. Calls closer together than the tick interval do nothing.
    pub fn process_tick(&self, network: &dyn NetworkDriver) {
        let peers = network.connected_peers();
        let now = self.clock.now();
        let mut requests = Vec::new();

        {
            let mut state = self.lock();
            state.ticks += 1;
            state.peer_heights.retain(|p, _| peers.contains(p));

            let since_last_tick = now - state.last_tick;
            if since_last_tick > self.config.suspend_restart_secs {
                state.last_tick = now;
                // a failed sync only leaves FAILED through an explicit reset
                if state.asset == SyncAsset::Failed {
                    debug!(since_last_tick, "Process was suspended while sync is failed");
                    return;
                }
                warn!(since_last_tick, "Process was suspended, restarting sync");
                self.reset_locked(&mut state, now, true, true);
                return;
            }
            if since_last_tick < self.config.tick_secs {
                return;
            }
            state.last_tick = now;

            if state.asset == SyncAsset::Failed || state.asset == SyncAsset::Finished {
                return;
            }

            let idle = now - state.last_bumped;

            if state.asset == SyncAsset::Blockchain && state.reached_best_header {
                let quiet_period = if peers.len() > self.config.fast_advance_peer_threshold {
                    self.config.tick_secs
                } else {
                    self.config.asset_timeout_secs
                };
                if idle > quiet_period {
                    if let Ok((_, issued)) = self.switch_locked(&mut state, &peers, now) {
                        requests = issued;
                    }
                    drop(state);
                    Self::dispatch(network, requests);
                    return;
                }
            }

            if idle > self.config.asset_timeout_secs {
                state.tried_peer_count += 1;
                warn!(
                    asset = %state.asset,
                    attempt = state.tried_peer_count,
                    peer = ?state.current_peer,
                    idle,
                    "Sync asset timed out"
                );
                let retry = if state.tried_peer_count > self.config.max_asset_attempts {
                    None
                } else {
                    state.next_request(&peers)
                };
                match retry {
                    Some(request) => {
                        info!(asset = %state.asset, peer = %request.peer(), "Retrying sync asset with another peer");
                        state.last_bumped = now;
                        requests.push(request);
                    }
                    None => self.fail_locked(&mut state, now),
                }
            } else if state.current_peer.is_none() {
                requests.extend(state.next_request(&peers));
            }
        }

        Self::dispatch(network, requests);
    }

    fn fail_locked(&self, state: &mut SyncState, now: i64) {
        let asset = state.asset;
        error!(%asset, attempts = state.tried_peer_count, "Sync failed, no peer left to ask");
        state.asset = SyncAsset::Failed;
        state.current_peer = None;
        state.last_failure = now;
        self.emit(SyncEvent::Failed { asset });
    }

    /// A new header was accepted into the header tree.
    pub fn accepted_block_header(&self, header: &BlockRef) {
        let now = self.clock.now();
        let mut state = self.lock();
        if state.asset == SyncAsset::Blockchain && !state.reached_best_header {
            Self::bump_locked(&mut state, now, "accepted_block_header");
        }
        debug!(%header, "Accepted block header");
    }

    /// The best known header changed.
    pub fn notify_header_tip(&self, header: &BlockRef, initial_download: bool) {
        let now = self.clock.now();
        let mut state = self.lock();
        state.best_header = Some(*header);
        if state.asset == SyncAsset::Failed || state.asset == SyncAsset::Finished {
            return;
        }
        if state.asset == SyncAsset::Blockchain {
            Self::bump_locked(&mut state, now, "notify_header_tip");
        }
        if !initial_download && !state.reached_best_header && state.at_best_header() {
            info!(%header, "Reached best header");
            state.reached_best_header = true;
        }
    }

    /// The validated chain tip moved.
    pub fn updated_block_tip(&self, tip: &BlockRef, initial_download: bool) {
        let now = self.clock.now();
        let mut state = self.lock();
        state.last_tip_update = now;
        state.tip = Some(*tip);

        if state.asset == SyncAsset::Failed || state.asset == SyncAsset::Finished {
            return;
        }
        if state.asset == SyncAsset::Blockchain {
            Self::bump_locked(&mut state, now, "updated_block_tip");
        }
        if initial_download {
            return;
        }

        if state.reached_best_header {
            if !state.tip_matches_best_header() {
                warn!(%tip, "Tip no longer matches the best header, restarting sync");
                self.reset_locked(&mut state, now, true, true);
            }
            return;
        }
        if state.at_best_header() {
            info!(%tip, "Reached best header");
            state.reached_best_header = true;
        }
    }

    /// Drops best-header confidence when the tip has been still for longer
    /// than the reset window. Returns whether it fired.
    pub fn check_tip_staleness(&self) -> bool {
        let now = self.clock.now();
        let mut state = self.lock();
        let quiet = now - state.last_tip_update;
        if state.reached_best_header && quiet > self.config.tip_reset_secs {
            warn!(quiet, "No tip update for too long, best header no longer considered reached");
            state.reached_best_header = false;
            return true;
        }
        false
    }

    /// Periodic driver: staleness check, then a tick.
    pub fn do_maintenance(&self, network: &dyn NetworkDriver) {
        self.check_tip_staleness();
        self.process_tick(network);
    }

    pub fn asset(&self) -> SyncAsset {
        self.lock().asset
    }

    pub fn is_blockchain_synced(&self) -> bool {
        self.asset() > SyncAsset::Blockchain
    }

    pub fn is_synced(&self) -> bool {
        self.asset() == SyncAsset::Finished
    }

    pub fn is_failed(&self) -> bool {
        self.asset() == SyncAsset::Failed
    }

    pub fn attempt(&self) -> u32 {
        self.lock().tried_peer_count
    }

    pub fn asset_start_time(&self) -> i64 {
        self.lock().asset_started
    }

    pub fn last_failure_time(&self) -> i64 {
        self.lock().last_failure
    }

    pub fn reached_best_header(&self) -> bool {
        self.lock().reached_best_header
    }

    pub fn tip_height(&self) -> Option<u64> {
        self.lock().tip.map(|t| t.height)
    }

    pub fn ticks(&self) -> u64 {
        self.lock().ticks
    }

    /// Fraction of the stage progression completed; 0 when failed.
    pub fn progress(&self) -> f64 {
        progress_of(self.asset())
    }

    /// Human-readable status line.
    pub fn sync_status(&self) -> &'static str {
        match self.asset() {
            SyncAsset::Blockchain => "Synchronizing blockchain...",
            SyncAsset::Governance => "Synchronizing governance...",
            SyncAsset::GovernanceObjects => "Synchronizing governance objects...",
            SyncAsset::GovernanceVotes => "Synchronizing governance votes...",
            SyncAsset::Finished => "Synchronization finished",
            SyncAsset::Failed => "Synchronization failed",
        }
    }

    pub fn status(&self) -> SyncStatus {
        let state = self.lock();
        SyncStatus {
            asset_id: state.asset.id(),
            asset_name: state.asset.as_str(),
            attempt: state.tried_peer_count,
            asset_start_time: state.asset_started,
            is_blockchain_synced: state.asset > SyncAsset::Blockchain,
            is_synced: state.asset == SyncAsset::Finished,
            is_failed: state.asset == SyncAsset::Failed,
            reached_best_header: state.reached_best_header,
            progress: progress_of(state.asset),
        }
    }
}

fn progress_of(asset: SyncAsset) -> f64 {
    let last = (SyncAsset::PROGRESSION.len() - 1) as f64;
    asset.stage_index().map_or(0.0, |i| i as f64 / last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::network::QueuedNetworkDriver;

    fn machine(clock: &ManualClock) -> SyncStateMachine {
        SyncStateMachine::new(SyncConfig::default(), Arc::new(clock.clone()))
    }

    fn block(height: u64, tag: u8) -> BlockRef {
        BlockRef::new(height, [tag; 32])
    }

    #[test]
    fn test_fresh_state() {
        let clock = ManualClock::new(1_000);
        let sync = machine(&clock);
        assert!(sync.reset(true, false));
        assert_eq!(sync.asset(), SyncAsset::Blockchain);
        assert_eq!(sync.attempt(), 0);
        assert!(!sync.is_failed());
        assert!(!sync.is_synced());
        assert!(!sync.is_blockchain_synced());
        assert_eq!(sync.asset_start_time(), 1_000);
    }

    #[test]
    fn test_reset_keeps_finished_sync_unless_forced() {
        let clock = ManualClock::new(1_000);
        let sync = machine(&clock);
        let network = QueuedNetworkDriver::default();
        for _ in 0..4 {
            sync.switch_to_next_asset(&network).unwrap();
        }
        assert!(sync.is_synced());
        assert!(!sync.reset(false, true));
        assert!(sync.is_synced());
        assert!(sync.reset(true, true));
        assert_eq!(sync.asset(), SyncAsset::Blockchain);
    }

    #[test]
    fn test_switch_issues_asset_specific_requests() {
        let clock = ManualClock::new(1_000);
        let sync = machine(&clock);
        let network = QueuedNetworkDriver::new(vec!["p1".to_string()]);

        assert_eq!(sync.switch_to_next_asset(&network), Ok(SyncAsset::Governance));
        assert_eq!(sync.switch_to_next_asset(&network), Ok(SyncAsset::GovernanceObjects));
        assert_eq!(
            network.take_outgoing(),
            vec![
                OutboundRequest::GovernanceSync { peer: "p1".to_string() },
                OutboundRequest::AssetData { asset: SyncAsset::GovernanceObjects, peer: "p1".to_string() },
            ]
        );
    }

    #[test]
    fn test_switch_out_of_failed_is_refused() {
        let clock = ManualClock::new(1_000);
        let sync = machine(&clock);
        let network = QueuedNetworkDriver::default();
        clock.advance(31);
        sync.process_tick(&network);
        assert!(sync.is_failed());
        assert_eq!(
            sync.switch_to_next_asset(&network),
            Err(SyncError::SwitchFromFailed(SyncAsset::Failed))
        );
    }

    #[test]
    fn test_ticks_inside_interval_are_ignored() {
        let clock = ManualClock::new(1_000);
        let sync = machine(&clock);
        let network = QueuedNetworkDriver::new(vec!["p1".to_string()]);
        clock.advance(3);
        sync.process_tick(&network);
        assert_eq!(network.pending(), 0);
        clock.advance(3);
        sync.process_tick(&network);
        assert_eq!(
            network.take_outgoing(),
            vec![OutboundRequest::AssetData { asset: SyncAsset::Blockchain, peer: "p1".to_string() }]
        );
        assert_eq!(sync.ticks(), 2);
    }

    #[test]
    fn test_suspension_restarts_sync() {
        let clock = ManualClock::new(1_000);
        let sync = machine(&clock);
        let network = QueuedNetworkDriver::default();
        sync.switch_to_next_asset(&network).unwrap();
        let mut events = sync.subscribe();

        clock.advance(3_601);
        sync.process_tick(&network);
        assert_eq!(sync.asset(), SyncAsset::Blockchain);
        assert_eq!(events.try_recv().unwrap(), SyncEvent::Reset);
    }

    #[test]
    fn test_best_header_needs_peer_height() {
        let clock = ManualClock::new(1_000);
        let sync = machine(&clock);
        let network = QueuedNetworkDriver::default();
        sync.process_message(&"p1".to_string(), &SyncMessage::BestHeight { height: 20 }, &network);

        sync.notify_header_tip(&block(10, 1), false);
        sync.updated_block_tip(&block(10, 1), false);
        assert!(!sync.reached_best_header());

        sync.notify_header_tip(&block(20, 2), false);
        sync.updated_block_tip(&block(20, 2), false);
        assert!(sync.reached_best_header());
        assert_eq!(sync.tip_height(), Some(20));
    }

    #[test]
    fn test_initial_download_does_not_reach_best_header() {
        let clock = ManualClock::new(1_000);
        let sync = machine(&clock);
        sync.notify_header_tip(&block(5, 5), true);
        sync.updated_block_tip(&block(5, 5), true);
        assert!(!sync.reached_best_header());
        sync.updated_block_tip(&block(5, 5), false);
        assert!(sync.reached_best_header());
    }

    #[test]
    fn test_tip_diverging_from_best_header_restarts() {
        let clock = ManualClock::new(1_000);
        let sync = machine(&clock);
        let network = QueuedNetworkDriver::default();
        sync.notify_header_tip(&block(5, 5), false);
        sync.updated_block_tip(&block(5, 5), false);
        assert!(sync.reached_best_header());
        sync.switch_to_next_asset(&network).unwrap();

        sync.notify_header_tip(&block(6, 6), false);
        sync.updated_block_tip(&block(5, 7), false);
        assert_eq!(sync.asset(), SyncAsset::Blockchain);
        assert!(!sync.reached_best_header());
    }

    #[test]
    fn test_blockchain_advances_after_quiet_period() {
        let clock = ManualClock::new(1_000);
        let sync = machine(&clock);
        let peers: Vec<PeerId> = (0..4).map(|i| format!("p{}", i)).collect();
        let network = QueuedNetworkDriver::new(peers);
        sync.notify_header_tip(&block(5, 5), false);
        sync.updated_block_tip(&block(5, 5), false);

        // more than three peers: one tick of silence is enough
        clock.advance(7);
        sync.process_tick(&network);
        assert_eq!(sync.asset(), SyncAsset::Governance);
        assert!(sync.is_blockchain_synced());
        assert_eq!(
            network.take_outgoing(),
            vec![OutboundRequest::GovernanceSync { peer: "p0".to_string() }]
        );
    }

    #[test]
    fn test_blockchain_waits_longer_with_few_peers() {
        let clock = ManualClock::new(1_000);
        let sync = machine(&clock);
        let network = QueuedNetworkDriver::new(vec!["p1".to_string()]);
        sync.notify_header_tip(&block(5, 5), false);
        sync.updated_block_tip(&block(5, 5), false);

        clock.advance(7);
        sync.process_tick(&network);
        assert_eq!(sync.asset(), SyncAsset::Blockchain);

        clock.advance(24);
        sync.process_tick(&network);
        assert_eq!(sync.asset(), SyncAsset::Governance);
    }

    #[test]
    fn test_status_snapshot() {
        let clock = ManualClock::new(1_000);
        let sync = machine(&clock);
        let network = QueuedNetworkDriver::default();
        sync.switch_to_next_asset(&network).unwrap();
        let status = sync.status();
        assert_eq!(status.asset_name, "GOVERNANCE");
        assert_eq!(status.asset_id, 4);
        assert!(status.is_blockchain_synced);
        assert!((status.progress - 0.25).abs() < f64::EPSILON);
        assert_eq!(sync.sync_status(), "Synchronizing governance...");
    }
}
