//! Outbound side of the sync protocol.

use serde::Serialize;
use smartnode_types::{PeerId, SyncAsset};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Transport used by the sync state machine. Every call is fire-and-forget:
/// answers arrive later through `SyncStateMachine::process_message`.
pub trait NetworkDriver: Send + Sync {
    fn request_asset_data(&self, asset: SyncAsset, peer: &PeerId);

    fn request_governance_sync(&self, peer: &PeerId);

    fn connected_peers(&self) -> Vec<PeerId>;
}

/// A request the state machine decided to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum OutboundRequest {
    AssetData { asset: SyncAsset, peer: PeerId },
    GovernanceSync { peer: PeerId },
}

impl OutboundRequest {
    /// The request that fetches `asset` from `peer`.
    pub fn for_asset(asset: SyncAsset, peer: PeerId) -> Self {
        match asset {
            SyncAsset::Governance => OutboundRequest::GovernanceSync { peer },
            _ => OutboundRequest::AssetData { asset, peer },
        }
    }

    pub fn peer(&self) -> &PeerId {
        match self {
            OutboundRequest::AssetData { peer, .. } | OutboundRequest::GovernanceSync { peer } => peer,
        }
    }

    pub fn send(&self, network: &dyn NetworkDriver) {
        match self {
            OutboundRequest::AssetData { asset, peer } => network.request_asset_data(*asset, peer),
            OutboundRequest::GovernanceSync { peer } => network.request_governance_sync(peer),
        }
    }
}

/// Network driver that queues requests for the transport to pick up.
#[derive(Debug, Default)]
pub struct QueuedNetworkDriver {
    peers: Mutex<Vec<PeerId>>,
    outgoing: Mutex<Vec<OutboundRequest>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl QueuedNetworkDriver {
    pub fn new(peers: Vec<PeerId>) -> Self {
        Self {
            peers: Mutex::new(peers),
            outgoing: Mutex::new(Vec::new()),
        }
    }

    pub fn set_peers(&self, peers: Vec<PeerId>) {
        *lock(&self.peers) = peers;
    }

    pub fn add_peer(&self, peer: PeerId) {
        let mut peers = lock(&self.peers);
        if !peers.contains(&peer) {
            peers.push(peer);
        }
    }

    pub fn remove_peer(&self, peer: &PeerId) {
        lock(&self.peers).retain(|p| p != peer);
    }

    /// Drains the queued requests.
    pub fn take_outgoing(&self) -> Vec<OutboundRequest> {
        std::mem::take(&mut *lock(&self.outgoing))
    }

    pub fn pending(&self) -> usize {
        lock(&self.outgoing).len()
    }
}

impl NetworkDriver for QueuedNetworkDriver {
    fn request_asset_data(&self, asset: SyncAsset, peer: &PeerId) {
        lock(&self.outgoing).push(OutboundRequest::AssetData { asset, peer: peer.clone() });
    }

    fn request_governance_sync(&self, peer: &PeerId) {
        lock(&self.outgoing).push(OutboundRequest::GovernanceSync { peer: peer.clone() });
    }

    fn connected_peers(&self) -> Vec<PeerId> {
        lock(&self.peers).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_are_queued_in_order() {
        let driver = QueuedNetworkDriver::new(vec!["a".to_string()]);
        OutboundRequest::for_asset(SyncAsset::Governance, "a".to_string()).send(&driver);
        OutboundRequest::for_asset(SyncAsset::GovernanceVotes, "a".to_string()).send(&driver);
        assert_eq!(driver.pending(), 2);
        assert_eq!(
            driver.take_outgoing(),
            vec![
                OutboundRequest::GovernanceSync { peer: "a".to_string() },
                OutboundRequest::AssetData { asset: SyncAsset::GovernanceVotes, peer: "a".to_string() },
            ]
        );
        assert!(driver.take_outgoing().is_empty());
    }

    #[test]
    fn test_peer_set_updates() {
        let driver = QueuedNetworkDriver::default();
        driver.add_peer("a".to_string());
        driver.add_peer("a".to_string());
        driver.add_peer("b".to_string());
        assert_eq!(driver.connected_peers(), vec!["a".to_string(), "b".to_string()]);
        driver.remove_peer(&"a".to_string());
        assert_eq!(driver.connected_peers(), vec!["b".to_string()]);
    }
}
