//! Node context: the single owner of the quorum registry and sync state.

use crate::estimator::NetworkSizeEstimator;
use smartnode_consensus::{ChainParams, QuorumConfigRegistry, ReconfigureOutcome};
use smartnode_sync::{Clock, MessageDisposition, NetworkDriver, SyncConfig, SyncMessage, SyncStateMachine};
use smartnode_types::{BlockRef, LLMQParams, PeerId};
use std::sync::Arc;
use tracing::debug;

/// Everything the consensus-facing subsystems reach through one handle.
pub struct NodeContext {
    chain_params: ChainParams,
    quorums: QuorumConfigRegistry,
    sync: SyncStateMachine,
    network: Arc<dyn NetworkDriver>,
    estimator: Arc<dyn NetworkSizeEstimator>,
}

impl NodeContext {
    pub fn new(
        chain_params: ChainParams,
        sync_config: SyncConfig,
        clock: Arc<dyn Clock>,
        network: Arc<dyn NetworkDriver>,
        estimator: Arc<dyn NetworkSizeEstimator>,
    ) -> Self {
        let quorums = QuorumConfigRegistry::new(chain_params.llmqs.clone());
        let sync = SyncStateMachine::new(sync_config, clock);
        Self {
            chain_params,
            quorums,
            sync,
            network,
            estimator,
        }
    }

    pub fn chain_params(&self) -> &ChainParams {
        &self.chain_params
    }

    pub fn quorums(&self) -> &QuorumConfigRegistry {
        &self.quorums
    }

    pub fn sync(&self) -> &SyncStateMachine {
        &self.sync
    }

    pub fn network(&self) -> &Arc<dyn NetworkDriver> {
        &self.network
    }

    /// Parameters of the quorum that signs chain-locks.
    pub fn chain_lock_params(&self) -> LLMQParams {
        self.quorums.active_params(self.chain_params.chain_locks_quorum)
    }

    /// Parameters of the quorum that signs instant-send locks.
    pub fn instant_send_params(&self) -> LLMQParams {
        self.quorums.active_params(self.chain_params.instant_send_quorum)
    }

    pub fn accepted_block_header(&self, header: &BlockRef) {
        self.sync.accepted_block_header(header);
    }

    pub fn notify_header_tip(&self, header: &BlockRef, initial_download: bool) {
        self.sync.notify_header_tip(header, initial_download);
    }

    pub fn updated_block_tip(&self, tip: &BlockRef, initial_download: bool) {
        self.sync.updated_block_tip(tip, initial_download);
    }

    pub fn process_message(&self, peer: &PeerId, message: &SyncMessage) -> MessageDisposition {
        self.sync.process_message(peer, message, self.network.as_ref())
    }

    /// Runs the sync maintenance, then tries to reconfigure the quorums at
    /// the current tip. Returns `None` while no tip is known.
    pub fn do_maintenance(&self) -> Option<ReconfigureOutcome> {
        self.sync.do_maintenance(self.network.as_ref());

        let height = self.sync.tip_height()?;
        let outcome = self.quorums.reconfigure(
            self.estimator.masternode_count(),
            height,
            self.estimator.low_params(),
        );
        debug!(height, ?outcome, "Quorum reconfiguration attempt");
        Some(outcome)
    }
}
