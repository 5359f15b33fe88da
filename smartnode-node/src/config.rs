//! Node configuration file.

use serde::{Deserialize, Serialize};
use smartnode_consensus::{ChainParams, ConsensusError, NetworkKind};
use smartnode_sync::SyncConfig;
use smartnode_types::QuorumType;
use tracing::{error, info};

pub const APP_NAME: &str = "smartnode";
pub const CONFIG_NAME: &str = "node-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// One of main, test, dev, regtest.
    pub network: String,
    pub log_level: String,
    pub log_file: Option<String>,
    pub seed_peers: Vec<String>,
    /// Masternode population used for LLMQ reconfiguration.
    pub masternode_count: usize,
    pub low_llmq_params: bool,
    /// Devnet only.
    pub chain_locks_quorum: Option<String>,
    pub sync: SyncConfig,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            network: NetworkKind::Main.to_string(),
            log_level: "info".to_string(),
            log_file: None,
            seed_peers: Vec::new(),
            masternode_count: 0,
            low_llmq_params: false,
            chain_locks_quorum: None,
            sync: SyncConfig::default(),
        }
    }
}

impl NodeConfig {
    /// Loads the stored configuration, falling back to defaults.
    pub fn load_or_default() -> Self {
        match confy::get_configuration_file_path(APP_NAME, CONFIG_NAME) {
            Ok(path) => info!("Configuration file path: {:?}", path),
            Err(e) => error!("Failed to resolve configuration path: {:?}", e),
        }
        match confy::load(APP_NAME, CONFIG_NAME) {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("Failed to load configuration: {:?}. Using default.", e);
                NodeConfig::default()
            }
        }
    }

    pub fn store(&self) -> Result<(), confy::ConfyError> {
        confy::store(APP_NAME, CONFIG_NAME, self)
    }

    pub fn network_kind(&self) -> Result<NetworkKind, ConsensusError> {
        self.network.parse()
    }

    /// Chain parameters for the configured network, with the devnet
    /// chain-lock override applied.
    pub fn chain_params(&self) -> Result<ChainParams, ConsensusError> {
        let params = ChainParams::for_network(self.network_kind()?);
        match &self.chain_locks_quorum {
            Some(name) => {
                let quorum_type: QuorumType = name.parse()?;
                params.with_chain_locks_quorum(quorum_type)
            }
            None => Ok(params),
        }
    }
}
