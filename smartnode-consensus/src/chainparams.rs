//! Per-network chain parameters.
//!
//! One immutable [`ChainParams`] value exists per [`NetworkKind`]; everything
//! that differs between networks is data in that struct.

use crate::error::ConsensusError;
use crate::llmq::presets::{
    LLMQ_20_60, LLMQ_20_85, LLMQ_3_60, LLMQ_400_60, LLMQ_400_85, LLMQ_50_60, LLMQ_5_60_REGTEST,
};
use crate::llmq::QuorumConfigTable;
use hex_literal::hex;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use smartnode_types::{Hash, QuorumType};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

const MAIN_GENESIS: Hash = hex!("001787e5f9c3cd249f84f0142071f6098d9e3b7ec8591ff73543ddc4900c1dc2");
const TEST_GENESIS: Hash = hex!("001efd3021f4414e897125d9e85ec42c3e0dc360d2b6ce7853e7a2900448c63a");
const GENESIS_MERKLE_ROOT: Hash = hex!("c083fb7c3b6936c15dc2685a522ffa685247e8c665c818888b51b0771584d7b4");
const REGTEST_CHECKPOINT_0: Hash = hex!("000008ca1832a4baf228eb1553c03d3a2c8e02399550dd6ea8d65cec3ef23d2e");

const MAIN_CHECKPOINTS: [(u64, Hash); 5] = [
    (0, MAIN_GENESIS),
    (10, hex!("00f76639e2109c2210dfb59aa56b146e4be0281187b939e5be738297e4d51ad7")),
    (50, hex!("009628b710b3695af2c34e9c0ed92e41b10cd813b45e3e8d5ef58b54506a1bb7")),
    (100, hex!("000050f547035f5a5353cd0d8a182293460ffc4af02eaf2404cdc39d24d4c34b")),
    (150, hex!("0000000395f58efdcfc08a55742588e0f046f58bd89c0dd5aec6d2b3e111e747")),
];

/// Target block spacing, identical on every network.
pub const TARGET_SPACING_SECS: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkKind {
    Main,
    Test,
    Dev,
    Regtest,
}

impl NetworkKind {
    pub const ALL: [NetworkKind; 4] = [
        NetworkKind::Main,
        NetworkKind::Test,
        NetworkKind::Dev,
        NetworkKind::Regtest,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NetworkKind::Main => "main",
            NetworkKind::Test => "test",
            NetworkKind::Dev => "dev",
            NetworkKind::Regtest => "regtest",
        }
    }
}

impl fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkKind {
    type Err = ConsensusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" | "mainnet" => Ok(NetworkKind::Main),
            "test" | "testnet" => Ok(NetworkKind::Test),
            "dev" | "devnet" => Ok(NetworkKind::Dev),
            "regtest" => Ok(NetworkKind::Regtest),
            other => Err(ConsensusError::UnknownNetwork(other.to_string())),
        }
    }
}

/// Everything that distinguishes one network from another.
#[derive(Debug, Clone, Serialize)]
pub struct ChainParams {
    pub network: NetworkKind,
    pub default_port: u16,
    pub message_start: [u8; 4],
    /// Expected genesis block hash, when the network has a fixed genesis.
    pub genesis_hash: Option<Hash>,
    pub genesis_merkle_root: Option<Hash>,
    pub checkpoints: BTreeMap<u64, Hash>,
    /// Quorum table the registry starts from.
    pub llmqs: QuorumConfigTable,
    pub chain_locks_quorum: QuorumType,
    pub instant_send_quorum: QuorumType,
    pub governance_min_quorum: u32,
    pub target_spacing_secs: u64,
    pub fulfilled_request_expiry_secs: u64,
}

impl ChainParams {
    pub fn for_network(network: NetworkKind) -> Self {
        match network {
            NetworkKind::Main => Self {
                network,
                default_port: 24240,
                message_start: [0x52, 0x34, 0x66, 0x2e],
                genesis_hash: Some(MAIN_GENESIS),
                genesis_merkle_root: Some(GENESIS_MERKLE_ROOT),
                checkpoints: MAIN_CHECKPOINTS.into_iter().collect(),
                llmqs: QuorumConfigTable::from_params([LLMQ_3_60, LLMQ_20_60, LLMQ_20_85]),
                chain_locks_quorum: QuorumType::Llmq400_60,
                instant_send_quorum: QuorumType::Llmq50_60,
                governance_min_quorum: 10,
                target_spacing_secs: TARGET_SPACING_SECS,
                fulfilled_request_expiry_secs: 60 * 60,
            },
            NetworkKind::Test => Self {
                network,
                default_port: 34340,
                message_start: [0x38, 0xe2, 0x68, 0xff],
                genesis_hash: Some(TEST_GENESIS),
                genesis_merkle_root: Some(GENESIS_MERKLE_ROOT),
                checkpoints: BTreeMap::from([(0, TEST_GENESIS)]),
                llmqs: QuorumConfigTable::from_params([LLMQ_50_60, LLMQ_400_60, LLMQ_400_85]),
                chain_locks_quorum: QuorumType::Llmq50_60,
                instant_send_quorum: QuorumType::Llmq50_60,
                governance_min_quorum: 1,
                target_spacing_secs: TARGET_SPACING_SECS,
                fulfilled_request_expiry_secs: 5 * 60,
            },
            NetworkKind::Dev => Self {
                network,
                default_port: 45450,
                message_start: [0x56, 0x72, 0xff, 0xce],
                genesis_hash: None,
                genesis_merkle_root: None,
                checkpoints: BTreeMap::new(),
                llmqs: QuorumConfigTable::from_params([LLMQ_50_60, LLMQ_400_60, LLMQ_400_85]),
                chain_locks_quorum: QuorumType::Llmq50_60,
                instant_send_quorum: QuorumType::Llmq50_60,
                governance_min_quorum: 1,
                target_spacing_secs: TARGET_SPACING_SECS,
                fulfilled_request_expiry_secs: 5 * 60,
            },
            NetworkKind::Regtest => Self {
                network,
                default_port: 56560,
                message_start: [0xfc, 0x44, 0xb7, 0x66],
                genesis_hash: None,
                genesis_merkle_root: None,
                checkpoints: BTreeMap::from([(0, REGTEST_CHECKPOINT_0)]),
                llmqs: QuorumConfigTable::from_params([LLMQ_5_60_REGTEST, LLMQ_50_60]),
                chain_locks_quorum: QuorumType::Llmq5_60,
                instant_send_quorum: QuorumType::Llmq5_60,
                governance_min_quorum: 1,
                target_spacing_secs: TARGET_SPACING_SECS,
                fulfilled_request_expiry_secs: 5 * 60,
            },
        }
    }

    /// Startup invariant checks. Any error returned here is fatal.
    pub fn validate(&self) -> Result<(), ConsensusError> {
        for (quorum_type, params) in self.llmqs.iter() {
            params.validate()?;
            if params.quorum_type != *quorum_type {
                return Err(ConsensusError::UnknownQuorumType(*quorum_type));
            }
        }
        for required in [self.chain_locks_quorum, self.instant_send_quorum] {
            if !self.llmqs.contains(required) {
                return Err(ConsensusError::UnknownQuorumType(required));
            }
        }
        if let (Some(genesis), Some(checkpoint)) = (self.genesis_hash, self.checkpoints.get(&0)) {
            if genesis != *checkpoint {
                return Err(ConsensusError::CheckpointMismatch {
                    network: self.network,
                    height: 0,
                    expected: hex::encode(genesis),
                    found: hex::encode(checkpoint),
                });
            }
        }
        Ok(())
    }

    /// Compares a genesis block built elsewhere against the compiled-in
    /// expectation. Networks without a fixed genesis accept anything.
    pub fn verify_genesis(&self, hash: &Hash, merkle_root: &Hash) -> Result<(), ConsensusError> {
        if let Some(expected) = self.genesis_merkle_root {
            if expected != *merkle_root {
                return Err(ConsensusError::GenesisMerkleMismatch {
                    network: self.network,
                    expected: hex::encode(expected),
                    computed: hex::encode(merkle_root),
                });
            }
        }
        if let Some(expected) = self.genesis_hash {
            if expected != *hash {
                return Err(ConsensusError::GenesisMismatch {
                    network: self.network,
                    expected: hex::encode(expected),
                    computed: hex::encode(hash),
                });
            }
        }
        Ok(())
    }

    /// Checkpoint hash for `height`, if one is compiled in.
    pub fn checkpoint(&self, height: u64) -> Option<&Hash> {
        self.checkpoints.get(&height)
    }

    /// Devnet only: sign chain-locks with another quorum type from the table.
    pub fn with_chain_locks_quorum(mut self, quorum_type: QuorumType) -> Result<Self, ConsensusError> {
        if self.network != NetworkKind::Dev {
            warn!("Ignoring chain-lock quorum override on {}", self.network);
            return Err(ConsensusError::ChainLocksOverrideNotAllowed(self.network));
        }
        if !self.llmqs.contains(quorum_type) {
            return Err(ConsensusError::UnknownQuorumType(quorum_type));
        }
        info!("Devnet chain-locks will use {}", quorum_type);
        self.chain_locks_quorum = quorum_type;
        Ok(self)
    }
}
