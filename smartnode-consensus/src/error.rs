use crate::chainparams::NetworkKind;
use smartnode_types::{LlmqParamsError, QuorumType};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsensusError {
    #[error("{network}: genesis hash mismatch, expected {expected}, computed {computed}")]
    GenesisMismatch {
        network: NetworkKind,
        expected: String,
        computed: String,
    },

    #[error("{network}: genesis merkle root mismatch, expected {expected}, computed {computed}")]
    GenesisMerkleMismatch {
        network: NetworkKind,
        expected: String,
        computed: String,
    },

    #[error("{network}: checkpoint at height {height} is {found}, expected {expected}")]
    CheckpointMismatch {
        network: NetworkKind,
        height: u64,
        expected: String,
        found: String,
    },

    #[error("Invalid quorum parameters: {0}")]
    InvalidQuorumParams(#[from] LlmqParamsError),

    #[error("Quorum type {0} is not configured for this network")]
    UnknownQuorumType(QuorumType),

    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error("Chain-lock quorum override is only allowed on devnet, not {0}")]
    ChainLocksOverrideNotAllowed(NetworkKind),
}

impl ConsensusError {
    /// Startup invariant violations: the node must not keep running.
    pub fn is_fatal(&self) -> bool {
        match self {
            ConsensusError::GenesisMismatch { .. }
            | ConsensusError::GenesisMerkleMismatch { .. }
            | ConsensusError::CheckpointMismatch { .. }
            | ConsensusError::InvalidQuorumParams(_)
            | ConsensusError::UnknownQuorumType(_) => true,
            ConsensusError::UnknownNetwork(_) | ConsensusError::ChainLocksOverrideNotAllowed(_) => false,
        }
    }
}
