//! Types shared between the smartnode consensus, sync and node crates.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod llmq;
pub mod sync;

pub use llmq::{LLMQParams, LlmqParamsError, QuorumType};
pub use sync::SyncAsset;

pub type Hash = [u8; 32];

/// Peer identifier type
pub type PeerId = String;

/// Reference to a block header or block index entry, as delivered by the
/// chain-tip callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRef {
    pub height: u64,
    pub hash: Hash,
}

impl BlockRef {
    pub fn new(height: u64, hash: Hash) -> Self {
        Self { height, hash }
    }
}

impl fmt::Display for BlockRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", hex::encode(self.hash), self.height)
    }
}
