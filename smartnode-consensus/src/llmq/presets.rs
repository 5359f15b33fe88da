//! Compiled-in LLMQ parameter sets and the population buckets that select them.

use serde::Serialize;
use smartnode_types::{LLMQParams, QuorumType};
use std::fmt;

/// Three-member testing quorum. Also the basis of the regtest `llmq_5_60` entry.
pub const LLMQ_3_60: LLMQParams = LLMQParams {
    quorum_type: QuorumType::Llmq50_60,
    name: "llmq_3_60",
    size: 3,
    min_size: 2,
    threshold: 2,
    dkg_interval: 30,
    dkg_phase_blocks: 2,
    dkg_mining_window_start: 10,
    dkg_mining_window_end: 18,
    dkg_bad_votes_threshold: 8,
    signing_active_quorum_count: 2,
    keep_old_connections: 3,
};

pub const LLMQ_20_60: LLMQParams = LLMQParams {
    quorum_type: QuorumType::Llmq400_60,
    name: "llmq_20_60",
    size: 20,
    min_size: 15,
    threshold: 12,
    dkg_interval: 360,
    dkg_phase_blocks: 4,
    dkg_mining_window_start: 20,
    dkg_mining_window_end: 28,
    dkg_bad_votes_threshold: 30,
    signing_active_quorum_count: 4,
    keep_old_connections: 5,
};

pub const LLMQ_20_85: LLMQParams = LLMQParams {
    quorum_type: QuorumType::Llmq400_85,
    name: "llmq_20_85",
    size: 20,
    min_size: 18,
    threshold: 17,
    dkg_interval: 720,
    dkg_phase_blocks: 4,
    dkg_mining_window_start: 20,
    dkg_mining_window_end: 48,
    dkg_bad_votes_threshold: 30,
    signing_active_quorum_count: 4,
    keep_old_connections: 5,
};

pub const LLMQ_40_60: LLMQParams = LLMQParams {
    quorum_type: QuorumType::Llmq400_60,
    name: "llmq_40_60",
    size: 40,
    min_size: 30,
    threshold: 24,
    dkg_interval: 360,
    dkg_phase_blocks: 4,
    dkg_mining_window_start: 20,
    dkg_mining_window_end: 28,
    dkg_bad_votes_threshold: 30,
    signing_active_quorum_count: 4,
    keep_old_connections: 5,
};

pub const LLMQ_40_85: LLMQParams = LLMQParams {
    quorum_type: QuorumType::Llmq400_85,
    name: "llmq_40_85",
    size: 40,
    min_size: 35,
    threshold: 34,
    dkg_interval: 720,
    dkg_phase_blocks: 4,
    dkg_mining_window_start: 20,
    dkg_mining_window_end: 48,
    dkg_bad_votes_threshold: 30,
    signing_active_quorum_count: 4,
    keep_old_connections: 5,
};

pub const LLMQ_50_60: LLMQParams = LLMQParams {
    quorum_type: QuorumType::Llmq50_60,
    name: "llmq_50_60",
    size: 50,
    min_size: 40,
    threshold: 30,
    dkg_interval: 30,
    dkg_phase_blocks: 2,
    dkg_mining_window_start: 10,
    dkg_mining_window_end: 18,
    dkg_bad_votes_threshold: 40,
    signing_active_quorum_count: 24,
    keep_old_connections: 25,
};

pub const LLMQ_400_60: LLMQParams = LLMQParams {
    quorum_type: QuorumType::Llmq400_60,
    name: "llmq_400_60",
    size: 400,
    min_size: 300,
    threshold: 240,
    dkg_interval: 360,
    dkg_phase_blocks: 4,
    dkg_mining_window_start: 20,
    dkg_mining_window_end: 28,
    dkg_bad_votes_threshold: 300,
    signing_active_quorum_count: 4,
    keep_old_connections: 5,
};

pub const LLMQ_400_85: LLMQParams = LLMQParams {
    quorum_type: QuorumType::Llmq400_85,
    name: "llmq_400_85",
    size: 400,
    min_size: 350,
    threshold: 340,
    dkg_interval: 720,
    dkg_phase_blocks: 4,
    dkg_mining_window_start: 20,
    dkg_mining_window_end: 48,
    dkg_bad_votes_threshold: 300,
    signing_active_quorum_count: 4,
    keep_old_connections: 5,
};

/// Regtest carries the testing quorum under its own type id.
pub const LLMQ_5_60_REGTEST: LLMQParams = LLMQParams {
    quorum_type: QuorumType::Llmq5_60,
    ..LLMQ_3_60
};

/// Every compiled-in preset.
pub const ALL_PRESETS: [LLMQParams; 9] = [
    LLMQ_3_60,
    LLMQ_20_60,
    LLMQ_20_85,
    LLMQ_40_60,
    LLMQ_40_85,
    LLMQ_50_60,
    LLMQ_400_60,
    LLMQ_400_85,
    LLMQ_5_60_REGTEST,
];

/// Quorum types whose preset follows the masternode population.
pub const MANAGED_TYPES: [QuorumType; 3] = [
    QuorumType::Llmq50_60,
    QuorumType::Llmq400_60,
    QuorumType::Llmq400_85,
];

/// Masternode population ranges used when reconfiguring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PopulationBucket {
    /// Fewer than 5 masternodes.
    Tiny,
    /// 5 to 99.
    Small,
    /// 100 to 599.
    Medium,
    /// 600 and more.
    Large,
}

impl PopulationBucket {
    pub fn from_count(count: usize) -> Self {
        if count < 5 {
            PopulationBucket::Tiny
        } else if count < 100 {
            PopulationBucket::Small
        } else if count < 600 {
            PopulationBucket::Medium
        } else {
            PopulationBucket::Large
        }
    }

    /// Presets for the managed types, in `MANAGED_TYPES` order.
    pub fn presets(self) -> [LLMQParams; 3] {
        match self {
            PopulationBucket::Tiny => [LLMQ_3_60, LLMQ_20_60, LLMQ_20_85],
            PopulationBucket::Small => [LLMQ_3_60, LLMQ_20_60, LLMQ_20_85],
            PopulationBucket::Medium => [LLMQ_50_60, LLMQ_40_60, LLMQ_40_85],
            PopulationBucket::Large => [LLMQ_50_60, LLMQ_400_60, LLMQ_400_85],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PopulationBucket::Tiny => "tiny",
            PopulationBucket::Small => "small",
            PopulationBucket::Medium => "medium",
            PopulationBucket::Large => "large",
        }
    }
}

impl fmt::Display for PopulationBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
