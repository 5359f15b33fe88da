//! Long-living masternode quorum (LLMQ) parameter types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Closed set of quorum types a node can carry in its LLMQ table.
///
/// The numeric ids are part of the network protocol and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum QuorumType {
    /// 50 members, 60% threshold. Used for instant-send on most networks.
    Llmq50_60 = 1,
    /// 400 members, 60% threshold. Used for chain-locks on mainnet.
    Llmq400_60 = 2,
    /// 400 members, 85% threshold. Used for deployment signalling.
    Llmq400_85 = 3,
    /// Regtest-only quorum type.
    Llmq5_60 = 100,
}

impl QuorumType {
    pub const ALL: [QuorumType; 4] = [
        QuorumType::Llmq50_60,
        QuorumType::Llmq400_60,
        QuorumType::Llmq400_85,
        QuorumType::Llmq5_60,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QuorumType::Llmq50_60 => "llmq_50_60",
            QuorumType::Llmq400_60 => "llmq_400_60",
            QuorumType::Llmq400_85 => "llmq_400_85",
            QuorumType::Llmq5_60 => "llmq_5_60",
        }
    }
}

impl fmt::Display for QuorumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuorumType {
    type Err = LlmqParamsError;

    /// Accepts either the type name (`llmq_50_60`) or its numeric id (`1`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(id) = s.parse::<u8>() {
            return QuorumType::from_id(id).ok_or_else(|| LlmqParamsError::UnknownType(s.to_string()));
        }
        QuorumType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| LlmqParamsError::UnknownType(s.to_string()))
    }
}

/// Errors raised when an LLMQ parameter set breaks its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LlmqParamsError {
    #[error("unknown quorum type: {0}")]
    UnknownType(String),

    #[error("{name}: DKG interval must be non-zero")]
    ZeroInterval { name: &'static str },

    #[error("{name}: mining window [{start}, {end}] does not fit the DKG interval {interval}")]
    MiningWindow {
        name: &'static str,
        start: u32,
        end: u32,
        interval: u32,
    },

    #[error("{name}: expected threshold <= min_size <= size, got {threshold} / {min_size} / {size}")]
    Threshold {
        name: &'static str,
        min_size: u32,
        threshold: u32,
        size: u32,
    },
}

/// Immutable parameter set governing one quorum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LLMQParams {
    pub quorum_type: QuorumType,
    pub name: &'static str,
    pub size: u32,
    pub min_size: u32,
    pub threshold: u32,

    /// Blocks between two DKG sessions.
    pub dkg_interval: u32,
    pub dkg_phase_blocks: u32,
    /// First block offset (inside the interval) at which the final
    /// commitment may be mined.
    pub dkg_mining_window_start: u32,
    /// Last block offset, inclusive.
    pub dkg_mining_window_end: u32,
    pub dkg_bad_votes_threshold: u32,

    /// How many quorum generations stay signing-active at the same time.
    pub signing_active_quorum_count: u32,
    pub keep_old_connections: u32,
}

impl LLMQParams {
    /// Checks `0 <= window_start <= window_end < dkg_interval` and
    /// `1 <= threshold <= min_size <= size`, so that a quorum of minimum size
    /// can still reach the signing threshold.
    pub fn validate(&self) -> Result<(), LlmqParamsError> {
        if self.dkg_interval == 0 {
            return Err(LlmqParamsError::ZeroInterval { name: self.name });
        }
        if self.dkg_mining_window_start > self.dkg_mining_window_end
            || self.dkg_mining_window_end >= self.dkg_interval
        {
            return Err(LlmqParamsError::MiningWindow {
                name: self.name,
                start: self.dkg_mining_window_start,
                end: self.dkg_mining_window_end,
                interval: self.dkg_interval,
            });
        }
        if self.threshold == 0 || self.threshold > self.min_size || self.min_size > self.size {
            return Err(LlmqParamsError::Threshold {
                name: self.name,
                min_size: self.min_size,
                threshold: self.threshold,
                size: self.size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LLMQParams {
        LLMQParams {
            quorum_type: QuorumType::Llmq50_60,
            name: "sample",
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
        }
    }

    #[test]
    fn test_quorum_type_parsing() {
        assert_eq!("llmq_400_60".parse::<QuorumType>().unwrap(), QuorumType::Llmq400_60);
        assert_eq!("LLMQ_5_60".parse::<QuorumType>().unwrap(), QuorumType::Llmq5_60);
        assert_eq!("3".parse::<QuorumType>().unwrap(), QuorumType::Llmq400_85);
        assert!("llmq_7_7".parse::<QuorumType>().is_err());
        assert!("42".parse::<QuorumType>().is_err());
    }

    #[test]
    fn test_quorum_type_ids_are_stable() {
        assert_eq!(QuorumType::Llmq50_60.id(), 1);
        assert_eq!(QuorumType::Llmq400_60.id(), 2);
        assert_eq!(QuorumType::Llmq400_85.id(), 3);
        assert_eq!(QuorumType::Llmq5_60.id(), 100);
        assert_eq!(QuorumType::from_id(100), Some(QuorumType::Llmq5_60));
        assert_eq!(QuorumType::from_id(4), None);
    }

    #[test]
    fn test_validate_window() {
        // The window must end strictly before the interval does.
        let params = LLMQParams { dkg_mining_window_end: 30, ..sample() };
        assert!(matches!(params.validate(), Err(LlmqParamsError::MiningWindow { .. })));

        let params = LLMQParams { dkg_mining_window_start: 19, ..sample() };
        assert!(matches!(params.validate(), Err(LlmqParamsError::MiningWindow { .. })));

        let params = LLMQParams { dkg_interval: 0, ..sample() };
        assert_eq!(params.validate(), Err(LlmqParamsError::ZeroInterval { name: "sample" }));
    }

    #[test]
    fn test_validate_threshold() {
        assert!(sample().validate().is_ok());

        // a minimum-size quorum could never sign
        let params = LLMQParams { threshold: 41, ..sample() };
        assert!(matches!(params.validate(), Err(LlmqParamsError::Threshold { .. })));

        let params = LLMQParams { min_size: 51, ..sample() };
        assert!(matches!(params.validate(), Err(LlmqParamsError::Threshold { .. })));

        let params = LLMQParams { threshold: 0, ..sample() };
        assert!(matches!(params.validate(), Err(LlmqParamsError::Threshold { .. })));

        // equal bounds are fine
        let params = LLMQParams { size: 3, min_size: 2, threshold: 2, ..sample() };
        assert!(params.validate().is_ok());
    }
}
