//! Sync stage identifiers

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Stages of the node's bootstrap synchronization.
///
/// The numeric ids are fixed and double as the item ids peers use in their
/// sync status count messages. Ordering follows the ids; `Failed` sorts below
/// everything and is not part of the normal progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum SyncAsset {
    Failed = -1,
    Blockchain = 1,
    Governance = 4,
    GovernanceObjects = 10,
    GovernanceVotes = 11,
    Finished = 999,
}

impl SyncAsset {
    /// The normal progression, in order.
    pub const PROGRESSION: [SyncAsset; 5] = [
        SyncAsset::Blockchain,
        SyncAsset::Governance,
        SyncAsset::GovernanceObjects,
        SyncAsset::GovernanceVotes,
        SyncAsset::Finished,
    ];

    pub fn id(self) -> i32 {
        self as i32
    }

    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            -1 => Some(SyncAsset::Failed),
            1 => Some(SyncAsset::Blockchain),
            4 => Some(SyncAsset::Governance),
            10 => Some(SyncAsset::GovernanceObjects),
            11 => Some(SyncAsset::GovernanceVotes),
            999 => Some(SyncAsset::Finished),
            _ => None,
        }
    }

    /// Next stage in the progression. `Finished` and `Failed` have none.
    pub fn next(self) -> Option<Self> {
        match self {
            SyncAsset::Blockchain => Some(SyncAsset::Governance),
            SyncAsset::Governance => Some(SyncAsset::GovernanceObjects),
            SyncAsset::GovernanceObjects => Some(SyncAsset::GovernanceVotes),
            SyncAsset::GovernanceVotes => Some(SyncAsset::Finished),
            SyncAsset::Finished | SyncAsset::Failed => None,
        }
    }

    /// Position inside the progression, `None` for `Failed`.
    pub fn stage_index(self) -> Option<usize> {
        Self::PROGRESSION.iter().position(|a| *a == self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SyncAsset::Failed => "FAILED",
            SyncAsset::Blockchain => "BLOCKCHAIN",
            SyncAsset::Governance => "GOVERNANCE",
            SyncAsset::GovernanceObjects => "GOVERNANCE_OBJECTS",
            SyncAsset::GovernanceVotes => "GOVERNANCE_VOTES",
            SyncAsset::Finished => "FINISHED",
        }
    }
}

impl PartialOrd for SyncAsset {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SyncAsset {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id().cmp(&other.id())
    }
}

impl fmt::Display for SyncAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
