//! Inbound sync messages.

use serde::{Deserialize, Serialize};
use smartnode_types::{Hash, SyncAsset};

/// Sync-relevant messages received from peers, already decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyncMessage {
    /// The peer finished serving `count` items of the asset `item_id`.
    SyncStatusCount { item_id: i32, count: i32 },
    GovernanceObject { hash: Hash },
    GovernanceVote { hash: Hash },
    /// The peer's best header height.
    BestHeight { height: u64 },
}

impl SyncMessage {
    /// Protocol command name.
    pub fn command(&self) -> &'static str {
        match self {
            SyncMessage::SyncStatusCount { .. } => "ssc",
            SyncMessage::GovernanceObject { .. } => "govobj",
            SyncMessage::GovernanceVote { .. } => "govobjvote",
            SyncMessage::BestHeight { .. } => "bestheight",
        }
    }

    /// The asset this message belongs to, if it belongs to one.
    pub fn asset(&self) -> Option<SyncAsset> {
        match self {
            SyncMessage::SyncStatusCount { item_id, .. } => SyncAsset::from_id(*item_id),
            SyncMessage::GovernanceObject { .. } => Some(SyncAsset::GovernanceObjects),
            SyncMessage::GovernanceVote { .. } => Some(SyncAsset::GovernanceVotes),
            SyncMessage::BestHeight { .. } => None,
        }
    }
}

/// What `process_message` did with a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MessageDisposition {
    /// Counted as progress on the current asset.
    Progress,
    /// Completed the current asset; the machine moved on.
    AssetCompleted,
    /// Bookkeeping only, no asset involved.
    Recorded,
    /// Addressed to an asset other than the current one.
    Stale,
    /// Not relevant in the current state.
    Ignored,
}
