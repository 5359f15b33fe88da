use smartnode_types::SyncAsset;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error("cannot advance past {0}: the sync session failed and must be reset first")]
    SwitchFromFailed(SyncAsset),
}
