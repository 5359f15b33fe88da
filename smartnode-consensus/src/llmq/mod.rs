//! Long-living masternode quorums

pub mod dkg_schedule;
pub mod presets;
pub mod registry;

pub use dkg_schedule::{is_any_quorum_mining_phase, is_mining_phase};
pub use presets::PopulationBucket;
pub use registry::{QuorumConfigRegistry, QuorumConfigTable, ReconfigState, ReconfigureOutcome};
