//! Quorum configuration and chain parameters for smartnode.
//!
//! The `llmq` module holds the compiled-in quorum presets, the DKG phase
//! predicate and the registry that swaps the active preset table as the
//! masternode population changes. `chainparams` selects one immutable
//! parameter set per network.

pub mod chainparams;
pub mod error;
pub mod llmq;

pub use chainparams::{ChainParams, NetworkKind};
pub use error::ConsensusError;
pub use llmq::{
    is_any_quorum_mining_phase, is_mining_phase, PopulationBucket, QuorumConfigRegistry,
    QuorumConfigTable, ReconfigState, ReconfigureOutcome,
};
