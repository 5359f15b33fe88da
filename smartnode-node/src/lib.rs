//! Smartnode daemon library: configuration, the node context that owns the
//! quorum registry and the sync state machine, and the background services
//! that drive them.

pub mod config;
pub mod context;
pub mod estimator;
pub mod service;

pub use config::NodeConfig;
pub use context::NodeContext;
pub use estimator::{NetworkSizeEstimator, StaticNetworkSize};
