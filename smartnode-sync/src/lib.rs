//! Staged network synchronization for smartnode.
//!
//! [`SyncStateMachine`] sequences the bootstrap stages (blockchain,
//! governance, governance objects, governance votes) over an unreliable peer
//! set. It never blocks: requests go out through a [`NetworkDriver`], answers
//! come back later as [`SyncMessage`]s and time-based transitions happen when
//! the owner calls [`SyncStateMachine::do_maintenance`].

pub mod clock;
pub mod constants;
pub mod error;
pub mod messages;
pub mod network;
pub mod sync_manager;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::SyncError;
pub use messages::{MessageDisposition, SyncMessage};
pub use network::{NetworkDriver, OutboundRequest, QueuedNetworkDriver};
pub use sync_manager::{SyncConfig, SyncEvent, SyncStateMachine, SyncStatus};
