/// Interval between two sync ticks, in seconds.
pub const SYNC_TICK_SECONDS: i64 = 6;

/// An asset that saw no progress for this long is retried with another peer.
pub const SYNC_TIMEOUT_SECONDS: i64 = 30;

/// Best-header confidence is dropped when the tip has not moved for this long.
pub const SYNC_RESET_SECONDS: i64 = 600;

/// Timed-out attempts allowed for one asset before the sync session fails.
pub const MAX_ASSET_ATTEMPTS: u32 = 8;

/// A gap this long between ticks means the process was suspended.
pub const SUSPEND_RESTART_SECONDS: i64 = 60 * 60;

/// With more connected peers than this the blockchain stage only waits one
/// tick after reaching the best header.
pub const FAST_ADVANCE_PEER_THRESHOLD: usize = 3;

/// Capacity of the sync event broadcast channel.
pub const EVENT_CHANNEL_CAPACITY: usize = 64;
