use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Supplies the inputs of quorum reconfiguration.
pub trait NetworkSizeEstimator: Send + Sync {
    fn masternode_count(&self) -> usize;

    /// Whether the network asked for reduced LLMQ parameters.
    fn low_params(&self) -> bool;
}

/// Estimate taken from configuration, adjustable at runtime.
#[derive(Debug, Default)]
pub struct StaticNetworkSize {
    count: AtomicUsize,
    low_params: AtomicBool,
}

impl StaticNetworkSize {
    pub fn new(count: usize, low_params: bool) -> Self {
        Self {
            count: AtomicUsize::new(count),
            low_params: AtomicBool::new(low_params),
        }
    }

    pub fn set_count(&self, count: usize) {
        self.count.store(count, Ordering::Relaxed);
    }

    pub fn set_low_params(&self, low_params: bool) {
        self.low_params.store(low_params, Ordering::Relaxed);
    }
}

impl NetworkSizeEstimator for StaticNetworkSize {
    fn masternode_count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    fn low_params(&self) -> bool {
        self.low_params.load(Ordering::Relaxed)
    }
}
