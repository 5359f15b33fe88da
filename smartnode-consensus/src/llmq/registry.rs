//! Active LLMQ parameter table and its guarded reconfiguration.

use super::dkg_schedule::is_any_quorum_mining_phase;
use super::presets::{PopulationBucket, MANAGED_TYPES};
use log::{debug, info};
use serde::Serialize;
use smartnode_types::{LLMQParams, QuorumType};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Mapping from quorum type to the parameter set currently governing it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuorumConfigTable(BTreeMap<QuorumType, LLMQParams>);

impl QuorumConfigTable {
    /// Builds a table keyed by each preset's own quorum type. Later entries
    /// win on duplicate types.
    pub fn from_params<I>(params: I) -> Self
    where
        I: IntoIterator<Item = LLMQParams>,
    {
        Self(params.into_iter().map(|p| (p.quorum_type, p)).collect())
    }

    pub fn get(&self, quorum_type: QuorumType) -> Option<&LLMQParams> {
        self.0.get(&quorum_type)
    }

    pub fn contains(&self, quorum_type: QuorumType) -> bool {
        self.0.contains_key(&quorum_type)
    }

    /// Inserts `params` under its own quorum type, returning the entry it replaced.
    pub fn insert(&mut self, params: LLMQParams) -> Option<LLMQParams> {
        self.0.insert(params.quorum_type, params)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuorumType, &LLMQParams)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Inputs of the last reconfiguration that was applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReconfigState {
    pub last_height: u64,
    pub last_count: usize,
    pub last_low_params: bool,
}

/// What a call to [`QuorumConfigRegistry::reconfigure`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReconfigureOutcome {
    /// The managed quorum types now use the presets of `bucket`.
    Applied { bucket: PopulationBucket },
    /// `height` was not above the last applied height.
    SkippedNonMonotonic,
    /// Neither the masternode count nor the low-params flag changed.
    SkippedUnchanged,
    /// A quorum in the current table is inside its DKG mining window.
    SkippedMiningPhase,
}

impl ReconfigureOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ReconfigureOutcome::Applied { .. })
    }
}

struct RegistryInner {
    table: Arc<QuorumConfigTable>,
    state: ReconfigState,
    bucket: Option<PopulationBucket>,
}

/// Owns the active quorum table of one node.
///
/// Readers get an `Arc` snapshot of the table; reconfiguration builds a new
/// table and swaps the `Arc` under the lock, so a reader never sees a table
/// with only some quorum types replaced.
pub struct QuorumConfigRegistry {
    inner: Mutex<RegistryInner>,
}

impl QuorumConfigRegistry {
    pub fn new(initial: QuorumConfigTable) -> Self {
        Self {
            inner: Mutex::new(RegistryInner {
                table: Arc::new(initial),
                state: ReconfigState::default(),
                bucket: None,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RegistryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Active parameters for `quorum_type`.
    ///
    /// # Panics
    ///
    /// Panics if the type is not part of the table. Callers only ask for the
    /// types their network's chain parameters declare.
    pub fn active_params(&self, quorum_type: QuorumType) -> LLMQParams {
        self.try_active_params(quorum_type)
            .unwrap_or_else(|| panic!("quorum type {} is not configured", quorum_type))
    }

    pub fn try_active_params(&self, quorum_type: QuorumType) -> Option<LLMQParams> {
        self.lock().table.get(quorum_type).copied()
    }

    /// Consistent snapshot of the whole table.
    pub fn snapshot(&self) -> Arc<QuorumConfigTable> {
        Arc::clone(&self.lock().table)
    }

    pub fn reconfig_state(&self) -> ReconfigState {
        self.lock().state
    }

    /// Bucket of the last applied reconfiguration, if any.
    pub fn current_bucket(&self) -> Option<PopulationBucket> {
        self.lock().bucket
    }

    /// Replaces the presets of the managed quorum types according to the
    /// population bucket of `masternode_count`.
    ///
    /// Nothing changes unless `height` is above the last applied height, the
    /// count or the low-params flag differ from the last applied ones, and no
    /// quorum of the current table is inside its DKG mining window at
    /// `height`. Guards are checked in that order.
    pub fn reconfigure(
        &self,
        masternode_count: usize,
        height: u64,
        low_params: bool,
    ) -> ReconfigureOutcome {
        let mut inner = self.lock();

        if height <= inner.state.last_height {
            return ReconfigureOutcome::SkippedNonMonotonic;
        }
        if masternode_count == inner.state.last_count && low_params == inner.state.last_low_params {
            return ReconfigureOutcome::SkippedUnchanged;
        }
        if is_any_quorum_mining_phase(&inner.table, height) {
            debug!(
                "Deferring LLMQ reconfiguration at height {}: DKG mining window is open",
                height
            );
            return ReconfigureOutcome::SkippedMiningPhase;
        }

        let bucket = PopulationBucket::from_count(masternode_count);
        let mut table = QuorumConfigTable::clone(&inner.table);
        for (quorum_type, preset) in MANAGED_TYPES.iter().zip(bucket.presets()) {
            debug_assert_eq!(*quorum_type, preset.quorum_type);
            table.insert(preset);
        }

        let previous = inner.bucket.replace(bucket);
        inner.table = Arc::new(table);
        inner.state = ReconfigState {
            last_height: height,
            last_count: masternode_count,
            last_low_params: low_params,
        };

        info!(
            "LLMQ parameters reconfigured at height {}: {} masternodes (low params: {}), bucket {} -> {}",
            height,
            masternode_count,
            low_params,
            previous.map(|b| b.as_str()).unwrap_or("initial"),
            bucket
        );

        ReconfigureOutcome::Applied { bucket }
    }
}
