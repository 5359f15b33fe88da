//! DKG mining-window predicates.

use super::registry::QuorumConfigTable;
use smartnode_types::LLMQParams;

/// Whether `height` falls inside the DKG mining window of `params`.
///
/// The window is inclusive on both ends and measured from the start of the
/// current DKG interval.
pub fn is_mining_phase(params: &LLMQParams, height: u64) -> bool {
    match height.checked_rem(u64::from(params.dkg_interval)) {
        Some(phase) => {
            u64::from(params.dkg_mining_window_start) <= phase
                && phase <= u64::from(params.dkg_mining_window_end)
        }
        // zero interval never validates; treat it as no session
        None => false,
    }
}

/// Whether any quorum in `table` is inside its mining window at `height`.
pub fn is_any_quorum_mining_phase(table: &QuorumConfigTable, height: u64) -> bool {
    table.iter().any(|(_, params)| is_mining_phase(params, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llmq::presets::{LLMQ_20_60, LLMQ_20_85, LLMQ_3_60};

    #[test]
    fn test_window_bounds_are_inclusive() {
        assert!(!is_mining_phase(&LLMQ_3_60, 9));
        assert!(is_mining_phase(&LLMQ_3_60, 10));
        assert!(is_mining_phase(&LLMQ_3_60, 15));
        assert!(is_mining_phase(&LLMQ_3_60, 18));
        assert!(!is_mining_phase(&LLMQ_3_60, 19));
        assert!(!is_mining_phase(&LLMQ_3_60, 25));
    }

    #[test]
    fn test_window_repeats_every_interval() {
        assert!(is_mining_phase(&LLMQ_3_60, 30 * 1000 + 12));
        assert!(!is_mining_phase(&LLMQ_3_60, 30 * 1000 + 29));
        assert!(is_mining_phase(&LLMQ_20_85, 720 + 48));
        assert!(!is_mining_phase(&LLMQ_20_85, 720 + 49));
    }

    #[test]
    fn test_zero_interval_is_never_mining() {
        let broken = LLMQParams { dkg_interval: 0, ..LLMQ_3_60 };
        assert!(!is_mining_phase(&broken, 15));
    }

    #[test]
    fn test_any_quorum() {
        let table = QuorumConfigTable::from_params([LLMQ_3_60, LLMQ_20_60]);
        // 3_60 window [10, 18], 20_60 window [20, 28] over 360
        assert!(is_any_quorum_mining_phase(&table, 12));
        assert!(is_any_quorum_mining_phase(&table, 380));
        assert!(!is_any_quorum_mining_phase(&table, 19));
        assert!(!is_any_quorum_mining_phase(&QuorumConfigTable::default(), 12));
    }
}
