use proptest::prelude::*;
use smartnode_consensus::llmq::presets::MANAGED_TYPES;
use smartnode_consensus::{
    is_any_quorum_mining_phase, ChainParams, NetworkKind, QuorumConfigRegistry, ReconfigureOutcome,
};

fn mainnet_registry() -> QuorumConfigRegistry {
    QuorumConfigRegistry::new(ChainParams::for_network(NetworkKind::Main).llmqs)
}

fn calls() -> impl Strategy<Value = Vec<(usize, u64, bool)>> {
    prop::collection::vec((0usize..1500, 0u64..5000, any::<bool>()), 1..40)
}

proptest! {
    #[test]
    fn non_monotonic_heights_never_change_anything(calls in calls()) {
        let registry = mainnet_registry();
        for (count, height, low) in calls {
            let state_before = registry.reconfig_state();
            let table_before = registry.snapshot();
            let outcome = registry.reconfigure(count, height, low);
            if height <= state_before.last_height {
                prop_assert_eq!(outcome, ReconfigureOutcome::SkippedNonMonotonic);
                prop_assert_eq!(registry.reconfig_state(), state_before);
                let table_after = registry.snapshot();
                prop_assert_eq!(table_after.as_ref(), table_before.as_ref());
            }
        }
    }

    #[test]
    fn mining_window_blocks_reconfiguration(calls in calls()) {
        let registry = mainnet_registry();
        for (count, height, low) in calls {
            let table_before = registry.snapshot();
            let state_before = registry.reconfig_state();
            let outcome = registry.reconfigure(count, height, low);
            if is_any_quorum_mining_phase(&table_before, height) {
                prop_assert!(!outcome.is_applied());
                let table_after = registry.snapshot();
                prop_assert_eq!(table_after.as_ref(), table_before.as_ref());
                prop_assert_eq!(registry.reconfig_state(), state_before);
            }
        }
    }

    #[test]
    fn applied_state_records_inputs(count in 0usize..2000, low in any::<bool>(), step in 1u64..50) {
        let registry = mainnet_registry();
        // a multiple of 720 is outside every mainnet window
        let height = step * 720;
        let outcome = registry.reconfigure(count, height, low);
        if count == 0 && !low {
            prop_assert_eq!(outcome, ReconfigureOutcome::SkippedUnchanged);
        } else {
            prop_assert!(outcome.is_applied());
            let state = registry.reconfig_state();
            prop_assert_eq!((state.last_height, state.last_count, state.last_low_params), (height, count, low));
        }
    }
}

fn active_names(registry: &QuorumConfigRegistry) -> Vec<&'static str> {
    MANAGED_TYPES.iter().map(|t| registry.active_params(*t).name).collect()
}

#[test]
fn bucket_mapping_selects_exact_presets() {
    let cases: [(usize, [&str; 3]); 4] = [
        (4, ["llmq_3_60", "llmq_20_60", "llmq_20_85"]),
        (50, ["llmq_3_60", "llmq_20_60", "llmq_20_85"]),
        (300, ["llmq_50_60", "llmq_40_60", "llmq_40_85"]),
        (1000, ["llmq_50_60", "llmq_400_60", "llmq_400_85"]),
    ];
    for (count, expected) in cases {
        let registry = mainnet_registry();
        assert!(registry.reconfigure(count, 720, false).is_applied());
        assert_eq!(active_names(&registry), expected.to_vec(), "count {}", count);
    }
}

#[test]
fn outcome_serializes_for_status_output() {
    let registry = mainnet_registry();
    let outcome = registry.reconfigure(1000, 720, false);
    let json = serde_json::to_string(&outcome).unwrap();
    assert_eq!(json, r#"{"Applied":{"bucket":"Large"}}"#);
    assert_eq!(
        serde_json::to_string(&ReconfigureOutcome::SkippedMiningPhase).unwrap(),
        r#""SkippedMiningPhase""#
    );
}
