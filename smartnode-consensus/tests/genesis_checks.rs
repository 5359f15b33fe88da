use hex_literal::hex;
use smartnode_consensus::{ChainParams, ConsensusError, NetworkKind};

const MAIN_GENESIS: [u8; 32] = hex!("001787e5f9c3cd249f84f0142071f6098d9e3b7ec8591ff73543ddc4900c1dc2");
const MERKLE_ROOT: [u8; 32] = hex!("c083fb7c3b6936c15dc2685a522ffa685247e8c665c818888b51b0771584d7b4");

#[test]
fn mainnet_genesis_matches() {
    let params = ChainParams::for_network(NetworkKind::Main);
    params.verify_genesis(&MAIN_GENESIS, &MERKLE_ROOT).unwrap();
    assert_eq!(params.checkpoint(0), Some(&MAIN_GENESIS));
    assert_eq!(
        params.checkpoint(150),
        Some(&hex!("0000000395f58efdcfc08a55742588e0f046f58bd89c0dd5aec6d2b3e111e747"))
    );
}

#[test]
fn testnet_rejects_mainnet_genesis() {
    let params = ChainParams::for_network(NetworkKind::Test);
    let err = params.verify_genesis(&MAIN_GENESIS, &MERKLE_ROOT).unwrap_err();
    assert!(err.is_fatal());
    match err {
        ConsensusError::GenesisMismatch { network, computed, .. } => {
            assert_eq!(network, NetworkKind::Test);
            assert_eq!(computed, hex::encode(MAIN_GENESIS));
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn merkle_root_is_checked() {
    let params = ChainParams::for_network(NetworkKind::Main);
    let err = params.verify_genesis(&MAIN_GENESIS, &[0u8; 32]).unwrap_err();
    assert!(matches!(err, ConsensusError::GenesisMerkleMismatch { .. }));
}

#[test]
fn regtest_and_devnet_accept_any_genesis() {
    for network in [NetworkKind::Dev, NetworkKind::Regtest] {
        ChainParams::for_network(network)
            .verify_genesis(&[7u8; 32], &[9u8; 32])
            .unwrap();
    }
}
